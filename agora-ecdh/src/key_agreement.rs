//! Anonymous elliptic curve Diffie-Hellman key agreement.
//!
//! Both parties share an [`EllipticCurve`] with a fixed generator `G`. Each
//! one publishes `multiply(G, private_key)` and combines the peer's public key
//! with its own private key. Since the underlying group is abelian, the two
//! combinations agree.

use crate::arithmetic::Point;
use crate::curve::EllipticCurve;
use crate::CurveError;

use log::debug;
use num_bigint::{BigInt, BigUint};

/// How a private key is applied to a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MultiplicationStrategy {
    /// `2^k * P`, computed by `k` successive doublings.
    ///
    /// Compatible with keys derived by earlier deployments of the protocol,
    /// but linear in the key, so only usable with small private keys.
    #[default]
    IteratedDoubling,
    /// Standard `k * P` via double-and-add.
    DoubleAndAdd,
}

#[derive(Clone, Debug)]
pub struct KeyAgreement {
    curve: EllipticCurve,
    strategy: MultiplicationStrategy,
}

impl KeyAgreement {
    pub fn new(curve: EllipticCurve) -> Self {
        Self {
            curve,
            strategy: MultiplicationStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MultiplicationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    pub fn generator(&self) -> &Point {
        self.curve.generator()
    }

    pub fn strategy(&self) -> MultiplicationStrategy {
        self.strategy
    }

    pub fn generate_public_key(&self, private_key: &BigInt) -> Result<Point, CurveError> {
        let scalar = to_scalar(private_key)?;
        debug!(
            "generating public key with a {} bit private key ({:?})",
            scalar.bits(),
            self.strategy
        );
        self.multiply(self.curve.generator(), &scalar)
    }

    /// Derives the shared secret from our private key and the peer's public
    /// key. The public key is not checked for curve membership.
    pub fn secret_key(
        &self,
        private_key: &BigInt,
        public_key: &Point,
    ) -> Result<Point, CurveError> {
        let scalar = to_scalar(private_key)?;
        debug!(
            "deriving shared secret with a {} bit private key ({:?})",
            scalar.bits(),
            self.strategy
        );
        self.multiply(public_key, &scalar)
    }

    fn multiply(&self, point: &Point, scalar: &BigUint) -> Result<Point, CurveError> {
        match self.strategy {
            MultiplicationStrategy::IteratedDoubling => self.curve.double_point(point, scalar),
            MultiplicationStrategy::DoubleAndAdd => self.curve.scalar_mul(point, scalar),
        }
    }
}

fn to_scalar(private_key: &BigInt) -> Result<BigUint, CurveError> {
    private_key
        .to_biguint()
        .ok_or_else(|| CurveError::InvalidKey(private_key.to_string()))
}
