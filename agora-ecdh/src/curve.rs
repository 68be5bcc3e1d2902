use crate::arithmetic::modular::{div_mod, inverse, reduce};
use crate::arithmetic::Point;
use crate::CurveError;

use log::trace;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`.
///
/// `p` is assumed to be an odd prime and the curve non-singular; neither is
/// checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

impl CurveParameters {
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Self {
        Self { a, b, p }
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn p(&self) -> &BigInt {
        &self.p
    }
}

/// NIST prime curves with `a = -3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedCurve {
    P192,
    P224,
    P256,
}

impl NamedCurve {
    fn constants(&self) -> [&'static str; 5] {
        // b, p, generator x, generator y, order
        match self {
            Self::P192 => [
                "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
                "fffffffffffffffffffffffffffffffeffffffffffffffff",
                "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
                "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
                "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
            ],
            Self::P224 => [
                "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
                "ffffffffffffffffffffffffffffffff000000000000000000000001",
                "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
                "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
                "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
            ],
            Self::P256 => [
                "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
                "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
                "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
                "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
                "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            ],
        }
    }

    pub fn parameters(&self) -> CurveParameters {
        let [b, p, ..] = self.constants();
        CurveParameters::new(BigInt::from(-3), hex_constant(b), hex_constant(p))
    }

    pub fn generator(&self) -> Point {
        let [_, _, x, y, _] = self.constants();
        Point::new(hex_constant(x), hex_constant(y))
    }

    /// Order of the generator.
    pub fn order(&self) -> BigUint {
        let [.., n] = self.constants();
        // NOTE unwrap is fine here, the order is a positive hard-coded constant
        hex_constant(n).to_biguint().unwrap()
    }

    pub fn curve(&self) -> EllipticCurve {
        EllipticCurve::new(self.parameters(), self.generator())
    }
}

fn hex_constant(hex: &str) -> BigInt {
    // NOTE unwrap is fine here because the constants above are valid hex
    BigInt::parse_bytes(hex.as_bytes(), 16).unwrap()
}

/// Group arithmetic over a fixed curve with a fixed base point.
///
/// The engine is immutable after construction, so a single instance can be
/// shared between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurve {
    parameters: CurveParameters,
    generator: Point,
}

impl EllipticCurve {
    pub fn new(parameters: CurveParameters, generator: Point) -> Self {
        Self {
            parameters,
            generator,
        }
    }

    pub fn parameters(&self) -> &CurveParameters {
        &self.parameters
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    fn modulus(&self) -> &BigInt {
        self.parameters.p()
    }

    pub fn inverse(&self, number: &BigInt) -> Result<BigInt, CurveError> {
        inverse(number, self.modulus())
    }

    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x.clone(), reduce(&-y, self.modulus())),
        }
    }

    /// Checks the curve equation. The arithmetic never calls this on its own.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let CurveParameters { a, b, p } = &self.parameters;
                let lhs = y * y;
                let rhs = x * x * x + a * x + b;
                reduce(&(lhs - rhs), p).is_zero()
            }
        }
    }

    /// Group law of a short Weierstrass curve in affine coordinates.
    pub fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let (x_p, y_p) = match lhs.coordinates() {
            Some(coordinates) => coordinates,
            None => return Ok(rhs.clone()),
        };
        let (x_q, y_q) = match rhs.coordinates() {
            Some(coordinates) => coordinates,
            None => return Ok(lhs.clone()),
        };

        let modulus = self.modulus();
        let same_x = reduce(&(x_p - x_q), modulus).is_zero();

        // P + (-P), including doubling a point with y = 0
        if same_x && reduce(&(y_p + y_q), modulus).is_zero() {
            trace!("adding a point to its negation");
            return Ok(Point::Identity);
        }

        let slope = if same_x && reduce(&(y_p - y_q), modulus).is_zero() {
            let numerator = BigInt::from(3u8) * x_p * x_p + self.parameters.a();
            div_mod(&numerator, &(BigInt::from(2u8) * y_p), modulus)?
        } else {
            div_mod(&(y_p - y_q), &(x_p - x_q), modulus)?
        };

        let x_r = reduce(&(&slope * &slope - x_p - x_q), modulus);
        let y_r = reduce(&(&slope * (x_p - &x_r) - y_p), modulus);

        Ok(Point::new(x_r, y_r))
    }

    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        self.add_points(point, point)
    }

    /// Doubles `point` `k` times in a row, i.e. computes `2^k * point`.
    ///
    /// This takes `k` group operations, so it is only practical for small `k`.
    pub fn double_point(&self, point: &Point, k: &BigUint) -> Result<Point, CurveError> {
        let mut result = point.clone();
        let mut counter = BigUint::zero();
        while &counter < k {
            if result.is_identity() {
                break;
            }
            result = self.double(&result)?;
            counter += 1u32;
        }
        Ok(result)
    }

    /// Double-and-add scalar multiplication `k * point`, scanning `k` from the
    /// most significant bit.
    pub fn scalar_mul(&self, point: &Point, k: &BigUint) -> Result<Point, CurveError> {
        let mut q = Point::Identity;
        for bit in k.to_str_radix(2).chars() {
            q = self.double(&q)?;
            if bit == '1' {
                q = self.add_points(&q, point)?;
            }
        }
        Ok(q)
    }

    pub fn base_point_mul(&self, k: &BigUint) -> Result<Point, CurveError> {
        self.scalar_mul(&self.generator, k)
    }
}
