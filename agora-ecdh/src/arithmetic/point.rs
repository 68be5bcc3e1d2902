use num_bigint::BigInt;

use std::fmt;

/// A point of a short Weierstrass curve in affine coordinates.
///
/// Points are plain values: curve operations never mutate their operands,
/// they always return a freshly allocated point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, neutral element of the group.
    #[default]
    Identity,
    Affine { x: BigInt, y: BigInt },
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "(identity)"),
            Self::Affine { x, y } => write!(f, "({:#x}, {:#x})", x, y),
        }
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Self::new(x, y)
    }
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self::Affine { x, y }
    }

    /// Builds an affine point from big endian hex strings.
    ///
    /// Only meant for hard-coded constants, hence `None` instead of an error
    /// on malformed input.
    pub fn from_be_hex(x: &str, y: &str) -> Option<Self> {
        let x = BigInt::parse_bytes(x.trim_start_matches("0x").as_bytes(), 16)?;
        let y = BigInt::parse_bytes(y.trim_start_matches("0x").as_bytes(), 16)?;
        Some(Self::new(x, y))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }
}
