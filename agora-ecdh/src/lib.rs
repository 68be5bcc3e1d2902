#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod key_agreement;
pub mod parse;

pub use arithmetic::Point;
pub use curve::{CurveParameters, EllipticCurve, NamedCurve};
pub use key_agreement::{KeyAgreement, MultiplicationStrategy};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("invalid private key {0}: must be non-negative")]
    InvalidKey(String),
    #[error("{element} has no inverse modulo {modulus}")]
    NonInvertibleElement { element: String, modulus: String },
}
