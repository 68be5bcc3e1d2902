use crate::arithmetic::Point;
use crate::curve::{CurveParameters, EllipticCurve};

use num_bigint::BigInt;
use num_traits::{Num, Signed, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),
    #[error("private key {0} must be greater than 0")]
    NonPositiveKey(String),
}

/// Key agreement input as found in json config files, every number encoded
/// as a decimal or `0x` prefixed hex string.
///
/// The field names of the older input format (`a`, `point_x`,
/// `private_key1`, ...) are accepted as well.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgreementInput {
    #[serde(alias = "a")]
    pub curve_a: String,
    #[serde(alias = "b")]
    pub curve_b: String,
    #[serde(alias = "p")]
    pub curve_p: String,
    #[serde(alias = "point_x")]
    pub generator_x: String,
    #[serde(alias = "point_y")]
    pub generator_y: String,
    #[serde(alias = "private_key1")]
    pub private_key_1: String,
    #[serde(alias = "private_key2")]
    pub private_key_2: String,
}

pub struct ParsedAgreementInput {
    pub curve: EllipticCurve,
    pub private_key_1: BigInt,
    pub private_key_2: BigInt,
}

impl TryFrom<AgreementInput> for ParsedAgreementInput {
    type Error = ParseError;
    fn try_from(rhs: AgreementInput) -> Result<Self, Self::Error> {
        let parameters = CurveParameters::new(
            parse_integer(&rhs.curve_a)?,
            parse_integer(&rhs.curve_b)?,
            parse_integer(&rhs.curve_p)?,
        );
        let generator = Point::new(
            parse_integer(&rhs.generator_x)?,
            parse_integer(&rhs.generator_y)?,
        );
        Ok(Self {
            curve: EllipticCurve::new(parameters, generator),
            private_key_1: parse_private_key(&rhs.private_key_1)?,
            private_key_2: parse_private_key(&rhs.private_key_2)?,
        })
    }
}

/// Parses a decimal or `0x` prefixed hex integer with an optional sign.
pub fn parse_integer(literal: &str) -> Result<BigInt, ParseError> {
    let trimmed = literal.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    // NOTE this also rejects a second sign, which `from_str_radix` would accept
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
        return Err(ParseError::InvalidInteger(literal.to_string()));
    }

    let magnitude = BigInt::from_str_radix(digits, radix)
        .map_err(|_| ParseError::InvalidInteger(literal.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Private keys coming from user input have to be strictly positive.
pub fn parse_private_key(literal: &str) -> Result<BigInt, ParseError> {
    let key = parse_integer(literal)?;
    if key.is_zero() || key.is_negative() {
        return Err(ParseError::NonPositiveKey(key.to_string()));
    }
    Ok(key)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::NamedCurve;

    #[test]
    fn integer_literals() {
        assert_eq!(parse_integer("7919").unwrap(), BigInt::from(7919));
        assert_eq!(parse_integer(" -3 ").unwrap(), BigInt::from(-3));
        assert_eq!(parse_integer("+12").unwrap(), BigInt::from(12));
        assert_eq!(parse_integer("0x1F").unwrap(), BigInt::from(31));
        assert_eq!(parse_integer("0X1f").unwrap(), BigInt::from(31));
        assert_eq!(parse_integer("-0x10").unwrap(), BigInt::from(-16));
        assert_eq!(
            parse_integer("6277101735386680763835789423207666416083908700390324961279").unwrap(),
            NamedCurve::P192.parameters().p().clone()
        );

        for invalid in ["", "-", "0x", "12a", "0xg1", "--1", "-+1", "0x-1", "1_000"] {
            assert_eq!(
                parse_integer(invalid),
                Err(ParseError::InvalidInteger(invalid.to_string()))
            );
        }
    }

    #[test]
    fn private_key_policy() {
        assert_eq!(parse_private_key("8387").unwrap(), BigInt::from(8387));
        assert_eq!(
            parse_private_key("0"),
            Err(ParseError::NonPositiveKey("0".to_string()))
        );
        assert_eq!(
            parse_private_key("-0x2"),
            Err(ParseError::NonPositiveKey("-2".to_string()))
        );
    }

    #[test]
    fn parse() {
        let input = AgreementInput {
            curve_a: "-3".to_string(),
            curve_b: "0x64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1".to_string(),
            curve_p: "6277101735386680763835789423207666416083908700390324961279".to_string(),
            generator_x: "0x188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012".to_string(),
            generator_y: "0x07192b95ffc8da78631011ed6b24cdd573f977a11e794811".to_string(),
            private_key_1: "7919".to_string(),
            private_key_2: "8387".to_string(),
        };
        let parsed: ParsedAgreementInput = input.try_into().unwrap();
        assert_eq!(parsed.curve, NamedCurve::P192.curve());
        assert_eq!(parsed.private_key_1, BigInt::from(7919));
        assert_eq!(parsed.private_key_2, BigInt::from(8387));
    }

    #[test]
    fn parse_legacy_field_names() {
        let json = r#"{
            "point_x": "0x188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
            "point_y": "0x07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
            "a": "-3",
            "b": "0x64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
            "p": "6277101735386680763835789423207666416083908700390324961279",
            "private_key1": "7919",
            "private_key2": "0"
        }"#;
        let input: AgreementInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.curve_a, "-3");
        assert_eq!(input.private_key_1, "7919");
        let parsed: Result<ParsedAgreementInput, _> = input.try_into();
        assert_eq!(
            parsed.err(),
            Some(ParseError::NonPositiveKey("0".to_string()))
        );
    }
}
