//! Packed identifier value and its decimal text form

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a decimal identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSnowflakeError {
    #[error("identifier is empty")]
    Empty,
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
    #[error("identifier exceeds 128 bits")]
    Overflow,
}

/// A packed `[timestamp][machine id][sequence]` identifier
///
/// The timestamp field grows without a fixed width, so the value is held in a
/// `u128`. With at most 64 machine id + sequence bits and a timestamp delta
/// that fits a `u64`, every identifier a generator can produce fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u128);

impl Snowflake {
    #[inline(always)]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> u128 {
        self.0
    }

    /// Natural binary representation without leading zeros
    pub fn to_binary_string(self) -> String {
        format!("{:b}", self.0)
    }
}

impl From<u128> for Snowflake {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw as u128)
    }
}

impl From<Snowflake> for u128 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    /// Parse a plain decimal string. Signs and whitespace are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseSnowflakeError::Empty);
        }

        let mut value: u128 = 0;
        for (position, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(10)
                .ok_or(ParseSnowflakeError::InvalidDigit { found, position })?;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as u128))
                .ok_or(ParseSnowflakeError::Overflow)?;
        }
        Ok(Self(value))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Snowflake;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as the decimal string so consumers never truncate it to a
    /// 64-bit or floating point number
    impl Serialize for Snowflake {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Snowflake {
        fn deserialize<D>(d: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct DecimalVisitor;

            impl Visitor<'_> for DecimalVisitor {
                type Value = Snowflake;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a decimal snowflake string")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    v.parse().map_err(E::custom)
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(Snowflake::from(v))
                }
            }

            d.deserialize_any(DecimalVisitor)
        }
    }
}
