//! Environment configuration surface
//!
//! Unset variables keep the builder defaults.

use super::{LayoutConfig, LayoutConfigError};

pub const ENV_EPOCH: &str = "FLAKEID_EPOCH";
pub const ENV_MACHINE_ID_BITS: &str = "FLAKEID_MACHINE_ID_BITS";
pub const ENV_SEQUENCE_BITS: &str = "FLAKEID_SEQUENCE_BITS";

impl LayoutConfig {
    /// Load a layout from `FLAKEID_*` environment variables
    pub fn from_env() -> Result<Self, LayoutConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load a layout from any key/value source using the `FLAKEID_*` keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LayoutConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(epoch) = parse_int(&lookup, ENV_EPOCH)? {
            builder = builder.epoch(epoch);
        }
        if let Some(bits) = parse_bits(&lookup, ENV_MACHINE_ID_BITS, "machineIdBits")? {
            builder = builder.machine_id_bits(bits);
        }
        if let Some(bits) = parse_bits(&lookup, ENV_SEQUENCE_BITS, "sequenceBits")? {
            builder = builder.sequence_bits(bits);
        }

        let config = builder.try_build()?;
        tracing::debug!(
            epoch = config.epoch(),
            machine_id_bits = config.machine_id_bits(),
            sequence_bits = config.sequence_bits(),
            "loaded layout from environment"
        );
        Ok(config)
    }
}

fn parse_int<F>(lookup: &F, key: &'static str) -> Result<Option<i64>, LayoutConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| LayoutConfigError::InvalidValue { key, value: raw })
}

fn parse_bits<F>(
    lookup: &F,
    key: &'static str,
    field: &'static str,
) -> Result<Option<u8>, LayoutConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = parse_int(lookup, key)? else {
        return Ok(None);
    };
    if value < 0 {
        return Err(LayoutConfigError::NegativeBits { field, value });
    }
    u8::try_from(value)
        .map(Some)
        .map_err(|_| LayoutConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
