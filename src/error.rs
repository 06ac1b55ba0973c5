use thiserror::Error;

use crate::config::LayoutConfigError;
use crate::id::ParseSnowflakeError;

/// Broad classification of a [`SnowflakeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid bit layout, rejected when the generator is created
    Configuration,
    /// Illegal machine-id state transition
    State,
    /// Numeric value outside its valid domain
    Range,
    /// Timestamp precedes the generator epoch
    Temporal,
    /// Malformed identifier text
    Parse,
}

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// The bit layout was rejected by the factory
    #[error("Invalid layout: {0}")]
    Config(#[from] LayoutConfigError),
    /// The layout reserves no bits for a machine id
    #[error("Cannot set a machine id on a layout with 0 machine id bits")]
    MachineIdUnsupported,
    /// Machine id is write-once
    #[error("Machine id has already been set to {current}. It cannot be set more than once")]
    MachineIdAlreadySet { current: u64 },
    /// Machine id required by the layout has not been assigned yet
    #[error("Machine id has not been set. Call set_machine_id() before generating ids")]
    MachineIdNotSet,
    /// Machine id outside `[0, max]`
    #[error("Machine id {machine_id} is invalid. Maximum allowed value is {max}")]
    MachineIdOutOfRange { machine_id: i128, max: u64 },
    /// Timestamp earlier than the configured epoch
    #[error("Timestamp {timestamp} is before the epoch {epoch}")]
    TimestampBeforeEpoch { timestamp: i64, epoch: i64 },
    /// Point in time whose milliseconds do not fit an `i64`
    #[error("Timestamp is outside the representable millisecond range")]
    TimestampOutOfRange,
    /// Identifier text could not be parsed
    #[error("Invalid snowflake: {0}")]
    Parse(#[from] ParseSnowflakeError),
}

impl SnowflakeError {
    /// Classify the error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::MachineIdUnsupported | Self::MachineIdAlreadySet { .. } | Self::MachineIdNotSet => {
                ErrorKind::State
            }
            Self::MachineIdOutOfRange { .. } => ErrorKind::Range,
            Self::TimestampBeforeEpoch { .. } | Self::TimestampOutOfRange => ErrorKind::Temporal,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }
}
