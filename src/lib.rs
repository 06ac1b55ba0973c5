//! # flakeid
//!
//! Snowflake identifiers with a configurable bit layout.
//!
//! Each id packs, most-significant first:
//! - a timestamp delta in milliseconds since a custom epoch (variable width)
//! - an optional machine id (`machine_id_bits`, may be 0)
//! - a per-generator sequence counter (`sequence_bits`, at least 1)
//!
//! The timestamp field has no fixed width, so ids are `u128` values
//! ([`Snowflake`]) written as decimal strings. Layouts may reserve at most 64
//! bits for machine id and sequence combined, which keeps every id produced
//! from an `i64` millisecond clock inside 128 bits.
//!
//! ```
//! use flakeid::{LayoutConfig, SnowflakeGenerator};
//!
//! let config = LayoutConfig::builder()
//!     .epoch(1577836800000)
//!     .machine_id_bits(10)
//!     .sequence_bits(12)
//!     .build();
//! let generator = SnowflakeGenerator::with_machine_id(config, 642).unwrap();
//!
//! let id = generator.generate_at(1577836805000i64).unwrap();
//! let parts = generator.deconstruct_str(&id.to_string()).unwrap();
//! assert_eq!(parts.timestamp, 5000);
//! assert_eq!(parts.machine_id, Some(642));
//! assert_eq!(parts.sequence, 0);
//! ```
//!
//! Uniqueness relies on every concurrently running generator having a
//! distinct machine id, and on no more than `max_sequence() + 1` ids being
//! drawn per millisecond: the sequence counter wraps instead of waiting.

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod id;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    BitLayout, LayoutConfig, LayoutConfigBuilder, LayoutConfigError, ENV_EPOCH,
    ENV_MACHINE_ID_BITS, ENV_SEQUENCE_BITS, MAX_LOW_BITS,
};
pub use error::{ErrorKind, SnowflakeError};
pub use extractor::{Deconstructed, SnowflakeExtractor};
pub use generator::{timestamp_millis, unix_time_ms, IntoTimestamp, SnowflakeGenerator};
pub use id::{ParseSnowflakeError, Snowflake};
