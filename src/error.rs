//! The general error type for zone resolution operations.

use alloc::string::String;
use core::fmt;

/// The error type surfaced by the resolution engine and the zone cache.
///
/// Conversion math itself is total: gaps and folds resolve by a fixed
/// policy rather than erroring. Failures are limited to contract
/// violations and missing source data.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The configured source has no data for the requested zone name.
    ZoneNotFound(String),
    /// An operation was called with arguments that violate its contract,
    /// such as normalizing an already-resolved datetime or handing the
    /// engine a malformed transition table.
    InvalidArgument(&'static str),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoneNotFound(name) => write!(f, "no time zone data found for '{name}'"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl core::error::Error for ZoneError {}
