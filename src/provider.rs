//! The loader seam: sources of compiled transition tables.
//!
//! Parsing a time zone database (TZif files, zoneinfo sources, vendored
//! blobs) into [`ZoneData`] belongs to [`ZoneSource`] implementations
//! outside this crate. The engine only consumes the compiled shape:
//! transition instants paired with indices into a local time type table,
//! plus the record in effect before recorded history.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::ZoneError;
use crate::types::LocalTimeType;
use crate::ZoneResult;

/// One raw transition: an instant and the index of the local time type
/// that takes effect at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTransition {
    pub at_time: i64,
    pub type_index: usize,
}

impl RawTransition {
    pub const fn new(at_time: i64, type_index: usize) -> Self {
        Self { at_time, type_index }
    }
}

/// The compiled table a source hands the engine for one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneData {
    /// The record in effect before the first transition.
    pub default_type: LocalTimeType,
    /// The local time type table referenced by `transitions`.
    pub types: Vec<LocalTimeType>,
    /// Transition instants, sorted strictly ascending.
    pub transitions: Vec<RawTransition>,
}

/// A source of zone transition tables, keyed by zone name.
pub trait ZoneSource {
    /// Returns the compiled table for `name`.
    ///
    /// # Errors
    /// [`ZoneError::ZoneNotFound`] when the source has no data for `name`.
    fn load(&self, name: &str) -> ZoneResult<ZoneData>;
}

/// A map-backed source for embedders and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    zones: HashMap<String, ZoneData>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, data: ZoneData) {
        self.zones.insert(name.into(), data);
    }
}

impl ZoneSource for InMemorySource {
    fn load(&self, name: &str) -> ZoneResult<ZoneData> {
        self.zones
            .get(name)
            .cloned()
            .ok_or_else(|| ZoneError::ZoneNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn missing_names_surface_zone_not_found() {
        let source = InMemorySource::new();
        assert_eq!(
            source.load("Mars/Olympus_Mons"),
            Err(ZoneError::ZoneNotFound("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn registered_tables_load_back() {
        let mut source = InMemorySource::new();
        source.insert(
            "Test/Fixed",
            ZoneData {
                default_type: LocalTimeType::new(3600, false, "CET"),
                types: vec![],
                transitions: vec![],
            },
        );
        let data = source.load("Test/Fixed").unwrap();
        assert_eq!(data.default_type.offset.0, 3600);
    }
}
