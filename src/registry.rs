//! The process-wide zone cache.

use alloc::string::{String, ToString};
use alloc::sync::Arc;

use hashbrown::HashMap;
use std::sync::Mutex;

use crate::provider::ZoneSource;
use crate::zone::Zone;
use crate::ZoneResult;

/// A memoized name → [`Zone`] store over a [`ZoneSource`].
///
/// Loading is lock-protected: the map lock is held across the miss path,
/// so at most one `Zone` is ever constructed per distinct name, and a
/// failed load leaves the map untouched. Entries are never evicted; a
/// cached zone lives as long as the cache (and any outstanding `Arc`s).
#[derive(Debug)]
pub struct ZoneCache<S> {
    source: S,
    zones: Mutex<HashMap<String, Arc<Zone>>>,
}

impl<S: ZoneSource> ZoneCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            zones: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the zone for `name`, loading it through the source on
    /// first use.
    ///
    /// # Errors
    /// [`ZoneError::ZoneNotFound`](crate::ZoneError::ZoneNotFound) when
    /// the source has no data for `name`; the failure is terminal for the
    /// call and is not cached.
    pub fn load(&self, name: &str) -> ZoneResult<Arc<Zone>> {
        let mut zones = match self.zones.lock() {
            Ok(guard) => guard,
            // Inserts of fully-built zones are the only writes, so a
            // poisoned map is still whole.
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(zone) = zones.get(name) {
            return Ok(Arc::clone(zone));
        }
        let data = self.source.load(name)?;
        let zone = Arc::new(Zone::from_data(name, data)?);
        #[cfg(feature = "log")]
        log::debug!(
            "loaded time zone '{name}' ({} transitions)",
            zone.transitions().len()
        );
        zones.insert(name.to_string(), Arc::clone(&zone));
        Ok(zone)
    }
}
