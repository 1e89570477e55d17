//! `civiltz` resolves civil (wall-clock) datetimes against a time zone's
//! historical table of UTC-offset transitions, and re-expresses
//! already-resolved instants in another zone's wall-clock form.
//!
//! The wall-clock ⇄ instant mapping is not a bijection: offset changes
//! create gaps (readings that never occur) and folds (readings that occur
//! twice). [`Zone::normalize`] resolves both deterministically — the
//! post-transition reading always wins — while [`Zone::convert`] carries an
//! already-resolved instant into this zone without any ambiguity.
//!
//! ```rust
//! use civiltz::Zone;
//!
//! let bombay = Zone::fixed(19_800);
//! assert_eq!(bombay.name(), "+05:30");
//!
//! let dt = bombay.datetime(2016, 10, 6, 12, 34, 56, 0).unwrap();
//! let tag = dt.resolution().unwrap();
//! assert_eq!(tag.offset.0, 19_800);
//! assert!(!tag.is_dst);
//! ```
//!
//! Transition tables come from a [`ZoneSource`]; parsing the system or a
//! bundled time zone database into those tables is a concern for source
//! implementations, not this crate.

#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod provider;
pub mod types;
pub mod zone;

#[cfg(feature = "std")]
pub mod registry;

pub(crate) mod utils;

#[doc(inline)]
pub use error::ZoneError;
pub use iso::{DateTime, IsoDateTime};
pub use provider::{InMemorySource, RawTransition, ZoneData, ZoneSource};
pub use types::{LocalTimeType, ResolvedOffset, Transition, UtcOffsetSeconds};
pub use zone::Zone;

#[cfg(feature = "std")]
pub use registry::ZoneCache;

/// The crate-wide result type.
pub type ZoneResult<T> = Result<T, ZoneError>;
