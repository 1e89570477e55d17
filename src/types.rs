//! Transition table value types.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// The amount of seconds to add to UTC to reach local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffsetSeconds(pub i32);

impl UtcOffsetSeconds {
    pub(crate) fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl From<i32> for UtcOffsetSeconds {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UtcOffsetSeconds {
    /// Renders the offset as `±HH:MM`, truncating any sub-minute part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let minutes = self.0.unsigned_abs() / 60;
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

/// The offset, DST flag, and abbreviation in effect during a period
/// bounded by transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTimeType {
    /// The UTC offset of local time.
    pub offset: UtcOffsetSeconds,
    /// Whether the period observes daylight saving time.
    pub is_dst: bool,
    /// The designation string, e.g. `"EST"`. May be empty.
    pub abbreviation: String,
}

impl LocalTimeType {
    pub fn new(offset: i32, is_dst: bool, abbreviation: impl Into<String>) -> Self {
        Self {
            offset: UtcOffsetSeconds(offset),
            is_dst,
            abbreviation: abbreviation.into(),
        }
    }
}

/// A recorded instant at which a zone's UTC offset or DST status changes.
///
/// `wall_before` and `wall_after` are the wall-clock readings at
/// `at_time` under the pre- and post-transition offsets, stored as local
/// epoch seconds. A forward jump leaves `wall_before < wall_after` (the
/// window in between is a gap); a backward jump inverts them (the window
/// is a fold). The resolution search compares naive inputs against these
/// boundaries directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The absolute instant of the change, in unix seconds.
    pub at_time: i64,
    /// The local time type in effect up to `at_time`.
    pub before: LocalTimeType,
    /// The local time type in effect from `at_time` on.
    pub after: LocalTimeType,
    /// `at_time` read on the pre-transition wall clock.
    pub wall_before: i64,
    /// `at_time` read on the post-transition wall clock.
    pub wall_after: i64,
}

impl Transition {
    pub fn new(at_time: i64, before: LocalTimeType, after: LocalTimeType) -> Self {
        let wall_before = at_time + before.offset.as_i64();
        let wall_after = at_time + after.offset.as_i64();
        Self {
            at_time,
            before,
            after,
            wall_before,
            wall_after,
        }
    }
}

impl Ord for Transition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at_time.cmp(&other.at_time)
    }
}

impl PartialOrd for Transition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The offset tag attached to every resolved datetime.
///
/// Recomputed per resolution; never cached or shared between results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOffset {
    /// Name of the zone that produced the resolution.
    pub zone: String,
    /// The resolved UTC offset of the wall-clock fields.
    pub offset: UtcOffsetSeconds,
    /// Whether the resolved period observes daylight saving time.
    pub is_dst: bool,
    /// The resolved designation string.
    pub abbreviation: String,
}
