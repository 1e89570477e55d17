//! The civil-time ⇄ absolute-instant resolution engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ZoneError;
use crate::iso::{DateTime, IsoDateTime};
use crate::provider::ZoneData;
use crate::types::{LocalTimeType, ResolvedOffset, Transition, UtcOffsetSeconds};
use crate::ZoneResult;

/// A time zone: an ordered table of offset transitions plus the local
/// time type in effect before the first of them.
///
/// Immutable once constructed. Resolution takes `&self` over immutable
/// data, so a `Zone` is safe for unlimited concurrent use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    transitions: Vec<Transition>,
    default_type: LocalTimeType,
}

// ==== Construction ====

impl Zone {
    /// Builds a zone from a compiled source table.
    ///
    /// Each transition's pre-transition type is chained from the previous
    /// transition's post-transition type, starting at the table's default
    /// record, and the wall-clock boundary readings are materialized for
    /// the resolution search.
    ///
    /// # Errors
    /// `InvalidArgument` when a type index is out of range or the
    /// transition instants are not strictly ascending.
    pub fn from_data(name: impl Into<String>, data: ZoneData) -> ZoneResult<Self> {
        let ZoneData {
            default_type,
            types,
            transitions: raw,
        } = data;

        let mut transitions = Vec::with_capacity(raw.len());
        let mut before = default_type.clone();
        let mut previous_at = None;
        for tr in raw {
            let after = types
                .get(tr.type_index)
                .ok_or(ZoneError::InvalidArgument(
                    "transition type index out of range",
                ))?
                .clone();
            if previous_at.is_some_and(|at| tr.at_time <= at) {
                return Err(ZoneError::InvalidArgument(
                    "transition instants must be strictly ascending",
                ));
            }
            previous_at = Some(tr.at_time);
            transitions.push(Transition::new(tr.at_time, before, after.clone()));
            before = after;
        }

        Ok(Self {
            name: name.into(),
            transitions,
            default_type,
        })
    }

    /// A zone with a constant offset and no transitions.
    ///
    /// The name is derived from the offset as `±HH:MM`; the local time
    /// type carries no designation.
    pub fn fixed(offset_seconds: i32) -> Self {
        let offset = UtcOffsetSeconds(offset_seconds);
        Self {
            name: offset.to_string(),
            transitions: Vec::new(),
            default_type: LocalTimeType {
                offset,
                is_dst: false,
                abbreviation: String::new(),
            },
        }
    }

    /// The process-wide UTC zone.
    #[cfg(feature = "std")]
    pub fn utc() -> &'static Zone {
        static UTC: std::sync::OnceLock<Zone> = std::sync::OnceLock::new();
        UTC.get_or_init(|| Zone {
            name: String::from("UTC"),
            transitions: Vec::new(),
            default_type: LocalTimeType::new(0, false, "UTC"),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The local time type in effect before the first transition.
    pub fn default_type(&self) -> &LocalTimeType {
        &self.default_type
    }
}

// ==== Resolution ====

impl Zone {
    /// Resolves a naive wall-clock datetime to an absolute instant in
    /// this zone.
    ///
    /// Readings skipped by a forward jump are mapped through the gap onto
    /// the post-transition clock; readings duplicated by a backward jump
    /// resolve to the later occurrence. Both follow the post-transition
    /// type. The policy is fixed, so resolution never fails on ambiguous
    /// input.
    ///
    /// # Errors
    /// `InvalidArgument` when `dt` already carries a resolution; use
    /// [`Zone::convert`] instead.
    pub fn normalize(&self, dt: &DateTime) -> ZoneResult<DateTime> {
        if !dt.is_naive() {
            return Err(ZoneError::InvalidArgument(
                "an already-resolved datetime cannot be normalized; use convert",
            ));
        }
        let ls = dt.iso().as_local_seconds();
        let micros = dt.iso().microsecond;

        let Some((first, last)) = self.transitions.first().zip(self.transitions.last()) else {
            let instant = ls - self.default_type.offset.as_i64();
            return Ok(self.materialize(instant, micros, &self.default_type, None));
        };

        if ls < first.wall_after {
            // Before the earliest recorded period. Up to and including the
            // pre-transition boundary reading, the default record's offset
            // applies; past it the reading sits in the gap opened by the
            // first jump.
            if ls < first.wall_before || (ls == first.wall_before && micros == 0) {
                let instant = ls - self.default_type.offset.as_i64();
                return Ok(self.materialize(
                    instant,
                    micros,
                    &first.after,
                    Some(self.default_type.offset),
                ));
            }
            let instant = first.at_time - (first.wall_before - ls);
            return Ok(self.materialize(instant, micros, &first.after, None));
        }

        if ls >= last.wall_after {
            // Beyond the last recorded change, or inside its fold window:
            // both continue the post-transition reading.
            let instant = last.at_time + (ls - last.wall_after);
            return Ok(self.materialize(instant, micros, &last.after, None));
        }

        // First transition whose post-transition reading exceeds the
        // input; the input lands strictly between `first` and that bound.
        let idx = self.transitions.partition_point(|t| t.wall_after <= ls);
        let next = &self.transitions[idx];
        if ls >= next.wall_before {
            // Skipped by the jump at `next`; map forward through the gap.
            let instant = next.at_time - (next.wall_before - ls);
            return Ok(self.materialize(instant, micros, &next.after, None));
        }

        // Between transitions. A reading inside the fold window of `prev`
        // lands here as well and resolves past `prev`, i.e. to the later
        // of its two occurrences.
        let prev = &self.transitions[idx - 1];
        let instant = prev.at_time + (ls - prev.wall_after);
        Ok(self.materialize(instant, micros, &prev.after, None))
    }

    /// Re-expresses an already-resolved datetime on this zone's wall
    /// clock. The input's own offset pins the instant, so no ambiguity is
    /// possible.
    ///
    /// # Errors
    /// `InvalidArgument` when `dt` is naive; use [`Zone::normalize`]
    /// instead.
    pub fn convert(&self, dt: &DateTime) -> ZoneResult<DateTime> {
        let Some(instant) = dt.epoch_seconds() else {
            return Err(ZoneError::InvalidArgument(
                "a naive datetime cannot be converted; use normalize",
            ));
        };
        let micros = dt.iso().microsecond;

        // Last transition at or before the instant; earlier instants take
        // the default record.
        let idx = self.transitions.partition_point(|t| t.at_time <= instant);
        let kind = match idx {
            0 => &self.default_type,
            _ => &self.transitions[idx - 1].after,
        };
        Ok(self.materialize(instant, micros, kind, None))
    }

    /// Builds a wall-clock datetime from civil fields and resolves it in
    /// this zone.
    ///
    /// # Errors
    /// `InvalidArgument` when a civil field is out of range.
    pub fn datetime(
        &self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> ZoneResult<DateTime> {
        self.normalize(&DateTime::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        )?)
    }

    /// Breaks an instant into civil fields under `kind`'s offset and tags
    /// the result. The pre-history path overrides the tagged offset with
    /// the default record's.
    fn materialize(
        &self,
        instant: i64,
        micros: u32,
        kind: &LocalTimeType,
        offset_override: Option<UtcOffsetSeconds>,
    ) -> DateTime {
        let iso = IsoDateTime::from_local_seconds(instant + kind.offset.as_i64(), micros);
        DateTime::with_resolution(
            iso,
            ResolvedOffset {
                zone: self.name.clone(),
                offset: offset_override.unwrap_or(kind.offset),
                is_dst: kind.is_dst,
                abbreviation: kind.abbreviation.clone(),
            },
        )
    }
}
