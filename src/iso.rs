//! Civil datetime records and their epoch arithmetic.

use crate::error::ZoneError;
use crate::types::ResolvedOffset;
use crate::utils;
use crate::ZoneResult;

/// Civil (wall-clock) fields: a proleptic Gregorian date and a time of
/// day, with no associated zone or offset.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Sub-second component, `0..1_000_000`.
    pub microsecond: u32,
}

impl IsoDateTime {
    pub(crate) const fn new_unchecked(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Creates a validated civil record.
    ///
    /// # Errors
    /// `InvalidArgument` when any field is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> ZoneResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(ZoneError::InvalidArgument("date fields are out of range"));
        }
        if !is_valid_time(hour, minute, second, microsecond) {
            return Err(ZoneError::InvalidArgument("time fields are out of range"));
        }
        Ok(Self::new_unchecked(
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        ))
    }

    /// The wall-clock reading as seconds from the unix epoch. The
    /// microsecond field is carried separately by the engine.
    pub(crate) fn as_local_seconds(&self) -> i64 {
        let days = utils::epoch_days_from_gregorian_date(self.year, self.month, self.day);
        days * utils::SECONDS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Rebuilds civil fields from local epoch seconds, flooring negative
    /// values into the previous day.
    pub(crate) fn from_local_seconds(seconds: i64, microsecond: u32) -> Self {
        let days = seconds.div_euclid(utils::SECONDS_PER_DAY);
        let day_seconds = seconds.rem_euclid(utils::SECONDS_PER_DAY);
        let (year, month, day) = utils::gregorian_date_from_epoch_days(days);
        Self::new_unchecked(
            year,
            month,
            day,
            (day_seconds / 3600) as u8,
            (day_seconds / 60 % 60) as u8,
            (day_seconds % 60) as u8,
            microsecond,
        )
    }
}

fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(utils::MIN_YEAR..=utils::MAX_YEAR).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=utils::days_in_month(year, month)).contains(&day)
}

fn is_valid_time(hour: u8, minute: u8, second: u8, microsecond: u32) -> bool {
    hour < 24 && minute < 60 && second < 60 && microsecond < 1_000_000
}

/// A civil datetime plus an optional resolution tag.
///
/// A value without a tag is naive: pure wall-clock fields awaiting
/// [`Zone::normalize`](crate::Zone::normalize). Engine outputs always
/// carry the tag, making them eligible for
/// [`Zone::convert`](crate::Zone::convert). The two states are
/// distinguished by data rather than by probing the value at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    iso: IsoDateTime,
    resolved: Option<ResolvedOffset>,
}

impl DateTime {
    /// Creates a naive datetime from validated civil fields.
    ///
    /// # Errors
    /// `InvalidArgument` when any field is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> ZoneResult<Self> {
        Ok(Self::naive(IsoDateTime::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        )?))
    }

    /// Wraps civil fields without a resolution tag.
    pub const fn naive(iso: IsoDateTime) -> Self {
        Self {
            iso,
            resolved: None,
        }
    }

    pub(crate) const fn with_resolution(iso: IsoDateTime, resolved: ResolvedOffset) -> Self {
        Self {
            iso,
            resolved: Some(resolved),
        }
    }

    /// The civil fields of this datetime.
    pub fn iso(&self) -> &IsoDateTime {
        &self.iso
    }

    /// The resolution tag, when this datetime has been resolved by a zone.
    pub fn resolution(&self) -> Option<&ResolvedOffset> {
        self.resolved.as_ref()
    }

    pub fn is_naive(&self) -> bool {
        self.resolved.is_none()
    }

    /// The absolute instant of a resolved datetime in whole unix
    /// seconds; the microsecond part sits above it. `None` for naive
    /// values.
    pub fn epoch_seconds(&self) -> Option<i64> {
        self.resolved
            .as_ref()
            .map(|tag| self.iso.as_local_seconds() - tag.offset.as_i64())
    }
}
