// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date — a day count with the time of day as its fraction.
//!
//! # Noon convention
//!
//! Julian days begin at **noon**.  An integral Julian Date such as
//! `2451545.0` is noon of JDN 2 451 545, and the fractional offset of a
//! civil time of day is
//!
//! ```text
//! offset = (hour − 12)/24 + minute/1440 + (second + ms/1000)/86400   ∈ [−0.5, 0.5)
//! ```
//!
//! so that
//!
//! | Civil time | Offset | Julian Date of day N |
//! |------------|--------|----------------------|
//! | 00:00:00.000 | −0.5 | N − 0.5 |
//! | 06:00:00.000 | −0.25 | N − 0.25 |
//! | 12:00:00.000 | 0 | N |
//! | 23:59:59.999 | ≈ +0.5 | < N + 0.5 |
//!
//! and `floor(JD + 0.5)` recovers the day number.  Decomposition
//! ([`offset_to_time_parts`]) reverses this by taking the fraction above
//! `floor(JD)`, which is measured from noon, and shifting it by half a day so
//! that it is measured from midnight.

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar::{self, TemporalCalendar};
use super::day_number::JulianDayNumber;

const HOURS_PER_DAY: f64 = 24.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
const HALF_DAY_SECONDS: f64 = 43_200.0;
const MILLIS_PER_DAY_I64: i64 = 86_400_000;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

// ═══════════════════════════════════════════════════════════════════════════
// Time of day
// ═══════════════════════════════════════════════════════════════════════════

/// Clock reading with millisecond resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeParts {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl TimeParts {
    pub const MIDNIGHT: Self = Self::new(0, 0, 0, 0);
    pub const NOON: Self = Self::new(12, 0, 0, 0);

    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Split a count of milliseconds since midnight.
    ///
    /// `ms` is reduced modulo one day first.
    pub const fn from_millisecond_of_day(ms: i64) -> Self {
        let ms = ms.rem_euclid(MILLIS_PER_DAY_I64);
        Self {
            hour: (ms / 3_600_000) as u8,
            minute: (ms / 60_000 % 60) as u8,
            second: (ms / 1_000 % 60) as u8,
            millisecond: (ms % 1_000) as u16,
        }
    }

    /// Milliseconds elapsed since midnight.
    pub const fn millisecond_of_day(&self) -> i64 {
        self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1_000
            + self.millisecond as i64
    }

    /// Fractional day offset from noon, see [`time_parts_to_offset`].
    #[inline]
    pub fn to_offset(&self) -> f64 {
        time_parts_to_offset(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.millisecond.into(),
        )
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Fraction of a day between noon and the given clock reading.
///
/// Noon maps to `0.0`, midnight to `-0.5`.  Inputs are not validated; a
/// reading outside the civil ranges simply lands outside `[-0.5, 0.5)`.
///
/// ```
/// use jdcal::time_parts_to_offset;
///
/// assert_eq!(time_parts_to_offset(12, 0, 0, 0), 0.0);
/// assert_eq!(time_parts_to_offset(0, 0, 0, 0), -0.5);
/// assert_eq!(time_parts_to_offset(18, 0, 0, 0), 0.25);
/// ```
#[inline]
pub fn time_parts_to_offset(hour: u32, minute: u32, second: u32, millisecond: u32) -> f64 {
    (hour as f64 - 12.0) / HOURS_PER_DAY
        + minute as f64 / MINUTES_PER_DAY
        + (second as f64 + millisecond as f64 / 1_000.0) / SECONDS_PER_DAY
}

/// Clock reading encoded in the fraction of `julian_date`.
///
/// The fraction above `floor(julian_date)` counts seconds from noon; it is
/// moved to a midnight origin before being split, and the result is rounded
/// to the nearest millisecond (a reading that rounds up to 24:00:00.000
/// wraps to 00:00:00.000, use [`JulianDate::split`] to carry it into the day
/// number instead).
pub fn offset_to_time_parts(julian_date: f64) -> TimeParts {
    let seconds_from_noon = (julian_date - julian_date.floor()) * SECONDS_PER_DAY;
    let seconds_of_day = if seconds_from_noon <= HALF_DAY_SECONDS {
        (seconds_from_noon + HALF_DAY_SECONDS) % SECONDS_PER_DAY
    } else {
        seconds_from_noon - HALF_DAY_SECONDS
    };
    TimeParts::from_millisecond_of_day((seconds_of_day * 1_000.0).round() as i64)
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// Continuous count of days since noon of JDN 0.
///
/// Stores a single [`Days`] quantity.  All arithmetic produces a new value.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar in days.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Combine a day number with a clock reading on that day.
    #[inline]
    pub fn from_parts(jdn: JulianDayNumber, time: TimeParts) -> Self {
        Self::new(jdn.value() as f64 + time.to_offset())
    }

    /// Create from a Modified Julian Date (`JD − 2 400 000.5`).
    #[inline]
    pub fn from_mjd(mjd: f64) -> Self {
        Self::from_days(Days::new(mjd) + MJD_EPOCH)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Day number containing this instant: `floor(JD + 0.5)`.
    #[inline]
    pub fn to_jdn(&self) -> JulianDayNumber {
        JulianDayNumber::new((self.value() + 0.5).floor() as i64)
    }

    /// Clock reading of this instant, see [`offset_to_time_parts`].
    #[inline]
    pub fn time_parts(&self) -> TimeParts {
        offset_to_time_parts(self.value())
    }

    /// Day number and clock reading, rounded to the millisecond.
    ///
    /// Unlike `(self.to_jdn(), self.time_parts())`, an instant that rounds up
    /// to midnight is reported as 00:00:00.000 of the *next* day.
    ///
    /// Values beyond the `i64` day range, including the infinities, saturate
    /// to `i64::MIN`/`i64::MAX`.  NaN has no day and is reported as day 0 at
    /// midnight; check [`is_finite`](Self::is_finite) first where that matters.
    pub fn split(&self) -> (JulianDayNumber, TimeParts) {
        let jdn = self.to_jdn();
        let since_midnight = self.value() - (jdn.value() as f64 - 0.5);
        let ms = (since_midnight * MILLIS_PER_DAY).round() as i64;
        let carry = ms.div_euclid(MILLIS_PER_DAY_I64);
        (
            JulianDayNumber::new(jdn.value().saturating_add(carry)),
            TimeParts::from_millisecond_of_day(ms),
        )
    }

    /// `true` unless the value is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    /// Calendar in force on the day of this instant.
    #[inline]
    pub fn calendar(&self) -> TemporalCalendar {
        calendar::resolve(self.to_jdn().value())
    }

    /// Modified Julian Date value.
    #[inline]
    pub fn to_mjd(&self) -> f64 {
        (self.quantity - MJD_EPOCH).value()
    }

    // ── arithmetic helpers ────────────────────────────────────────────

    #[inline]
    pub fn add_days(self, days: f64) -> Self {
        Self::new(self.value() + days)
    }

    #[inline]
    pub fn add_weeks(self, weeks: f64) -> Self {
        Self::new(self.value() + weeks * 7.0)
    }

    #[inline]
    pub fn add_hours(self, hours: f64) -> Self {
        Self::new(self.value() + hours / HOURS_PER_DAY)
    }

    #[inline]
    pub fn add_minutes(self, minutes: f64) -> Self {
        Self::new(self.value() + minutes / MINUTES_PER_DAY)
    }

    #[inline]
    pub fn add_seconds(self, seconds: f64) -> Self {
        Self::new(self.value() + seconds / SECONDS_PER_DAY)
    }

    #[inline]
    pub fn add_milliseconds(self, milliseconds: f64) -> Self {
        Self::new(self.value() + milliseconds / MILLIS_PER_DAY)
    }

    /// Shift by a `chrono` time span, at millisecond resolution.
    #[inline]
    pub fn add_duration(self, duration: chrono::Duration) -> Self {
        self.add_milliseconds(duration.num_milliseconds() as f64)
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`, reading the day count as UTC.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

impl From<JulianDayNumber> for JulianDate {
    #[inline]
    fn from(jdn: JulianDayNumber) -> Self {
        jdn.to_julian_date()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
