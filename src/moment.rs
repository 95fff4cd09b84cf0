// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated civil date-time.
//!
//! [`CivilMoment`] is the boundary between raw numeric fields and the
//! day-number world.  Its constructors are the only place in the crate where
//! input is rejected; everything downstream of them is total.
//!
//! A moment remembers the calendar its fields are expressed in.  Equality,
//! ordering and hashing ignore that representation and compare the absolute
//! instant, so `1582-10-04 12:00 (Julian)` and `1582-10-14 12:00
//! (Gregorian)` are equal.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::calendar::{self, TemporalCalendar};
use super::day_number::{date_parts_to_jdn, jdn_to_date_parts, DateParts, JulianDayNumber};
use super::error::{MomentError, MomentResult};
use super::julian_date::{JulianDate, TimeParts};

const MILLIS_PER_DAY: i128 = 86_400_000;

/// Log and pass through a validation failure.
#[inline]
fn reject(err: MomentError) -> MomentError {
    #[cfg(feature = "log")]
    log::debug!("rejected civil moment: {err}");
    err
}

/// Calendar in force on a civil date, judged by its proleptic Gregorian day
/// number.  Dates inside the ten-day reform gap resolve to Julian.
fn civil_calendar(year: i32, month: u8, day: u8) -> TemporalCalendar {
    calendar::resolve(date_parts_to_jdn(
        year.into(),
        month.into(),
        day.into(),
        TemporalCalendar::Gregorian,
    ))
}

/// Immutable, validated civil date and time of day.
///
/// ```
/// use jdcal::{CivilMoment, TemporalCalendar};
///
/// let m = CivilMoment::with_calendar(2000, 1, 1, 12, 0, 0, 0, TemporalCalendar::Gregorian)?;
/// assert_eq!(m.to_julian_date().value(), 2_451_545.0);
///
/// let err = CivilMoment::new(2023, 2, 29, 0, 0, 0, 0).unwrap_err();
/// assert_eq!(err.field(), "day");
/// # Ok::<(), jdcal::MomentError>(())
/// ```
#[derive(Debug, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawCivilMoment")
)]
pub struct CivilMoment {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    calendar: TemporalCalendar,
}

impl CivilMoment {
    /// Earliest accepted year (astronomical numbering).
    pub const MIN_YEAR: i32 = -9_999;

    /// Latest accepted year.
    pub const MAX_YEAR: i32 = 9_999;

    /// Build a moment in the calendar historically in force on that date:
    /// Julian up to 1582-10-04, Gregorian from 1582-10-15.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> MomentResult<Self> {
        Self::validate(year, month, day, hour, minute, second, millisecond, None)
    }

    /// Build a moment whose fields are read in `calendar`.
    #[allow(clippy::too_many_arguments)]
    pub fn with_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        calendar: TemporalCalendar,
    ) -> MomentResult<Self> {
        Self::validate(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            Some(calendar),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn validate(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        calendar: Option<TemporalCalendar>,
    ) -> MomentResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(reject(MomentError::InvalidYear(year)));
        }
        if !(1..=12).contains(&month) {
            return Err(reject(MomentError::InvalidMonth(month)));
        }
        let calendar = calendar.unwrap_or_else(|| civil_calendar(year, month, day));
        if day == 0 || day > calendar.days_in_month(year.into(), month) {
            return Err(reject(MomentError::InvalidDay(day)));
        }
        if hour > 23 {
            return Err(reject(MomentError::InvalidHour(hour)));
        }
        if minute > 59 {
            return Err(reject(MomentError::InvalidMinute(minute)));
        }
        if second > 59 {
            return Err(reject(MomentError::InvalidSecond(second)));
        }
        if millisecond > 999 {
            return Err(reject(MomentError::InvalidMillisecond(millisecond)));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            calendar,
        })
    }

    /// Moment at `time` on day `jdn`, with its fields in `calendar`.
    fn from_day_and_time(
        jdn: i64,
        time: TimeParts,
        calendar: TemporalCalendar,
    ) -> MomentResult<Self> {
        let date = jdn_to_date_parts(jdn, calendar);
        let year = date.year.clamp(i32::MIN.into(), i32::MAX.into()) as i32;
        Self::with_calendar(
            year,
            date.month as u8,
            date.day as u8,
            time.hour,
            time.minute,
            time.second,
            time.millisecond,
            calendar,
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Calendar the fields are expressed in.
    #[inline]
    pub const fn calendar(&self) -> TemporalCalendar {
        self.calendar
    }

    #[inline]
    pub const fn date_parts(&self) -> DateParts {
        DateParts::new(self.year as i64, self.month as i64, self.day as i64)
    }

    #[inline]
    pub const fn time_parts(&self) -> TimeParts {
        TimeParts::new(self.hour, self.minute, self.second, self.millisecond)
    }

    // ── conversion ────────────────────────────────────────────────────

    /// Day number of this moment's date.
    #[inline]
    pub fn to_jdn(&self) -> JulianDayNumber {
        self.to_jdn_in(self.calendar)
    }

    /// Day number of this moment's fields read in `calendar`.
    pub fn to_jdn_in(&self, calendar: TemporalCalendar) -> JulianDayNumber {
        JulianDayNumber::from_date_parts(
            self.year.into(),
            self.month.into(),
            self.day.into(),
            calendar,
        )
    }

    /// Julian Date of this moment.
    #[inline]
    pub fn to_julian_date(&self) -> JulianDate {
        self.to_julian_date_in(self.calendar)
    }

    /// Julian Date of this moment's fields read in `calendar`.
    ///
    /// Reinterprets the fields; use [`to_calendar`](Self::to_calendar) to
    /// keep the instant and change the fields instead.
    pub fn to_julian_date_in(&self, calendar: TemporalCalendar) -> JulianDate {
        JulianDate::from_parts(self.to_jdn_in(calendar), self.time_parts())
    }

    /// Moment at `jd`, in the calendar in force on that day.
    ///
    /// The time of day is rounded to the millisecond.  Fails with
    /// [`MomentError::NonFiniteJulianDate`] for NaN or infinite input and
    /// with [`MomentError::InvalidYear`] when the resulting year is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn from_julian_date(jd: JulianDate) -> MomentResult<Self> {
        let (jdn, time) = Self::split_finite(jd)?;
        Self::from_day_and_time(jdn.value(), time, jdn.calendar())
    }

    /// Moment at `jd` with its fields in `calendar`.
    pub fn from_julian_date_in(jd: JulianDate, calendar: TemporalCalendar) -> MomentResult<Self> {
        let (jdn, time) = Self::split_finite(jd)?;
        Self::from_day_and_time(jdn.value(), time, calendar)
    }

    fn split_finite(jd: JulianDate) -> MomentResult<(JulianDayNumber, TimeParts)> {
        if !jd.is_finite() {
            return Err(reject(MomentError::NonFiniteJulianDate));
        }
        Ok(jd.split())
    }

    /// Noon of day `jdn`, in the calendar in force on that day.
    pub fn from_jdn(jdn: JulianDayNumber) -> MomentResult<Self> {
        Self::from_day_and_time(jdn.value(), TimeParts::NOON, jdn.calendar())
    }

    /// Noon of day `jdn` with its fields in `calendar`.
    pub fn from_jdn_in(jdn: JulianDayNumber, calendar: TemporalCalendar) -> MomentResult<Self> {
        Self::from_day_and_time(jdn.value(), TimeParts::NOON, calendar)
    }

    /// The same instant with its fields expressed in `calendar`.
    pub fn to_calendar(&self, calendar: TemporalCalendar) -> MomentResult<Self> {
        Self::from_day_and_time(self.to_jdn().value(), self.time_parts(), calendar)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Shift by whole days, keeping this moment's calendar.
    pub fn add_days(&self, days: i64) -> MomentResult<Self> {
        Self::from_day_and_time(
            self.to_jdn().value().saturating_add(days),
            self.time_parts(),
            self.calendar,
        )
    }

    /// Shift by a signed number of milliseconds, keeping this moment's
    /// calendar.  Exact: no floating-point rounding is involved.
    pub fn add_milliseconds(&self, milliseconds: i64) -> MomentResult<Self> {
        let total = self.instant_millis() + milliseconds as i128;
        let jdn = total.div_euclid(MILLIS_PER_DAY);
        let jdn = jdn.clamp(i64::MIN.into(), i64::MAX.into()) as i64;
        let ms = total.rem_euclid(MILLIS_PER_DAY) as i64;
        Self::from_day_and_time(jdn, TimeParts::from_millisecond_of_day(ms), self.calendar)
    }

    /// Shift by a `chrono` time span at millisecond resolution.
    pub fn add_duration(&self, duration: chrono::Duration) -> MomentResult<Self> {
        self.add_milliseconds(duration.num_milliseconds())
    }

    /// Milliseconds since midnight starting JDN 0: an exact instant key that
    /// orders the same way as [`to_julian_date`](Self::to_julian_date).
    fn instant_millis(&self) -> i128 {
        self.to_jdn().value() as i128 * MILLIS_PER_DAY
            + self.time_parts().millisecond_of_day() as i128
    }

    // ── host interop ──────────────────────────────────────────────────

    /// This instant as a proleptic Gregorian `chrono::NaiveDateTime`.
    ///
    /// Returns `None` if the date is outside chrono's representable range.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = self.to_jdn().to_date_parts(TemporalCalendar::Gregorian);
        NaiveDate::from_ymd_opt(
            i32::try_from(date.year).ok()?,
            date.month as u32,
            date.day as u32,
        )?
        .and_hms_milli_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.millisecond.into(),
        )
    }
}

// ── Equality, ordering, hashing ───────────────────────────────────────────

impl PartialEq for CivilMoment {
    fn eq(&self, other: &Self) -> bool {
        self.instant_millis() == other.instant_millis()
    }
}

impl Eq for CivilMoment {}

impl PartialOrd for CivilMoment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilMoment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant_millis().cmp(&other.instant_millis())
    }
}

impl Hash for CivilMoment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant_millis().hash(state);
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{} ({})",
            self.month,
            self.day,
            self.time_parts(),
            self.calendar
        )
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<CivilMoment> for JulianDate {
    #[inline]
    fn from(moment: CivilMoment) -> Self {
        moment.to_julian_date()
    }
}

impl TryFrom<JulianDate> for CivilMoment {
    type Error = MomentError;

    #[inline]
    fn try_from(jd: JulianDate) -> MomentResult<Self> {
        Self::from_julian_date(jd)
    }
}

/// Fields read as proleptic Gregorian.  Leap seconds (`nanosecond >= 1e9`)
/// are rejected as an invalid millisecond.
impl TryFrom<NaiveDateTime> for CivilMoment {
    type Error = MomentError;

    fn try_from(datetime: NaiveDateTime) -> MomentResult<Self> {
        let millisecond = datetime.nanosecond() / 1_000_000;
        Self::with_calendar(
            datetime.year(),
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
            u16::try_from(millisecond).unwrap_or(u16::MAX),
            TemporalCalendar::Gregorian,
        )
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Unvalidated wire form; deserialization goes through [`CivilMoment::with_calendar`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCivilMoment {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    calendar: TemporalCalendar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCivilMoment> for CivilMoment {
    type Error = MomentError;

    fn try_from(raw: RawCivilMoment) -> MomentResult<Self> {
        Self::with_calendar(
            raw.year,
            raw.month,
            raw.day,
            raw.hour,
            raw.minute,
            raw.second,
            raw.millisecond,
            raw.calendar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use TemporalCalendar::{Gregorian, Julian};

    #[allow(clippy::too_many_arguments)]
    fn moment(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8, ms: u16, c: TemporalCalendar) -> CivilMoment {
        CivilMoment::with_calendar(y, mo, d, h, mi, s, ms, c).unwrap()
    }

    #[test]
    fn j2000_scenario() {
        let m = moment(2000, 1, 1, 12, 0, 0, 0, Gregorian);
        assert_eq!(m.to_julian_date().value(), 2_451_545.0);
        assert_eq!(m.to_jdn(), JulianDayNumber::J2000);
        assert_eq!(m.to_julian_date().to_jdn().value(), 2_451_545);
    }

    // 1582-10-04 (Julian) and 1582-10-15 (Gregorian) are consecutive days,
    // not one instant: the continuous day count fixes them one day apart.
    #[test]
    fn reform_dates_are_one_day_apart() {
        let julian = moment(1582, 10, 4, 12, 0, 0, 0, Julian);
        let gregorian = moment(1582, 10, 15, 12, 0, 0, 0, Gregorian);
        assert_ne!(julian, gregorian);
        assert_eq!(julian.to_jdn().value() + 1, gregorian.to_jdn().value());
        // The day after 1582-10-04 (Julian) is 1582-10-15 (Gregorian).
        assert_eq!(
            julian.add_days(1).unwrap().to_calendar(Gregorian).unwrap().date_parts(),
            gregorian.date_parts()
        );
    }

    #[test]
    fn same_instant_under_both_calendars() {
        let julian = moment(1582, 10, 5, 12, 0, 0, 0, Julian);
        let gregorian = moment(1582, 10, 15, 12, 0, 0, 0, Gregorian);
        assert_eq!(julian.to_julian_date(), gregorian.to_julian_date());
        assert_eq!(julian, gregorian);
        assert_eq!(julian.cmp(&gregorian), Ordering::Equal);

        let mut set = HashSet::new();
        set.insert(julian);
        assert!(set.contains(&gregorian));
    }

    #[test]
    fn automatic_calendar_follows_the_reform() {
        let before = CivilMoment::new(1582, 10, 4, 0, 0, 0, 0).unwrap();
        let after = CivilMoment::new(1582, 10, 15, 0, 0, 0, 0).unwrap();
        assert_eq!(before.calendar(), Julian);
        assert_eq!(after.calendar(), Gregorian);
        assert_eq!(after.to_jdn() - before.to_jdn(), 1);
        assert_eq!(CivilMoment::new(-4712, 1, 1, 12, 0, 0, 0).unwrap().to_jdn().value(), 0);
    }

    #[test]
    fn day_validation_uses_the_moment_calendar() {
        // 1500 is a Julian leap year but not a Gregorian one.
        assert!(CivilMoment::new(1500, 2, 29, 0, 0, 0, 0).is_ok());
        assert_eq!(
            CivilMoment::with_calendar(1500, 2, 29, 0, 0, 0, 0, Gregorian),
            Err(MomentError::InvalidDay(29))
        );
        assert_eq!(
            CivilMoment::new(1700, 2, 29, 0, 0, 0, 0),
            Err(MomentError::InvalidDay(29))
        );
        assert!(CivilMoment::with_calendar(1700, 2, 29, 0, 0, 0, 0, Julian).is_ok());
    }

    #[test]
    fn each_field_is_rejected_by_name() {
        let cases = [
            (CivilMoment::new(10_000, 1, 1, 0, 0, 0, 0), MomentError::InvalidYear(10_000)),
            (CivilMoment::new(-10_000, 1, 1, 0, 0, 0, 0), MomentError::InvalidYear(-10_000)),
            (CivilMoment::new(2000, 0, 1, 0, 0, 0, 0), MomentError::InvalidMonth(0)),
            (CivilMoment::new(2000, 13, 1, 0, 0, 0, 0), MomentError::InvalidMonth(13)),
            (CivilMoment::new(2000, 1, 0, 0, 0, 0, 0), MomentError::InvalidDay(0)),
            (CivilMoment::new(2000, 4, 31, 0, 0, 0, 0), MomentError::InvalidDay(31)),
            (CivilMoment::new(2000, 1, 1, 24, 0, 0, 0), MomentError::InvalidHour(24)),
            (CivilMoment::new(2000, 1, 1, 0, 60, 0, 0), MomentError::InvalidMinute(60)),
            (CivilMoment::new(2000, 1, 1, 0, 0, 60, 0), MomentError::InvalidSecond(60)),
            (CivilMoment::new(2000, 1, 1, 0, 0, 0, 1000), MomentError::InvalidMillisecond(1000)),
        ];
        for (result, expected) in cases {
            assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn first_invalid_field_wins() {
        assert_eq!(
            CivilMoment::new(2000, 13, 40, 25, 61, 61, 1001),
            Err(MomentError::InvalidMonth(13))
        );
        assert_eq!(
            CivilMoment::new(2000, 2, 30, 25, 0, 0, 0),
            Err(MomentError::InvalidDay(30))
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(CivilMoment::new(CivilMoment::MIN_YEAR, 1, 1, 0, 0, 0, 0).is_ok());
        assert!(CivilMoment::new(CivilMoment::MAX_YEAR, 12, 31, 23, 59, 59, 999).is_ok());
        assert!(CivilMoment::new(0, 2, 29, 0, 0, 0, 0).is_ok());
    }

    #[test]
    fn julian_date_roundtrip() {
        let samples = [
            moment(2000, 1, 1, 0, 0, 0, 0, Gregorian),
            moment(2024, 2, 29, 23, 59, 59, 999, Gregorian),
            moment(1582, 10, 4, 11, 59, 59, 999, Julian),
            moment(-4712, 1, 1, 12, 0, 0, 0, Julian),
            moment(-44, 3, 15, 9, 30, 0, 250, Julian),
            moment(0, 12, 31, 18, 45, 12, 1, Gregorian),
            moment(9999, 12, 31, 23, 59, 59, 999, Gregorian),
            moment(-9999, 1, 1, 0, 0, 0, 0, Julian),
        ];
        for m in samples {
            let back = CivilMoment::from_julian_date_in(m.to_julian_date(), m.calendar()).unwrap();
            assert_eq!(back.date_parts(), m.date_parts(), "{m}");
            assert_eq!(back.time_parts(), m.time_parts(), "{m}");
            assert_eq!(back.calendar(), m.calendar());
        }
    }

    #[test]
    fn from_julian_date_resolves_calendar() {
        let m = CivilMoment::from_julian_date(JulianDate::new(2_299_160.0)).unwrap();
        assert_eq!((m.calendar(), m.date_parts()), (Julian, DateParts::new(1582, 10, 4)));
        assert_eq!(m.time_parts(), TimeParts::NOON);

        let m = CivilMoment::from_julian_date(JulianDate::new(2_299_160.5)).unwrap();
        assert_eq!((m.calendar(), m.date_parts()), (Gregorian, DateParts::new(1582, 10, 15)));
        assert_eq!(m.time_parts(), TimeParts::MIDNIGHT);
    }

    #[test]
    fn from_jdn_is_noon() {
        let m = CivilMoment::from_jdn(JulianDayNumber::J2000).unwrap();
        assert_eq!(m, moment(2000, 1, 1, 12, 0, 0, 0, Gregorian));
        let m = CivilMoment::from_jdn_in(JulianDayNumber::EPOCH, Gregorian).unwrap();
        assert_eq!(m.date_parts(), DateParts::new(-4713, 11, 24));
    }

    #[test]
    fn out_of_range_decomposition_fails_on_year() {
        assert_eq!(
            CivilMoment::from_julian_date(JulianDate::new(1e12)).map_err(|e| e.field()),
            Err("year")
        );
        assert!(CivilMoment::from_jdn(JulianDayNumber::new(i64::MIN)).is_err());
    }

    #[test]
    fn julian_dates_beyond_the_day_range_fail_on_year() {
        for value in [1e19, -1e19, f64::MAX, f64::MIN] {
            let jd = JulianDate::new(value);
            assert!(
                matches!(CivilMoment::from_julian_date(jd), Err(MomentError::InvalidYear(_))),
                "{value}"
            );
            assert!(
                matches!(
                    CivilMoment::from_julian_date_in(jd, Julian),
                    Err(MomentError::InvalidYear(_))
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn non_finite_julian_dates_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let jd = JulianDate::new(value);
            assert_eq!(
                CivilMoment::from_julian_date(jd),
                Err(MomentError::NonFiniteJulianDate)
            );
            assert_eq!(
                CivilMoment::from_julian_date_in(jd, Gregorian),
                Err(MomentError::NonFiniteJulianDate)
            );
            assert_eq!(CivilMoment::try_from(jd), Err(MomentError::NonFiniteJulianDate));
        }
    }

    #[test]
    fn ordering_agrees_with_julian_date() {
        let moments = [
            moment(2000, 1, 1, 0, 0, 0, 0, Gregorian),
            moment(2000, 1, 1, 0, 0, 0, 1, Gregorian),
            moment(1999, 12, 31, 23, 59, 59, 999, Gregorian),
            moment(1999, 12, 19, 12, 0, 0, 0, Julian),
            moment(1582, 10, 4, 23, 0, 0, 0, Julian),
            moment(1582, 10, 15, 0, 0, 0, 0, Gregorian),
            moment(1582, 10, 14, 23, 59, 59, 999, Gregorian),
            moment(-100, 6, 1, 6, 0, 0, 0, Julian),
            moment(-100, 6, 1, 6, 0, 0, 0, Gregorian),
        ];
        for a in &moments {
            for b in &moments {
                let (ja, jb) = (a.to_julian_date(), b.to_julian_date());
                assert_eq!(a > b, ja > jb, "{a} vs {b}");
                assert_eq!(a < b, ja < jb, "{a} vs {b}");
                assert_eq!(a == b, ja == jb, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn field_order_matches_instant_order_within_a_calendar() {
        let a = moment(2010, 5, 17, 8, 0, 0, 0, Gregorian);
        let b = moment(2010, 5, 17, 8, 0, 1, 0, Gregorian);
        let c = moment(2010, 6, 1, 0, 0, 0, 0, Gregorian);
        let key = |m: &CivilMoment| (m.year(), m.month(), m.day(), m.time_parts());
        assert!(key(&a) < key(&b) && a < b);
        assert!(key(&b) < key(&c) && b < c);
    }

    #[test]
    fn to_calendar_keeps_the_instant() {
        let g = moment(2000, 1, 1, 6, 30, 0, 0, Gregorian);
        let j = g.to_calendar(Julian).unwrap();
        assert_eq!(j.date_parts(), DateParts::new(1999, 12, 19));
        assert_eq!(j.time_parts(), g.time_parts());
        assert_eq!(j, g);
        assert_ne!(g.to_julian_date_in(Julian), g.to_julian_date());
    }

    #[test]
    fn exact_arithmetic() {
        let m = moment(2000, 2, 28, 23, 59, 59, 999, Gregorian);
        let next = m.add_milliseconds(1).unwrap();
        assert_eq!(next.date_parts(), DateParts::new(2000, 2, 29));
        assert_eq!(next.time_parts(), TimeParts::MIDNIGHT);
        assert_eq!(next.add_milliseconds(-1).unwrap(), m);
        assert_eq!(m.add_days(2).unwrap().date_parts(), DateParts::new(2000, 3, 1));
        assert_eq!(
            m.add_duration(chrono::Duration::hours(-24)).unwrap().date_parts(),
            DateParts::new(2000, 2, 27)
        );
        assert_eq!(
            moment(9999, 12, 31, 0, 0, 0, 0, Gregorian).add_days(1),
            Err(MomentError::InvalidYear(10_000))
        );
    }

    #[test]
    fn naive_datetime_interop() {
        let m = moment(1582, 10, 4, 8, 15, 30, 125, Julian);
        let naive = m.to_naive_datetime().unwrap();
        assert_eq!((naive.year(), naive.month(), naive.day()), (1582, 10, 14));
        assert_eq!(naive.nanosecond(), 125_000_000);

        let back = CivilMoment::try_from(naive).unwrap();
        assert_eq!(back.calendar(), Gregorian);
        assert_eq!(back, m);

        let j2000 = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let m = CivilMoment::try_from(j2000).unwrap();
        assert_eq!(JulianDate::from(m), JulianDate::J2000);
    }

    #[test]
    fn display() {
        assert_eq!(
            moment(2000, 1, 1, 12, 0, 0, 0, Gregorian).to_string(),
            "2000-01-01T12:00:00.000 (Gregorian)"
        );
        assert_eq!(
            moment(-44, 3, 15, 9, 5, 7, 42, Julian).to_string(),
            "-0044-03-15T09:05:07.042 (Julian)"
        );
    }
}
