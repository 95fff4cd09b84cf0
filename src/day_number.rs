// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Number ⇄ calendar date conversion.
//!
//! The forward direction ([`date_parts_to_jdn`]) shifts the year to start
//! in March, so that the leap day is the last day of the shifted year, and
//! counts whole 4-year (Julian) or 400-year (Gregorian) cycles.  The inverse
//! ([`jdn_to_date_parts`]) is the algorithm published by E. G. Richards
//! (*Mapping Time*, 1998; *Explanatory Supplement to the Astronomical
//! Almanac*, 3rd ed., §15.11):
//!
//! ```text
//! f = J + 1401 [+ ((4J + 274277) div 146097) · 3 div 4 − 38]   (Gregorian only)
//! e = 4f + 3
//! g = (e mod 1461) div 4
//! h = 5g + 2
//! D = (h mod 153) div 5 + 1
//! M = (h div 153 + 2) mod 12 + 1
//! Y = e div 1461 − 4716 + (14 − M) div 12
//! ```
//!
//! Every `div`/`mod` above is floored (see [`arith`](super::arith)); with that
//! convention both directions are periodic in the calendar's cycle length
//! and remain exact inverses for negative day numbers and BCE years.
//!
//! ## References
//! * Richards, E. G. (1998), *Mapping Time: The Calendar and its History*
//! * Urban & Seidelmann (2013), *Explanatory Supplement to the Astronomical Almanac*, ch. 15

use chrono::Weekday;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::arith::{div, modulo};
use super::calendar::{self, TemporalCalendar, GREGORIAN_REFORM_JDN};
use super::julian_date::JulianDate;

/// Days in one Julian 4-year cycle.
const DAYS_PER_4_YEARS: i128 = 1_461;

/// Days in one Gregorian 400-year cycle.
const DAYS_PER_400_YEARS: i128 = 146_097;

/// Days in the five-month block March–July (and August–December).
const DAYS_PER_5_MONTHS: i128 = 153;

/// Calendar date as a `(year, month, day)` triple.
///
/// Years use astronomical numbering: `0` is 1 BCE, `-1` is 2 BCE, and so on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl DateParts {
    #[inline]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Julian Day Number of `year-month-day` in `calendar`.
///
/// Total over all integers: out-of-range months and days are not rejected
/// and roll over deterministically (month `13` is January of the following
/// year, day `0` is the last day of the previous month).  Results that do
/// not fit in an `i64` wrap.
///
/// ```
/// use jdcal::{date_parts_to_jdn, TemporalCalendar};
///
/// assert_eq!(date_parts_to_jdn(-4712, 1, 1, TemporalCalendar::Julian), 0);
/// assert_eq!(date_parts_to_jdn(2000, 1, 1, TemporalCalendar::Gregorian), 2_451_545);
/// ```
pub fn date_parts_to_jdn(year: i64, month: i64, day: i64, calendar: TemporalCalendar) -> i64 {
    let month = month as i128;
    // January and February belong to the previous March-based year.
    let a = div(14 - month, 12);
    let y = year as i128 + 4_800 - a;
    let m = month + 12 * a - 3;

    let days = day as i128 + div(DAYS_PER_5_MONTHS * m + 2, 5) + 365 * y + div(y, 4);
    let jdn = match calendar {
        TemporalCalendar::Julian => days - 32_083,
        TemporalCalendar::Gregorian => days - div(y, 100) + div(y, 400) - 32_045,
    };
    jdn as i64
}

/// Calendar date of day `jdn` in `calendar`.
///
/// Exact inverse of [`date_parts_to_jdn`] for every `i64`.
pub fn jdn_to_date_parts(jdn: i64, calendar: TemporalCalendar) -> DateParts {
    let j = jdn as i128;
    let f = match calendar {
        TemporalCalendar::Julian => j + 1_401,
        TemporalCalendar::Gregorian => {
            j + 1_401 + div(div(4 * j + 274_277, DAYS_PER_400_YEARS) * 3, 4) - 38
        }
    };
    let e = 4 * f + 3;
    let g = div(modulo(e, DAYS_PER_4_YEARS), 4);
    let h = 5 * g + 2;

    let day = div(modulo(h, DAYS_PER_5_MONTHS), 5) + 1;
    let month = modulo(div(h, DAYS_PER_5_MONTHS) + 2, 12) + 1;
    let year = div(e, DAYS_PER_4_YEARS) - 4_716 + div(14 - month, 12);

    DateParts::new(year as i64, month as i64, day as i64)
}

/// ISO-8601 day of the week of `jdn`: Monday = 1 … Sunday = 7.
///
/// Independent of the calendar.  JDN 0 was a Monday.
#[inline]
pub const fn day_of_week_iso8601(jdn: i64) -> u8 {
    jdn.rem_euclid(7) as u8 + 1
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDayNumber
// ═══════════════════════════════════════════════════════════════════════════

/// Whole days elapsed since 4713 BCE January 1 (proleptic Julian).
///
/// A plain `i64` with calendar-aware helpers.  May be negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// Day 0: −4712-01-01 (Julian).
    pub const EPOCH: Self = Self(0);

    /// First day of the Gregorian calendar, 1582-10-15.
    pub const GREGORIAN_REFORM: Self = Self(GREGORIAN_REFORM_JDN);

    /// 2000-01-01 (Gregorian).
    pub const J2000: Self = Self(2_451_545);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Day number of a calendar date, see [`date_parts_to_jdn`].
    #[inline]
    pub fn from_date_parts(year: i64, month: i64, day: i64, calendar: TemporalCalendar) -> Self {
        Self(date_parts_to_jdn(year, month, day, calendar))
    }

    /// Calendar date of this day in an explicit calendar.
    #[inline]
    pub fn to_date_parts(&self, calendar: TemporalCalendar) -> DateParts {
        jdn_to_date_parts(self.0, calendar)
    }

    /// Calendar date of this day in the calendar in force on it.
    #[inline]
    pub fn date_parts(&self) -> DateParts {
        self.to_date_parts(self.calendar())
    }

    #[inline]
    pub const fn calendar(&self) -> TemporalCalendar {
        calendar::resolve(self.0)
    }

    #[inline]
    pub const fn is_gregorian(&self) -> bool {
        calendar::is_gregorian(self.0)
    }

    /// ISO-8601 weekday number, Monday = 1 … Sunday = 7.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        day_of_week_iso8601(self.0)
    }

    pub fn weekday(&self) -> Weekday {
        match self.day_of_week() {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    #[inline]
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    #[inline]
    pub const fn add_weeks(self, weeks: i64) -> Self {
        Self(self.0 + 7 * weeks)
    }

    /// Noon of this day as a [`JulianDate`].
    #[inline]
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::new(self.0 as f64)
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl AddAssign<i64> for JulianDayNumber {
    #[inline]
    fn add_assign(&mut self, days: i64) {
        self.0 += days;
    }
}

impl Sub<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn sub(self, days: i64) -> Self::Output {
        Self(self.0 - days)
    }
}

impl SubAssign<i64> for JulianDayNumber {
    #[inline]
    fn sub_assign(&mut self, days: i64) {
        self.0 -= days;
    }
}

impl Sub for JulianDayNumber {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl From<i64> for JulianDayNumber {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<JulianDayNumber> for i64 {
    #[inline]
    fn from(jdn: JulianDayNumber) -> Self {
        jdn.0
    }
}
