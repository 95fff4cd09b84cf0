// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar selection and the 1582 cutover policy.
//!
//! Two proleptic calendars are supported:
//!
//! | Calendar | Leap rule | Used for |
//! |----------|-----------|----------|
//! | [`TemporalCalendar::Julian`] | every 4th year | days before JDN 2 299 161 |
//! | [`TemporalCalendar::Gregorian`] | every 4th year, except centuries not divisible by 400 | JDN 2 299 161 onwards |
//!
//! [`resolve`] is the single authority that picks one of them from an
//! absolute day count.  The decision depends only on the day number, never
//! on a calendar, so there is no circularity between the two.  Every entry
//! point of the crate also accepts an explicit [`TemporalCalendar`] that
//! bypasses this resolution (proleptic Gregorian dates before 1582, for
//! instance).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First Julian Day Number counted under the Gregorian calendar.
///
/// JDN 2 299 161 is 1582-10-15 (Gregorian); the previous day, JDN 2 299 160,
/// is 1582-10-04 (Julian).  This is a fixed historical constant, not a
/// configuration knob.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Conversion-formula selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemporalCalendar {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Proleptic Julian calendar.
    Julian,
}

impl TemporalCalendar {
    /// Whether `year` (astronomical numbering, `0` = 1 BCE) is a leap year
    /// in this calendar.
    #[inline]
    pub const fn is_leap_year(self, year: i64) -> bool {
        match self {
            Self::Julian => year.rem_euclid(4) == 0,
            Self::Gregorian => {
                year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
            }
        }
    }

    /// Number of days in `month` (1-based) of `year`.
    ///
    /// Returns `0` for a month outside `1..=12`.
    pub const fn days_in_month(self, year: i64, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for TemporalCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian => f.write_str("Gregorian"),
            Self::Julian => f.write_str("Julian"),
        }
    }
}

/// `true` when `jdn` falls on or after the Gregorian reform.
#[inline]
pub const fn is_gregorian(jdn: i64) -> bool {
    jdn >= GREGORIAN_REFORM_JDN
}

/// Calendar in force on day `jdn`.
#[inline]
pub const fn resolve(jdn: i64) -> TemporalCalendar {
    if is_gregorian(jdn) {
        TemporalCalendar::Gregorian
    } else {
        TemporalCalendar::Julian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutover_boundary() {
        assert_eq!(resolve(GREGORIAN_REFORM_JDN - 1), TemporalCalendar::Julian);
        assert_eq!(resolve(2_299_160), TemporalCalendar::Julian);
        assert_eq!(resolve(2_299_161), TemporalCalendar::Gregorian);
        assert!(!is_gregorian(0));
        assert!(!is_gregorian(-1_000_000));
        assert!(is_gregorian(2_451_545));
    }

    #[test]
    fn leap_years_differ_on_centuries() {
        let (g, j) = (TemporalCalendar::Gregorian, TemporalCalendar::Julian);
        assert!(g.is_leap_year(2000));
        assert!(!g.is_leap_year(1900));
        assert!(j.is_leap_year(1900));
        assert!(g.is_leap_year(2024) && j.is_leap_year(2024));
        assert!(!g.is_leap_year(2023) && !j.is_leap_year(2023));
    }

    #[test]
    fn leap_years_before_year_zero() {
        // Astronomical year 0 is 1 BCE, a leap year in both calendars.
        assert!(TemporalCalendar::Julian.is_leap_year(0));
        assert!(TemporalCalendar::Gregorian.is_leap_year(0));
        assert!(TemporalCalendar::Julian.is_leap_year(-4));
        assert!(!TemporalCalendar::Julian.is_leap_year(-1));
        assert!(!TemporalCalendar::Gregorian.is_leap_year(-100));
        assert!(TemporalCalendar::Gregorian.is_leap_year(-400));
    }

    #[test]
    fn month_lengths() {
        let g = TemporalCalendar::Gregorian;
        assert_eq!(g.days_in_month(2023, 1), 31);
        assert_eq!(g.days_in_month(2023, 2), 28);
        assert_eq!(g.days_in_month(2024, 2), 29);
        assert_eq!(g.days_in_month(2023, 4), 30);
        assert_eq!(g.days_in_month(1900, 2), 28);
        assert_eq!(TemporalCalendar::Julian.days_in_month(1900, 2), 29);
        assert_eq!(g.days_in_month(2023, 0), 0);
        assert_eq!(g.days_in_month(2023, 13), 0);
    }

    #[test]
    fn display_names() {
        assert_eq!(TemporalCalendar::Gregorian.to_string(), "Gregorian");
        assert_eq!(TemporalCalendar::Julian.to_string(), "Julian");
    }
}
