// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Module
//!
//! Conversions between Julian Day Numbers, Julian Dates and civil date-times
//! in the proleptic Gregorian and Julian calendars.
//!
//! # Core types
//!
//! - [`JulianDayNumber`] — whole days since 4713 BCE January 1 (Julian).
//! - [`JulianDate`] — day count whose fraction is the time of day, with
//!   days starting at noon.
//! - [`CivilMoment`] — validated year/month/day/hour/minute/second/millisecond
//!   in a given calendar.
//! - [`TemporalCalendar`] — Gregorian or Julian formula selector.
//!
//! # Free functions
//!
//! | Function | Maps |
//! |----------|------|
//! | [`date_parts_to_jdn`] | (year, month, day, calendar) → JDN |
//! | [`jdn_to_date_parts`] | (JDN, calendar) → (year, month, day) |
//! | [`day_of_week_iso8601`] | JDN → 1 (Monday) … 7 (Sunday) |
//! | [`time_parts_to_offset`] | (hour, minute, second, ms) → fraction from noon |
//! | [`offset_to_time_parts`] | JD → (hour, minute, second, ms) |
//! | [`resolve`] | JDN → calendar in force |
//!
//! # Calendar cutover
//!
//! Day numbers from [`GREGORIAN_REFORM_JDN`] (1582-10-15) onwards resolve to
//! the Gregorian calendar, earlier ones to the Julian calendar.  Every
//! conversion also has a variant taking an explicit [`TemporalCalendar`].
//!
//! ```
//! use jdcal::{CivilMoment, JulianDate, TemporalCalendar};
//!
//! let jd = JulianDate::new(2_299_160.0);
//! let m = CivilMoment::from_julian_date(jd)?;
//! assert_eq!(m.to_string(), "1582-10-04T12:00:00.000 (Julian)");
//!
//! let g = m.to_calendar(TemporalCalendar::Gregorian)?;
//! assert_eq!(g.to_string(), "1582-10-14T12:00:00.000 (Gregorian)");
//! assert_eq!(g, m);
//! # Ok::<(), jdcal::MomentError>(())
//! ```

mod arith;
mod calendar;
mod day_number;
mod error;
mod julian_date;
mod moment;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{is_gregorian, resolve, TemporalCalendar, GREGORIAN_REFORM_JDN};
pub use day_number::{
    date_parts_to_jdn, day_of_week_iso8601, jdn_to_date_parts, DateParts, JulianDayNumber,
};
pub use error::{MomentError, MomentResult};
pub use julian_date::{offset_to_time_parts, time_parts_to_offset, JulianDate, TimeParts};
pub use moment::CivilMoment;
