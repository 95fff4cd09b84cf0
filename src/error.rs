// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::fmt;

/// Result alias for fallible [`CivilMoment`](crate::CivilMoment) construction.
pub type MomentResult<T> = Result<T, MomentError>;

/// A civil field, or the Julian Date it is decoded from, outside its valid
/// range.
///
/// Exactly one field is reported: the first one, in year → millisecond
/// order, that failed validation.  Each field variant carries the rejected
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentError {
    /// Year outside `CivilMoment::MIN_YEAR..=CivilMoment::MAX_YEAR`.
    InvalidYear(i32),
    /// Month outside `1..=12`.
    InvalidMonth(u8),
    /// Day outside `1..=days_in_month` for the year, month and calendar.
    InvalidDay(u8),
    /// Hour outside `0..=23`.
    InvalidHour(u8),
    /// Minute outside `0..=59`.
    InvalidMinute(u8),
    /// Second outside `0..=59`.
    InvalidSecond(u8),
    /// Millisecond outside `0..=999`.
    InvalidMillisecond(u16),
    /// Julian Date that is NaN or infinite, so no civil fields exist.
    NonFiniteJulianDate,
}

impl MomentError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidYear(_) => "year",
            Self::InvalidMonth(_) => "month",
            Self::InvalidDay(_) => "day",
            Self::InvalidHour(_) => "hour",
            Self::InvalidMinute(_) => "minute",
            Self::InvalidSecond(_) => "second",
            Self::InvalidMillisecond(_) => "millisecond",
            Self::NonFiniteJulianDate => "julian date",
        }
    }
}

impl fmt::Display for MomentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Display = match self {
            Self::InvalidYear(v) => v,
            Self::InvalidMonth(v)
            | Self::InvalidDay(v)
            | Self::InvalidHour(v)
            | Self::InvalidMinute(v)
            | Self::InvalidSecond(v) => v,
            Self::InvalidMillisecond(v) => v,
            Self::NonFiniteJulianDate => return write!(f, "{} is not finite", self.field()),
        };
        write!(f, "{} {value} is out of range", self.field())
    }
}

impl std::error::Error for MomentError {}
