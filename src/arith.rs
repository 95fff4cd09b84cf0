// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Integer division primitives used by the calendar formulas.
//!
//! Rust's `/` and `%` truncate toward zero, so `-1 / 4 == 0` and
//! `-1 % 4 == -1`.  The closed-form calendar algorithms in
//! [`day_number`](super::day_number) assume that every quotient rounds
//! toward **negative infinity** and that every remainder by a positive
//! divisor lies in `[0, divisor)`.  For non-negative operands both
//! conventions agree; for the negative intermediates produced by BCE years
//! and negative day numbers they do not, and the truncating variant breaks
//! the round trip.
//!
//! All formulas therefore route through [`div`] and [`modulo`], which are
//! evaluated on `i128` so that no intermediate product can overflow for
//! any `i64` day number or year.

/// Floored quotient `⌊a / b⌋`.
///
/// Divisors in this crate are always positive constants.
#[inline]
pub(crate) const fn div(a: i128, b: i128) -> i128 {
    a.div_euclid(b)
}

/// Remainder matching [`div`]: `a == div(a, b) * b + modulo(a, b)`, with the
/// result in `[0, b)` for positive `b`.
#[inline]
pub(crate) const fn modulo(a: i128, b: i128) -> i128 {
    a.rem_euclid(b)
}
