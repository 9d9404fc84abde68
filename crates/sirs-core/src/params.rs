//! Range-checked numeric wrappers for simulation parameters.
//!
//! Raw configuration numbers are wrapped exactly once, at [`Settings`]
//! construction, and never clamped: an out-of-range value is a construction
//! error, not a silent correction.  Downstream code that holds a
//! [`Probability`] or [`PositiveNumber`] can rely on the range invariant
//! without re-checking.
//!
//! [`Settings`]: crate::Settings

use thiserror::Error;

/// A raw value that failed a range check.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("expected a probability in [0, 1], got {0}")]
    NotAProbability(f64),

    #[error("expected a non-negative number, got {0}")]
    Negative(f64),

    #[error("expected a strictly positive number, got {0}")]
    NotPositive(f64),

    #[error("expected a finite number, got {0}")]
    NotFinite(f64),
}

// ── Probability ───────────────────────────────────────────────────────────────

/// A probability, guaranteed to lie in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Wrap `v`, failing unless `0 ≤ v ≤ 1`.
    pub fn new(v: f64) -> Result<Probability, RangeError> {
        if !v.is_finite() {
            return Err(RangeError::NotFinite(v));
        }
        if !(0.0..=1.0).contains(&v) {
            return Err(RangeError::NotAProbability(v));
        }
        Ok(Probability(v))
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }
}

// ── PositiveNumber ────────────────────────────────────────────────────────────

/// A non-negative real quantity (length, radius, speed, …).
///
/// Accepts both integral and fractional inputs; the unit's semantic meaning
/// is the caller's concern.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct PositiveNumber(f64);

impl PositiveNumber {
    /// Wrap `v`, failing unless `v ≥ 0`.
    pub fn new(v: f64) -> Result<PositiveNumber, RangeError> {
        if !v.is_finite() {
            return Err(RangeError::NotFinite(v));
        }
        if v < 0.0 {
            return Err(RangeError::Negative(v));
        }
        Ok(PositiveNumber(v))
    }

    /// Wrap `v`, failing unless `v > 0`.  Used for quantities where zero is
    /// degenerate rather than merely boring (the area's side length).
    pub fn new_nonzero(v: f64) -> Result<PositiveNumber, RangeError> {
        let p = PositiveNumber::new(v)?;
        if p.0 == 0.0 {
            return Err(RangeError::NotPositive(v));
        }
        Ok(p)
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }
}
