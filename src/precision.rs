//! Precision constants for geometric comparisons.
//!
//! Every degenerate-case branch in the query layer funnels through the same
//! predicates defined here, so numerical behavior is consistent across
//! primitive pairs and tunable in one place.

/// Angular tolerance for checking equality of angles (radians).
/// Used for parallelism checks on unit directions.
pub const ANGULAR: f64 = 1.0e-12;

/// Confusion tolerance for checking coincidence of two points in real space.
/// Two points coincide if their distance < CONFUSION.
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for squared-distance comparisons.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Intersection tolerance for parametric intersection solves.
/// Value: CONFUSION / 100 = 1.0e-9
pub const INTERSECTION: f64 = CONFUSION * 0.01;

/// Fundamental resolution used for zero-length checks in normalization.
/// Distinct from CONFUSION: resolution is a numerical zero check, confusion
/// is a geometric tolerance.
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;

/// Shared near-zero predicate for degenerate-case detection.
///
/// Fixed absolute epsilon. Denominators of the parametric solves are compared
/// against this before dividing, so parallel configurations classify as
/// [`crate::QueryCode::Parallel`] instead of producing NaN or infinity.
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() <= CONFUSION
}

/// Inclusive range predicate for parametric domain checks.
#[inline]
pub fn is_in_range(lo: f64, hi: f64, value: f64) -> bool {
    lo <= value && value <= hi
}
