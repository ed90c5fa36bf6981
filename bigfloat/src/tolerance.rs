//! Closeness predicates for big floats
//!
//! Exact equality is rarely the right question for results of iterative
//! solvers; these compare within an absolute distance or within a number of
//! units in the last place.

use crate::context::MathContext;
use crate::convergence::ulp;
use crate::error::Result;
use crate::BigFloat;
use dashu_base::Abs;
use dashu_int::IBig;

/// A distance of one decimal place
pub const ONE_DECIMAL_PLACE: f64 = 0.15;
/// A distance of two decimal places
pub const TWO_DECIMAL_PLACES: f64 = 0.015;
/// A distance of three decimal places
pub const THREE_DECIMAL_PLACES: f64 = 0.0015;

/// `|a - b| <= tolerance`
pub fn is_within(a: &BigFloat, b: &BigFloat, tolerance: &BigFloat) -> bool {
    distance(a, b) <= *tolerance
}

/// `|a - b|` no larger than `ulps` units in the last place of the larger of the two
pub fn within_ulps(a: &BigFloat, b: &BigFloat, ulps: u32, precision: usize) -> bool {
    let larger = if a.clone().abs() >= b.clone().abs() { a } else { b };
    let bound = ulp(larger, precision) * BigFloat::from_parts(IBig::from(ulps), 0);
    distance(a, b) <= bound
}

/// Exact power of two, `2^exponent`
pub fn pow2(exponent: isize) -> BigFloat {
    BigFloat::from_parts(IBig::ONE, exponent)
}

fn distance(a: &BigFloat, b: &BigFloat) -> BigFloat {
    (a - b).abs()
}

impl MathContext {
    /// A tolerance such as [`TWO_DECIMAL_PLACES`] at the working precision
    pub fn tolerance(&self, tolerance: f64) -> Result<BigFloat> {
        self.float_from_f64(tolerance)
    }
}
