//! Square root by Newton's method

use crate::context::MathContext;
use crate::error::{Error, Result};
use crate::BigFloat;

/// Newton iterations needed per bit of precision (quadratic convergence, so generous)
const SQRT_ITERS_PER_BIT: u64 = 1;

impl MathContext {
    /// Square root of `x` at the working precision
    ///
    /// # Errors
    /// Returns [`Error::NegativeSqrt`] for `x < 0`.
    pub fn sqrt(&self, x: &BigFloat) -> Result<BigFloat> {
        let x = self.round(x);
        if x < self.constants().zero {
            return Err(Error::NegativeSqrt(self.to_decimal_string(&x, 40)));
        }
        Ok(self.sqrt_non_negative(&x))
    }

    /// Newton's method for `x >= 0`, `x` already at the working precision
    pub(crate) fn sqrt_non_negative(&self, x: &BigFloat) -> BigFloat {
        if x.repr().is_zero() {
            return self.constants().zero.clone();
        }

        // Each step computes z = z - (z² - x) / 2z. Halving the binary
        // exponent of x gives a seed within a factor of ~2 of the root.
        let repr = x.repr();
        let digits = repr.digits() as isize;
        let exponent = repr.exponent() + digits;
        let mut z = BigFloat::from_parts(repr.significand().clone(), exponent / 2 - digits)
            .with_precision(self.precision())
            .value();

        let two = &self.constants().two;
        let mut monitor = self.monitor("sqrt", x, SQRT_ITERS_PER_BIT);
        loop {
            let num = &(&z * &z) - x;
            let den = two * &z;
            z = &z - &(num / den);
            if monitor.converged(&z) {
                break;
            }
        }
        z
    }
}

#[cfg(test)]
#[path = "sqrt_tests.rs"]
mod tests;
