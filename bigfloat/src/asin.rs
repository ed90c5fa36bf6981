//! Arcsine and arccosine on top of `atan`
//!
//! The asin Taylor series converges very slowly near ±1, while `atan` is fast
//! everywhere, so
//!
//! ```text
//! asin(x) = atan(x / √(1 - x²))
//! acos(x) = π/2 - asin(x)
//! ```
//!
//! The quotient is undefined at |x| = 1; those two points are answered with
//! ±π/2 directly.

use crate::context::MathContext;
use crate::error::{Error, Result};
use crate::BigFloat;
use dashu_base::Abs;

impl MathContext {
    /// Arcsine of `x` in radians, in [-π/2, π/2]
    ///
    /// # Errors
    /// Returns [`Error::OutOfDomain`] when `|x| > 1`.
    pub fn asin(&self, x: &BigFloat) -> Result<BigFloat> {
        let x = self.round(x);
        self.asin_rounded("asin", &x)
    }

    /// Arccosine of `x` in radians, in [0, π]
    ///
    /// # Errors
    /// Returns [`Error::OutOfDomain`] when `|x| > 1`.
    pub fn acos(&self, x: &BigFloat) -> Result<BigFloat> {
        let x = self.round(x);
        let asin = self.asin_rounded("acos", &x)?;
        Ok(&self.constants().half_pi - &asin)
    }

    fn asin_rounded(&self, function: &'static str, x: &BigFloat) -> Result<BigFloat> {
        let consts = self.constants();
        if x == &consts.one {
            return Ok(consts.half_pi.clone());
        }
        if x == &consts.minus_one {
            return Ok(-consts.half_pi.clone());
        }
        if x.clone().abs() > consts.one {
            return Err(Error::OutOfDomain {
                function,
                arg: self.to_decimal_string(x, 40),
            });
        }

        let one_minus_x_squared = &consts.one - &(x * x);
        let root = self.sqrt_non_negative(&one_minus_x_squared);
        Ok(self.atan(&(x / &root)))
    }
}

#[cfg(test)]
#[path = "asin_tests.rs"]
mod tests;
