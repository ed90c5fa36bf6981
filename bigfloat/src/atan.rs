//! Arctangent by Taylor series with Euler acceleration
//!
//! Two series are used:
//!
//! - `|x| < 1`:  atan(x) = x - x³/3 + x⁵/5 - x⁷/7 + ...
//! - `x > 1`:    atan(x) = π/2 - 1/x + 1/3x³ - 1/5x⁵ + ...
//!
//! Both crawl near 1 (atan 1.00001 takes over a million terms at 256 bits), so
//! arguments within 1/2 of 1 are first moved away with the identity
//!
//! ```text
//! atan(x) = atan(y) + atan((x - y) / (1 + xy)),   y = √2 - 1,  atan(y) = π/8
//! ```
//!
//! For x in (0.5, 1.5) the reduced argument lies in (0.07, 0.67). Above
//! x ≈ 1.153 it lands back inside the window, and a second step takes it to
//! (0.07, 0.20), so at most [`MAX_EULER_STEPS`] are ever taken.

use crate::context::MathContext;
use crate::BigFloat;
use dashu_base::Abs;

/// Series terms allowed per bit of precision before the monitor aborts
const ATAN_ITERS_PER_BIT: u64 = 4;

/// Upper bound on consecutive Euler reductions for any argument
pub const MAX_EULER_STEPS: u32 = 2;

impl MathContext {
    /// Arctangent of `x` in radians, defined for all real `x`
    pub fn atan(&self, x: &BigFloat) -> BigFloat {
        let x = self.round(x);
        self.atan_rounded(&x, 0)
    }

    fn atan_rounded(&self, x: &BigFloat, euler_steps: u32) -> BigFloat {
        let consts = self.constants();

        // atan(-x) == -atan(x); keeps the Euler crossover test one-sided.
        if x < &consts.zero {
            return -self.atan_rounded(&-x.clone(), euler_steps);
        }

        if self.in_euler_window(x) {
            assert!(
                euler_steps < MAX_EULER_STEPS,
                "atan: euler reduction did not leave the slow window after {} steps",
                euler_steps
            );
            let reduced = self.euler_reduce(x);
            return &consts.eighth_pi + &self.atan_rounded(&reduced, euler_steps + 1);
        }

        if x > &consts.one {
            self.atan_large(x)
        } else {
            self.atan_small(x)
        }
    }

    /// True when `|1 - x| < 1/2`, where both series converge too slowly
    pub fn in_euler_window(&self, x: &BigFloat) -> bool {
        let consts = self.constants();
        (&consts.one - x).abs() < consts.half
    }

    /// `(x - y) / (1 + xy)` with `y = √2 - 1`, so that
    /// `atan(x) = π/8 + atan(euler_reduce(x))`
    pub fn euler_reduce(&self, x: &BigFloat) -> BigFloat {
        let consts = self.constants();
        let y = &consts.sqrt2_minus_one;
        let x = self.round(x);
        let num = &x - y;
        let den = &(&x * y) + &consts.one;
        num / den
    }

    /// Series for `0 <= x <= 1`: x - x³/3 + x⁵/5 - ...
    fn atan_small(&self, x: &BigFloat) -> BigFloat {
        let x_squared = x * x;
        let mut x_n = x.clone();
        let mut z = self.constants().zero.clone();

        let mut monitor = self.monitor("atan", x, ATAN_ITERS_PER_BIT);
        loop {
            let n = self.float(2 * monitor.iterations() as i64 + 1);
            z = &z + &(&x_n / &n);
            x_n = -x_n;
            if monitor.converged(&z) {
                break;
            }
            // x_n becomes ±x^(2i+3)
            x_n = &x_n * &x_squared;
        }
        z
    }

    /// Series for `x > 1`: π/2 - 1/x + 1/3x³ - 1/5x⁵ + ...
    fn atan_large(&self, x: &BigFloat) -> BigFloat {
        let consts = self.constants();
        let x_squared = x * x;
        let mut x_n = x.clone();
        let mut z = consts.half_pi.clone();

        let mut monitor = self.monitor("atan", x, ATAN_ITERS_PER_BIT);
        loop {
            x_n = -x_n;
            let n = self.float(2 * monitor.iterations() as i64 + 1);
            z = &z + &(&consts.one / &(&x_n * &n));
            if monitor.converged(&z) {
                break;
            }
            x_n = &x_n * &x_squared;
        }
        z
    }
}

#[cfg(test)]
#[path = "atan_tests.rs"]
mod tests;
