//! Convergence monitoring for fixed-point style solver loops
//!
//! A loop stops once consecutive iterates differ by no more than one unit in
//! the last place of the newer one: past that point further iterations cannot
//! change the representable result. The iteration bound is derived from the
//! working precision and is sized so that valid input never reaches it.
//! Reaching it means the solver itself is broken, so the monitor panics
//! rather than hand back a degraded result.

use crate::BigFloat;
use dashu_base::Abs;
use dashu_int::IBig;

/// Iteration bound for a loop needing `iters_per_bit` iterations per bit of precision
pub fn max_iterations(iters_per_bit: u64, precision: usize) -> u64 {
    10 + iters_per_bit * precision as u64
}

/// One unit in the last place of `z` at `precision` bits
///
/// With `z = m * 2^e` and `1/2 <= |m| < 1` this is `2^(e - precision)`.
pub fn ulp(z: &BigFloat, precision: usize) -> BigFloat {
    let repr = z.repr();
    let exponent = repr.exponent() + repr.digits() as isize - precision as isize;
    BigFloat::from_parts(IBig::ONE, exponent)
}

/// Tracks one solver loop and decides when it has converged
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    /// Function being evaluated; diagnostic only
    name: &'static str,
    /// Original argument; diagnostic only
    arg: BigFloat,
    precision: usize,
    prev: BigFloat,
    iterations: u64,
    max_iterations: u64,
}

impl ConvergenceMonitor {
    /// Create a monitor for `name(arg)` at `precision` bits
    pub fn new(name: &'static str, arg: &BigFloat, iters_per_bit: u64, precision: usize) -> Self {
        Self {
            name,
            arg: arg.clone(),
            precision,
            prev: BigFloat::ZERO.with_precision(precision).value(),
            iterations: 0,
            max_iterations: max_iterations(iters_per_bit, precision),
        }
    }

    /// Replace the precision-derived bound
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Non-converged checks so far; also the index of the next series term
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Record the candidate `z` and report whether the loop has converged
    ///
    /// # Panics
    /// Panics when the iteration bound is reached. That only happens if the
    /// solver fails to converge on input it should handle, which is a bug in
    /// the solver and not something a caller can retry.
    pub fn converged(&mut self, z: &BigFloat) -> bool {
        let delta = (&self.prev - z).abs();
        if delta.repr().is_zero() {
            self.finish();
            return true;
        }
        if delta <= ulp(z, self.precision) {
            self.finish();
            return true;
        }

        self.iterations += 1;
        if self.iterations == self.max_iterations {
            panic!(
                "{}({}): did not converge after {} iterations; prev, last result {}, {} delta {}",
                self.name,
                decimal(&self.arg),
                self.max_iterations,
                decimal(&self.prev),
                decimal(z),
                decimal(&delta)
            );
        }
        self.prev = z.clone();
        false
    }

    fn finish(&self) {
        log::trace!(
            "{}: converged after {} iterations (bound {})",
            self.name,
            self.iterations,
            self.max_iterations
        );
    }
}

/// Decimal rendering for diagnostics
fn decimal(x: &BigFloat) -> String {
    x.clone().with_base_and_precision::<10>(40).value().to_string()
}

#[cfg(test)]
#[path = "convergence_tests.rs"]
mod tests;
