//! Common test utilities

use crate::tolerance::{is_within, pow2};
use crate::{BigFloat, MathContext};

/// Agreement bound for the 50-digit reference values: 2^-170 ≈ 6.7e-52
pub const FIFTY_DIGITS: isize = -170;

/// Route `log` output through the test harness
pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .try_init();
}

/// Assert `actual` matches the decimal literal `expected` to within 2^`exponent`
pub fn assert_close(ctx: &MathContext, actual: &BigFloat, expected: &str, exponent: isize) {
    let expected_value = ctx.parse(expected).unwrap();
    assert!(
        is_within(actual, &expected_value, &pow2(exponent)),
        "got {}, expected {}",
        ctx.to_decimal_string(actual, 60),
        expected
    );
}

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Linear Congruential Generator for reproducible random numbers in tests.
/// Uses the common parameters: a = 1664525, c = 1013904223 (from Numerical Recipes)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Map to [0, 1) using upper 48 bits
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }

    /// Generate next f64 in range [lo, hi)
    pub fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}
