//! # bigfloat: arbitrary-precision inverse trigonometry
//!
//! `sqrt`, `atan`, `asin` and `acos` over binary floating-point numbers of a
//! configurable mantissa width, computed by iterative methods whose stopping
//! rule is the precision itself: a loop ends once consecutive iterates differ
//! by at most one unit in the last place.
//!
//! Two ways in:
//!
//! - a [`MathContext`] built for an explicit precision, or
//! - the free functions below, which use a process-wide context configured by
//!   [`init`] or, lazily, by the `BIGFLOAT_PRECISION` environment variable
//!   (256 bits when unset).
//!
//! # Example
//! ```ignore
//! let ctx = bigfloat::MathContext::with_precision(256)?;
//! let root2 = ctx.sqrt(&ctx.float(2))?;
//! let quarter_pi = ctx.atan(&ctx.float(1));
//! ```

pub mod asin;
pub mod atan;
pub mod config;
pub mod consts;
pub mod context;
pub mod convergence;
pub mod error;
pub mod radian;
pub mod sqrt;
pub mod tolerance;

/// Binary arbitrary-precision float, rounding half to even
pub type BigFloat = dashu_float::FBig<dashu_float::round::mode::HalfEven, 2>;

// Re-export commonly used types
pub use atan::MAX_EULER_STEPS;
pub use config::{Config, DEFAULT_PRECISION_BITS, DOUBLE_PRECISION_BITS};
pub use consts::Constants;
pub use context::{global, init, MathContext};
pub use convergence::{ulp, ConvergenceMonitor};
pub use error::{Error, Result};
pub use radian::Radian;

//==============================================================================
// Global-context shorthands
//==============================================================================

/// Square root on the global context; see [`MathContext::sqrt`]
pub fn sqrt(x: &BigFloat) -> Result<BigFloat> {
    global().sqrt(x)
}

/// Arctangent on the global context; see [`MathContext::atan`]
pub fn atan(x: &BigFloat) -> BigFloat {
    global().atan(x)
}

/// Arcsine on the global context; see [`MathContext::asin`]
pub fn asin(x: &BigFloat) -> Result<BigFloat> {
    global().asin(x)
}

/// Arccosine on the global context; see [`MathContext::acos`]
pub fn acos(x: &BigFloat) -> Result<BigFloat> {
    global().acos(x)
}

// Test utilities (only available in test mode)
#[cfg(test)]
pub mod test_utils;
