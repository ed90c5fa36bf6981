//! Math context: working precision, constants and the process-wide default
//!
//! A [`MathContext`] owns one read-only [`Constants`] table and runs every
//! solver at the precision that table was built for. Contexts are `Send + Sync`
//! and hold no mutable state, so one instance can serve concurrent callers;
//! each solver call allocates its own working values and monitor.
//!
//! # Example
//! ```ignore
//! use bigfloat::MathContext;
//!
//! let ctx = MathContext::with_precision(256)?;
//! let half = ctx.ratio(1, 2);
//! let angle = ctx.asin(&half)?; // π/6
//! ```

use crate::config::Config;
use crate::consts::{integer, Constants};
use crate::convergence::ConvergenceMonitor;
use crate::error::{Error, Result};
use crate::BigFloat;
use dashu_float::DBig;
use once_cell::sync::OnceCell;
use std::str::FromStr;

/// Solver entry point bound to one working precision
#[derive(Debug, Clone)]
pub struct MathContext {
    consts: Constants,
    /// Overrides the precision-derived iteration bound; only set by tests
    /// exercising the non-convergence abort.
    iteration_cap: Option<u64>,
}

impl MathContext {
    /// Build a context (and its constants table) for `config`
    pub fn new(config: Config) -> Self {
        Self {
            consts: Constants::new(config.precision()),
            iteration_cap: None,
        }
    }

    /// Shorthand for `MathContext::new(Config::new(bits)?)`
    pub fn with_precision(bits: usize) -> Result<Self> {
        Ok(Self::new(Config::new(bits)?))
    }

    /// Working precision in bits
    pub fn precision(&self) -> usize {
        self.consts.precision()
    }

    /// Shared constants at this context's precision
    pub fn constants(&self) -> &Constants {
        &self.consts
    }

    /// Fresh copy of `x` rounded to the working precision
    pub fn round(&self, x: &BigFloat) -> BigFloat {
        x.clone().with_precision(self.precision()).value()
    }

    /// Integer `n` at the working precision
    pub fn float(&self, n: i64) -> BigFloat {
        integer(n, self.precision())
    }

    /// `num / den` rounded to the working precision
    ///
    /// # Panics
    /// Panics if `den` is zero.
    pub fn ratio(&self, num: i64, den: i64) -> BigFloat {
        assert!(den != 0, "ratio with zero denominator");
        &self.float(num) / &self.float(den)
    }

    /// Parse a decimal literal such as `"0.5"` or `"-1.25e3"`
    pub fn parse(&self, literal: &str) -> Result<BigFloat> {
        let decimal =
            DBig::from_str(literal).map_err(|_| Error::InvalidLiteral(literal.to_string()))?;
        Ok(decimal
            .with_base_and_precision::<2>(self.precision())
            .value()
            .with_rounding())
    }

    /// Convert a finite `f64`; exact whenever the precision is at least 53 bits
    pub fn float_from_f64(&self, x: f64) -> Result<BigFloat> {
        if !x.is_finite() {
            return Err(Error::NotFinite(x));
        }
        let value = BigFloat::try_from(x).map_err(|_| Error::NotFinite(x))?;
        Ok(self.round(&value))
    }

    /// Nearest `f64` to `x`
    pub fn to_f64(&self, x: &BigFloat) -> f64 {
        x.to_f64().value()
    }

    /// Decimal rendering of `x` with `digits` significant digits
    pub fn to_decimal_string(&self, x: &BigFloat, digits: usize) -> String {
        x.clone()
            .with_base_and_precision::<10>(digits)
            .value()
            .to_string()
    }

    /// Monitor for one solver loop at this context's precision
    pub(crate) fn monitor(
        &self,
        name: &'static str,
        arg: &BigFloat,
        iters_per_bit: u64,
    ) -> ConvergenceMonitor {
        let monitor = ConvergenceMonitor::new(name, arg, iters_per_bit, self.precision());
        match self.iteration_cap {
            Some(cap) => monitor.with_max_iterations(cap),
            None => monitor,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_iteration_cap(mut self, cap: u64) -> Self {
        self.iteration_cap = Some(cap);
        self
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

//==============================================================================
// Global Context
//==============================================================================

/// Process-wide context used by the free functions in the crate root
static GLOBAL_CONTEXT: OnceCell<MathContext> = OnceCell::new();

/// Install the global context at `config`'s precision
///
/// Calling this again with the same precision is a no-op; a different
/// precision is rejected, since callers may already hold values rounded to
/// the first one.
pub fn init(config: Config) -> Result<&'static MathContext> {
    let ctx = GLOBAL_CONTEXT.get_or_init(|| {
        log::debug!("installing global context at {} bits", config.precision());
        MathContext::new(config)
    });
    if ctx.precision() != config.precision() {
        return Err(Error::AlreadyInitialized {
            current: ctx.precision(),
            requested: config.precision(),
        });
    }
    Ok(ctx)
}

/// The global context, built from `BIGFLOAT_PRECISION` on first use
pub fn global() -> &'static MathContext {
    GLOBAL_CONTEXT.get_or_init(|| {
        let config = Config::from_env().unwrap_or_else(|e| {
            log::warn!("{}; using the default precision", e);
            Config::default()
        });
        log::debug!("installing global context at {} bits", config.precision());
        MathContext::new(config)
    })
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
