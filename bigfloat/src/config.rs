//! Working-precision configuration
//!
//! The working precision is the mantissa width, in bits, shared by every value
//! a [`MathContext`](crate::MathContext) creates. It has to be chosen before the
//! constants table is built, since π and the unit constants are rounded to it
//! exactly once.

use crate::error::{Error, Result};
use std::env::{self, VarError};

/// Default working precision for general arbitrary-precision use
pub const DEFAULT_PRECISION_BITS: usize = 256;

/// Mantissa width of an IEEE-754 double, for bit-for-bit f64 interop
pub const DOUBLE_PRECISION_BITS: usize = 53;

/// Smallest accepted working precision
pub const MIN_PRECISION_BITS: usize = 16;

/// Largest accepted working precision.
///
/// Bounded by the 1200 decimal digits of the embedded π literal (~3986 bits).
pub const MAX_PRECISION_BITS: usize = 3900;

/// Environment variable read by [`Config::from_env`]
pub const PRECISION_ENV: &str = "BIGFLOAT_PRECISION";

/// Configuration of a [`MathContext`](crate::MathContext)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    precision: usize,
}

impl Config {
    /// Create a configuration with `precision` bits of mantissa
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrecision`] when `precision` is outside
    /// [`MIN_PRECISION_BITS`]..=[`MAX_PRECISION_BITS`].
    pub fn new(precision: usize) -> Result<Self> {
        if !(MIN_PRECISION_BITS..=MAX_PRECISION_BITS).contains(&precision) {
            return Err(Error::InvalidPrecision {
                bits: precision,
                min: MIN_PRECISION_BITS,
                max: MAX_PRECISION_BITS,
            });
        }
        Ok(Self { precision })
    }

    /// 53-bit configuration matching native `f64`
    pub fn double() -> Self {
        Self {
            precision: DOUBLE_PRECISION_BITS,
        }
    }

    /// Read the precision from `BIGFLOAT_PRECISION`, defaulting to 256 bits
    /// when the variable is not set.
    pub fn from_env() -> Result<Self> {
        match env::var(PRECISION_ENV) {
            Ok(v) => {
                let bits = v.trim().parse::<usize>().map_err(|_| Error::InvalidEnv {
                    var: PRECISION_ENV,
                    value: v.clone(),
                })?;
                Self::new(bits)
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(s)) => Err(Error::InvalidEnv {
                var: PRECISION_ENV,
                value: s.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Working precision in bits
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION_BITS,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
