//! Error types for the precision-math kernel
//!
//! Only caller-attributable failures live here. A solver that exceeds its
//! iteration bound panics from the convergence monitor instead; see
//! [`crate::convergence`].

/// Errors returned by the arbitrary-precision functions and their configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// `sqrt` was called with a negative argument
    #[error("square root of negative number {0}")]
    NegativeSqrt(String),

    /// `asin`/`acos` argument outside [-1, 1]
    #[error("{function}({arg}): argument outside [-1, 1]")]
    OutOfDomain { function: &'static str, arg: String },

    /// NaN or infinity passed where a finite f64 is required
    #[error("cannot convert non-finite value {0} to a big float")]
    NotFinite(f64),

    /// Decimal literal could not be parsed
    #[error("invalid decimal literal '{0}'")]
    InvalidLiteral(String),

    /// Working precision outside the supported range
    #[error("working precision {bits} bits is outside [{min}, {max}]")]
    InvalidPrecision { bits: usize, min: usize, max: usize },

    /// Environment variable holds something that is not a bit count
    #[error("invalid value set for `{var}`: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    /// The global context was already installed at another precision
    #[error("global context already initialized at {current} bits (requested {requested})")]
    AlreadyInitialized { current: usize, requested: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
