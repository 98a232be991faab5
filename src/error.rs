//! Error types for the circle timer.
//!
//! Every failure the timer can report is a configuration problem: a limit
//! the arc cannot be scaled against, a negative duration, or a unit ladder
//! that cannot decompose anything. Running/idle mismatches are not errors;
//! they are reported as [`Transition`](crate::driver::Transition) values.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by fallible timer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested configuration cannot be applied. The widget keeps
    /// its previous, valid state.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

impl Error {
    /// Returns the underlying configuration problem.
    pub fn config_error(&self) -> &ConfigError {
        match self {
            Error::InvalidConfiguration(e) => e,
        }
    }
}

/// The specific reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero limit in subtractive mode would divide by zero.
    #[error("limit must be positive in subtractive mode")]
    ZeroLimit,
    /// Limits are durations and cannot be negative.
    #[error("limit must not be negative, got {0}")]
    NegativeLimit(i64),
    /// Durations cannot be negative.
    #[error("duration must not be negative, got {0}")]
    NegativeDuration(i64),
    /// A ladder needs a top and a bottom unit.
    #[error("unit ladder needs at least 2 units, got {0}")]
    LadderTooShort(usize),
    /// Every unit must convert to the next one by a positive factor.
    #[error("unit `{0}` has a zero divisor")]
    ZeroDivisor(String),
    /// The base unit must divide into the smallest ladder unit.
    #[error("base units per smallest unit must be positive")]
    ZeroBaseDivisor,
    /// A tick that moves the duration by nothing never finishes.
    #[error("tick step must be positive")]
    ZeroTickStep,
    /// Ticks need a non-zero period.
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = Error::from(ConfigError::ZeroLimit);
        assert_eq!(
            err.to_string(),
            "invalid configuration: limit must be positive in subtractive mode"
        );

        let err = Error::from(ConfigError::NegativeDuration(-5));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_config_error_accessor() {
        let err = Error::from(ConfigError::ZeroDivisor("MIN".to_string()));
        assert_eq!(err.config_error(), &ConfigError::ZeroDivisor("MIN".to_string()));
    }
}
