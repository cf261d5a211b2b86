//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for the starter kit
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StarterError {
    /// Output Error - writing to stdout failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl StarterError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Output { .. } => 1,
        }
    }

    /// Create an output error
    #[must_use]
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_display() {
        let err = StarterError::output("broken pipe");
        assert_eq!(err.to_string(), "Output error: broken pipe");
        assert_eq!(err.exit_code(), 1);
    }
}
