//! Construction and configuration errors
//!
//! Ticking never fails; only building a viewport or loading tuning can.

use std::error::Error;
use std::fmt;

/// Errors raised while setting up a simulation
#[derive(Debug)]
pub enum SimError {
    /// Viewport dimensions were non-finite, non-positive, or too small.
    InvalidViewport { width: f32, height: f32 },
    /// A tuning value failed validation.
    InvalidTuning {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the validation failure.
        reason: String,
    },
    /// Tuning JSON could not be parsed.
    TuningParse(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}")
            }
            Self::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning field `{field}`: {reason}")
            }
            Self::TuningParse(e) => write!(f, "tuning json: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TuningParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        Self::TuningParse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = SimError::InvalidTuning {
            field: "jump_length",
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid tuning field `jump_length`: must be positive"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = SimError::from(parse);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("tuning json:"));
    }
}
