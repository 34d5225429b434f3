//! Engine error type.
//!
//! Every error is deterministic and signals a caller bug (an illegal action
//! was proposed) or a corrupted tensor. None of them are retryable.

/// Errors raised by the rules engine and the codecs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoopError {
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("invalid graduation choice: {reason}")]
    InvalidChoice { reason: String },

    #[error("malformed board tensor: {reason}")]
    MalformedTensor { reason: String },

    #[error("action index {index} outside action space of size {size}")]
    IndexOutOfRange { index: i64, size: usize },
}

impl BoopError {
    pub(crate) fn invalid_move(reason: impl Into<String>) -> Self {
        BoopError::InvalidMove {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_choice(reason: impl Into<String>) -> Self {
        BoopError::InvalidChoice {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BoopError::MalformedTensor {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BoopError::IndexOutOfRange { index: -1, size: 188 };
        assert_eq!(
            err.to_string(),
            "action index -1 outside action space of size 188"
        );

        let err = BoopError::invalid_move("cell (0, 0) is occupied");
        assert_eq!(err.to_string(), "invalid move: cell (0, 0) is occupied");
    }
}
