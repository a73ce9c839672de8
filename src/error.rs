// File: ./src/error.rs
// Error kinds surfaced at the command boundary.
use thiserror::Error;

/// Everything that can go wrong while handling one command.
///
/// None of these end the session: the controller renders each one as a
/// single reply line and waits for the next command.
#[derive(Debug, Error)]
pub enum EchoError {
    /// Missing or malformed argument, unknown command, out-of-range index.
    #[error("{0}")]
    UserInput(String),

    /// Writing the task file failed. The in-memory list keeps the change.
    #[error("Error saving to file: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Uh oh! Something unexpected happened: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl EchoError {
    pub fn user(msg: impl Into<String>) -> Self {
        Self::UserInput(msg.into())
    }

    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::UserInput(_))
    }
}

pub type EchoResult<T> = Result<T, EchoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_renders_message_verbatim() {
        let err = EchoError::user("Task number doesn't exist.");
        assert_eq!(err.to_string(), "Task number doesn't exist.");
        assert!(err.is_user_input());
    }

    #[test]
    fn test_persistence_renders_with_prefix() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: EchoError = io.into();
        assert_eq!(err.to_string(), "Error saving to file: read-only");
        assert!(!err.is_user_input());
    }

    #[test]
    fn test_unexpected_renders_with_prefix() {
        let err: EchoError = anyhow::anyhow!("boom").into();
        assert_eq!(
            err.to_string(),
            "Uh oh! Something unexpected happened: boom"
        );
    }

    #[test]
    fn test_unexpected_shows_cause_chain() {
        let err: EchoError = anyhow::anyhow!("disk gone")
            .context("Failed to read task file")
            .into();
        assert_eq!(
            err.to_string(),
            "Uh oh! Something unexpected happened: Failed to read task file: disk gone"
        );
    }
}
