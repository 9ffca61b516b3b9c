use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ConfigError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured error returned by the data layer and config loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ConfigError,
            message: message.into(),
        }
    }

    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind == AppErrorKind::NotFound
    }

    /// Message safe to show in the UI.
    ///
    /// Not-found errors keep their own message; everything else collapses
    /// to a generic retry hint.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::NotFound | AppErrorKind::BadRequest => self.message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing project");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing project");
        assert!(err.is_not_found());
    }

    #[test]
    fn config_error_is_not_not_found() {
        let err = AppError::config("bad toml");
        assert_eq!(err.kind, AppErrorKind::ConfigError);
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::not_found("Project p9 not found");
        assert_eq!(format!("{}", err), "NotFound: Project p9 not found");
    }

    #[test]
    fn friendly_message_keeps_not_found_text() {
        let err = AppError::not_found("Project p9 not found");
        assert_eq!(err.friendly_message(), "Project p9 not found");
    }

    #[test]
    fn friendly_message_hides_config_details() {
        let err = AppError::config("expected a boolean at line 2");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::bad_request("empty project id");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
