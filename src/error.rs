//! Error types for group validation and the upstream schedule API.

use thiserror::Error;

/// Errors that can occur while validating input or talking to the schedule API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The user typed something that is not a group number
    #[error("Invalid group number '{input}': {reason}")]
    InvalidGroup { input: String, reason: &'static str },

    /// Upstream answered with a non-success HTTP status
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// Network failure, timeout or undecodable body
    #[error("Upstream request failed: {message}")]
    UpstreamNetwork { message: String },

    /// Upstream answered, but with nothing usable in it
    #[error("Upstream returned an empty payload")]
    EmptyPayload,
}

impl ScheduleError {
    /// Returns true if the user can fix this by typing something else.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ScheduleError::InvalidGroup { .. })
    }

    /// Returns true if this error came from the upstream API.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ScheduleError::UpstreamStatus { .. }
                | ScheduleError::UpstreamNetwork { .. }
                | ScheduleError::EmptyPayload
        )
    }
}

impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ScheduleError::UpstreamStatus {
                status: status.as_u16(),
            };
        }
        if err.is_timeout() {
            return ScheduleError::UpstreamNetwork {
                message: "request timed out".to_string(),
            };
        }
        ScheduleError::UpstreamNetwork {
            message: err.to_string(),
        }
    }
}
