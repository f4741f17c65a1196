//! Submission failure taxonomy

use thiserror::Error;

/// Connectivity failure text, shared by both submission flows.
pub const NETWORK_FAILURE: &str =
    "Network error. Please check your internet connection and try again.";

/// Why a submission attempt ended without its success path.
///
/// Every variant is terminal for the attempt: the flow surfaces one alert
/// and restores the UI. The user-facing text is flow-specific, see
/// `login::alert_message` and `register::alert_message`.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Caught before any request was issued; no network call happens.
    #[error("{0}")]
    Validation(&'static str),

    /// The endpoint answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// A 2xx reply whose body refused the submission.
    #[error("submission rejected by server")]
    Rejected { message: Option<String> },

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The reply arrived but could not be understood.
    #[error("malformed response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_interesting_part() {
        let err = SubmitError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned HTTP 503");

        let err = SubmitError::Validation("Please fill in all fields");
        assert_eq!(err.to_string(), "Please fill in all fields");
    }
}
