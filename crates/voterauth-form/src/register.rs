//! Registration submission flow: payload wiring and reply branching
//!
//! Field-level validation happens against `rules::REGISTRATION_RULES` before
//! this module is reached; a failing form never produces a request.

use crate::error::{SubmitError, NETWORK_FAILURE};
use crate::reply::{status_message, HttpReply};

pub const REGISTER_URL: &str = "/register/";
/// Submit-control label while the request is in flight.
pub const BUSY_LABEL: &str = "Registering...";

/// Alert shown before switching back to the sign-in panel.
pub const SUCCESS_MESSAGE: &str = "Registration successful! Please login with your credentials.";

const DEFAULT_FAILURE: &str = "Registration failed. Please try again.";

/// Branch a registration reply into the success alert or a typed failure.
///
/// The endpoint speaks JSON on success and failure alike, so a 2xx body that
/// does not parse is a malformed reply.
pub fn interpret_reply(reply: &HttpReply) -> Result<&'static str, SubmitError> {
    if !reply.ok {
        return Err(SubmitError::Http {
            status: reply.status,
            message: reply.server_reply().and_then(|r| r.message),
        });
    }

    match reply.server_reply() {
        Some(r) if r.success => Ok(SUCCESS_MESSAGE),
        Some(r) => Err(SubmitError::Rejected { message: r.message }),
        None => Err(SubmitError::Parse(
            "registration reply was not valid JSON".to_string(),
        )),
    }
}

/// The one alert shown for a failed registration attempt.
pub fn alert_message(err: &SubmitError) -> String {
    match err {
        SubmitError::Validation(message) => (*message).to_string(),
        SubmitError::Http { status, message } => status_message(*status)
            .map(str::to_string)
            .or_else(|| message.clone())
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        SubmitError::Rejected { message } => message
            .clone()
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        SubmitError::Network(_) => NETWORK_FAILURE.to_string(),
        SubmitError::Parse(_) => DEFAULT_FAILURE.to_string(),
    }
}
