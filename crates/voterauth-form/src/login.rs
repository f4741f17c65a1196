//! Sign-in submission flow: credential checks, wire format, reply branching

use voterauth_validation as validation;

use crate::error::{SubmitError, NETWORK_FAILURE};
use crate::reply::{status_message, HttpReply};

pub const LOGIN_URL: &str = "/do_login/";
/// Where a successful sign-in navigates.
pub const VOTER_HOME: &str = "/voter/";
/// Submit-control label while the request is in flight.
pub const BUSY_LABEL: &str = "Logging in...";

pub const EMPTY_FIELDS: &str = "Please fill in all fields";
pub const INVALID_VOTER_ID: &str =
    "Please enter a valid Voter ID (3 letters followed by 7 digits)";
pub const MISSING_INPUTS: &str = "Form elements not found. Please refresh the page and try again.";

const DEFAULT_FAILURE: &str = "Login failed. Please check your credentials.";
const DEFAULT_STATUS_PREFIX: &str = "Login failed";
const RETRY: &str = "Login failed. Please try again.";

/// Raw sign-in input, trimmed at construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    voter_id: String,
    password: String,
}

impl Credentials {
    pub fn new(voter_id: &str, password: &str) -> Self {
        Self {
            voter_id: voter_id.trim().to_string(),
            password: password.trim().to_string(),
        }
    }

    /// Re-check the credentials just before submission. Failure blocks the
    /// network call.
    pub fn validate(self) -> Result<LoginRequest, SubmitError> {
        if self.voter_id.is_empty() || self.password.is_empty() {
            return Err(SubmitError::Validation(EMPTY_FIELDS));
        }

        let voter_id = self.voter_id.to_uppercase();
        if !validation::is_valid_voter_id(&voter_id) {
            return Err(SubmitError::Validation(INVALID_VOTER_ID));
        }

        Ok(LoginRequest {
            voter_id,
            password: self.password,
        })
    }
}

/// Validated credentials, voter id uppercased, ready for the wire.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub voter_id: String,
    pub password: String,
}

impl LoginRequest {
    /// Form entries for the request body.
    pub fn form_entries(&self) -> [(&'static str, &str); 2] {
        [
            ("voter_id", self.voter_id.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// Branch a login reply into "navigate here" or a typed failure.
///
/// A 2xx non-JSON body counts as success: the backend sometimes answers with
/// a rendered page, and the HTTP status is the contract.
pub fn interpret_reply(reply: &HttpReply) -> Result<&'static str, SubmitError> {
    if !reply.ok {
        return Err(SubmitError::Http {
            status: reply.status,
            message: reply.server_reply().and_then(|r| r.message),
        });
    }

    if !reply.is_json() {
        return Ok(VOTER_HOME);
    }

    match reply.server_reply() {
        Some(r) if r.success => Ok(VOTER_HOME),
        Some(r) => Err(SubmitError::Rejected { message: r.message }),
        None => Err(SubmitError::Parse(
            "login reply claimed JSON but did not parse".to_string(),
        )),
    }
}

/// The one alert shown for a failed sign-in attempt.
pub fn alert_message(err: &SubmitError) -> String {
    match err {
        SubmitError::Validation(message) => (*message).to_string(),
        SubmitError::Http { status, message } => match status_message(*status) {
            Some(fixed) => fixed.to_string(),
            None => format!(
                "{}. Please check your credentials.",
                message.as_deref().unwrap_or(DEFAULT_STATUS_PREFIX)
            ),
        },
        SubmitError::Rejected { message } => message
            .clone()
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        SubmitError::Network(_) => NETWORK_FAILURE.to_string(),
        SubmitError::Parse(_) => RETRY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_reply(status: u16, body: &str) -> HttpReply {
        HttpReply {
            status,
            ok: (200..300).contains(&status),
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_fields_block_submission() {
        let err = Credentials::new("ABC1234567", "").validate().unwrap_err();
        assert_eq!(alert_message(&err), EMPTY_FIELDS);

        let err = Credentials::new("", "secret").validate().unwrap_err();
        assert_eq!(alert_message(&err), EMPTY_FIELDS);

        // Whitespace-only is empty after trimming
        let err = Credentials::new("ABC1234567", "   ").validate().unwrap_err();
        assert_eq!(alert_message(&err), EMPTY_FIELDS);
    }

    #[test]
    fn voter_id_shape_is_rechecked_and_uppercased() {
        let req = Credentials::new("abc1234567", "secret1").validate().unwrap();
        assert_eq!(req.voter_id, "ABC1234567");
        assert_eq!(
            req.form_entries(),
            [("voter_id", "ABC1234567"), ("password", "secret1")]
        );

        let err = Credentials::new("AB123456", "secret1").validate().unwrap_err();
        assert_eq!(alert_message(&err), INVALID_VOTER_ID);
    }

    #[test]
    fn json_success_redirects() {
        let reply = json_reply(200, r#"{"success": true}"#);
        assert_eq!(interpret_reply(&reply).unwrap(), VOTER_HOME);
    }

    #[test]
    fn json_failure_surfaces_the_server_message() {
        let reply = json_reply(200, r#"{"success": false, "message": "Wrong password"}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(alert_message(&err), "Wrong password");

        let reply = json_reply(200, r#"{"success": false}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            alert_message(&err),
            "Login failed. Please check your credentials."
        );
    }

    #[test]
    fn non_json_success_redirects() {
        let reply = HttpReply {
            status: 200,
            ok: true,
            content_type: Some("text/html".to_string()),
            body: "<html>...</html>".to_string(),
        };
        assert_eq!(interpret_reply(&reply).unwrap(), VOTER_HOME);
    }

    #[test]
    fn error_statuses_map_to_fixed_messages() {
        for (status, text) in [
            (403, "Access denied. Please check your credentials."),
            (404, "Service not found. Please contact support."),
            (500, "Server error. Please try again later."),
        ] {
            let err = interpret_reply(&json_reply(status, "")).unwrap_err();
            assert_eq!(alert_message(&err), text);
        }
    }

    #[test]
    fn unmapped_status_falls_back_to_the_server_message() {
        let reply = json_reply(502, r#"{"success": false, "message": "Bad gateway"}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            alert_message(&err),
            "Bad gateway. Please check your credentials."
        );

        let reply = json_reply(418, "");
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            alert_message(&err),
            "Login failed. Please check your credentials."
        );
    }

    #[test]
    fn network_failure_maps_to_connectivity_text() {
        let err = SubmitError::Network("fetch rejected".to_string());
        assert_eq!(alert_message(&err), NETWORK_FAILURE);
    }

    #[test]
    fn unparseable_json_claims_ask_for_retry() {
        let reply = json_reply(200, "not json");
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(alert_message(&err), "Login failed. Please try again.");
    }
}
