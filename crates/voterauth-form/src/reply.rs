//! Transport-agnostic capture of an endpoint response

use serde::Deserialize;

/// What came back over the wire, before interpretation.
///
/// The WASM layer fills this from a `fetch` `Response`; tests build it
/// directly.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub ok: bool,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpReply {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|c| c.contains("application/json"))
    }

    /// The JSON body both endpoints speak, when it parses as such.
    pub fn server_reply(&self) -> Option<ServerReply> {
        serde_json::from_str(&self.body).ok()
    }
}

/// `{success: bool, message?: string}` from either endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Fixed user-facing text for the status codes both submissions map.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        403 => Some("Access denied. Please check your credentials."),
        404 => Some("Service not found. Please contact support."),
        500 => Some("Server error. Please try again later."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detection_uses_content_type() {
        let reply = HttpReply {
            status: 200,
            ok: true,
            content_type: Some("application/json; charset=utf-8".into()),
            body: "{}".into(),
        };
        assert!(reply.is_json());

        let html = HttpReply {
            content_type: Some("text/html".into()),
            ..reply.clone()
        };
        assert!(!html.is_json());

        let missing = HttpReply {
            content_type: None,
            ..reply
        };
        assert!(!missing.is_json());
    }

    #[test]
    fn server_reply_parses_with_and_without_message() {
        let reply = HttpReply {
            status: 200,
            ok: true,
            content_type: Some("application/json".into()),
            body: r#"{"success": false, "message": "Invalid credentials"}"#.into(),
        };
        let parsed = reply.server_reply().unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));

        let bare = HttpReply {
            body: r#"{"success": true}"#.into(),
            ..reply
        };
        let parsed = bare.server_reply().unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn mapped_statuses() {
        assert_eq!(
            status_message(403),
            Some("Access denied. Please check your credentials.")
        );
        assert_eq!(
            status_message(404),
            Some("Service not found. Please contact support.")
        );
        assert_eq!(
            status_message(500),
            Some("Server error. Please try again later.")
        );
        assert_eq!(status_message(502), None);
        assert_eq!(status_message(400), None);
    }
}
