//! Cookie lookup for the CSRF token

/// Name of the cookie the backend issues the CSRF token under.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the token is echoed back in on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find a cookie by name in a `document.cookie`-style string and return its
/// URL-decoded value. First match wins; a value that fails to decode is
/// treated as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for part in cookies.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            return urlencoding::decode(value).ok().map(|v| v.into_owned());
        }
    }
    None
}

/// The CSRF token, if the backend has set one.
pub fn csrf_token(cookies: &str) -> Option<String> {
    cookie_value(cookies, CSRF_COOKIE)
}
