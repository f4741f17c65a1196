//! `fetch`-based form submission
//!
//! One POST per submission: multipart form body, CSRF token echoed from the
//! `csrftoken` cookie, same-origin credentials. The reply is captured into a
//! transport-agnostic `HttpReply` for the form model to interpret.

use voterauth_form::cookie;
use voterauth_form::{HttpReply, SubmitError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, FormData, Headers, Request, RequestCredentials, RequestInit, Response};

/// The CSRF token from `document.cookie`, if the backend has set one.
pub fn csrf_token(document: &Document) -> Option<String> {
    let html_doc = document.dyn_ref::<web_sys::HtmlDocument>()?;
    let cookies = html_doc.cookie().ok()?;
    cookie::csrf_token(&cookies)
}

/// POST `entries` to `url` as form data and capture the reply.
pub async fn post_form<'a, I>(
    url: &str,
    entries: I,
    csrf: Option<&str>,
) -> Result<HttpReply, SubmitError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let form = FormData::new().map_err(as_network_error)?;
    for (name, value) in entries {
        form.append_with_str(name, value).map_err(as_network_error)?;
    }

    let headers = Headers::new().map_err(as_network_error)?;
    if let Some(token) = csrf {
        headers
            .set(cookie::CSRF_HEADER, token)
            .map_err(as_network_error)?;
    }
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(as_network_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    init.set_headers(headers.as_ref());
    init.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(url, &init).map_err(as_network_error)?;
    let window = web_sys::window()
        .ok_or_else(|| SubmitError::Network("no window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(as_network_error)?
        .dyn_into()
        .map_err(|_| SubmitError::Parse("fetch did not yield a Response".to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let content_type = response.headers().get("content-type").ok().flatten();

    let body = JsFuture::from(response.text().map_err(as_parse_error)?)
        .await
        .map_err(as_parse_error)?
        .as_string()
        .unwrap_or_default();

    Ok(HttpReply {
        status,
        ok,
        content_type,
        body,
    })
}

fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

fn as_network_error(value: JsValue) -> SubmitError {
    SubmitError::Network(js_error_text(&value))
}

fn as_parse_error(value: JsValue) -> SubmitError {
    SubmitError::Parse(js_error_text(&value))
}
