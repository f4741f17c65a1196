//! Voter Auth WASM
//!
//! WebAssembly bindings for the voter auth page. `mountAuthPage()` wires the
//! whole form controller (tabs, field validation, submissions); the quick
//! validators below are also exported for ad-hoc use from JavaScript.

use serde::Serialize;
use voterauth_form::rules::rule_for;
use voterauth_form::RuleContext;
use voterauth_validation as validation;
use wasm_bindgen::prelude::*;

mod controller;
mod dom;
mod fetch;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the form controller on the current page.
///
/// Resolves the fixed element ids, wires tab switching, per-field
/// validation, and both submission flows, and forces the initial
/// sign-in state. A page without the auth elements logs and mounts
/// nothing.
///
/// # Example (JavaScript)
/// ```javascript
/// import init, { mountAuthPage } from './voterauth_wasm.js';
/// await init();
/// mountAuthPage();
/// ```
#[wasm_bindgen(js_name = mountAuthPage)]
pub fn mount_auth_page() -> Result<(), JsValue> {
    controller::mount()
}

/// Validation outcome returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldCheck {
    pub field: String,
    pub valid: bool,
    pub message: Option<String>,
}

/// Validate a single field value against the registration rule table.
///
/// `password` is only consulted for the confirmation field.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(
    field_id: &str,
    value: &str,
    password: Option<String>,
) -> Result<JsValue, JsValue> {
    let rule = rule_for(field_id)
        .ok_or_else(|| JsValue::from_str(&format!("no rule for field '{field_id}'")))?;

    let ctx = RuleContext::with_password(dom::today(), password.unwrap_or_default());
    let outcome = rule.evaluate(value, &ctx);
    let check = FieldCheck {
        field: field_id.to_string(),
        valid: outcome.is_valid(),
        message: outcome.message().map(str::to_string),
    };
    Ok(serde_wasm_bindgen::to_value(&check)?)
}

/// Quick voter ID validation
#[wasm_bindgen(js_name = isValidVoterId)]
pub fn is_valid_voter_id_js(voter_id: &str) -> bool {
    validation::is_valid_voter_id(&voter_id.trim().to_uppercase())
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email.trim())
}

/// Quick mobile validation
#[wasm_bindgen(js_name = isValidMobile)]
pub fn is_valid_mobile_js(mobile: &str) -> bool {
    validation::is_valid_mobile(mobile.trim())
}
