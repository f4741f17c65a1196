// Voter Auth Form - controller model for the sign-in/registration page
// Pure Rust: rule table, panel state, cookie lookup, submission flows.
// The WASM crate binds this to the DOM; nothing here touches the browser.

pub mod cookie;
pub mod error;
pub mod guard;
pub mod login;
pub mod panel;
pub mod register;
pub mod reply;
pub mod rules;

// Re-export the controller vocabulary
pub use error::SubmitError;
pub use guard::{BusyControl, BusyGuard};
pub use panel::{Panel, PanelLabels};
pub use reply::{HttpReply, ServerReply};
pub use rules::{
    eligibility_cutoff, first_invalid, form_is_valid, is_adult, validate_form, FieldOutcome,
    FieldReport, FieldRule, FormValues, RuleContext, RuleKind, REGISTRATION_RULES,
};
