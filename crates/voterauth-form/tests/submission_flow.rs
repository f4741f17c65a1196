//! End-to-end model tests for the two submission flows: field validation
//! gating the network call, payload shape, and reply branching.

use chrono::NaiveDate;
use voterauth_form::{
    first_invalid, form_is_valid, login, register, validate_form, FormValues, HttpReply, Panel,
    RuleContext, SubmitError, REGISTRATION_RULES,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn filled_form() -> FormValues {
    let entries = [
        ("firstName", "Asha"),
        ("lastName", "Patel"),
        ("email", "asha.patel@example.com"),
        ("mobile", "9876543210"),
        ("dob", "1990-01-20"),
        ("gender", "female"),
        ("parentSpouseName", "Ravi Patel"),
        ("streetAddress", "12 MG Road"),
        ("city", "Pune"),
        ("state", "MH"),
        ("pincode", "411001"),
        ("placeOfBirth", "Pune"),
        ("voterId", "ABC1234567"),
        ("aadharNumber", "123456789012"),
        ("panNumber", "ABCDE1234F"),
        ("password", "hunter22"),
        ("confirmPassword", "hunter22"),
    ];
    let mut values = FormValues::new();
    for (id, value) in entries {
        values.insert(id, value);
    }
    values
}

#[test]
fn invalid_registration_form_blocks_the_request() {
    let mut values = FormValues::new();
    for (id, value) in filled_form().entries() {
        let value = if id == "aadharNumber" { "12" } else { value };
        values.insert(id, value);
    }
    let ctx = RuleContext::from_values(&values, today());

    assert!(!form_is_valid(&values, &ctx));

    let reports = validate_form(&values, &ctx);
    let failed = first_invalid(&reports).unwrap();
    assert_eq!(failed.rule.id, "aadharNumber");
    assert_eq!(
        failed.outcome.message(),
        Some("Aadhar must be a 12-digit number.")
    );
}

#[test]
fn registration_payload_carries_every_field_by_raw_id() {
    let values = filled_form();
    let ctx = RuleContext::from_values(&values, today());
    assert!(form_is_valid(&values, &ctx));

    let payload: Vec<(&str, &str)> = values.entries().collect();
    assert_eq!(payload.len(), REGISTRATION_RULES.len());
    for rule in REGISTRATION_RULES {
        assert!(payload.iter().any(|(id, _)| *id == rule.id));
    }
}

#[test]
fn successful_registration_switches_back_to_sign_in() {
    let reply = HttpReply {
        status: 200,
        ok: true,
        content_type: Some("application/json".to_string()),
        body: r#"{"success": true}"#.to_string(),
    };
    let message = register::interpret_reply(&reply).unwrap();
    assert_eq!(message, register::SUCCESS_MESSAGE);

    // The controller returns to the initial panel after the alert
    assert_eq!(Panel::Register.other(), Panel::initial());
}

#[test]
fn login_flow_from_credentials_to_redirect() {
    let request = login::Credentials::new(" abc1234567 ", "hunter22")
        .validate()
        .unwrap();
    assert_eq!(
        request.form_entries(),
        [("voter_id", "ABC1234567"), ("password", "hunter22")]
    );

    let reply = HttpReply {
        status: 200,
        ok: true,
        content_type: Some("application/json".to_string()),
        body: r#"{"success": true}"#.to_string(),
    };
    assert_eq!(login::interpret_reply(&reply).unwrap(), login::VOTER_HOME);
}

#[test]
fn transport_failures_map_to_one_alert_per_flow() {
    let err = SubmitError::Network("fetch rejected".to_string());
    assert_eq!(
        login::alert_message(&err),
        "Network error. Please check your internet connection and try again."
    );
    assert_eq!(
        register::alert_message(&err),
        "Network error. Please check your internet connection and try again."
    );
}
