//! The registration rule table and its evaluation engine
//!
//! One immutable `FieldRule` per form field, built once and walked in order.
//! Predicates operate on the trimmed value; the two pieces of ambient state
//! they need (today's date for the age check, the primary password for the
//! confirmation check) are injected through `RuleContext` so evaluation stays
//! clock-free and testable.

use chrono::{Months, NaiveDate};
use voterauth_validation as validation;

/// Minimum password length on the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Voting age.
pub const ADULT_AGE_YEARS: u32 = 18;
/// Date format the date-of-birth input produces.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

pub const DOB_FIELD: &str = "dob";
pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirmPassword";

/// The check a field rule applies to its trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// ASCII letters only, with a minimum count.
    AlphabeticName { min_letters: usize },
    /// Any non-empty text.
    NonEmpty,
    /// Email shape.
    Email,
    /// 10-digit mobile starting 6-9.
    Mobile,
    /// Parses as a date and satisfies the voting-age requirement.
    AdultDob,
    /// A `<select>` with a non-empty chosen value.
    Selection,
    /// 6-digit pincode, non-zero first digit.
    Pincode,
    /// 3 letters + 7 digits, case-normalized.
    VoterId,
    /// 12-digit Aadhaar number.
    Aadhaar,
    /// 5 letters + 4 digits + 1 letter.
    Pan,
    /// Minimum-length password.
    Password { min: usize },
    /// Equal to the primary password and long enough on its own.
    ConfirmPassword { min: usize },
}

/// A field id bound to one check and one human-readable message.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub id: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// Ambient state rule predicates need.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub today: NaiveDate,
    pub password: String,
}

impl RuleContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            password: String::new(),
        }
    }

    pub fn with_password(today: NaiveDate, password: impl Into<String>) -> Self {
        Self {
            today,
            password: password.into(),
        }
    }

    /// Context for whole-form validation: the confirmation check compares
    /// against the password value captured in the same snapshot.
    pub fn from_values(values: &FormValues, today: NaiveDate) -> Self {
        Self::with_password(today, values.get(PASSWORD_FIELD))
    }
}

/// Outcome of evaluating one rule against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    Invalid(&'static str),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message),
        }
    }
}

impl FieldRule {
    /// Apply the rule's predicate to a trimmed value.
    pub fn check(&self, value: &str, ctx: &RuleContext) -> bool {
        let value = value.trim();
        match self.kind {
            RuleKind::AlphabeticName { min_letters } => {
                validation::is_alphabetic_name(value, min_letters)
            }
            RuleKind::NonEmpty | RuleKind::Selection => validation::is_non_empty(value),
            RuleKind::Email => validation::is_valid_email(value),
            RuleKind::Mobile => validation::is_valid_mobile(value),
            RuleKind::AdultDob => is_adult(value, ctx.today),
            RuleKind::Pincode => validation::is_valid_pincode(value),
            RuleKind::VoterId => validation::is_valid_voter_id(value),
            RuleKind::Aadhaar => validation::is_valid_aadhaar(value),
            RuleKind::Pan => validation::is_valid_pan(value),
            RuleKind::Password { min } => validation::validate_password(value, min).is_ok(),
            RuleKind::ConfirmPassword { min } => {
                validation::validate_confirmation(value, ctx.password.trim(), min).is_ok()
            }
        }
    }

    /// `check`, carrying the rule's message on failure.
    pub fn evaluate(&self, value: &str, ctx: &RuleContext) -> FieldOutcome {
        if self.check(value, ctx) {
            FieldOutcome::Valid
        } else {
            FieldOutcome::Invalid(self.message)
        }
    }
}

/// The fixed registration rule table, in form order.
pub static REGISTRATION_RULES: &[FieldRule] = &[
    FieldRule {
        id: "firstName",
        kind: RuleKind::AlphabeticName { min_letters: 2 },
        message: "First name must be at least 2 letters long and contain only alphabets.",
    },
    FieldRule {
        id: "lastName",
        kind: RuleKind::NonEmpty,
        message: "Last name cannot be empty.",
    },
    FieldRule {
        id: "email",
        kind: RuleKind::Email,
        message: "Enter a valid email (e.g. user@example.com).",
    },
    FieldRule {
        id: "mobile",
        kind: RuleKind::Mobile,
        message: "Mobile must be 10 digits and start with 6/7/8/9.",
    },
    FieldRule {
        id: DOB_FIELD,
        kind: RuleKind::AdultDob,
        message: "You must be at least 18 years old.",
    },
    FieldRule {
        id: "gender",
        kind: RuleKind::Selection,
        message: "Please select a gender.",
    },
    FieldRule {
        id: "parentSpouseName",
        kind: RuleKind::NonEmpty,
        message: "This field cannot be empty.",
    },
    FieldRule {
        id: "streetAddress",
        kind: RuleKind::NonEmpty,
        message: "Address cannot be empty.",
    },
    FieldRule {
        id: "city",
        kind: RuleKind::NonEmpty,
        message: "City cannot be empty.",
    },
    FieldRule {
        id: "state",
        kind: RuleKind::Selection,
        message: "Please select a state.",
    },
    FieldRule {
        id: "pincode",
        kind: RuleKind::Pincode,
        message: "Pincode must be 6 digits starting with non-zero.",
    },
    FieldRule {
        id: "placeOfBirth",
        kind: RuleKind::NonEmpty,
        message: "Place of birth cannot be empty.",
    },
    FieldRule {
        id: "voterId",
        kind: RuleKind::VoterId,
        message: "Voter ID must be in format: 3 letters followed by 7 digits.",
    },
    FieldRule {
        id: "aadharNumber",
        kind: RuleKind::Aadhaar,
        message: "Aadhar must be a 12-digit number.",
    },
    FieldRule {
        id: "panNumber",
        kind: RuleKind::Pan,
        message: "PAN must be in format: 5 letters, 4 digits, 1 letter.",
    },
    FieldRule {
        id: PASSWORD_FIELD,
        kind: RuleKind::Password {
            min: MIN_PASSWORD_LEN,
        },
        message: "Password must be at least 6 characters.",
    },
    FieldRule {
        id: CONFIRM_PASSWORD_FIELD,
        kind: RuleKind::ConfirmPassword {
            min: MIN_PASSWORD_LEN,
        },
        message: "Passwords must match and be at least 6 characters.",
    },
];

/// Look up a rule by its field id.
pub fn rule_for(id: &str) -> Option<&'static FieldRule> {
    REGISTRATION_RULES.iter().find(|rule| rule.id == id)
}

/// Age check over the raw date-of-birth input value.
pub fn is_adult(value: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(value.trim(), DOB_FORMAT)
        .map(|dob| matches!(today.years_since(dob), Some(age) if age >= ADULT_AGE_YEARS))
        .unwrap_or(false)
}

/// Latest date of birth that still satisfies the voting-age requirement.
/// Projected onto the date input's `max` attribute at boot.
pub fn eligibility_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12 * ADULT_AGE_YEARS))
        .unwrap_or(today)
}

/// Ordered `(id, trimmed value)` pairs snapshotted from the form.
/// Doubles as the registration payload.
#[derive(Debug, Clone, Default)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field's value, trimmed.
    pub fn insert(&mut self, id: &str, value: &str) {
        self.0.push((id.to_string(), value.trim().to_string()));
    }

    /// The stored value for a field, or "" when absent.
    pub fn get(&self, id: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One rule's outcome within a whole-form pass.
#[derive(Debug, Clone, Copy)]
pub struct FieldReport {
    pub rule: &'static FieldRule,
    pub outcome: FieldOutcome,
}

/// Evaluate every rule in table order.
pub fn validate_form(values: &FormValues, ctx: &RuleContext) -> Vec<FieldReport> {
    REGISTRATION_RULES
        .iter()
        .map(|rule| FieldReport {
            rule,
            outcome: rule.evaluate(values.get(rule.id), ctx),
        })
        .collect()
}

/// True when every rule in the table passes. Drives the submit button.
pub fn form_is_valid(values: &FormValues, ctx: &RuleContext) -> bool {
    REGISTRATION_RULES
        .iter()
        .all(|rule| rule.check(values.get(rule.id), ctx))
}

/// First failing entry in table order; registration submit focuses it.
pub fn first_invalid(reports: &[FieldReport]) -> Option<&FieldReport> {
    reports.iter().find(|report| !report.outcome.is_valid())
}
