//! Email validation functions

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' symbol with content on both sides
/// - Local part restricted to word characters, '-' and '.'
/// - Domain made of dotted labels of word characters and '-'
/// - Final domain label (TLD) between 2 and 4 characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    if !local.chars().all(|c| is_word_char(c) || c == '-' || c == '.') {
        return false;
    }

    // Domain must be dotted: at least one label before the TLD.
    // An empty label (leading/trailing/consecutive dots) rejects the address,
    // as does a second '@' ending up in the domain part.
    let labels: alloc::vec::Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let label_ok = |label: &str| {
        !label.is_empty() && label.chars().all(|c| is_word_char(c) || c == '-')
    };
    if !labels.iter().all(|l| label_ok(l)) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    (2..=4).contains(&tld.len())
}
