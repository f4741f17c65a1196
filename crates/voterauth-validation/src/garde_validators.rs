//! Custom garde validators for the voter-registration identity formats
//!
//! These wrap the core format checks so server-side form structs can use
//! them directly with garde's `custom(...)` rule.

/// Validator: voter ID format (3 letters + 7 digits)
///
/// # Example
///
/// ```ignore
/// use garde::Validate;
///
/// #[derive(Validate)]
/// struct RegistrationForm {
///     #[garde(custom(voter_id))]
///     voter_id: String,
/// }
/// ```
pub fn voter_id(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if crate::identity::is_valid_voter_id(value) {
        Ok(())
    } else {
        Err(garde::Error::new("must be 3 letters followed by 7 digits"))
    }
}

/// Validator: PAN format (5 letters, 4 digits, 1 letter)
pub fn pan_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if crate::identity::is_valid_pan(value) {
        Ok(())
    } else {
        Err(garde::Error::new("must be 5 letters, 4 digits and a letter"))
    }
}

/// Validator: Aadhaar number (12 digits)
pub fn aadhaar_number(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if crate::identity::is_valid_aadhaar(value) {
        Ok(())
    } else {
        Err(garde::Error::new("must be a 12-digit number"))
    }
}

/// Validator: Indian mobile number (10 digits starting 6-9)
pub fn indian_mobile(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if crate::identity::is_valid_mobile(value) {
        Ok(())
    } else {
        Err(garde::Error::new("must be 10 digits starting with 6-9"))
    }
}

/// Validator: postal pincode (6 digits, non-zero first digit)
pub fn pincode(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if crate::identity::is_valid_pincode(value) {
        Ok(())
    } else {
        Err(garde::Error::new(
            "must be 6 digits starting with a non-zero digit",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_id_validator() {
        assert!(voter_id("ABC1234567", &()).is_ok());
        assert!(voter_id("ABC123456", &()).is_err());
    }

    #[test]
    fn test_pan_validator() {
        assert!(pan_number("ABCDE1234F", &()).is_ok());
        assert!(pan_number("ABCDE1234", &()).is_err());
    }

    #[test]
    fn test_aadhaar_validator() {
        assert!(aadhaar_number("123456789012", &()).is_ok());
        assert!(aadhaar_number("123", &()).is_err());
    }

    #[test]
    fn test_mobile_validator() {
        assert!(indian_mobile("9876543210", &()).is_ok());
        assert!(indian_mobile("1876543210", &()).is_err());
    }

    #[test]
    fn test_pincode_validator() {
        assert!(pincode("400001", &()).is_ok());
        assert!(pincode("040001", &()).is_err());
    }
}
