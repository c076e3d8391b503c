use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::MIN_PHONE_NUMBER_LEN;

lazy_static! {
    /// Regex for currency codes: exactly 3 alphanumeric characters
    /// - Valid: "USD", "840", "X12"
    /// - Invalid: "US", "EURO", "U$D"
    pub static ref CURRENCY_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{3}$").unwrap();
}

/// Currency must be exactly a 3-character alphanumeric code.
pub fn validate_currency(value: &str) -> Result<(), ValidationError> {
    if CURRENCY_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("currency")
            .with_message("Currency must be a 3-character alphanumeric code".into()))
    }
}

/// Phone numbers must be at least 8 characters and contain no letters.
/// Digits, "+", spaces, and separators are accepted.
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PHONE_NUMBER_LEN {
        return Err(ValidationError::new("phone_number")
            .with_message("Phone number must be at least 8 characters".into()));
    }
    if value.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::new("phone_number")
            .with_message("Phone number must not contain letters".into()));
    }
    Ok(())
}

/// Prices are non-negative.
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(
            ValidationError::new("price").with_message("Price must not be negative".into())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_valid() {
        assert!(validate_currency("USD").is_ok());
        assert!(validate_currency("eur").is_ok());
        assert!(validate_currency("840").is_ok());
        assert!(validate_currency("X12").is_ok());
    }

    #[test]
    fn test_currency_invalid() {
        assert!(validate_currency("US").is_err()); // too short
        assert!(validate_currency("EURO").is_err()); // too long
        assert!(validate_currency("U$D").is_err()); // symbol
        assert!(validate_currency("").is_err()); // empty
        assert!(validate_currency("US ").is_err()); // whitespace
    }

    #[test]
    fn test_phone_number_valid() {
        assert!(validate_phone_number("+919739630033").is_ok());
        assert!(validate_phone_number("12345678").is_ok());
        assert!(validate_phone_number("+1 555 123-4567").is_ok());
    }

    #[test]
    fn test_phone_number_invalid() {
        assert!(validate_phone_number("1234567").is_err()); // too short
        assert!(validate_phone_number("12345abc").is_err()); // letters
        assert!(validate_phone_number("CALL-ME-NOW").is_err()); // letters
        assert!(validate_phone_number("").is_err()); // empty
    }

    #[test]
    fn test_price_sign() {
        assert!(validate_price(&Decimal::new(4025, 2)).is_ok());
        assert!(validate_price(&Decimal::ZERO).is_ok());
        assert!(validate_price(&Decimal::new(-1, 0)).is_err());
    }
}
