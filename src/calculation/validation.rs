//! Input validation shared by the attendance and promotion operations.

use rust_decimal::Decimal;

use crate::error::{RecordsError, RecordsResult};

/// Decimal places allowed on a money amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Largest money amount that fits 10 digits with 2 decimal places.
pub const MAX_MONEY: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 0);

/// Rejects blank text.
pub fn require_non_empty(field: &str, value: &str) -> RecordsResult<()> {
    if value.trim().is_empty() {
        return Err(RecordsError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Rejects negative amounts, more than 2 decimal places, or more than 10 digits.
///
/// # Examples
///
/// ```
/// use employee_records::calculation::require_money;
/// use rust_decimal::Decimal;
///
/// assert!(require_money("salary", Decimal::new(5500050, 2)).is_ok());
/// assert!(require_money("salary", Decimal::new(-1, 0)).is_err());
/// assert!(require_money("salary", Decimal::new(1001, 3)).is_err());
/// ```
pub fn require_money(field: &str, value: Decimal) -> RecordsResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RecordsError::validation(field, "must not be negative"));
    }
    if value.normalize().scale() > MONEY_DECIMAL_PLACES {
        return Err(RecordsError::validation(
            field,
            format!("must have at most {} decimal places", MONEY_DECIMAL_PLACES),
        ));
    }
    if value.trunc() > MAX_MONEY {
        return Err(RecordsError::validation(
            field,
            format!("must not exceed {}", MAX_MONEY),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_blank_text_rejected() {
        let err = require_non_empty("reason", "   ").unwrap_err();
        assert_eq!(err, RecordsError::validation("reason", "must not be empty"));
        assert!(require_non_empty("reason", "Exceeded targets").is_ok());
    }

    #[test]
    fn test_zero_salary_allowed() {
        assert!(require_money("new_salary", Decimal::ZERO).is_ok());
        assert!(require_money("new_salary", Decimal::from_str("-0.00").unwrap()).is_ok());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = require_money("new_salary", Decimal::from_str("-0.01").unwrap()).unwrap_err();
        assert!(matches!(err, RecordsError::Validation { ref field, .. } if field == "new_salary"));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        assert!(require_money("salary", Decimal::from_str("100.5000").unwrap()).is_ok());
        assert!(require_money("salary", Decimal::from_str("100.505").unwrap()).is_err());
    }

    #[test]
    fn test_ten_digit_limit() {
        assert!(require_money("salary", Decimal::from_str("99999999.99").unwrap()).is_ok());
        assert!(require_money("salary", Decimal::from_str("100000000.00").unwrap()).is_err());
    }
}
