//! Invoice status vocabulary and monetary amount validation.

use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing status of a monthly invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Remind,
}

/// All valid invoice status strings.
pub const VALID_INVOICE_STATUSES: &[&str] = &["pending", "paid", "overdue", "remind"];

/// Maximum number of fractional digits in an invoice amount.
pub const AMOUNT_MAX_SCALE: u32 = 2;

/// Exclusive upper bound on an invoice amount: 6 integer digits.
pub const AMOUNT_LIMIT: u32 = 1_000_000;

impl InvoiceStatus {
    /// Return the status as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Remind => "remind",
        }
    }

    /// Parse a status from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            "remind" => Ok(Self::Remind),
            _ => Err(CoreError::Validation(format!(
                "Invalid invoice status '{s}'. Must be one of: {}",
                VALID_INVOICE_STATUSES.join(", ")
            ))),
        }
    }
}

/// Validate a monetary amount against the `NUMERIC(8,2)` column bounds:
/// non-negative, at most 2 fractional digits, at most 6 integer digits.
///
/// Trailing zeros do not count against the scale, so `10.100` passes while
/// `10.105` does not.
pub fn validate_amount(amount: Decimal) -> Result<(), CoreError> {
    if amount.is_sign_negative() {
        return Err(CoreError::Validation(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    if amount.normalize().scale() > AMOUNT_MAX_SCALE {
        return Err(CoreError::Validation(format!(
            "amount must have at most {AMOUNT_MAX_SCALE} decimal places, got {amount}"
        )));
    }
    if amount >= Decimal::from(AMOUNT_LIMIT) {
        return Err(CoreError::Validation(format!(
            "amount must be below {AMOUNT_LIMIT}, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn round_trips_all_statuses() {
        for &s in VALID_INVOICE_STATUSES {
            assert_eq!(InvoiceStatus::from_str(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(InvoiceStatus::from_str("unpaid").is_err());
    }

    #[test]
    fn accepts_typical_amounts() {
        assert!(validate_amount(dec("0")).is_ok());
        assert!(validate_amount(dec("350.00")).is_ok());
        assert!(validate_amount(dec("999999.99")).is_ok());
        // Trailing zeros beyond two places are still two significant places.
        assert!(validate_amount(dec("10.100")).is_ok());
    }

    #[test]
    fn rejects_negative_amount() {
        assert!(validate_amount(dec("-0.01")).is_err());
    }

    #[test]
    fn rejects_excess_scale() {
        assert!(validate_amount(dec("10.105")).is_err());
    }

    #[test]
    fn rejects_too_many_integer_digits() {
        assert!(validate_amount(dec("1000000")).is_err());
        assert!(validate_amount(dec("1000000.00")).is_err());
    }
}
