//! Validation rules for contributions, request values and quorum.

/// Validation error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount is zero or negative
    InvalidAmount,
    /// Amount is below the campaign minimum
    BelowMinimum,
}

/// Validates a minimum contribution. Zero is allowed, negatives are not.
pub fn validate_minimum(minimum_contribution: i128) -> Result<(), ValidationError> {
    if minimum_contribution < 0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

/// Validates a transfer amount.
/// Ensures the amount is strictly positive.
pub fn validate_amount(amount: i128) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

/// Validates a contribution against the campaign minimum (inclusive).
pub fn validate_contribution(amount: i128, minimum_contribution: i128) -> Result<(), ValidationError> {
    validate_amount(amount)?;
    if amount < minimum_contribution {
        return Err(ValidationError::BelowMinimum);
    }
    Ok(())
}

/// Returns true when strictly more than half of the approvers voted.
///
/// With no approvers at all the threshold can never be met.
pub fn has_majority(approval_count: u32, approvers_count: u32) -> bool {
    (approval_count as u64) * 2 > approvers_count as u64
}
