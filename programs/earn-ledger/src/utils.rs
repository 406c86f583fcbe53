use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::errors::LedgerError;

/// UTC calendar day number (days since the unix epoch) of a timestamp.
pub fn utc_day(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY)
}

/// Trims a user-supplied text field and enforces its length bound.
pub fn checked_text(value: &str, max_len: usize, too_long: LedgerError) -> Result<String> {
    let value = value.trim();
    require!(!value.is_empty(), LedgerError::EmptyField);
    if value.len() > max_len {
        return Err(too_long.into());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::assert_ledger_error;

    #[test]
    fn utc_day_rolls_at_midnight() {
        assert_eq!(utc_day(0), 0);
        assert_eq!(utc_day(SECONDS_PER_DAY - 1), 0);
        assert_eq!(utc_day(SECONDS_PER_DAY), 1);
        // Pre-epoch timestamps still floor toward the earlier day
        assert_eq!(utc_day(-1), -1);
    }

    #[test]
    fn checked_text_trims_and_bounds() {
        assert_eq!(
            checked_text("  tx123 \n", 8, LedgerError::ProofTooLong).unwrap(),
            "tx123"
        );
        assert_ledger_error(
            checked_text("   ", 8, LedgerError::ProofTooLong),
            LedgerError::EmptyField,
        );
        assert_ledger_error(
            checked_text("123456789", 8, LedgerError::ProofTooLong),
            LedgerError::ProofTooLong,
        );
    }

    #[test]
    fn checked_text_reports_the_callers_error() {
        assert_ledger_error(
            checked_text(&"d".repeat(9), 8, LedgerError::DestinationTooLong),
            LedgerError::DestinationTooLong,
        );
    }
}
