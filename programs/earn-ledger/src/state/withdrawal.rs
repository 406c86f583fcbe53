use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::utils::checked_text;

use super::{LedgerParams, Member};

/// A payout request awaiting admin approval. The balance is debited only
/// on approval.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PendingWithdrawal {
    pub amount: u64,
    /// Off-chain address the admin pays out to
    pub destination: String,
    pub requested_time: i64,
}

impl PendingWithdrawal {
    pub const SIZE: usize = 8 // amount
        + 4 + MAX_DESTINATION_LEN   // destination
        + 8;   // requested_time
}

impl Member {
    /// Bonuses, settled yield and released principal. Locked principal is
    /// never part of it.
    pub fn withdrawable(&self) -> u64 {
        self.balance
    }

    pub fn request_withdrawal(
        &mut self,
        destination: &str,
        amount: u64,
        now: i64,
        params: &LedgerParams,
    ) -> Result<()> {
        require!(amount > 0, LedgerError::InvalidAmount);
        require!(amount >= params.min_withdraw, LedgerError::BelowMinimum);
        require!(
            self.withdrawable() >= params.min_withdraw,
            LedgerError::BelowMinimum
        );
        require!(
            amount <= self.withdrawable(),
            LedgerError::InsufficientBalance
        );
        require!(
            self.pending_withdrawal.is_none(),
            LedgerError::DuplicatePending
        );

        self.pending_withdrawal = Some(PendingWithdrawal {
            amount,
            destination: checked_text(
                destination,
                MAX_DESTINATION_LEN,
                LedgerError::DestinationTooLong,
            )?,
            requested_time: now,
        });
        Ok(())
    }

    /// Clears the request and debits its amount, floored at a zero
    /// balance. Returns the request and the amount actually debited.
    pub fn approve_withdrawal(&mut self) -> Result<(PendingWithdrawal, u64)> {
        let request = self
            .pending_withdrawal
            .take()
            .ok_or(LedgerError::NotFound)?;
        let debited = self.debit_clamped(request.amount);
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(debited)
            .ok_or(LedgerError::MathOverflow)?;
        Ok((request, debited))
    }

    pub fn reject_withdrawal(&mut self) -> Result<PendingWithdrawal> {
        Ok(self
            .pending_withdrawal
            .take()
            .ok_or(LedgerError::NotFound)?)
    }
}
