use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::utils::checked_text;

use super::{LedgerParams, Member};

/// A confirmed deposit earning daily yield until its lock ends.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Investment {
    pub principal: u64,
    /// Confirmation time; yield counts whole days from here
    pub start_time: i64,
    pub lock_duration: i64,
    /// Daily rate in force when the investment was confirmed
    pub daily_rate_bps: u16,
    /// Yield already folded into the member's balance
    pub accrued_withdrawn: u64,
    pub confirmed: bool,
    /// Set once the principal has moved into the balance after unlock
    pub principal_released: bool,
}

impl Investment {
    pub const SIZE: usize = 8 // principal
        + 8    // start_time
        + 8    // lock_duration
        + 2    // daily_rate_bps
        + 8    // accrued_withdrawn
        + 1    // confirmed
        + 1;   // principal_released

    pub fn unlock_time(&self) -> Result<i64> {
        Ok(self
            .start_time
            .checked_add(self.lock_duration)
            .ok_or(LedgerError::MathOverflow)?)
    }

    pub fn is_unlocked(&self, now: i64) -> Result<bool> {
        Ok(now >= self.unlock_time()?)
    }

    /// Total yield earned by `now`: principal × rate × whole days, with the
    /// day count capped at the lock period.
    pub fn total_yield(&self, now: i64) -> Result<u64> {
        if now <= self.start_time {
            return Ok(0);
        }
        let elapsed = (now - self.start_time).min(self.lock_duration);
        let days = elapsed / SECONDS_PER_DAY;

        // u128 intermediate: principal * bps * days can exceed u64
        let total = (self.principal as u128)
            .checked_mul(self.daily_rate_bps as u128)
            .ok_or(LedgerError::MathOverflow)?
            .checked_mul(days as u128)
            .ok_or(LedgerError::MathOverflow)?
            / BASIS_POINTS as u128;

        Ok(u64::try_from(total).map_err(|_| LedgerError::MathOverflow)?)
    }
}

/// A deposit awaiting admin verification of its proof.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PendingInvestment {
    pub principal: u64,
    pub proof: String,
    pub submitted_time: i64,
}

impl PendingInvestment {
    pub const SIZE: usize = 8 // principal
        + 4 + MAX_PROOF_LEN   // proof
        + 8;   // submitted_time
}

/// Ledger effect of one accrual pass over a member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accrual {
    pub yield_credited: u64,
    pub principal_released: u64,
}

impl Member {
    /// True while a confirmed investment still holds principal.
    pub fn has_locked_principal(&self) -> bool {
        self.investment
            .as_ref()
            .is_some_and(|investment| investment.confirmed && !investment.principal_released)
    }

    pub fn submit_investment(
        &mut self,
        amount: u64,
        proof: &str,
        now: i64,
        params: &LedgerParams,
    ) -> Result<()> {
        require!(
            amount > 0 && amount >= params.min_invest,
            LedgerError::InvalidAmount
        );
        require!(
            self.pending_investment.is_none(),
            LedgerError::DuplicatePending
        );
        require!(!self.has_locked_principal(), LedgerError::InvestmentLocked);

        self.pending_investment = Some(PendingInvestment {
            principal: amount,
            proof: checked_text(proof, MAX_PROOF_LEN, LedgerError::ProofTooLong)?,
            submitted_time: now,
        });
        Ok(())
    }

    /// Starts the lock on the pending deposit. Returns the confirmed principal.
    pub fn confirm_investment(&mut self, now: i64, params: &LedgerParams) -> Result<u64> {
        require!(self.pending_investment.is_some(), LedgerError::NotFound);
        require!(!self.has_locked_principal(), LedgerError::InvestmentLocked);
        let pending = self
            .pending_investment
            .take()
            .ok_or(LedgerError::NotFound)?;

        self.total_invested = self
            .total_invested
            .checked_add(pending.principal)
            .ok_or(LedgerError::MathOverflow)?;
        // A previous, already released investment is replaced
        self.investment = Some(Investment {
            principal: pending.principal,
            start_time: now,
            lock_duration: params.lock_duration,
            daily_rate_bps: params.daily_rate_bps,
            accrued_withdrawn: 0,
            confirmed: true,
            principal_released: false,
        });
        Ok(pending.principal)
    }

    pub fn reject_investment(&mut self) -> Result<PendingInvestment> {
        Ok(self
            .pending_investment
            .take()
            .ok_or(LedgerError::NotFound)?)
    }

    /// Folds yield earned up to `now` into the balance, and the principal
    /// too once the lock has ended. Safe to call any number of times: only
    /// the difference against `accrued_withdrawn` is credited.
    pub fn accrue(&mut self, now: i64) -> Result<Accrual> {
        let mut accrual = Accrual::default();
        let Some(investment) = self.investment.as_mut() else {
            return Ok(accrual);
        };
        if !investment.confirmed || investment.principal_released {
            return Ok(accrual);
        }

        let total_yield = investment.total_yield(now)?;
        if total_yield > investment.accrued_withdrawn {
            accrual.yield_credited = total_yield - investment.accrued_withdrawn;
            investment.accrued_withdrawn = total_yield;
        }

        if investment.is_unlocked(now)? {
            investment.principal_released = true;
            accrual.principal_released = investment.principal;
        }

        let credit = accrual
            .yield_credited
            .checked_add(accrual.principal_released)
            .ok_or(LedgerError::MathOverflow)?;
        self.credit(credit)?;
        Ok(accrual)
    }
}
