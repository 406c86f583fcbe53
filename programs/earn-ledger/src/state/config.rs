use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;

use super::Accrual;

/// Tunable ledger parameters. Amounts are base units of the settlement mint.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerParams {
    /// Credited to the referrer on each confirmed direct referral
    pub direct_bonus: u64,
    /// Credited to the referrer for each filled pairing slot
    pub pairing_bonus: u64,
    /// Fee the member pays off-chain before submitting payment proof
    pub membership_fee: u64,
    pub min_invest: u64,
    pub min_withdraw: u64,
    /// Cap on each of the left/right counters per UTC day
    pub max_pairs_per_day: u16,
    /// Daily yield on confirmed principal, in basis points
    pub daily_rate_bps: u16,
    /// Seconds the principal stays locked after confirmation
    pub lock_duration: i64,
}

impl LedgerParams {
    pub const SIZE: usize = 8 // direct_bonus
        + 8    // pairing_bonus
        + 8    // membership_fee
        + 8    // min_invest
        + 8    // min_withdraw
        + 2    // max_pairs_per_day
        + 2    // daily_rate_bps
        + 8;   // lock_duration

    /// Default parameters scaled to a mint with `decimals` decimals.
    pub fn with_decimals(decimals: u8) -> Result<Self> {
        let one_token = 10u64
            .checked_pow(decimals as u32)
            .ok_or(LedgerError::MathOverflow)?;
        let scale = |whole: u64| whole.checked_mul(one_token).ok_or(LedgerError::MathOverflow);

        Ok(Self {
            direct_bonus: scale(DEFAULT_DIRECT_BONUS)?,
            pairing_bonus: scale(DEFAULT_PAIRING_BONUS)?,
            membership_fee: scale(DEFAULT_MEMBERSHIP_FEE)?,
            min_invest: scale(DEFAULT_MIN_INVEST)?,
            min_withdraw: scale(DEFAULT_MIN_WITHDRAW)?,
            max_pairs_per_day: DEFAULT_MAX_PAIRS_PER_DAY,
            daily_rate_bps: DEFAULT_DAILY_RATE_BPS,
            lock_duration: DEFAULT_LOCK_DAYS * SECONDS_PER_DAY,
        })
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_invest > 0 && self.min_withdraw > 0,
            LedgerError::InvalidConfig
        );
        require!(
            self.daily_rate_bps <= MAX_DAILY_RATE_BPS,
            LedgerError::InvalidConfig
        );
        // Yield is counted in whole days, so a shorter lock never accrues
        require!(
            self.lock_duration >= SECONDS_PER_DAY,
            LedgerError::InvalidConfig
        );
        Ok(())
    }
}

#[account]
#[derive(Debug)]
pub struct LedgerConfig {
    /// The only key allowed to confirm, reject and run maintenance
    pub admin: Pubkey,
    /// Mint the off-chain payments are denominated in
    pub settlement_mint: Pubkey,
    pub params: LedgerParams,
    /// User submissions are refused while false
    pub is_active: bool,
    /// UTC day of the last global pairing reset
    pub last_reset_day: i64,
    pub total_members: u64,
    pub total_paid_members: u64,
    /// Confirmed principal not yet released to balances
    pub total_active_principal: u64,
    /// Direct plus pairing bonuses (lifetime counter)
    pub total_bonuses_paid: u64,
    pub total_yield_credited: u64,
    pub total_withdrawn: u64,
    /// Lower pairing cap waiting for `scheduled_pairs_day`
    pub scheduled_pairs_cap: Option<u16>,
    /// UTC day from which `scheduled_pairs_cap` applies
    pub scheduled_pairs_day: i64,
    /// PDA bump seed
    pub bump: u8,
    /// Reserved for future upgrades
    pub _reserved: [u8; 53],
}

impl LedgerConfig {
    pub const SIZE: usize = 8  // discriminator
        + 32   // admin
        + 32   // settlement_mint
        + LedgerParams::SIZE
        + 1    // is_active
        + 8    // last_reset_day
        + 8    // total_members
        + 8    // total_paid_members
        + 8    // total_active_principal
        + 8    // total_bonuses_paid
        + 8    // total_yield_credited
        + 8    // total_withdrawn
        + 1 + 2    // scheduled_pairs_cap
        + 8    // scheduled_pairs_day
        + 1    // bump
        + 53;  // _reserved

    pub fn is_admin(&self, actor: &Pubkey) -> bool {
        self.admin == *actor
    }

    /// Moves the global reset marker to `today`. Returns false when the
    /// reset for `today` (or a later day) has already been recorded.
    pub fn mark_reset(&mut self, today: i64) -> bool {
        if today <= self.last_reset_day {
            return false;
        }
        if self.scheduled_pairs_cap.is_some() && today >= self.scheduled_pairs_day {
            self.params = self.params_for_day(today);
            self.scheduled_pairs_cap = None;
        }
        self.last_reset_day = today;
        true
    }

    /// Parameters in force on UTC day `day`, including a scheduled cap.
    pub fn params_for_day(&self, day: i64) -> LedgerParams {
        let mut params = self.params;
        if let Some(cap) = self.scheduled_pairs_cap {
            if day >= self.scheduled_pairs_day {
                params.max_pairs_per_day = cap;
            }
        }
        params
    }

    /// Validates and installs new parameters on UTC day `today`. Counters
    /// placed today were bounded by today's cap, so a lower cap only takes
    /// effect from the next day.
    pub fn apply_params(&mut self, params: LedgerParams, today: i64) -> Result<()> {
        params.validate()?;
        let current_cap = self.params_for_day(today).max_pairs_per_day;

        let mut installed = params;
        if params.max_pairs_per_day < current_cap {
            installed.max_pairs_per_day = current_cap;
            self.scheduled_pairs_cap = Some(params.max_pairs_per_day);
            self.scheduled_pairs_day = today
                .checked_add(1)
                .ok_or(LedgerError::MathOverflow)?;
        } else {
            self.scheduled_pairs_cap = None;
        }
        self.params = installed;
        Ok(())
    }

    pub fn record_member(&mut self) -> Result<()> {
        self.total_members = self
            .total_members
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn record_paid_member(&mut self) -> Result<()> {
        self.total_paid_members = self
            .total_paid_members
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn record_bonus(&mut self, amount: u64) -> Result<()> {
        self.total_bonuses_paid = self
            .total_bonuses_paid
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn record_investment(&mut self, principal: u64) -> Result<()> {
        self.total_active_principal = self
            .total_active_principal
            .checked_add(principal)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn record_accrual(&mut self, accrual: &Accrual) -> Result<()> {
        self.total_yield_credited = self
            .total_yield_credited
            .checked_add(accrual.yield_credited)
            .ok_or(LedgerError::MathOverflow)?;
        self.total_active_principal = self
            .total_active_principal
            .checked_sub(accrual.principal_released)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}
