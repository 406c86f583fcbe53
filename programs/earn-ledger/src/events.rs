use anchor_lang::prelude::*;

use crate::state::PairingSide;

#[event]
pub struct LedgerInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub settlement_mint: Pubkey,
    pub membership_fee: u64,
}

#[event]
pub struct LedgerConfigUpdated {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub is_active: bool,
}

#[event]
pub struct MemberRegistered {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub referrer: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct PaymentProofSubmitted {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub proof: String,
    pub membership_fee: u64,
}

#[event]
pub struct MembershipConfirmed {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub proof: String,
}

#[event]
pub struct PaymentRejected {
    pub member: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct ReferralBonusCredited {
    pub referrer: Pubkey,
    pub referee: Pubkey,
    pub direct_bonus: u64,
    pub pairing_bonus: u64,
    /// `None` when both sides were at the daily cap
    pub pairing_side: Option<PairingSide>,
}

#[event]
pub struct InvestmentSubmitted {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub proof: String,
}

#[event]
pub struct InvestmentConfirmed {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub principal: u64,
    pub unlock_time: i64,
}

#[event]
pub struct InvestmentRejected {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct YieldAccrued {
    pub member: Pubkey,
    pub amount: u64,
    pub total_accrued: u64,
}

#[event]
pub struct PrincipalUnlocked {
    pub member: Pubkey,
    pub principal: u64,
}

#[event]
pub struct WithdrawalRequested {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub destination: String,
}

#[event]
pub struct WithdrawalApproved {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub destination: String,
}

#[event]
pub struct WithdrawalRejected {
    pub member: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PairingCountersReset {
    pub day: i64,
}

#[event]
pub struct DailyMaintenanceCompleted {
    pub day: i64,
    pub members_processed: u32,
    pub yield_credited: u64,
    pub principal_released: u64,
}
