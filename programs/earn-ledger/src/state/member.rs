use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::utils::checked_text;

use super::{Investment, PendingInvestment, PendingWithdrawal};

/// One ledger row per user wallet.
#[account]
#[derive(Debug)]
pub struct Member {
    /// The user's wallet
    pub owner: Pubkey,
    /// Wallet of the member who referred this one, fixed at registration
    pub referrer: Option<Pubkey>,
    /// Number of `ReferralLink`s created with this member as referrer
    pub referral_count: u32,
    /// Withdrawable amount: bonuses, accrued yield and released principal
    pub balance: u64,
    /// Lifetime bonus credits, never reduced by withdrawals
    pub earned_from_referrals: u64,
    pub pairing_left: u16,
    pub pairing_right: u16,
    /// UTC day the pairing counters belong to
    pub pairing_day: i64,
    pub membership_paid: bool,
    /// Set once the referrer has been paid for this member's membership
    pub referrer_rewarded: bool,
    pub pending_payment_proof: Option<String>,
    pub investment: Option<Investment>,
    pub pending_investment: Option<PendingInvestment>,
    pub pending_withdrawal: Option<PendingWithdrawal>,
    /// Lifetime confirmed principal
    pub total_invested: u64,
    /// Lifetime approved withdrawals
    pub total_withdrawn: u64,
    pub created_at: i64,
    /// PDA bump
    pub bump: u8,
    /// Reserved for future upgrades
    pub _reserved: [u8; 32],
}

impl Member {
    pub const SIZE: usize = 8  // discriminator
        + 32   // owner
        + 1 + 32   // referrer
        + 4    // referral_count
        + 8    // balance
        + 8    // earned_from_referrals
        + 2    // pairing_left
        + 2    // pairing_right
        + 8    // pairing_day
        + 1    // membership_paid
        + 1    // referrer_rewarded
        + 1 + 4 + MAX_PROOF_LEN    // pending_payment_proof
        + 1 + Investment::SIZE
        + 1 + PendingInvestment::SIZE
        + 1 + PendingWithdrawal::SIZE
        + 8    // total_invested
        + 8    // total_withdrawn
        + 8    // created_at
        + 1    // bump
        + 32;  // _reserved

    pub fn open(&mut self, owner: Pubkey, referrer: Option<Pubkey>, now: i64, bump: u8) {
        self.owner = owner;
        self.referrer = referrer;
        self.referral_count = 0;
        self.balance = 0;
        self.earned_from_referrals = 0;
        self.pairing_left = 0;
        self.pairing_right = 0;
        self.pairing_day = crate::utils::utc_day(now);
        self.membership_paid = false;
        self.referrer_rewarded = false;
        self.pending_payment_proof = None;
        self.investment = None;
        self.pending_investment = None;
        self.pending_withdrawal = None;
        self.total_invested = 0;
        self.total_withdrawn = 0;
        self.created_at = now;
        self.bump = bump;
        self._reserved = [0u8; 32];
    }

    /// Reads a member row passed outside the typed accounts list
    /// (remaining accounts of a bulk pass).
    pub fn load(info: &AccountInfo) -> Result<Member> {
        require_keys_eq!(*info.owner, crate::ID, LedgerError::NotRegistered);
        let data = info.try_borrow_data()?;
        let member = Member::try_deserialize(&mut &data[..])
            .map_err(|_| LedgerError::NotRegistered)?;

        let expected = Pubkey::create_program_address(
            &[MEMBER_SEED, member.owner.as_ref(), &[member.bump]],
            &crate::ID,
        )
        .map_err(|_| LedgerError::NotRegistered)?;
        require_keys_eq!(expected, *info.key, LedgerError::NotRegistered);

        Ok(member)
    }

    /// Writes a row loaded with [`Member::load`] back to its account.
    pub fn persist(&self, info: &AccountInfo) -> Result<()> {
        require!(info.is_writable, LedgerError::PersistenceFailure);
        let mut data = info
            .try_borrow_mut_data()
            .map_err(|_| LedgerError::PersistenceFailure)?;
        // Write through a local cursor; the account's own slice must keep
        // its full length for later loads in the same instruction
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
            .map_err(|_| LedgerError::PersistenceFailure)?;
        Ok(())
    }

    /// Zeroes the pairing counters when they belong to an earlier day.
    /// Returns true if a reset happened.
    pub fn roll_pairing_day(&mut self, today: i64) -> bool {
        if self.pairing_day >= today {
            return false;
        }
        self.pairing_left = 0;
        self.pairing_right = 0;
        self.pairing_day = today;
        true
    }

    pub(crate) fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Debits up to `amount`, flooring the balance at zero. Returns the
    /// amount actually debited.
    pub(crate) fn debit_clamped(&mut self, amount: u64) -> u64 {
        let debited = self.balance.min(amount);
        self.balance -= debited;
        debited
    }

    // ─── MEMBERSHIP ─────────────────────────────────────────────────

    pub fn submit_payment_proof(&mut self, proof: &str) -> Result<()> {
        require!(!self.membership_paid, LedgerError::AlreadyConfirmed);
        require!(
            self.pending_payment_proof.is_none(),
            LedgerError::DuplicatePending
        );
        let proof = checked_text(proof, MAX_PROOF_LEN, LedgerError::ProofTooLong)?;
        self.pending_payment_proof = Some(proof);
        Ok(())
    }

    /// Marks the membership paid. The returned flag is true at most once
    /// per member: when the referrer still has to be credited.
    pub fn confirm_membership(&mut self) -> Result<MembershipConfirmation> {
        require!(!self.membership_paid, LedgerError::AlreadyConfirmed);
        let proof = self
            .pending_payment_proof
            .take()
            .ok_or(LedgerError::NotFound)?;
        self.membership_paid = true;

        let reward_referrer = self.referrer.is_some() && !self.referrer_rewarded;
        if reward_referrer {
            self.referrer_rewarded = true;
        }

        Ok(MembershipConfirmation {
            proof,
            reward_referrer,
        })
    }

    pub fn reject_payment(&mut self) -> Result<String> {
        let proof = self
            .pending_payment_proof
            .take()
            .ok_or(LedgerError::NotFound)?;
        Ok(proof)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MembershipConfirmation {
    pub proof: String,
    pub reward_referrer: bool,
}
