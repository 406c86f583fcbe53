use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::{
    MembershipConfirmed, PaymentProofSubmitted, PaymentRejected, ReferralBonusCredited,
};
use crate::state::{LedgerConfig, Member, MembershipConfirmation, ReferralBonus};
use crate::utils::utc_day;

use super::admin_gate::*;

// ─── SUBMIT PROOF ───────────────────────────────────────────────

#[derive(Accounts)]
pub struct SubmitPaymentProof<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_active @ LedgerError::LedgerPaused,
    )]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, owner.key().as_ref()],
        bump = member.bump,
        constraint = member.owner == owner.key() @ LedgerError::Unauthorized,
    )]
    pub member: Account<'info, Member>,

    pub owner: Signer<'info>,
}

pub fn handle_submit_payment_proof(ctx: Context<SubmitPaymentProof>, proof: String) -> Result<()> {
    let member = &mut ctx.accounts.member;
    member.submit_payment_proof(&proof)?;

    emit!(PaymentProofSubmitted {
        member: member.key(),
        owner: member.owner,
        proof: member.pending_payment_proof.clone().unwrap_or_default(),
        membership_fee: ctx.accounts.config.params.membership_fee,
    });

    Ok(())
}

// ─── CONFIRM ────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ConfirmMembership<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,

    /// Required when the member was referred; must be the referrer's row
    #[account(mut)]
    pub referrer_member: Option<Account<'info, Member>>,
}

/// Picks the account to credit for `referee`'s membership. It must be
/// present and belong to the stored referrer.
pub(crate) fn referrer_to_credit<'a>(
    referee: &Member,
    referrer_member: Option<&'a mut Member>,
) -> Result<&'a mut Member> {
    let referrer = referee.referrer.ok_or(LedgerError::NotRegistered)?;
    let referrer_member = referrer_member.ok_or(LedgerError::NotRegistered)?;
    require_keys_eq!(
        referrer_member.owner,
        referrer,
        LedgerError::ReferrerMismatch
    );
    Ok(referrer_member)
}

/// Marks `member` paid and pays its referrer if this is the first
/// confirmation that owes one.
pub(crate) fn confirm_and_reward(
    config: &mut LedgerConfig,
    member: &mut Member,
    referrer_member: Option<&mut Member>,
    today: i64,
) -> Result<(MembershipConfirmation, Option<ReferralBonus>)> {
    let confirmation = member.confirm_membership()?;
    config.record_paid_member()?;

    if !confirmation.reward_referrer {
        return Ok((confirmation, None));
    }

    let referrer_member = referrer_to_credit(member, referrer_member)?;
    let params = config.params_for_day(today);
    let bonus = referrer_member.credit_referral_bonus(&params, today)?;
    config.record_bonus(bonus.total()?)?;

    Ok((confirmation, Some(bonus)))
}

pub fn handle_confirm_membership(ctx: Context<ConfirmMembership>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.gate.config;
    let member = &mut ctx.accounts.member;
    let member_key = member.key();

    let (confirmation, bonus) = confirm_and_reward(
        config,
        member,
        ctx.accounts.referrer_member.as_deref_mut(),
        utc_day(now),
    )?;

    emit!(MembershipConfirmed {
        member: member_key,
        owner: member.owner,
        proof: confirmation.proof,
    });

    if let (Some(bonus), Some(referrer)) = (bonus, member.referrer) {
        emit!(ReferralBonusCredited {
            referrer,
            referee: member.owner,
            direct_bonus: bonus.direct,
            pairing_bonus: bonus.pairing,
            pairing_side: bonus.side,
        });

        msg!(
            "Referrer {} credited {} direct + {} pairing",
            referrer,
            bonus.direct,
            bonus.pairing
        );
    }

    Ok(())
}

// ─── REJECT ─────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RejectPayment<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

pub fn handle_reject_payment(ctx: Context<RejectPayment>) -> Result<()> {
    let member = &mut ctx.accounts.member;
    let proof = member.reject_payment()?;

    emit!(PaymentRejected {
        member: member.key(),
        owner: member.owner,
    });

    msg!("Payment proof {} rejected for {}", proof, member.owner);

    Ok(())
}
