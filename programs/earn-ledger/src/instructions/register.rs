use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::MemberRegistered;
use crate::state::{LedgerConfig, Member, ReferralLink};

// ─── REGISTER ───────────────────────────────────────────────────

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(
        mut,
        seeds = [LEDGER_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_active @ LedgerError::LedgerPaused,
    )]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        init,
        seeds = [MEMBER_SEED, owner.key().as_ref()],
        bump,
        payer = owner,
        space = Member::SIZE,
    )]
    pub member: Account<'info, Member>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register(ctx: Context<Register>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    ctx.accounts
        .member
        .open(owner, None, now, ctx.bumps.member);
    ctx.accounts.config.record_member()?;

    emit!(MemberRegistered {
        member: ctx.accounts.member.key(),
        owner,
        referrer: None,
        timestamp: now,
    });

    Ok(())
}

// ─── REGISTER WITH REFERRER ─────────────────────────────────────

#[derive(Accounts)]
pub struct RegisterReferred<'info> {
    #[account(
        mut,
        seeds = [LEDGER_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_active @ LedgerError::LedgerPaused,
    )]
    pub config: Account<'info, LedgerConfig>,

    #[account(
        init,
        seeds = [MEMBER_SEED, owner.key().as_ref()],
        bump,
        payer = owner,
        space = Member::SIZE,
    )]
    pub member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, referrer_member.owner.as_ref()],
        bump = referrer_member.bump,
        constraint = referrer_member.owner != owner.key() @ LedgerError::SelfReferral,
    )]
    pub referrer_member: Account<'info, Member>,

    #[account(
        init,
        seeds = [
            REFERRAL_LINK_SEED,
            referrer_member.owner.as_ref(),
            &referrer_member.referral_count.to_le_bytes(),
        ],
        bump,
        payer = owner,
        space = ReferralLink::SIZE,
    )]
    pub referral_link: Account<'info, ReferralLink>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register_referred(ctx: Context<RegisterReferred>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let referrer = ctx.accounts.referrer_member.owner;

    ctx.accounts
        .member
        .open(owner, Some(referrer), now, ctx.bumps.member);
    ctx.accounts.config.record_member()?;

    let index = ctx.accounts.referrer_member.record_referral()?;

    let link = &mut ctx.accounts.referral_link;
    link.referrer = referrer;
    link.referee = owner;
    link.index = index;
    link.created_at = now;
    link.bump = ctx.bumps.referral_link;

    emit!(MemberRegistered {
        member: ctx.accounts.member.key(),
        owner,
        referrer: Some(referrer),
        timestamp: now,
    });

    msg!("Member {} referred by {} (#{})", owner, referrer, index);

    Ok(())
}
