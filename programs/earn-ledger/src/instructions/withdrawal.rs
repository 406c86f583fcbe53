use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::{WithdrawalApproved, WithdrawalRejected, WithdrawalRequested};
use crate::state::{LedgerConfig, Member};

use super::admin_gate::*;
use super::maintenance::settle_accrual;

// ─── REQUEST ────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RequestWithdrawal<'info> {
    #[account(
        mut,
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

pub fn handle_request_withdrawal(
    ctx: Context<RequestWithdrawal>,
    destination: String,
    amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    let member = &mut ctx.accounts.member;
    let member_key = member.key();

    settle_accrual(config, member_key, member, now)?;
    member.request_withdrawal(&destination, amount, now, &config.params)?;

    emit!(WithdrawalRequested {
        member: member_key,
        owner: member.owner,
        amount,
        destination: member
            .pending_withdrawal
            .as_ref()
            .map(|request| request.destination.clone())
            .unwrap_or_default(),
    });

    Ok(())
}

// ─── APPROVE ────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ApproveWithdrawal<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

pub fn handle_approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.gate.config;
    let member = &mut ctx.accounts.member;
    let member_key = member.key();

    settle_accrual(config, member_key, member, now)?;
    let (request, debited) = member.approve_withdrawal()?;
    config.record_withdrawal(debited)?;

    if debited < request.amount {
        msg!(
            "Withdrawal for {} clamped: requested {}, debited {}",
            member.owner,
            request.amount,
            debited
        );
    }

    // The payout itself is sent off-chain by the admin to `destination`
    emit!(WithdrawalApproved {
        member: member_key,
        owner: member.owner,
        amount: debited,
        destination: request.destination,
    });

    Ok(())
}

// ─── REJECT ─────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RejectWithdrawal<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

pub fn handle_reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
    let member = &mut ctx.accounts.member;
    let rejected = member.reject_withdrawal()?;

    emit!(WithdrawalRejected {
        member: member.key(),
        owner: member.owner,
        amount: rejected.amount,
    });

    Ok(())
}
