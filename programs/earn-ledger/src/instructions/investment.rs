use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::{InvestmentConfirmed, InvestmentRejected, InvestmentSubmitted};
use crate::state::{LedgerConfig, Member};

use super::admin_gate::*;
use super::maintenance::settle_accrual;

// ─── SUBMIT ─────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct SubmitInvestment<'info> {
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

pub fn handle_submit_investment(
    ctx: Context<SubmitInvestment>,
    amount: u64,
    proof: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    let member = &mut ctx.accounts.member;
    let member_key = member.key();

    // An investment whose lock has ended must release its principal
    // before a new one can be submitted
    settle_accrual(config, member_key, member, now)?;
    member.submit_investment(amount, &proof, now, &config.params)?;

    emit!(InvestmentSubmitted {
        member: member_key,
        owner: member.owner,
        amount,
        proof: member
            .pending_investment
            .as_ref()
            .map(|pending| pending.proof.clone())
            .unwrap_or_default(),
    });

    Ok(())
}

// ─── CONFIRM ────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ConfirmInvestment<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

pub fn handle_confirm_investment(ctx: Context<ConfirmInvestment>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.gate.config;
    let member = &mut ctx.accounts.member;
    let member_key = member.key();

    settle_accrual(config, member_key, member, now)?;
    let principal = member.confirm_investment(now, &config.params)?;
    config.record_investment(principal)?;

    let unlock_time = match member.investment.as_ref() {
        Some(investment) => investment.unlock_time()?,
        None => return err!(LedgerError::NotFound),
    };

    emit!(InvestmentConfirmed {
        member: member_key,
        owner: member.owner,
        principal,
        unlock_time,
    });

    msg!(
        "Investment of {} confirmed for {}, locked until {}",
        principal,
        member.owner,
        unlock_time
    );

    Ok(())
}

// ─── REJECT ─────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RejectInvestment<'info> {
    pub gate: AdminGate<'info>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, member.owner.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

pub fn handle_reject_investment(ctx: Context<RejectInvestment>) -> Result<()> {
    let member = &mut ctx.accounts.member;
    let rejected = member.reject_investment()?;

    emit!(InvestmentRejected {
        member: member.key(),
        owner: member.owner,
        amount: rejected.principal,
    });

    Ok(())
}
