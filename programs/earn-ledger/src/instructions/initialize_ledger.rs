use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::events::LedgerInitialized;
use crate::state::{LedgerConfig, LedgerParams};
use crate::utils::utc_day;

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        seeds = [LEDGER_CONFIG_SEED],
        bump,
        payer = admin,
        space = LedgerConfig::SIZE,
    )]
    pub config: Account<'info, LedgerConfig>,

    /// Mint the off-chain payments are made in; its decimals scale the defaults
    pub settlement_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_ledger(
    ctx: Context<InitializeLedger>,
    params: Option<LedgerParams>,
) -> Result<()> {
    let params = match params {
        Some(params) => params,
        None => LedgerParams::with_decimals(ctx.accounts.settlement_mint.decimals)?,
    };
    params.validate()?;

    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.settlement_mint = ctx.accounts.settlement_mint.key();
    config.params = params;
    config.is_active = true;
    config.last_reset_day = utc_day(now);
    config.total_members = 0;
    config.total_paid_members = 0;
    config.total_active_principal = 0;
    config.total_bonuses_paid = 0;
    config.total_yield_credited = 0;
    config.total_withdrawn = 0;
    config.scheduled_pairs_cap = None;
    config.scheduled_pairs_day = 0;
    config.bump = ctx.bumps.config;
    config._reserved = [0u8; 53];

    emit!(LedgerInitialized {
        config: config.key(),
        admin: config.admin,
        settlement_mint: config.settlement_mint,
        membership_fee: params.membership_fee,
    });

    Ok(())
}
