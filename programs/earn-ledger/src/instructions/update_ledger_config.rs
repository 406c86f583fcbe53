use anchor_lang::prelude::*;

use crate::events::LedgerConfigUpdated;
use crate::state::LedgerParams;
use crate::utils::utc_day;

use super::admin_gate::*;

#[derive(Accounts)]
pub struct UpdateLedgerConfig<'info> {
    pub gate: AdminGate<'info>,
}

pub fn handle_update_ledger_config(
    ctx: Context<UpdateLedgerConfig>,
    params: Option<LedgerParams>,
    is_active: Option<bool>,
    new_admin: Option<Pubkey>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.gate.config;

    // Existing investments keep the rate and lock they were confirmed with
    if let Some(params) = params {
        let today = utc_day(now);
        config.apply_params(params, today)?;
        if let Some(cap) = config.scheduled_pairs_cap {
            msg!("Pairing cap lowered to {} from day {}", cap, config.scheduled_pairs_day);
        }
    }

    if let Some(active) = is_active {
        config.is_active = active;
    }

    if let Some(admin) = new_admin {
        msg!("Ledger admin handed over: {} -> {}", config.admin, admin);
        config.admin = admin;
    }

    emit!(LedgerConfigUpdated {
        config: config.key(),
        admin: config.admin,
        is_active: config.is_active,
    });

    Ok(())
}
