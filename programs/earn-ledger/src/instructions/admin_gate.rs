use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LedgerError;
use crate::state::LedgerConfig;

/// Capability check shared by every admin-only instruction: the config
/// singleton plus a signer that must be its admin.
#[derive(Accounts)]
pub struct AdminGate<'info> {
    #[account(
        mut,
        seeds = [LEDGER_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_admin(&admin.key()) @ LedgerError::Unauthorized,
    )]
    pub config: Account<'info, LedgerConfig>,

    pub admin: Signer<'info>,
}
