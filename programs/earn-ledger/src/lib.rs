use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::LedgerParams;

declare_id!("4AYZjzQgVNYhrVCAETm18FfMBoM6WnpBMzNaikpZRQ97");

#[program]
pub mod earn_ledger {
    use super::*;

    // ===== SETUP =====

    /// Create the config singleton. Without `params`, defaults are scaled
    /// to the settlement mint's decimals.
    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        params: Option<LedgerParams>,
    ) -> Result<()> {
        instructions::initialize_ledger::handle_initialize_ledger(ctx, params)
    }

    pub fn update_ledger_config(
        ctx: Context<UpdateLedgerConfig>,
        params: Option<LedgerParams>,
        is_active: Option<bool>,
        new_admin: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_ledger_config::handle_update_ledger_config(
            ctx, params, is_active, new_admin,
        )
    }

    // ===== MEMBERS =====

    pub fn register(ctx: Context<Register>) -> Result<()> {
        instructions::register::handle_register(ctx)
    }

    /// Register under an existing member; appends to the referrer's list
    pub fn register_referred(ctx: Context<RegisterReferred>) -> Result<()> {
        instructions::register::handle_register_referred(ctx)
    }

    // ===== MEMBERSHIP =====

    pub fn submit_payment_proof(ctx: Context<SubmitPaymentProof>, proof: String) -> Result<()> {
        instructions::membership::handle_submit_payment_proof(ctx, proof)
    }

    /// Admin: mark membership paid and credit the referrer exactly once
    pub fn confirm_membership(ctx: Context<ConfirmMembership>) -> Result<()> {
        instructions::membership::handle_confirm_membership(ctx)
    }

    pub fn reject_payment(ctx: Context<RejectPayment>) -> Result<()> {
        instructions::membership::handle_reject_payment(ctx)
    }

    // ===== INVESTMENT =====

    pub fn submit_investment(
        ctx: Context<SubmitInvestment>,
        amount: u64,
        proof: String,
    ) -> Result<()> {
        instructions::investment::handle_submit_investment(ctx, amount, proof)
    }

    pub fn confirm_investment(ctx: Context<ConfirmInvestment>) -> Result<()> {
        instructions::investment::handle_confirm_investment(ctx)
    }

    pub fn reject_investment(ctx: Context<RejectInvestment>) -> Result<()> {
        instructions::investment::handle_reject_investment(ctx)
    }

    // ===== WITHDRAWAL =====

    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        destination: String,
        amount: u64,
    ) -> Result<()> {
        instructions::withdrawal::handle_request_withdrawal(ctx, destination, amount)
    }

    /// Admin: debit the balance after paying out off-chain
    pub fn approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
        instructions::withdrawal::handle_approve_withdrawal(ctx)
    }

    pub fn reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
        instructions::withdrawal::handle_reject_withdrawal(ctx)
    }

    // ===== MAINTENANCE =====

    /// Admin: daily pairing reset plus yield accrual.
    /// Pass writable Member PDAs in remaining_accounts
    pub fn run_daily_maintenance<'info>(
        ctx: Context<'_, '_, 'info, 'info, RunDailyMaintenance<'info>>,
    ) -> Result<()> {
        instructions::maintenance::handle_run_daily_maintenance(ctx)
    }
}
