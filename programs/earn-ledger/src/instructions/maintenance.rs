use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::events::{
    DailyMaintenanceCompleted, PairingCountersReset, PrincipalUnlocked, YieldAccrued,
};
use crate::state::{Accrual, LedgerConfig, Member};
use crate::utils::utc_day;

use super::admin_gate::*;

/// Accrues one member up to `now` and books the result on the config
/// counters. Shared by the daily pass and by instructions that need a
/// settled balance first.
pub(crate) fn settle_accrual(
    config: &mut LedgerConfig,
    member_key: Pubkey,
    member: &mut Member,
    now: i64,
) -> Result<Accrual> {
    let accrual = member.accrue(now)?;
    config.record_accrual(&accrual)?;

    if accrual.yield_credited > 0 {
        emit!(YieldAccrued {
            member: member_key,
            amount: accrual.yield_credited,
            total_accrued: member
                .investment
                .as_ref()
                .map_or(0, |investment| investment.accrued_withdrawn),
        });
    }
    if accrual.principal_released > 0 {
        emit!(PrincipalUnlocked {
            member: member_key,
            principal: accrual.principal_released,
        });
    }

    Ok(accrual)
}

/// One member of the daily pass: roll the pairing counters to `today`,
/// settle accrual and write the row back.
pub(crate) fn maintain_member(
    config: &mut LedgerConfig,
    member_info: &AccountInfo,
    today: i64,
    now: i64,
) -> Result<Accrual> {
    let mut member = Member::load(member_info)?;

    member.roll_pairing_day(today);
    let accrual = settle_accrual(config, *member_info.key, &mut member, now)?;

    member.persist(member_info)?;
    Ok(accrual)
}

#[derive(Accounts)]
pub struct RunDailyMaintenance<'info> {
    pub gate: AdminGate<'info>,
}

/// remaining_accounts:
/// - writable `Member` PDAs to roll over and accrue
///
/// The member table is processed in batches, one transaction each. The
/// global reset marker moves on the first batch of a day; later batches
/// and repeated runs only touch members that still need it.
pub fn handle_run_daily_maintenance<'info>(
    ctx: Context<'_, '_, 'info, 'info, RunDailyMaintenance<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let today = utc_day(now);
    let config = &mut ctx.accounts.gate.config;

    if config.mark_reset(today) {
        emit!(PairingCountersReset { day: today });
        msg!("Daily pairing counters reset for day {}", today);
    }

    let mut members_processed: u32 = 0;
    let mut yield_credited: u64 = 0;
    let mut principal_released: u64 = 0;

    for member_info in ctx.remaining_accounts.iter() {
        let accrual = maintain_member(config, member_info, today, now)?;

        members_processed = members_processed
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
        yield_credited = yield_credited
            .checked_add(accrual.yield_credited)
            .ok_or(LedgerError::MathOverflow)?;
        principal_released = principal_released
            .checked_add(accrual.principal_released)
            .ok_or(LedgerError::MathOverflow)?;
    }

    emit!(DailyMaintenanceCompleted {
        day: today,
        members_processed,
        yield_credited,
        principal_released,
    });

    msg!(
        "Maintenance day {}: {} members, {} yield, {} principal released",
        today,
        members_processed,
        yield_credited,
        principal_released
    );

    Ok(())
}
