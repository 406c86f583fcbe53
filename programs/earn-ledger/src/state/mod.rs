pub mod config;
pub mod investment;
pub mod member;
pub mod referral;
pub mod withdrawal;

pub use config::*;
pub use investment::*;
pub use member::*;
pub use referral::*;
pub use withdrawal::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fmt::Debug;

    use anchor_lang::error::Error;
    use anchor_lang::prelude::*;

    use super::*;
    use crate::constants::*;
    use crate::errors::LedgerError;

    pub const ADMIN: Pubkey = Pubkey::new_from_array([1u8; 32]);
    pub const ALICE: Pubkey = Pubkey::new_from_array([2u8; 32]);
    pub const BOB: Pubkey = Pubkey::new_from_array([3u8; 32]);

    /// Whole-unit amounts (zero decimals) keep the scenarios readable.
    pub fn params_fixture() -> LedgerParams {
        LedgerParams::with_decimals(0).unwrap()
    }

    pub fn config_fixture() -> LedgerConfig {
        LedgerConfig {
            admin: ADMIN,
            settlement_mint: Pubkey::new_from_array([9u8; 32]),
            params: params_fixture(),
            is_active: true,
            last_reset_day: 0,
            total_members: 0,
            total_paid_members: 0,
            total_active_principal: 0,
            total_bonuses_paid: 0,
            total_yield_credited: 0,
            total_withdrawn: 0,
            scheduled_pairs_cap: None,
            scheduled_pairs_day: 0,
            bump: 255,
            _reserved: [0u8; 53],
        }
    }

    pub fn member_fixture(owner: Pubkey, referrer: Option<Pubkey>) -> Member {
        let mut member = Member {
            owner,
            referrer: None,
            referral_count: 0,
            balance: 0,
            earned_from_referrals: 0,
            pairing_left: 0,
            pairing_right: 0,
            pairing_day: 0,
            membership_paid: false,
            referrer_rewarded: false,
            pending_payment_proof: None,
            investment: None,
            pending_investment: None,
            pending_withdrawal: None,
            total_invested: 0,
            total_withdrawn: 0,
            created_at: 0,
            bump: 0,
            _reserved: [0u8; 32],
        };
        member.open(owner, referrer, 0, 254);
        member
    }

    /// Backing storage for a member PDA passed as a raw `AccountInfo`.
    pub struct MemberAccount {
        pub key: Pubkey,
        pub owner: Pubkey,
        pub lamports: u64,
        pub data: Vec<u8>,
    }

    impl MemberAccount {
        /// Stores `member` at its derived address, fixing up the bump.
        pub fn new(mut member: Member) -> Self {
            let (key, bump) = Pubkey::find_program_address(
                &[MEMBER_SEED, member.owner.as_ref()],
                &crate::ID,
            );
            member.bump = bump;

            let mut data = Vec::with_capacity(Member::SIZE);
            member.try_serialize(&mut data).unwrap();
            data.resize(Member::SIZE, 0);

            Self {
                key,
                owner: crate::ID,
                lamports: 1_000_000,
                data,
            }
        }

        pub fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    pub fn assert_ledger_error<T: Debug>(result: Result<T>, expected: LedgerError) {
        match result.expect_err("expected a ledger error") {
            Error::AnchorError(err) => assert_eq!(
                err.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                err.error_name
            ),
            Error::ProgramError(err) => panic!("expected {:?}, got {:?}", expected, err),
        }
    }

    #[test]
    fn fixture_defaults_match_earn_program() {
        let params = params_fixture();
        assert_eq!(params.direct_bonus, DEFAULT_DIRECT_BONUS);
        assert_eq!(params.pairing_bonus, DEFAULT_PAIRING_BONUS);
        assert_eq!(params.min_withdraw, DEFAULT_MIN_WITHDRAW);
        assert_eq!(params.lock_duration, DEFAULT_LOCK_DAYS * SECONDS_PER_DAY);
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::fixtures::*;
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::instructions::membership::confirm_and_reward;
    use crate::utils::utc_day;

    const DAY: i64 = SECONDS_PER_DAY;

    fn confirm(config: &mut LedgerConfig, referee: &mut Member, referrer: &mut Member, now: i64) {
        confirm_and_reward(config, referee, Some(referrer), utc_day(now)).unwrap();
    }

    #[test]
    fn referral_then_invest_then_withdraw() {
        let mut config = config_fixture();
        let mut alice = member_fixture(ALICE, None);
        let mut bob = member_fixture(BOB, Some(ALICE));
        alice.record_referral().unwrap();

        bob.submit_payment_proof("tx-bob").unwrap();
        confirm(&mut config, &mut bob, &mut alice, 0);
        assert_eq!(alice.balance, 25);
        assert_eq!(config.total_bonuses_paid, 25);
        assert_eq!(config.total_paid_members, 1);

        let params = config.params;
        alice.submit_investment(100, "tx-inv", 0, &params).unwrap();
        let principal = alice.confirm_investment(0, &params).unwrap();
        config.record_investment(principal).unwrap();

        let accrual = alice.accrue(3 * DAY).unwrap();
        config.record_accrual(&accrual).unwrap();
        assert_eq!(alice.balance, 28);

        alice.request_withdrawal("0xabc", 28, 3 * DAY, &params).unwrap();
        let (_, debited) = alice.approve_withdrawal().unwrap();
        config.record_withdrawal(debited).unwrap();
        assert_eq!(alice.balance, 0);
        // Lifetime referral earnings survive the withdrawal
        assert_eq!(alice.earned_from_referrals, 25);

        let accrual = alice.accrue(30 * DAY).unwrap();
        config.record_accrual(&accrual).unwrap();
        assert_eq!(alice.balance, 27 + 100);
        assert_eq!(config.total_yield_credited, 30);
        assert_eq!(config.total_active_principal, 0);
        assert_eq!(config.total_withdrawn, 28);
    }

    #[test]
    fn daily_pass_twice_on_same_day_changes_nothing() {
        let mut config = config_fixture();
        let mut alice = member_fixture(ALICE, None);
        let params = config.params;
        alice.submit_investment(1_000, "tx", 0, &params).unwrap();
        alice.confirm_investment(0, &params).unwrap();
        alice.pairing_left = 3;

        let now = 2 * DAY + 100;
        let run = |config: &mut LedgerConfig, member: &mut Member| {
            config.mark_reset(utc_day(now));
            member.roll_pairing_day(utc_day(now));
            let accrual = member.accrue(now).unwrap();
            config.record_accrual(&accrual).unwrap();
        };

        run(&mut config, &mut alice);
        let after_first = (alice.balance, alice.pairing_left, config.last_reset_day);
        alice.pairing_left = 1;
        run(&mut config, &mut alice);

        assert_eq!(after_first, (20, 0, 2));
        assert_eq!(alice.balance, 20);
        // The second run must not wipe placements made after the first
        assert_eq!(alice.pairing_left, 1);
        assert_eq!(config.total_yield_credited, 20);
    }

    #[test]
    fn lowering_pairing_cap_mid_day_keeps_counters_bounded() {
        let mut config = config_fixture();
        let mut alice = member_fixture(ALICE, None);
        for _ in 0..10 {
            let params = config.params_for_day(0);
            alice.credit_referral_bonus(&params, 0).unwrap();
        }
        assert_eq!((alice.pairing_left, alice.pairing_right), (5, 5));

        let mut lowered = config.params;
        lowered.max_pairs_per_day = 3;
        config.apply_params(lowered, 0).unwrap();

        let today_cap = config.params_for_day(0).max_pairs_per_day;
        assert!(alice.pairing_left <= today_cap && alice.pairing_right <= today_cap);

        for _ in 0..10 {
            let params = config.params_for_day(1);
            alice.credit_referral_bonus(&params, 1).unwrap();
        }
        assert_eq!((alice.pairing_left, alice.pairing_right), (3, 3));
    }

    #[test]
    fn balance_stays_non_negative_across_mixed_operations() {
        let config = config_fixture();
        let params = config.params;
        let mut alice = member_fixture(ALICE, None);
        let mut seed: u64 = 0x5eed;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            seed >> 33
        };

        let mut now = 0;
        for _ in 0..500 {
            now += (next() % (DAY as u64 / 2)) as i64;
            match next() % 6 {
                0 => {
                    alice.credit_referral_bonus(&params, utc_day(now)).unwrap();
                }
                1 => {
                    let _ = alice.submit_investment(50 + next() % 500, "tx", now, &params);
                }
                2 => {
                    let _ = alice.confirm_investment(now, &params);
                }
                3 => {
                    alice.accrue(now).unwrap();
                }
                4 => {
                    let _ = alice.request_withdrawal("0xabc", 20 + next() % 200, now, &params);
                }
                _ => {
                    // Another path may have shrunk the balance since the request
                    alice.balance = alice.balance.saturating_sub(next() % 30);
                    let _ = alice.approve_withdrawal();
                }
            }
            let investment_ok = alice.investment.as_ref().map_or(true, |investment| {
                investment.accrued_withdrawn <= investment.total_yield(now).unwrap()
            });
            assert!(investment_ok);
            assert!(alice.pairing_left <= params.max_pairs_per_day);
            assert!(alice.pairing_right <= params.max_pairs_per_day);
        }
    }
}
