use anchor_lang::prelude::*;

use crate::errors::LedgerError;

use super::{LedgerParams, Member};

/// One entry of a referrer's ordered referral list.
/// Seeds: [REFERRAL_LINK_SEED, referrer, index.to_le_bytes()]
#[account]
#[derive(Debug)]
pub struct ReferralLink {
    /// Wallet of the referrer
    pub referrer: Pubkey,
    /// Wallet of the referred member
    pub referee: Pubkey,
    /// Position in the referrer's list, starting at zero
    pub index: u32,
    pub created_at: i64,
    /// PDA bump
    pub bump: u8,
}

impl ReferralLink {
    pub const SIZE: usize = 8  // discriminator
        + 32   // referrer
        + 32   // referee
        + 4    // index
        + 8    // created_at
        + 1;   // bump
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairingSide {
    Left,
    Right,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReferralBonus {
    pub direct: u64,
    pub pairing: u64,
    /// Side that took the placement; `None` once both sides hit the daily cap
    pub side: Option<PairingSide>,
}

impl ReferralBonus {
    pub fn total(&self) -> Result<u64> {
        Ok(self
            .direct
            .checked_add(self.pairing)
            .ok_or(LedgerError::MathOverflow)?)
    }
}

impl Member {
    /// Reserves the next slot in the referral list and returns its index.
    pub fn record_referral(&mut self) -> Result<u32> {
        let index = self.referral_count;
        self.referral_count = index.checked_add(1).ok_or(LedgerError::MathOverflow)?;
        Ok(index)
    }

    /// Credits the direct bonus and, if today's cap allows, one pairing
    /// placement on the weaker side (ties go left).
    pub fn credit_referral_bonus(
        &mut self,
        params: &LedgerParams,
        today: i64,
    ) -> Result<ReferralBonus> {
        self.roll_pairing_day(today);

        let mut bonus = ReferralBonus {
            direct: params.direct_bonus,
            ..Default::default()
        };

        let (side, counter) = if self.pairing_left <= self.pairing_right {
            (PairingSide::Left, &mut self.pairing_left)
        } else {
            (PairingSide::Right, &mut self.pairing_right)
        };
        if *counter < params.max_pairs_per_day {
            *counter += 1;
            bonus.pairing = params.pairing_bonus;
            bonus.side = Some(side);
        }

        let total = bonus.total()?;
        self.credit(total)?;
        self.earned_from_referrals = self
            .earned_from_referrals
            .checked_add(total)
            .ok_or(LedgerError::MathOverflow)?;

        Ok(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::*;

    #[test]
    fn test_referral_link_size() {
        let link = ReferralLink {
            referrer: ALICE,
            referee: BOB,
            index: 7,
            created_at: 1,
            bump: 255,
        };
        let mut bytes = Vec::new();
        AnchorSerialize::serialize(&link, &mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, ReferralLink::SIZE);
    }

    #[test]
    fn referral_indices_are_sequential() {
        let mut alice = member_fixture(ALICE, None);
        assert_eq!(alice.record_referral().unwrap(), 0);
        assert_eq!(alice.record_referral().unwrap(), 1);
        assert_eq!(alice.referral_count, 2);
    }

    #[test]
    fn confirmed_referral_pays_direct_and_left_pairing() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);

        let bonus = alice.credit_referral_bonus(&params, 0).unwrap();

        assert_eq!(bonus.direct, 20);
        assert_eq!(bonus.pairing, 5);
        assert_eq!(bonus.side, Some(PairingSide::Left));
        assert_eq!(alice.balance, 25);
        assert_eq!(alice.earned_from_referrals, 25);
        assert_eq!((alice.pairing_left, alice.pairing_right), (1, 0));
    }

    #[test]
    fn placements_alternate_to_the_weaker_side() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);

        let sides: Vec<_> = (0..4)
            .map(|_| alice.credit_referral_bonus(&params, 0).unwrap().side)
            .collect();

        assert_eq!(
            sides,
            vec![
                Some(PairingSide::Left),
                Some(PairingSide::Right),
                Some(PairingSide::Left),
                Some(PairingSide::Right),
            ]
        );
        assert_eq!((alice.pairing_left, alice.pairing_right), (2, 2));
    }

    #[test]
    fn pairing_cap_drops_bonus_silently() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);
        alice.pairing_left = params.max_pairs_per_day;
        alice.pairing_right = params.max_pairs_per_day;

        let bonus = alice.credit_referral_bonus(&params, 0).unwrap();

        assert_eq!(bonus.pairing, 0);
        assert_eq!(bonus.side, None);
        assert_eq!(alice.balance, params.direct_bonus);
        assert_eq!(alice.pairing_left, params.max_pairs_per_day);
        assert_eq!(alice.pairing_right, params.max_pairs_per_day);
    }

    #[test]
    fn pairing_credits_per_day_never_exceed_cap() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);
        let cap = params.max_pairs_per_day as usize;

        let paid = (0..cap * 3)
            .filter(|_| alice.credit_referral_bonus(&params, 0).unwrap().pairing > 0)
            .count();

        assert_eq!(paid, cap * 2);
        assert!(alice.pairing_left as usize <= cap);
        assert!(alice.pairing_right as usize <= cap);
    }

    #[test]
    fn new_day_reopens_pairing() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);
        alice.pairing_left = params.max_pairs_per_day;
        alice.pairing_right = params.max_pairs_per_day;

        let bonus = alice.credit_referral_bonus(&params, 1).unwrap();

        assert_eq!(bonus.side, Some(PairingSide::Left));
        assert_eq!((alice.pairing_left, alice.pairing_right), (1, 0));
        assert_eq!(alice.pairing_day, 1);
    }

    #[test]
    fn repeated_membership_confirmation_rewards_referrer_once() {
        let params = params_fixture();
        let mut alice = member_fixture(ALICE, None);
        let mut bob = member_fixture(BOB, Some(ALICE));
        bob.submit_payment_proof("tx-bob").unwrap();

        for _ in 0..2 {
            if let Ok(confirmation) = bob.confirm_membership() {
                if confirmation.reward_referrer {
                    alice.credit_referral_bonus(&params, 0).unwrap();
                }
            }
        }

        assert_eq!(alice.balance, params.direct_bonus + params.pairing_bonus);
        assert_eq!(alice.pairing_left, 1);
    }
}
