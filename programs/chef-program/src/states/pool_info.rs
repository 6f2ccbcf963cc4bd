use crate::errors::ErrorCode;
use crate::states::EmissionSchedule;
use anchor_lang::prelude::*;

/// One entry of the pool arena held by [`crate::states::RewardLedger`].
///
/// The pool index is its position in the arena and is never reused.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PoolInfo {
    pub stake_mint: Pubkey,          // Token accepted by this pool (immutable)
    pub stake_vault: Pubkey,         // Ledger-owned custody account for stake tokens
    pub weight: u64,                 // Allocation weight
    pub last_accrual_slot: u64,      // Slot the accumulator was last brought current
    pub acc_reward_per_share: u128,  // Reward per staked unit, scaled by ACC_REWARD_PRECISION
    pub total_staked: u64,           // Sum of all positions' staked_amount
    pub vault_bump: u8,              // Bump for the stake vault PDA
}

impl PoolInfo {
    pub const ACC_REWARD_PRECISION: u128 = 1_000_000_000_000;

    pub fn new(
        stake_mint: Pubkey,
        stake_vault: Pubkey,
        vault_bump: u8,
        weight: u64,
        last_accrual_slot: u64,
    ) -> Self {
        Self {
            stake_mint,
            stake_vault,
            weight,
            last_accrual_slot,
            acc_reward_per_share: 0,
            total_staked: 0,
            vault_bump,
        }
    }

    /// Accumulator value if the pool were accrued at `now`, together with the
    /// reward that accrual would mint. Does not mutate the pool.
    pub fn projected_acc_reward_per_share(
        &self,
        now: u64,
        schedule: &EmissionSchedule,
        total_weight: u64,
    ) -> Result<(u128, u64)> {
        if now <= self.last_accrual_slot || self.total_staked == 0 {
            return Ok((self.acc_reward_per_share, 0));
        }

        let reward = schedule.pool_reward(self.last_accrual_slot, now, self.weight, total_weight)?;

        // delta = reward * PRECISION / total_staked
        let delta = (reward as u128)
            .checked_mul(Self::ACC_REWARD_PRECISION)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_div(self.total_staked as u128)
            .ok_or(ErrorCode::CalculationOverflow)?;

        let acc = self
            .acc_reward_per_share
            .checked_add(delta)
            .ok_or(ErrorCode::CalculationOverflow)?;

        Ok((acc, reward))
    }

    /// Bring the accumulator current and return the reward to mint.
    pub fn accrue(
        &mut self,
        now: u64,
        schedule: &EmissionSchedule,
        total_weight: u64,
    ) -> Result<u64> {
        if now <= self.last_accrual_slot {
            return Ok(0);
        }

        let (acc, reward) = self.projected_acc_reward_per_share(now, schedule, total_weight)?;
        self.acc_reward_per_share = acc;
        self.last_accrual_slot = now;

        Ok(reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> EmissionSchedule {
        EmissionSchedule {
            reward_per_slot: 100,
            start_slot: 110,
            bonus_end_slot: 210,
            bonus_multiplier: 10,
        }
    }

    fn pool(last_accrual_slot: u64, total_staked: u64) -> PoolInfo {
        let mut pool = PoolInfo::new(Pubkey::new_unique(), Pubkey::new_unique(), 254, 100, last_accrual_slot);
        pool.total_staked = total_staked;
        pool
    }

    #[test]
    fn accrue_is_noop_at_or_before_checkpoint() {
        let mut p = pool(150, 200);
        assert_eq!(p.accrue(150, &schedule(), 100).unwrap(), 0);
        assert_eq!(p.accrue(140, &schedule(), 100).unwrap(), 0);
        assert_eq!(p.last_accrual_slot, 150);
        assert_eq!(p.acc_reward_per_share, 0);
    }

    #[test]
    fn empty_pool_advances_checkpoint_without_reward() {
        let mut p = pool(110, 0);
        assert_eq!(p.accrue(130, &schedule(), 100).unwrap(), 0);
        assert_eq!(p.last_accrual_slot, 130);
        assert_eq!(p.acc_reward_per_share, 0);
    }

    #[test]
    fn accrue_scales_reward_per_share() {
        let mut p = pool(110, 200);
        assert_eq!(p.accrue(120, &schedule(), 100).unwrap(), 10_000);
        assert_eq!(p.acc_reward_per_share, 10_000 * PoolInfo::ACC_REWARD_PRECISION / 200);
        assert_eq!(p.last_accrual_slot, 120);
    }

    #[test]
    fn projection_matches_accrual_without_mutating() {
        let p = pool(110, 300);
        let (projected, reward) = p.projected_acc_reward_per_share(175, &schedule(), 300).unwrap();
        assert_eq!(p.acc_reward_per_share, 0);

        let mut q = p.clone();
        assert_eq!(q.accrue(175, &schedule(), 300).unwrap(), reward);
        assert_eq!(q.acc_reward_per_share, projected);
    }
}
