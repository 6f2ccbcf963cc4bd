use crate::errors::ErrorCode;
use crate::states::PoolInfo;
use anchor_lang::prelude::*;

/// A staker's position in one pool
///
/// Reward-per-share model:
/// - staked_amount: stake tokens held in the pool vault for this owner
/// - reward_debt: staked_amount * acc_reward_per_share / PRECISION at last sync
/// - pending = staked_amount * acc_reward_per_share / PRECISION - reward_debt
///
/// Positions are never closed; a fully withdrawn position keeps its account.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Position {
    pub owner: Pubkey,        // Staker public key
    pub pool_index: u32,      // Pool this position belongs to
    pub staked_amount: u64,   // Stake tokens deposited
    pub reward_debt: u128,    // Accumulated reward baseline at last sync
    pub claimed_total: u64,   // Total rewards harvested so far
    pub bump: u8,             // PDA bump
}

impl Position {
    pub const PREFIX_SEED: &'static [u8] = b"position";

    pub fn new(owner: Pubkey, pool_index: u32, bump: u8) -> Self {
        Self {
            owner,
            pool_index,
            staked_amount: 0,
            reward_debt: 0,
            claimed_total: 0,
            bump,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// staked_amount * acc_reward_per_share / PRECISION
    pub fn accumulated_reward(&self, acc_reward_per_share: u128) -> Result<u128> {
        let accumulated = (self.staked_amount as u128)
            .checked_mul(acc_reward_per_share)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_div(PoolInfo::ACC_REWARD_PRECISION)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok(accumulated)
    }

    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        let pending = self
            .accumulated_reward(acc_reward_per_share)?
            .checked_sub(self.reward_debt)
            .ok_or(ErrorCode::CalculationOverflow)?;
        u64::try_from(pending).map_err(|_| ErrorCode::CalculationOverflow.into())
    }

    pub fn update_reward_debt(&mut self, acc_reward_per_share: u128) -> Result<()> {
        self.reward_debt = self.accumulated_reward(acc_reward_per_share)?;
        Ok(())
    }
}
