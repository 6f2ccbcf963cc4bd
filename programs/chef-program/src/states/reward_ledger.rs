use crate::errors::ErrorCode;
use crate::states::{EmissionSchedule, PoolInfo, Position};
use anchor_lang::prelude::*;

/// Liquidity-mining reward ledger
///
/// Lazily updated accumulator pattern:
/// - every pool keeps acc_reward_per_share, brought current on touch
/// - reward for the elapsed window is minted to the ledger's reward vault
/// - each position tracks reward_debt so only newly accrued reward is paid
///
/// Pools live in an append-only arena; the index is the public identifier.
#[account]
#[derive(InitSpace)]
pub struct RewardLedger {
    // Configuration
    pub admin: Pubkey,               // Admin allowed to add pools and change weights
    pub reward_mint: Pubkey,         // Reward token; mint authority must be this PDA
    pub reward_vault: Pubkey,        // Ledger-owned reward token account
    pub reward_per_slot: u64,        // Reward emitted per slot across all pools
    pub start_slot: u64,             // No accrual before this slot
    pub bonus_end_slot: u64,         // Bonus multiplier applies strictly before this slot
    pub bonus_multiplier: u64,       // Reward multiplier during the bonus window

    // Accounting
    pub total_weight: u64,           // Sum of all pool weights
    pub total_minted: u64,           // Reward minted since initialization

    // PDA bumps
    pub bump: u8,                    // Bump for RewardLedger PDA
    pub reward_vault_bump: u8,       // Bump for reward vault PDA

    #[max_len(64)]
    pub pools: Vec<PoolInfo>,
}

/// Reward movements produced by a position update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Reward the accrual minted into the reward vault
    pub minted: u64,
    /// Pending reward owed to the position owner
    pub harvested: u64,
}

impl RewardLedger {
    pub const PREFIX_SEED: &'static [u8] = b"reward_ledger";
    pub const REWARD_VAULT_SEED: &'static [u8] = b"reward_vault";
    pub const STAKE_VAULT_SEED: &'static [u8] = b"stake_vault";

    pub const BONUS_MULTIPLIER: u64 = 10;
    pub const MAX_POOLS: usize = 64;

    pub fn schedule(&self) -> EmissionSchedule {
        EmissionSchedule {
            reward_per_slot: self.reward_per_slot,
            start_slot: self.start_slot,
            bonus_end_slot: self.bonus_end_slot,
            bonus_multiplier: self.bonus_multiplier,
        }
    }

    pub fn pool_count(&self) -> u32 {
        self.pools.len() as u32
    }

    pub fn pool(&self, pool_index: u32) -> Result<&PoolInfo> {
        self.pools
            .get(pool_index as usize)
            .ok_or_else(|| ErrorCode::PoolNotFound.into())
    }

    fn pool_mut(&mut self, pool_index: u32) -> Result<&mut PoolInfo> {
        self.pools
            .get_mut(pool_index as usize)
            .ok_or_else(|| ErrorCode::PoolNotFound.into())
    }

    fn record_minted(&mut self, amount: u64) -> Result<()> {
        self.total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        Ok(())
    }

    /// Accrue one pool; returns the reward to mint.
    pub fn update_pool(&mut self, pool_index: u32, now: u64) -> Result<u64> {
        let schedule = self.schedule();
        let total_weight = self.total_weight;
        let minted = self.pool_mut(pool_index)?.accrue(now, &schedule, total_weight)?;
        self.record_minted(minted)?;
        Ok(minted)
    }

    /// Accrue every pool; returns the total reward to mint.
    pub fn mass_update_pools(&mut self, now: u64) -> Result<u64> {
        let schedule = self.schedule();
        let total_weight = self.total_weight;

        // Work on a copy so an overflow half way through leaves the arena untouched
        let mut pools = self.pools.clone();
        let mut minted: u64 = 0;
        for pool in pools.iter_mut() {
            let reward = pool.accrue(now, &schedule, total_weight)?;
            minted = minted
                .checked_add(reward)
                .ok_or(ErrorCode::CalculationOverflow)?;
        }

        self.record_minted(minted)?;
        self.pools = pools;
        Ok(minted)
    }

    /// Append a pool. Returns its index and the reward minted by the optional sync.
    pub fn add_pool(
        &mut self,
        stake_mint: Pubkey,
        stake_vault: Pubkey,
        vault_bump: u8,
        weight: u64,
        now: u64,
        sync_all: bool,
    ) -> Result<(u32, u64)> {
        require!(self.pools.len() < Self::MAX_POOLS, ErrorCode::PoolCapacityExceeded);
        let total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(ErrorCode::CalculationOverflow)?;

        let minted = if sync_all {
            self.mass_update_pools(now)?
        } else {
            0
        };

        let pool_index = self.pool_count();
        let last_accrual_slot = now.max(self.start_slot);
        self.pools.push(PoolInfo::new(
            stake_mint,
            stake_vault,
            vault_bump,
            weight,
            last_accrual_slot,
        ));
        self.total_weight = total_weight;

        Ok((pool_index, minted))
    }

    /// Change a pool's weight. Returns the previous weight and the reward minted by the optional sync.
    pub fn set_weight(
        &mut self,
        pool_index: u32,
        weight: u64,
        now: u64,
        sync_all: bool,
    ) -> Result<(u64, u64)> {
        let old_weight = self.pool(pool_index)?.weight;
        let total_weight = self
            .total_weight
            .checked_sub(old_weight)
            .and_then(|w| w.checked_add(weight))
            .ok_or(ErrorCode::CalculationOverflow)?;

        let minted = if sync_all {
            self.mass_update_pools(now)?
        } else {
            0
        };

        self.pool_mut(pool_index)?.weight = weight;
        self.total_weight = total_weight;

        Ok((old_weight, minted))
    }

    fn check_position(&self, pool_index: u32, position: &Position) -> Result<()> {
        self.pool(pool_index)?;
        require!(position.pool_index == pool_index, ErrorCode::PositionMismatch);
        Ok(())
    }

    /// Accrue, harvest pending reward, then add `amount` to the position.
    /// A zero amount is a harvest-only call.
    pub fn deposit(
        &mut self,
        pool_index: u32,
        position: &mut Position,
        amount: u64,
        now: u64,
    ) -> Result<Settlement> {
        self.check_position(pool_index, position)?;

        let minted = self.update_pool(pool_index, now)?;
        let pool = self.pool_mut(pool_index)?;

        let harvested = if position.staked_amount > 0 {
            position.pending_reward(pool.acc_reward_per_share)?
        } else {
            0
        };

        position.staked_amount = position
            .staked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        position.update_reward_debt(pool.acc_reward_per_share)?;
        position.claimed_total = position
            .claimed_total
            .checked_add(harvested)
            .ok_or(ErrorCode::CalculationOverflow)?;

        Ok(Settlement { minted, harvested })
    }

    /// Accrue, harvest pending reward, then remove `amount` from the position.
    /// A zero amount is a harvest-only call.
    pub fn withdraw(
        &mut self,
        pool_index: u32,
        position: &mut Position,
        amount: u64,
        now: u64,
    ) -> Result<Settlement> {
        self.check_position(pool_index, position)?;
        require!(amount <= position.staked_amount, ErrorCode::InsufficientStake);

        let minted = self.update_pool(pool_index, now)?;
        let pool = self.pool_mut(pool_index)?;

        let harvested = position.pending_reward(pool.acc_reward_per_share)?;

        position.staked_amount -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        position.update_reward_debt(pool.acc_reward_per_share)?;
        position.claimed_total = position
            .claimed_total
            .checked_add(harvested)
            .ok_or(ErrorCode::CalculationOverflow)?;

        Ok(Settlement { minted, harvested })
    }

    /// Drop the whole stake without accruing or paying reward.
    /// Returns the amount to hand back.
    pub fn emergency_withdraw(&mut self, pool_index: u32, position: &mut Position) -> Result<u64> {
        self.check_position(pool_index, position)?;

        let amount = position.staked_amount;
        let pool = self.pool_mut(pool_index)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        position.staked_amount = 0;
        position.reward_debt = 0;

        Ok(amount)
    }

    /// Reward `position` would harvest if its pool were touched at `now`.
    pub fn pending_reward(&self, pool_index: u32, position: &Position, now: u64) -> Result<u64> {
        self.check_position(pool_index, position)?;

        let pool = self.pool(pool_index)?;
        let (acc, _) = pool.projected_acc_reward_per_share(now, &self.schedule(), self.total_weight)?;
        position.pending_reward(acc)
    }

    /// Pending reward of `owner`, who may never have opened a position.
    pub fn pending_reward_of(
        &self,
        pool_index: u32,
        owner: &Pubkey,
        position: Option<&Position>,
        now: u64,
    ) -> Result<u64> {
        match position {
            Some(position) => {
                require_keys_eq!(position.owner, *owner, ErrorCode::PositionMismatch);
                self.pending_reward(pool_index, position, now)
            }
            None => {
                self.pool(pool_index)?;
                Ok(0)
            }
        }
    }
}
