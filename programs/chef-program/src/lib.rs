use anchor_lang::prelude::*;

// Module declarations
pub mod errors;
pub mod events;
pub mod gateway;
pub mod instructions;
pub mod states;

// Re-export commonly used types
pub use errors::ErrorCode;
pub use events::*;
use instructions::*;
pub use states::*;

declare_id!("oeKdFQYBu2u9zdd1Aix84S6gExp2LFf53EemMSJpa1F");

#[program]
pub mod chef_program {
    use super::*;

    /// Initialize the reward ledger and its reward vault
    pub fn initialize(
        ctx: Context<Initialize>,
        reward_per_slot: u64,
        start_slot: u64,
        bonus_end_slot: u64,
    ) -> Result<()> {
        instructions::initialize(ctx, reward_per_slot, start_slot, bonus_end_slot)
    }

    /// Admin add a staking pool; returns its index
    /// sync_all: accrue every existing pool at the old weights first
    pub fn add_pool(ctx: Context<AddPool>, weight: u64, sync_all: bool) -> Result<u32> {
        instructions::add_pool(ctx, weight, sync_all)
    }

    /// Admin change a pool's weight
    pub fn set_weight(
        ctx: Context<SetWeight>,
        pool_index: u32,
        weight: u64,
        sync_all: bool,
    ) -> Result<()> {
        instructions::set_weight(ctx, pool_index, weight, sync_all)
    }

    /// Accrue a single pool up to the current slot
    pub fn update_pool(ctx: Context<UpdatePools>, pool_index: u32) -> Result<()> {
        instructions::update_pool(ctx, pool_index)
    }

    /// Accrue every pool up to the current slot
    pub fn mass_update_pools(ctx: Context<UpdatePools>) -> Result<()> {
        instructions::mass_update_pools(ctx)
    }

    /// Stake tokens into a pool and harvest pending reward
    /// amount = 0 harvests only
    pub fn deposit(ctx: Context<Deposit>, pool_index: u32, amount: u64) -> Result<()> {
        instructions::deposit(ctx, pool_index, amount)
    }

    /// Unstake tokens from a pool and harvest pending reward
    /// amount = 0 harvests only
    pub fn withdraw(ctx: Context<Withdraw>, pool_index: u32, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, pool_index, amount)
    }

    /// Return the whole stake, forfeiting pending reward
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, pool_index: u32) -> Result<()> {
        instructions::emergency_withdraw(ctx, pool_index)
    }

    /// Number of pools
    pub fn pool_count(ctx: Context<ReadLedger>) -> Result<u32> {
        instructions::pool_count(ctx)
    }

    /// Pool state by index
    pub fn pool_info(ctx: Context<ReadLedger>, pool_index: u32) -> Result<PoolInfo> {
        instructions::pool_info(ctx, pool_index)
    }

    /// Pending reward of `account` in a pool at the current slot
    pub fn pending_reward(
        ctx: Context<ReadPendingReward>,
        pool_index: u32,
        account: Pubkey,
    ) -> Result<u64> {
        instructions::pending_reward(ctx, pool_index, account)
    }
}
