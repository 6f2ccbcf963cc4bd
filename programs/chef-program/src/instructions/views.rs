use crate::errors::ErrorCode;
use crate::states::{PoolInfo, Position, RewardLedger};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,
}

#[derive(Accounts)]
#[instruction(pool_index: u32, account: Pubkey)]
pub struct ReadPendingReward<'info> {
    #[account(
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump,
        constraint = (pool_index as usize) < ledger.pools.len() @ ErrorCode::PoolNotFound,
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    /// `None` when `account` never deposited into the pool
    pub position: Option<Account<'info, Position>>,
}

pub fn pool_count(ctx: Context<ReadLedger>) -> Result<u32> {
    Ok(ctx.accounts.ledger.pool_count())
}

pub fn pool_info(ctx: Context<ReadLedger>, pool_index: u32) -> Result<PoolInfo> {
    ctx.accounts.ledger.pool(pool_index).cloned()
}

/// Reward `account` would receive from `withdraw(pool_index, 0)` in this slot.
/// Zero for an account without a position.
pub fn pending_reward(ctx: Context<ReadPendingReward>, pool_index: u32, account: Pubkey) -> Result<u64> {
    let now = Clock::get()?.slot;
    ctx.accounts.ledger.pending_reward_of(
        pool_index,
        &account,
        ctx.accounts.position.as_deref(),
        now,
    )
}
