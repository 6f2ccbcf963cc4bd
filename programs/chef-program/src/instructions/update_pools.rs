use crate::events::PoolAccrued;
use crate::gateway;
use crate::states::RewardLedger;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Permissionless accrual of one or all pools
#[derive(Accounts)]
pub struct UpdatePools<'info> {
    #[account(
        mut,
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    #[account(mut, address = ledger.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = ledger.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn update_pool(ctx: Context<UpdatePools>, pool_index: u32) -> Result<()> {
    let now = Clock::get()?.slot;
    let minted = ctx.accounts.ledger.update_pool(pool_index, now)?;
    msg!("[UPDATE_POOL] Pool {} accrued at slot {}, minted {}", pool_index, now, minted);
    finish(ctx, minted, 1, now)
}

pub fn mass_update_pools(ctx: Context<UpdatePools>) -> Result<()> {
    let now = Clock::get()?.slot;
    let minted = ctx.accounts.ledger.mass_update_pools(now)?;
    let pools_touched = ctx.accounts.ledger.pool_count();
    msg!("[MASS_UPDATE] {} pools accrued at slot {}, minted {}", pools_touched, now, minted);
    finish(ctx, minted, pools_touched, now)
}

fn finish(ctx: Context<UpdatePools>, minted: u64, pools_touched: u32, slot: u64) -> Result<()> {
    let ledger_info = ctx.accounts.ledger.to_account_info();
    gateway::mint_rewards(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_vault,
        &ledger_info,
        ctx.accounts.ledger.bump,
        minted,
    )?;

    emit!(PoolAccrued {
        minted,
        pools_touched,
        slot,
    });

    Ok(())
}
