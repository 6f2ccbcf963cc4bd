use crate::errors::ErrorCode;
use crate::events::{PoolAccrued, PoolWeightUpdated};
use crate::gateway;
use crate::states::RewardLedger;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct SetWeight<'info> {
    #[account(
        mut,
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    #[account(mut, address = ledger.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = ledger.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Change a pool's weight.
///
/// Without `sync_all` only the new ratio is stored; pools not touched until
/// their next accrual earn over their whole pending window at the new ratio.
pub fn set_weight(ctx: Context<SetWeight>, pool_index: u32, weight: u64, sync_all: bool) -> Result<()> {
    let now = Clock::get()?.slot;
    let ledger_info = ctx.accounts.ledger.to_account_info();

    let ledger = &mut ctx.accounts.ledger;
    let (old_weight, minted) = ledger.set_weight(pool_index, weight, now, sync_all)?;
    let ledger_bump = ledger.bump;
    let total_weight = ledger.total_weight;
    let pools_touched = ledger.pool_count();

    msg!(
        "[SET_WEIGHT] Pool {}: {} -> {}, total_weight: {}",
        pool_index,
        old_weight,
        weight,
        total_weight
    );

    gateway::mint_rewards(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_vault,
        &ledger_info,
        ledger_bump,
        minted,
    )?;

    if sync_all {
        emit!(PoolAccrued {
            minted,
            pools_touched,
            slot: now,
        });
    }

    emit!(PoolWeightUpdated {
        pool_index,
        old_weight,
        new_weight: weight,
        total_weight,
        synced_all: sync_all,
    });

    Ok(())
}
