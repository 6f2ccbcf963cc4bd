use crate::errors::ErrorCode;
use crate::events::{PoolAccrued, PoolAdded};
use crate::gateway;
use crate::states::RewardLedger;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(
        mut,
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    /// CHECK: must be an SPL token mint; checked by `is_spl_mint`
    #[account(constraint = is_spl_mint(&stake_mint) @ ErrorCode::InvalidToken)]
    pub stake_mint: UncheckedAccount<'info>,

    /// Custody account for the new pool, indexed by the pool about to be created
    #[account(
        init,
        payer = admin,
        seeds = [
            RewardLedger::STAKE_VAULT_SEED,
            ledger.key().as_ref(),
            &ledger.pool_count().to_le_bytes(),
        ],
        bump,
        token::mint = stake_mint,
        token::authority = ledger,
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = ledger.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = ledger.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// True when `info` is an initialized mint owned by the SPL token program.
pub fn is_spl_mint(info: &AccountInfo) -> bool {
    if info.owner != &anchor_spl::token::ID {
        return false;
    }
    match info.try_borrow_data() {
        Ok(data) => Mint::try_deserialize(&mut &data[..]).is_ok(),
        Err(_) => false,
    }
}

pub fn add_pool(ctx: Context<AddPool>, weight: u64, sync_all: bool) -> Result<u32> {
    let now = Clock::get()?.slot;
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let stake_mint = ctx.accounts.stake_mint.key();
    let stake_vault = ctx.accounts.stake_vault.key();
    let vault_bump = ctx.bumps.stake_vault;

    msg!("[ADD_POOL] Stake mint: {}, weight: {}, sync_all: {}", stake_mint, weight, sync_all);

    let ledger = &mut ctx.accounts.ledger;
    let (pool_index, minted) =
        ledger.add_pool(stake_mint, stake_vault, vault_bump, weight, now, sync_all)?;
    let ledger_bump = ledger.bump;
    let total_weight = ledger.total_weight;
    let last_accrual_slot = ledger.pool(pool_index)?.last_accrual_slot;
    let pools_touched = pool_index;

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

    msg!("[ADD_POOL] Pool {} created, total_weight: {}", pool_index, total_weight);

    emit!(PoolAdded {
        pool_index,
        stake_mint,
        weight,
        total_weight,
        last_accrual_slot,
    });

    Ok(pool_index)
}
