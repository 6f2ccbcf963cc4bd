use crate::errors::ErrorCode;
use crate::events::{Deposited, RewardHarvested};
use crate::gateway;
use crate::states::{Position, RewardLedger};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Deposit stake tokens into a pool (reward-per-share model)
///
/// Flow:
/// 1. Accrue the pool up to the current slot and mint its reward
/// 2. Pay the position's pending reward
/// 3. Transfer stake tokens into the pool vault
/// 4. Update staked_amount and reward_debt
#[derive(Accounts)]
#[instruction(pool_index: u32)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [RewardLedger::PREFIX_SEED],
        bump = ledger.bump,
        constraint = (pool_index as usize) < ledger.pools.len() @ ErrorCode::PoolNotFound,
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    #[account(
        mut,
        constraint = ledger.pools.get(pool_index as usize).map(|p| p.stake_vault) == Some(stake_vault.key())
            @ ErrorCode::InvalidStakeVault,
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_stake_account.mint == stake_vault.mint @ ErrorCode::InvalidToken,
        constraint = user_stake_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_stake_account: Box<Account<'info, TokenAccount>>,

    /// Created on first deposit into this pool, never closed
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Position::INIT_SPACE,
        seeds = [
            Position::PREFIX_SEED,
            ledger.key().as_ref(),
            &pool_index.to_le_bytes(),
            user.key().as_ref(),
        ],
        bump
    )]
    pub position: Account<'info, Position>,

    #[account(mut, address = ledger.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = ledger.reward_vault)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_reward_account.mint == ledger.reward_mint @ ErrorCode::InvalidRewardAccount,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidRewardAccount,
    )]
    pub user_reward_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, pool_index: u32, amount: u64) -> Result<()> {
    msg!("[DEPOSIT] Pool {}, amount: {}", pool_index, amount);

    let now = Clock::get()?.slot;
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let user = ctx.accounts.user.key();

    if !ctx.accounts.position.is_initialized() {
        msg!("[DEPOSIT] Opening position for {}", user);
        ctx.accounts
            .position
            .set_inner(Position::new(user, pool_index, ctx.bumps.position));
    }

    let accounts = &mut *ctx.accounts;
    let settlement = accounts
        .ledger
        .deposit(pool_index, &mut accounts.position, amount, now)?;
    let ledger_bump = accounts.ledger.bump;
    let acc_reward_per_share = accounts.ledger.pool(pool_index)?.acc_reward_per_share;

    msg!(
        "[DEPOSIT] Slot {}: minted {}, harvested {}, acc_reward_per_share {}",
        now,
        settlement.minted,
        settlement.harvested,
        acc_reward_per_share
    );

    gateway::mint_rewards(
        &accounts.token_program,
        &accounts.reward_mint,
        &accounts.reward_vault,
        &ledger_info,
        ledger_bump,
        settlement.minted,
    )?;
    accounts.reward_vault.reload()?;

    let paid = gateway::pay_reward(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.user_reward_account,
        &ledger_info,
        ledger_bump,
        settlement.harvested,
    )?;

    gateway::pull_stake(
        &accounts.token_program,
        &accounts.user_stake_account,
        &accounts.stake_vault,
        &accounts.user,
        amount,
    )?;

    if paid > 0 {
        emit!(RewardHarvested {
            owner: user,
            pool_index,
            amount: paid,
            claimed_total: accounts.position.claimed_total,
        });
    }

    emit!(Deposited {
        owner: user,
        pool_index,
        amount,
        staked_amount: accounts.position.staked_amount,
        acc_reward_per_share,
        slot: now,
    });

    Ok(())
}
