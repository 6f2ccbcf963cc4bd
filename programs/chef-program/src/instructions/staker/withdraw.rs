use crate::errors::ErrorCode;
use crate::events::{RewardHarvested, Withdrawn};
use crate::gateway;
use crate::states::{Position, RewardLedger};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Withdraw stake tokens and harvest pending reward.
/// `amount = 0` harvests only.
#[derive(Accounts)]
#[instruction(pool_index: u32)]
pub struct Withdraw<'info> {
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

    #[account(
        mut,
        seeds = [
            Position::PREFIX_SEED,
            ledger.key().as_ref(),
            &pool_index.to_le_bytes(),
            user.key().as_ref(),
        ],
        bump = position.bump,
        constraint = position.owner == user.key() @ ErrorCode::Unauthorized,
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

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, pool_index: u32, amount: u64) -> Result<()> {
    msg!("[WITHDRAW] Pool {}, amount: {}", pool_index, amount);
    msg!(
        "[WITHDRAW] Position - staked_amount: {}, reward_debt: {}",
        ctx.accounts.position.staked_amount,
        ctx.accounts.position.reward_debt
    );

    let now = Clock::get()?.slot;
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let user = ctx.accounts.user.key();

    let accounts = &mut *ctx.accounts;
    let settlement = accounts
        .ledger
        .withdraw(pool_index, &mut accounts.position, amount, now)?;
    let ledger_bump = accounts.ledger.bump;
    let acc_reward_per_share = accounts.ledger.pool(pool_index)?.acc_reward_per_share;

    msg!(
        "[WITHDRAW] Slot {}: minted {}, harvested {}, remaining staked {}",
        now,
        settlement.minted,
        settlement.harvested,
        accounts.position.staked_amount
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

    gateway::release_stake(
        &accounts.token_program,
        &accounts.stake_vault,
        &accounts.user_stake_account,
        &ledger_info,
        ledger_bump,
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

    emit!(Withdrawn {
        owner: user,
        pool_index,
        amount,
        staked_amount: accounts.position.staked_amount,
        acc_reward_per_share,
        slot: now,
    });

    Ok(())
}
