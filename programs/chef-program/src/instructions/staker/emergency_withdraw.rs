use crate::errors::ErrorCode;
use crate::events::EmergencyWithdrawn;
use crate::gateway;
use crate::states::{Position, RewardLedger};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

/// Withdraw the whole stake without touching rewards.
/// Pending reward of the position is forfeited.
#[derive(Accounts)]
#[instruction(pool_index: u32)]
pub struct EmergencyWithdraw<'info> {
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

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, pool_index: u32) -> Result<()> {
    let now = Clock::get()?.slot;
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let user = ctx.accounts.user.key();

    let accounts = &mut *ctx.accounts;
    let amount = accounts
        .ledger
        .emergency_withdraw(pool_index, &mut accounts.position)?;
    let ledger_bump = accounts.ledger.bump;

    msg!("[EMERGENCY_WITHDRAW] Pool {}: returning {} to {}", pool_index, amount, user);

    gateway::release_stake(
        &accounts.token_program,
        &accounts.stake_vault,
        &accounts.user_stake_account,
        &ledger_info,
        ledger_bump,
        amount,
    )?;

    emit!(EmergencyWithdrawn {
        owner: user,
        pool_index,
        amount,
        slot: now,
    });

    Ok(())
}
