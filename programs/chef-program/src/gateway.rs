//! Token movements performed by the ledger.
//!
//! `mint_rewards` is the only place reward supply is created; callers pass the
//! amount returned by the accrual methods on `RewardLedger`.

use crate::errors::ErrorCode;
use crate::states::RewardLedger;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

/// Mint accrued reward into the ledger's reward vault.
pub fn mint_rewards<'info>(
    token_program: &Program<'info, Token>,
    reward_mint: &Account<'info, Mint>,
    reward_vault: &Account<'info, TokenAccount>,
    ledger: &AccountInfo<'info>,
    ledger_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    require!(
        reward_mint.mint_authority == COption::Some(ledger.key()),
        ErrorCode::MintUnauthorized
    );

    let ledger_seeds = &[RewardLedger::PREFIX_SEED, &[ledger_bump]];
    let signer_seeds = &[&ledger_seeds[..]];

    let mint_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        MintTo {
            mint: reward_mint.to_account_info(),
            to: reward_vault.to_account_info(),
            authority: ledger.clone(),
        },
        signer_seeds,
    );
    token::mint_to(mint_ctx, amount)?;

    msg!("[MINT] Minted {} reward tokens to vault {}", amount, reward_vault.key());
    Ok(())
}

/// Pay harvested reward from the reward vault to the owner's token account.
///
/// Capped at the vault balance, which callers must `reload` after minting;
/// per-position flooring can leave the vault a unit short. Returns the amount paid.
pub fn pay_reward<'info>(
    token_program: &Program<'info, Token>,
    reward_vault: &Account<'info, TokenAccount>,
    recipient: &Account<'info, TokenAccount>,
    ledger: &AccountInfo<'info>,
    ledger_bump: u8,
    amount: u64,
) -> Result<u64> {
    let amount = amount.min(reward_vault.amount);
    if amount == 0 {
        return Ok(0);
    }

    let ledger_seeds = &[RewardLedger::PREFIX_SEED, &[ledger_bump]];
    let signer_seeds = &[&ledger_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        Transfer {
            from: reward_vault.to_account_info(),
            to: recipient.to_account_info(),
            authority: ledger.clone(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount).map_err(|_| error!(ErrorCode::TransferFailed))?;

    Ok(amount)
}

/// Move stake tokens from the owner into the pool vault.
pub fn pull_stake<'info>(
    token_program: &Program<'info, Token>,
    source: &Account<'info, TokenAccount>,
    stake_vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require!(source.amount >= amount, ErrorCode::TransferFailed);

    let transfer_ctx = CpiContext::new(
        token_program.to_account_info(),
        Transfer {
            from: source.to_account_info(),
            to: stake_vault.to_account_info(),
            authority: owner.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount).map_err(|_| error!(ErrorCode::TransferFailed))
}

/// Return stake tokens from the pool vault to the owner.
pub fn release_stake<'info>(
    token_program: &Program<'info, Token>,
    stake_vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    ledger: &AccountInfo<'info>,
    ledger_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require!(stake_vault.amount >= amount, ErrorCode::TransferFailed);

    let ledger_seeds = &[RewardLedger::PREFIX_SEED, &[ledger_bump]];
    let signer_seeds = &[&ledger_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        Transfer {
            from: stake_vault.to_account_info(),
            to: destination.to_account_info(),
            authority: ledger.clone(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount).map_err(|_| error!(ErrorCode::TransferFailed))
}
