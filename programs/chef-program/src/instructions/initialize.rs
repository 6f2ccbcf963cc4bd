use crate::events::LedgerInitialized;
use crate::states::{EmissionSchedule, RewardLedger};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RewardLedger::INIT_SPACE,
        seeds = [RewardLedger::PREFIX_SEED],
        bump
    )]
    pub ledger: Box<Account<'info, RewardLedger>>,

    /// Reward token. Mint authority may be handed to the ledger after initialization.
    pub reward_mint: Box<Account<'info, Mint>>,

    /// Ledger-owned reward vault (receives minted rewards, pays harvests)
    #[account(
        init,
        payer = admin,
        seeds = [RewardLedger::REWARD_VAULT_SEED, ledger.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = ledger,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    reward_per_slot: u64,
    start_slot: u64,
    bonus_end_slot: u64,
) -> Result<()> {
    EmissionSchedule {
        reward_per_slot,
        start_slot,
        bonus_end_slot,
        bonus_multiplier: RewardLedger::BONUS_MULTIPLIER,
    }
    .validate()?;

    let ledger = &mut ctx.accounts.ledger;

    msg!("[INIT] Initializing reward ledger");
    msg!("[INIT] Account size: {} bytes", 8 + RewardLedger::INIT_SPACE);
    msg!("[INIT] Admin: {}", ctx.accounts.admin.key());
    msg!("[INIT] Reward mint: {}", ctx.accounts.reward_mint.key());

    ledger.admin = ctx.accounts.admin.key();
    ledger.reward_mint = ctx.accounts.reward_mint.key();
    ledger.reward_vault = ctx.accounts.reward_vault.key();
    ledger.reward_per_slot = reward_per_slot;
    ledger.start_slot = start_slot;
    ledger.bonus_end_slot = bonus_end_slot;
    ledger.bonus_multiplier = RewardLedger::BONUS_MULTIPLIER;

    ledger.total_weight = 0;
    ledger.total_minted = 0;
    ledger.pools = Vec::new();

    ledger.bump = ctx.bumps.ledger;
    ledger.reward_vault_bump = ctx.bumps.reward_vault;

    msg!(
        "[INIT] reward_per_slot: {}, start_slot: {}, bonus_end_slot: {}, multiplier: {}",
        ledger.reward_per_slot,
        ledger.start_slot,
        ledger.bonus_end_slot,
        ledger.bonus_multiplier
    );

    emit!(LedgerInitialized {
        admin: ledger.admin,
        reward_mint: ledger.reward_mint,
        reward_per_slot,
        start_slot,
        bonus_end_slot,
        bonus_multiplier: ledger.bonus_multiplier,
    });

    Ok(())
}
