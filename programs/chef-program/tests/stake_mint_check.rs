//! Stake-token validation used by `add_pool`.

use anchor_lang::prelude::*;
use chef_program::instructions::is_spl_mint;

const MINT_LEN: usize = 82;
const TOKEN_ACCOUNT_LEN: usize = 165;
const MINT_IS_INITIALIZED_OFFSET: usize = 45;

fn initialized_mint_data() -> Vec<u8> {
    // No mint/freeze authority, zero supply, zero decimals
    let mut data = vec![0u8; MINT_LEN];
    data[MINT_IS_INITIALIZED_OFFSET] = 1;
    data
}

fn check(data: &mut [u8], owner: &Pubkey) -> bool {
    let key = Pubkey::new_unique();
    let mut lamports = 1_000_000u64;
    let info = AccountInfo::new(&key, false, false, &mut lamports, data, owner, false, 0);
    is_spl_mint(&info)
}

#[test]
fn test_accepts_token_program_mint() {
    let mut data = initialized_mint_data();
    assert!(check(&mut data, &anchor_spl::token::ID));
}

#[test]
fn test_rejects_foreign_owner() {
    let mut data = initialized_mint_data();
    assert!(!check(&mut data, &Pubkey::new_unique()));
}

#[test]
fn test_rejects_uninitialized_mint() {
    let mut data = vec![0u8; MINT_LEN];
    assert!(!check(&mut data, &anchor_spl::token::ID));
}

#[test]
fn test_rejects_token_account_layout() {
    let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
    assert!(!check(&mut data, &anchor_spl::token::ID));
}
