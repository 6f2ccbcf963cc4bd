use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_per_slot: u64,
    pub start_slot: u64,
    pub bonus_end_slot: u64,
    pub bonus_multiplier: u64,
}

#[event]
pub struct PoolAdded {
    pub pool_index: u32,
    pub stake_mint: Pubkey,
    pub weight: u64,
    pub total_weight: u64,
    pub last_accrual_slot: u64,
}

#[event]
pub struct PoolWeightUpdated {
    pub pool_index: u32,
    pub old_weight: u64,
    pub new_weight: u64,
    pub total_weight: u64,
    pub synced_all: bool,
}

#[event]
pub struct PoolAccrued {
    pub minted: u64,
    pub pools_touched: u32,
    pub slot: u64,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub amount: u64,
    pub staked_amount: u64,
    pub acc_reward_per_share: u128,
    pub slot: u64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub amount: u64,
    pub staked_amount: u64,
    pub acc_reward_per_share: u128,
    pub slot: u64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub amount: u64,
    pub slot: u64,
}

#[event]
pub struct RewardHarvested {
    pub owner: Pubkey,
    pub pool_index: u32,
    pub amount: u64,
    pub claimed_total: u64,
}
