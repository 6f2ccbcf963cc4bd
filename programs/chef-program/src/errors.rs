use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Pool not found")]
    PoolNotFound,
    #[msg("Stake token is not a valid SPL mint")]
    InvalidToken,
    #[msg("Insufficient stake amount")]
    InsufficientStake,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Ledger does not hold mint authority over the reward token")]
    MintUnauthorized,
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Calculation overflow")]
    CalculationOverflow,
    #[msg("Maximum number of pools reached")]
    PoolCapacityExceeded,
    #[msg("Bonus end slot must not precede start slot")]
    InvalidSchedule,
    #[msg("Stake vault does not belong to this pool")]
    InvalidStakeVault,
    #[msg("Reward token account does not match the reward mint or owner")]
    InvalidRewardAccount,
    #[msg("Position does not belong to this pool")]
    PositionMismatch,
}
