use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Two-rate emission schedule.
///
/// Slots in `[start_slot, bonus_end_slot)` pay `bonus_multiplier` times the
/// base `reward_per_slot`; slots at or after `bonus_end_slot` pay the base
/// rate; slots before `start_slot` pay nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmissionSchedule {
    pub reward_per_slot: u64,
    pub start_slot: u64,
    pub bonus_end_slot: u64,
    pub bonus_multiplier: u64,
}

impl EmissionSchedule {
    pub fn validate(&self) -> Result<()> {
        require!(self.bonus_end_slot >= self.start_slot, ErrorCode::InvalidSchedule);
        Ok(())
    }

    /// Number of base-rate slot equivalents earned between `from` and `to`.
    pub fn reward_window(&self, from: u64, to: u64) -> Result<u64> {
        let from = from.max(self.start_slot);
        if to <= from {
            return Ok(0);
        }

        if to <= self.bonus_end_slot {
            (to - from)
                .checked_mul(self.bonus_multiplier)
                .ok_or_else(|| ErrorCode::CalculationOverflow.into())
        } else if from >= self.bonus_end_slot {
            Ok(to - from)
        } else {
            (self.bonus_end_slot - from)
                .checked_mul(self.bonus_multiplier)
                .and_then(|bonus| bonus.checked_add(to - self.bonus_end_slot))
                .ok_or_else(|| ErrorCode::CalculationOverflow.into())
        }
    }

    /// Reward owed to a pool of `weight` out of `total_weight` for the window.
    ///
    /// Floors the division; the remainder is never minted.
    pub fn pool_reward(&self, from: u64, to: u64, weight: u64, total_weight: u64) -> Result<u64> {
        if total_weight == 0 || weight == 0 {
            return Ok(0);
        }

        let window = self.reward_window(from, to)?;
        let reward = (self.reward_per_slot as u128)
            .checked_mul(window as u128)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_mul(weight as u128)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_div(total_weight as u128)
            .ok_or(ErrorCode::CalculationOverflow)?;

        u64::try_from(reward).map_err(|_| ErrorCode::CalculationOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> EmissionSchedule {
        EmissionSchedule {
            reward_per_slot: 100,
            start_slot: 110,
            bonus_end_slot: 210,
            bonus_multiplier: 10,
        }
    }

    #[test]
    fn schedule_must_not_end_bonus_before_start() {
        assert!(schedule().validate().is_ok());

        let empty_bonus = EmissionSchedule { bonus_end_slot: 110, ..schedule() };
        assert!(empty_bonus.validate().is_ok());

        let inverted = EmissionSchedule { bonus_end_slot: 100, ..schedule() };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn window_inside_bonus_period() {
        assert_eq!(schedule().reward_window(110, 120).unwrap(), 100);
    }

    #[test]
    fn window_after_bonus_period() {
        assert_eq!(schedule().reward_window(210, 300).unwrap(), 90);
        assert_eq!(schedule().reward_window(250, 260).unwrap(), 10);
    }

    #[test]
    fn window_straddling_bonus_end_is_split() {
        // 10 bonus slots at 10x plus 90 base slots
        assert_eq!(schedule().reward_window(200, 300).unwrap(), 190);
    }

    #[test]
    fn window_before_start_is_empty() {
        assert_eq!(schedule().reward_window(50, 60).unwrap(), 0);
        assert_eq!(schedule().reward_window(50, 110).unwrap(), 0);
        // clamped to start
        assert_eq!(schedule().reward_window(50, 115).unwrap(), 50);
    }

    #[test]
    fn reversed_window_is_empty() {
        assert_eq!(schedule().reward_window(150, 140).unwrap(), 0);
    }

    #[test]
    fn pool_reward_splits_by_weight_and_floors() {
        let s = schedule();
        assert_eq!(s.pool_reward(110, 120, 100, 100).unwrap(), 10_000);
        assert_eq!(s.pool_reward(110, 120, 1, 3).unwrap(), 3_333);
        assert_eq!(s.pool_reward(110, 120, 0, 3).unwrap(), 0);
        assert_eq!(s.pool_reward(110, 120, 5, 0).unwrap(), 0);
    }

    #[test]
    fn bonus_rate_is_multiplier_times_base_rate() {
        let s = schedule();
        let bonus = s.pool_reward(150, 160, 1, 1).unwrap();
        let base = s.pool_reward(250, 260, 1, 1).unwrap();
        assert_eq!(bonus, base * s.bonus_multiplier);
    }

    #[test]
    fn straddling_window_equals_sum_of_halves() {
        let s = schedule();
        let whole = s.pool_reward(180, 260, 1, 1).unwrap();
        let split = s.pool_reward(180, 210, 1, 1).unwrap() + s.pool_reward(210, 260, 1, 1).unwrap();
        assert_eq!(whole, split);
        assert_eq!(whole, 30 * 100 * 10 + 50 * 100);
    }
}
