use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, BlockInfo};

use crate::error::ContractError;

/// Where the current block sits relative to a [`SaleWindow`]
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SalePhase {
    Before,
    Active,
    Ended,
}

/// Inclusive purchase window `[start_time, end_time]` in UNIX seconds
#[cw_serde]
#[derive(Copy, Eq)]
pub struct SaleWindow {
    pub start_time: u64,
    pub end_time: u64,
}

impl SaleWindow {
    pub fn new(start_time: u64, end_time: u64) -> Result<Self, ContractError> {
        ensure!(
            start_time < end_time,
            ContractError::InvalidSaleWindow {
                start_time,
                end_time
            }
        );
        Ok(SaleWindow {
            start_time,
            end_time,
        })
    }

    pub fn phase_at(&self, now: u64) -> SalePhase {
        if now < self.start_time {
            SalePhase::Before
        } else if now > self.end_time {
            SalePhase::Ended
        } else {
            SalePhase::Active
        }
    }

    pub fn phase(&self, block: &BlockInfo) -> SalePhase {
        self.phase_at(block.time.seconds())
    }

    /// Errors unless the block time lies within the window. Early and late
    /// purchases are both hard rejects; there is no grace period after `end`.
    pub fn ensure_active(&self, block: &BlockInfo) -> Result<(), ContractError> {
        match self.phase(block) {
            SalePhase::Before => Err(ContractError::SaleNotStarted {}),
            SalePhase::Ended => Err(ContractError::SaleEnded {}),
            SalePhase::Active => Ok(()),
        }
    }

    pub fn has_ended(&self, block: &BlockInfo) -> bool {
        self.phase(block) == SalePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_env;
    use rstest::rstest;

    #[rstest]
    #[case(99, SalePhase::Before)]
    #[case(100, SalePhase::Active)]
    #[case(150, SalePhase::Active)]
    #[case(200, SalePhase::Active)]
    #[case(201, SalePhase::Ended)]
    fn test_phase_at(#[case] now: u64, #[case] expected: SalePhase) {
        let window = SaleWindow::new(100, 200).unwrap();
        assert_eq!(window.phase_at(now), expected);
    }

    #[rstest]
    #[case(200, 200)]
    #[case(201, 200)]
    fn test_invalid_window(#[case] start_time: u64, #[case] end_time: u64) {
        let err = SaleWindow::new(start_time, end_time).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidSaleWindow {
                start_time,
                end_time
            }
        );
    }

    #[test]
    fn test_ensure_active() {
        let mut env = mock_env();
        let now = env.block.time.seconds();
        let window = SaleWindow::new(now, now + 60).unwrap();

        assert!(window.ensure_active(&env.block).is_ok());
        assert!(!window.has_ended(&env.block));

        env.block.time = env.block.time.minus_seconds(1);
        assert_eq!(
            window.ensure_active(&env.block).unwrap_err(),
            ContractError::SaleNotStarted {}
        );

        // The last second of the window still accepts purchases
        env.block.time = env.block.time.plus_seconds(61);
        assert!(window.ensure_active(&env.block).is_ok());

        env.block.time = env.block.time.plus_seconds(1);
        assert_eq!(
            window.ensure_active(&env.block).unwrap_err(),
            ContractError::SaleEnded {}
        );
        assert!(window.has_ended(&env.block));
    }
}
