//! Cliff + periodic vesting math.
//! - nothing unlocks before `cliff_duration`
//! - `unlocked_after_cliff` unlocks exactly at the cliff (inclusive)
//! - every full `period_length` after the cliff adds `period_amount`
//! - periods are capped at `periods_number`, the amount at the allocation total

use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Unlock curve of a scheduled allocation. Durations are seconds since ledger creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub cliff_duration: i64,
    pub unlocked_after_cliff: u64,
    pub period_length: i64,
    pub period_amount: u64,
    pub periods_number: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        8 + // cliff_duration
        8 + // unlocked_after_cliff
        8 + // period_length
        8 + // period_amount
        1;  // periods_number

    /// Rejects parameter sets that cannot release exactly `total`.
    pub fn validate(&self, total: u64) -> std::result::Result<(), LedgerError> {
        if self.cliff_duration < 0 || self.period_length <= 0 {
            return Err(LedgerError::InvalidConfig);
        }
        let full = (self.period_amount as u128)
            .checked_mul(self.periods_number as u128)
            .and_then(|v| v.checked_add(self.unlocked_after_cliff as u128))
            .ok_or(LedgerError::MathOverflow)?;
        if full != total as u128 {
            return Err(LedgerError::InvalidConfig);
        }
        Ok(())
    }

    /// Seconds after creation at which the last tranche unlocks.
    pub fn full_release_offset(&self) -> std::result::Result<i64, LedgerError> {
        self.period_length
            .checked_mul(self.periods_number as i64)
            .and_then(|v| v.checked_add(self.cliff_duration))
            .ok_or(LedgerError::MathOverflow)
    }
}

/// Where an allocation sits on its unlock curve.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingPhase {
    Locked,
    PartiallyUnlocked,
    FullyUnlocked,
}

/// Number of whole periods elapsed after the cliff, capped at `periods_number`.
/// Zero before and exactly at the cliff.
pub fn periods_elapsed(schedule: &VestingSchedule, elapsed: i64) -> u64 {
    if elapsed < schedule.cliff_duration || schedule.period_length <= 0 {
        return 0;
    }
    let since_cliff = (elapsed - schedule.cliff_duration) as u64;
    let periods = since_cliff / schedule.period_length as u64;
    periods.min(schedule.periods_number as u64)
}

/// Amount of `original_total` unlocked `elapsed` seconds after creation.
/// Negative `elapsed` (clock behind creation) counts as zero.
pub fn unlocked_amount(schedule: &VestingSchedule, original_total: u64, elapsed: i64) -> u64 {
    let elapsed = elapsed.max(0);
    if elapsed < schedule.cliff_duration {
        return 0;
    }
    let periods = periods_elapsed(schedule, elapsed);
    let amount = (schedule.unlocked_after_cliff as u128)
        + (schedule.period_amount as u128) * (periods as u128);
    // Fits: bounded by original_total.
    amount.min(original_total as u128) as u64
}

/// Unlocked amount for an allocation that may or may not carry a schedule.
pub fn unlocked_for(schedule: Option<&VestingSchedule>, original_total: u64, elapsed: i64) -> u64 {
    match schedule {
        Some(s) => unlocked_amount(s, original_total, elapsed),
        None => original_total,
    }
}

pub fn phase(schedule: Option<&VestingSchedule>, original_total: u64, elapsed: i64) -> VestingPhase {
    let unlocked = unlocked_for(schedule, original_total, elapsed);
    if unlocked >= original_total {
        VestingPhase::FullyUnlocked
    } else if unlocked == 0 {
        VestingPhase::Locked
    } else {
        VestingPhase::PartiallyUnlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn month(i: i64) -> i64 {
        i * SECONDS_PER_MONTH
    }

    #[test]
    fn team_curve_matches_reference_months() {
        let s = TEAM_SCHEDULE;
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(5)), 0);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(6)), 20_000_000 * ONE_TOKEN);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(8)), 20_000_000 * ONE_TOKEN);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(9)), 30_000_000 * ONE_TOKEN);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(30)), TEAM_TOTAL);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(120)), TEAM_TOTAL);
    }

    #[test]
    fn team_monthly_walk() {
        // Same walk as a month-by-month time travel over 31 months.
        let s = TEAM_SCHEDULE;
        for i in 0..31 {
            let got = unlocked_amount(&s, TEAM_TOTAL, month(i));
            let expected = if month(i) < TEAM_CLIFF {
                0
            } else {
                let periods = ((month(i) - TEAM_CLIFF) / TEAM_PERIOD_LENGTH) as u64;
                (TEAM_UNLOCKED_AFTER_CLIFF + TEAM_PERIOD_AMOUNT * periods).min(TEAM_TOTAL)
            };
            assert_eq!(got, expected, "month {}", i);
        }
    }

    #[test]
    fn advisors_use_their_own_cliff() {
        let mut s = ADVISORS_SCHEDULE;
        assert_eq!(unlocked_amount(&s, ADVISORS_TOTAL, ADVISORS_CLIFF - 1), 0);
        assert_eq!(
            unlocked_amount(&s, ADVISORS_TOTAL, ADVISORS_CLIFF),
            ADVISORS_UNLOCKED_AFTER_CLIFF
        );
        assert_eq!(unlocked_amount(&s, ADVISORS_TOTAL, month(18)), ADVISORS_TOTAL);

        s.cliff_duration = month(2);
        assert_eq!(
            unlocked_amount(&s, ADVISORS_TOTAL, month(2)),
            ADVISORS_UNLOCKED_AFTER_CLIFF
        );
    }

    #[test]
    fn cliff_boundary_is_inclusive() {
        let s = TEAM_SCHEDULE;
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, TEAM_CLIFF - 1), 0);
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, TEAM_CLIFF), TEAM_UNLOCKED_AFTER_CLIFF);
        assert_eq!(periods_elapsed(&s, TEAM_CLIFF), 0);
        assert_eq!(periods_elapsed(&s, TEAM_CLIFF + TEAM_PERIOD_LENGTH - 1), 0);
        assert_eq!(periods_elapsed(&s, TEAM_CLIFF + TEAM_PERIOD_LENGTH), 1);
    }

    #[test]
    fn caps_at_total_when_periods_overshoot() {
        let s = VestingSchedule {
            periods_number: 200,
            ..TEAM_SCHEDULE
        };
        assert_eq!(unlocked_amount(&s, TEAM_TOTAL, month(600)), TEAM_TOTAL);
        assert!(s.validate(TEAM_TOTAL).is_err());
    }

    #[test]
    fn negative_elapsed_is_locked() {
        assert_eq!(unlocked_amount(&TEAM_SCHEDULE, TEAM_TOTAL, -1), 0);
        assert_eq!(
            phase(Some(&TEAM_SCHEDULE), TEAM_TOTAL, -SECONDS_PER_DAY),
            VestingPhase::Locked
        );
    }

    #[test]
    fn phases_follow_the_clock() {
        let s = TEAM_SCHEDULE;
        assert_eq!(phase(Some(&s), TEAM_TOTAL, 0), VestingPhase::Locked);
        assert_eq!(phase(Some(&s), TEAM_TOTAL, TEAM_CLIFF), VestingPhase::PartiallyUnlocked);
        let end = s.full_release_offset().unwrap();
        assert_eq!(end, month(30));
        assert_eq!(phase(Some(&s), TEAM_TOTAL, end - 1), VestingPhase::PartiallyUnlocked);
        assert_eq!(phase(Some(&s), TEAM_TOTAL, end), VestingPhase::FullyUnlocked);
        assert_eq!(phase(None, BOUNTY_TOTAL, 0), VestingPhase::FullyUnlocked);
    }

    #[test]
    fn unscheduled_is_fully_unlocked() {
        assert_eq!(unlocked_for(None, INVESTORS_TOTAL, 0), INVESTORS_TOTAL);
        assert_eq!(unlocked_for(None, INVESTORS_TOTAL, month(40)), INVESTORS_TOTAL);
    }

    #[test]
    fn validate_rejects_zero_period() {
        let s = VestingSchedule {
            period_length: 0,
            ..TEAM_SCHEDULE
        };
        assert!(s.validate(TEAM_TOTAL).is_err());
        assert!(TEAM_SCHEDULE.validate(TEAM_TOTAL).is_ok());
        assert!(ADVISORS_SCHEDULE.validate(ADVISORS_TOTAL).is_ok());
    }
}
