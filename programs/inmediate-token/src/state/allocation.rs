use anchor_lang::prelude::*;

use crate::constants::AllocationConfig;
use crate::utils::schedule::{self, VestingPhase, VestingSchedule};

/// A single allocation bucket stored in the ledger account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationEntry {
    pub id: Pubkey,
    /// Balance at construction; the unlock cap.
    pub total: u64,
    /// Current balance (total - withdrawn).
    pub balance: u64,
    /// Sum of successful withdrawals.
    pub withdrawn: u64,
    pub schedule: Option<VestingSchedule>,
}

impl AllocationEntry {
    pub const SIZE: usize =
        32 + // id
        8 +  // total
        8 +  // balance
        8 +  // withdrawn
        1 + VestingSchedule::SIZE; // schedule (borsh Option tag + payload)

    pub fn from_config(config: &AllocationConfig) -> Self {
        Self {
            id: config.id,
            total: config.total,
            balance: config.total,
            withdrawn: 0,
            schedule: config.schedule,
        }
    }

    pub fn unlocked(&self, elapsed: i64) -> u64 {
        schedule::unlocked_for(self.schedule.as_ref(), self.total, elapsed)
    }

    /// Unlocked but not yet withdrawn.
    pub fn available(&self, elapsed: i64) -> u64 {
        self.unlocked(elapsed).saturating_sub(self.withdrawn)
    }

    pub fn phase(&self, elapsed: i64) -> VestingPhase {
        schedule::phase(self.schedule.as_ref(), self.total, elapsed)
    }
}
