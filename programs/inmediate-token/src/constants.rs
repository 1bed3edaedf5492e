//! Token-wide constants: metadata, allocation table and vesting parameters.

use anchor_lang::prelude::Pubkey;

use crate::utils::schedule::VestingSchedule;

/// Token name.
pub const TOKEN_NAME: &str = "Inmediate";

/// Token symbol.
pub const TOKEN_SYMBOL: &str = "DIT";

/// Fractional digits of one token.
pub const DECIMALS: u8 = 8;

/// Base units per whole token (10^DECIMALS).
pub const ONE_TOKEN: u64 = 100_000_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Vesting months are fixed 30-day spans.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Number of allocations created at ledger construction.
pub const ALLOCATION_COUNT: usize = 6;

pub const LEDGER_SEED: &[u8] = b"token_ledger";
pub const BALANCE_SEED: &[u8] = b"balance";

// Initial investors
pub const INVESTORS_ALLOCATION: Pubkey = Pubkey::new_from_array([0xFF; 32]);
pub const INVESTORS_TOTAL: u64 = 400_000_000 * ONE_TOKEN;

// Team
pub const TEAM_ALLOCATION: Pubkey = Pubkey::new_from_array([0x11; 32]);
pub const TEAM_TOTAL: u64 = 100_000_000 * ONE_TOKEN;
pub const TEAM_CLIFF: i64 = 6 * SECONDS_PER_MONTH;
pub const TEAM_UNLOCKED_AFTER_CLIFF: u64 = 20_000_000 * ONE_TOKEN;
pub const TEAM_PERIOD_LENGTH: i64 = 3 * SECONDS_PER_MONTH;
pub const TEAM_PERIOD_AMOUNT: u64 = 10_000_000 * ONE_TOKEN;
pub const TEAM_PERIODS_NUMBER: u8 = 8;

// Advisors
pub const ADVISORS_ALLOCATION: Pubkey = Pubkey::new_from_array([0x22; 32]);
pub const ADVISORS_TOTAL: u64 = 50_000_000 * ONE_TOKEN;
pub const ADVISORS_CLIFF: i64 = 6 * SECONDS_PER_MONTH;
pub const ADVISORS_UNLOCKED_AFTER_CLIFF: u64 = 10_000_000 * ONE_TOKEN;
pub const ADVISORS_PERIOD_LENGTH: i64 = 3 * SECONDS_PER_MONTH;
pub const ADVISORS_PERIOD_AMOUNT: u64 = 10_000_000 * ONE_TOKEN;
pub const ADVISORS_PERIODS_NUMBER: u8 = 4;

// Bounty
pub const BOUNTY_ALLOCATION: Pubkey = Pubkey::new_from_array([0x33; 32]);
pub const BOUNTY_TOTAL: u64 = 50_000_000 * ONE_TOKEN;

// Liquidity pool
pub const LIQUIDITY_POOL_ALLOCATION: Pubkey = Pubkey::new_from_array([0x44; 32]);
pub const LIQUIDITY_POOL_TOTAL: u64 = 150_000_000 * ONE_TOKEN;

// Contributors
pub const CONTRIBUTORS_ALLOCATION: Pubkey = Pubkey::new_from_array([0x55; 32]);
pub const CONTRIBUTORS_TOTAL: u64 = 250_000_000 * ONE_TOKEN;

/// Sum of all allocation totals.
pub const TOTAL_SUPPLY: u64 = INVESTORS_TOTAL
    + TEAM_TOTAL
    + ADVISORS_TOTAL
    + BOUNTY_TOTAL
    + LIQUIDITY_POOL_TOTAL
    + CONTRIBUTORS_TOTAL;

pub const TEAM_SCHEDULE: VestingSchedule = VestingSchedule {
    cliff_duration: TEAM_CLIFF,
    unlocked_after_cliff: TEAM_UNLOCKED_AFTER_CLIFF,
    period_length: TEAM_PERIOD_LENGTH,
    period_amount: TEAM_PERIOD_AMOUNT,
    periods_number: TEAM_PERIODS_NUMBER,
};

pub const ADVISORS_SCHEDULE: VestingSchedule = VestingSchedule {
    cliff_duration: ADVISORS_CLIFF,
    unlocked_after_cliff: ADVISORS_UNLOCKED_AFTER_CLIFF,
    period_length: ADVISORS_PERIOD_LENGTH,
    period_amount: ADVISORS_PERIOD_AMOUNT,
    periods_number: ADVISORS_PERIODS_NUMBER,
};

/// One row of the allocation table copied into the ledger at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationConfig {
    pub name: &'static str,
    pub id: Pubkey,
    pub total: u64,
    pub schedule: Option<VestingSchedule>,
}

/// Allocation table, in ledger storage order.
pub const ALLOCATIONS: [AllocationConfig; ALLOCATION_COUNT] = [
    AllocationConfig {
        name: "investors",
        id: INVESTORS_ALLOCATION,
        total: INVESTORS_TOTAL,
        schedule: None,
    },
    AllocationConfig {
        name: "team",
        id: TEAM_ALLOCATION,
        total: TEAM_TOTAL,
        schedule: Some(TEAM_SCHEDULE),
    },
    AllocationConfig {
        name: "advisors",
        id: ADVISORS_ALLOCATION,
        total: ADVISORS_TOTAL,
        schedule: Some(ADVISORS_SCHEDULE),
    },
    AllocationConfig {
        name: "bounty",
        id: BOUNTY_ALLOCATION,
        total: BOUNTY_TOTAL,
        schedule: None,
    },
    AllocationConfig {
        name: "liquidityPool",
        id: LIQUIDITY_POOL_ALLOCATION,
        total: LIQUIDITY_POOL_TOTAL,
        schedule: None,
    },
    AllocationConfig {
        name: "contributors",
        id: CONTRIBUTORS_ALLOCATION,
        total: CONTRIBUTORS_TOTAL,
        schedule: None,
    },
];

/// Returns true if `id` names one of the configured allocations.
pub fn is_allocation(id: &Pubkey) -> bool {
    ALLOCATIONS.iter().any(|a| a.id == *id)
}
