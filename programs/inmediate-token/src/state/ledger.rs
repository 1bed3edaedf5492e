use anchor_lang::prelude::*;

use crate::constants::{AllocationConfig, ALLOCATIONS, ALLOCATION_COUNT, DECIMALS};
use crate::error::LedgerError;
use crate::state::allocation::AllocationEntry;
use crate::state::holder::HolderBalance;
use crate::utils::schedule::{VestingPhase, VestingSchedule};

/// Ledger state PDA: six allocations, their schedules, the owner and the creation time.
#[account]
pub struct TokenLedger {
    /// Only identity allowed to pull from allocations.
    pub owner: Pubkey,
    /// Unix seconds at construction; schedules count from here.
    pub creation_ts: i64,
    pub decimals: u8,
    pub total_supply: u64,
    pub allocations: [AllocationEntry; ALLOCATION_COUNT],
}

impl TokenLedger {
    pub const SIZE: usize =
        32 + // owner
        8 +  // creation_ts
        1 +  // decimals
        8 +  // total_supply
        AllocationEntry::SIZE * ALLOCATION_COUNT;

    /// Ledger over the configured allocation table.
    pub fn new(owner: Pubkey, creation_ts: i64) -> std::result::Result<Self, LedgerError> {
        Self::from_config(owner, creation_ts, &ALLOCATIONS)
    }

    pub fn from_config(
        owner: Pubkey,
        creation_ts: i64,
        config: &[AllocationConfig; ALLOCATION_COUNT],
    ) -> std::result::Result<Self, LedgerError> {
        if owner == Pubkey::default() {
            return Err(LedgerError::InvalidPubkey);
        }
        let mut total_supply: u64 = 0;
        for (i, c) in config.iter().enumerate() {
            if c.id == Pubkey::default() || config[..i].iter().any(|p| p.id == c.id) {
                return Err(LedgerError::InvalidConfig);
            }
            if let Some(s) = c.schedule.as_ref() {
                s.validate(c.total)?;
            }
            total_supply = total_supply
                .checked_add(c.total)
                .ok_or(LedgerError::MathOverflow)?;
        }
        Ok(Self {
            owner,
            creation_ts,
            decimals: DECIMALS,
            total_supply,
            allocations: config.map(|c| AllocationEntry::from_config(&c)),
        })
    }

    pub fn creation_time(&self) -> i64 {
        self.creation_ts
    }

    /// Seconds since creation; a clock reading before creation counts as zero.
    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.creation_ts).max(0)
    }

    pub fn allocation(&self, id: &Pubkey) -> Option<&AllocationEntry> {
        self.allocations.iter().find(|a| a.id == *id)
    }

    fn allocation_mut(&mut self, id: &Pubkey) -> Option<&mut AllocationEntry> {
        self.allocations.iter_mut().find(|a| a.id == *id)
    }

    /// Current balance of an allocation; zero for any other identifier.
    pub fn balance_of(&self, id: &Pubkey) -> u64 {
        self.allocation(id).map(|a| a.balance).unwrap_or(0)
    }

    pub fn total_of(&self, id: &Pubkey) -> Option<u64> {
        self.allocation(id).map(|a| a.total)
    }

    pub fn schedule_of(&self, id: &Pubkey) -> Option<&VestingSchedule> {
        self.allocation(id).and_then(|a| a.schedule.as_ref())
    }

    pub fn phase_of(&self, id: &Pubkey, now: i64) -> Option<VestingPhase> {
        let elapsed = self.elapsed(now);
        self.allocation(id).map(|a| a.phase(elapsed))
    }

    /// Amount `spender` may currently pull from allocation `id`.
    pub fn allowance(&self, id: &Pubkey, spender: &Pubkey, now: i64) -> u64 {
        if *spender != self.owner {
            return 0;
        }
        let elapsed = self.elapsed(now);
        self.allocation(id).map(|a| a.available(elapsed)).unwrap_or(0)
    }

    /// Single authorization guard for every mutating path.
    pub fn ensure_owner(&self, caller: &Pubkey) -> std::result::Result<(), LedgerError> {
        if *caller != self.owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Moves `amount` from allocation `id` to `recipient`, bounded by the unlocked allowance.
    /// Nothing is written unless every check and sum succeeds.
    pub fn transfer_from(
        &mut self,
        id: &Pubkey,
        recipient: &mut HolderBalance,
        amount: u64,
        caller: &Pubkey,
        now: i64,
    ) -> std::result::Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        if amount > self.allowance(id, caller, now) {
            return Err(LedgerError::Unauthorized);
        }
        if recipient.holder == Pubkey::default() || self.allocation(&recipient.holder).is_some() {
            return Err(LedgerError::InvalidPubkey);
        }

        let entry = self.allocation_mut(id).ok_or(LedgerError::Unauthorized)?;
        let balance = entry
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::Unauthorized)?;
        let withdrawn = entry
            .withdrawn
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        // Last fallible step; entry fields are written only after it succeeds.
        recipient.credit(amount)?;

        entry.balance = balance;
        entry.withdrawn = withdrawn;
        Ok(())
    }

    /// Hands the owner role to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        new_owner: Pubkey,
        caller: &Pubkey,
    ) -> std::result::Result<Pubkey, LedgerError> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(LedgerError::InvalidPubkey);
        }
        let old = self.owner;
        self.owner = new_owner;
        Ok(old)
    }

    pub fn total_withdrawn(&self) -> u128 {
        self.allocations.iter().map(|a| a.withdrawn as u128).sum()
    }

    /// Sum of balances plus withdrawals equals total supply, per allocation and overall.
    pub fn is_conserved(&self) -> bool {
        let per_entry = self
            .allocations
            .iter()
            .all(|a| a.balance as u128 + a.withdrawn as u128 == a.total as u128);
        let balances: u128 = self.allocations.iter().map(|a| a.balance as u128).sum();
        per_entry && balances + self.total_withdrawn() == self.total_supply as u128
    }
}
