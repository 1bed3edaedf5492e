use anchor_lang::prelude::*;

use crate::constants::is_allocation;
use crate::error::LedgerError;

/// Token balance of one holder, PDA seeded by `[BALANCE_SEED, ledger, holder]`.
#[account]
pub struct HolderBalance {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
}

impl HolderBalance {
    pub const SIZE: usize =
        32 + // ledger
        32 + // holder
        8;   // amount

    pub fn new(ledger: Pubkey, holder: Pubkey) -> Self {
        Self {
            ledger,
            holder,
            amount: 0,
        }
    }

    /// Claims a freshly created record, or checks that an existing one matches.
    pub fn bind(&mut self, ledger: Pubkey, holder: Pubkey) -> std::result::Result<(), LedgerError> {
        if self.ledger == Pubkey::default() && self.holder == Pubkey::default() {
            self.ledger = ledger;
            self.holder = holder;
            return Ok(());
        }
        if self.ledger != ledger || self.holder != holder {
            return Err(LedgerError::HolderMismatch);
        }
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> std::result::Result<(), LedgerError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}

/// Balance stored in a holder PDA's raw account data. Empty data means the
/// record was never created and the balance is zero.
pub fn balance_from_data(
    data: &[u8],
    ledger: &Pubkey,
    holder: &Pubkey,
) -> std::result::Result<u64, LedgerError> {
    if data.is_empty() {
        return Ok(0);
    }
    let rec = HolderBalance::try_deserialize(&mut &data[..])
        .map_err(|_| LedgerError::HolderMismatch)?;
    if rec.ledger != *ledger || rec.holder != *holder {
        return Err(LedgerError::HolderMismatch);
    }
    Ok(rec.amount)
}

/// Checks a holder transfer of `amount` from `from` to `to`. Returns `false`
/// for a transfer to oneself, which moves nothing.
pub fn check_transfer(
    from: &HolderBalance,
    to: &Pubkey,
    amount: u64,
) -> std::result::Result<bool, LedgerError> {
    if *to == Pubkey::default() || is_allocation(to) {
        return Err(LedgerError::InvalidPubkey);
    }
    if from.amount < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    Ok(*to != from.holder)
}

/// Moves `amount` between two distinct holder records of the same ledger.
pub fn transfer_between(
    from: &mut HolderBalance,
    to: &mut HolderBalance,
    amount: u64,
) -> std::result::Result<(), LedgerError> {
    if from.ledger != to.ledger {
        return Err(LedgerError::HolderMismatch);
    }
    let debited = from
        .amount
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;
    let credited = to
        .amount
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    from.amount = debited;
    to.amount = credited;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEAM_ALLOCATION;

    #[test]
    fn bind_claims_fresh_record_once() {
        let ledger = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let mut rec = HolderBalance::new(Pubkey::default(), Pubkey::default());
        rec.bind(ledger, alice).unwrap();
        assert_eq!(rec.holder, alice);
        rec.bind(ledger, alice).unwrap();
        assert!(matches!(
            rec.bind(ledger, Pubkey::new_unique()),
            Err(LedgerError::HolderMismatch)
        ));
    }

    #[test]
    fn transfer_between_moves_exact_amount() {
        let ledger = Pubkey::new_unique();
        let mut a = HolderBalance::new(ledger, Pubkey::new_unique());
        let mut b = HolderBalance::new(ledger, Pubkey::new_unique());
        a.credit(100).unwrap();

        transfer_between(&mut a, &mut b, 40).unwrap();
        assert_eq!((a.amount, b.amount), (60, 40));

        assert!(matches!(
            transfer_between(&mut a, &mut b, 61),
            Err(LedgerError::InsufficientBalance)
        ));
        assert_eq!((a.amount, b.amount), (60, 40));
    }

    #[test]
    fn transfer_between_rejects_foreign_ledger() {
        let mut a = HolderBalance::new(Pubkey::new_unique(), Pubkey::new_unique());
        let mut b = HolderBalance::new(Pubkey::new_unique(), Pubkey::new_unique());
        a.credit(1).unwrap();
        assert!(matches!(
            transfer_between(&mut a, &mut b, 1),
            Err(LedgerError::HolderMismatch)
        ));
    }

    #[test]
    fn self_transfer_moves_nothing() {
        let alice = Pubkey::new_unique();
        let mut rec = HolderBalance::new(Pubkey::new_unique(), alice);
        rec.credit(50).unwrap();

        assert!(!check_transfer(&rec, &alice, 50).unwrap());
        assert_eq!(rec.amount, 50);
        assert!(matches!(
            check_transfer(&rec, &alice, 51),
            Err(LedgerError::InsufficientBalance)
        ));
    }

    #[test]
    fn transfer_to_other_holder_is_checked() {
        let mut rec = HolderBalance::new(Pubkey::new_unique(), Pubkey::new_unique());
        rec.credit(10).unwrap();
        let bob = Pubkey::new_unique();

        assert!(check_transfer(&rec, &bob, 10).unwrap());
        assert!(matches!(
            check_transfer(&rec, &bob, 11),
            Err(LedgerError::InsufficientBalance)
        ));
    }

    #[test]
    fn transfer_to_allocation_or_default_key_is_rejected() {
        let mut rec = HolderBalance::new(Pubkey::new_unique(), Pubkey::new_unique());
        rec.credit(10).unwrap();

        assert!(matches!(
            check_transfer(&rec, &TEAM_ALLOCATION, 1),
            Err(LedgerError::InvalidPubkey)
        ));
        assert!(matches!(
            check_transfer(&rec, &Pubkey::default(), 1),
            Err(LedgerError::InvalidPubkey)
        ));
    }

    #[test]
    fn balance_read_from_record_data() {
        let ledger = Pubkey::new_unique();
        let investor = Pubkey::new_unique();
        let mut rec = HolderBalance::new(ledger, investor);
        rec.credit(400_000_000 * crate::constants::ONE_TOKEN).unwrap();

        let mut data = Vec::new();
        rec.try_serialize(&mut data).unwrap();

        assert_eq!(
            balance_from_data(&data, &ledger, &investor).unwrap(),
            400_000_000 * crate::constants::ONE_TOKEN
        );
        assert_eq!(balance_from_data(&[], &ledger, &investor).unwrap(), 0);
        assert!(matches!(
            balance_from_data(&data, &ledger, &Pubkey::new_unique()),
            Err(LedgerError::HolderMismatch)
        ));
        assert!(matches!(
            balance_from_data(&[1, 2, 3], &ledger, &investor),
            Err(LedgerError::HolderMismatch)
        ));
    }
}
