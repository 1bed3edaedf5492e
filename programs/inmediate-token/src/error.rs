use anchor_lang::prelude::*;

/// Custom error codes for the allocation ledger.
#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized: caller is not the owner or amount exceeds the unlocked allowance")]
    Unauthorized,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Insufficient holder balance")]
    InsufficientBalance,

    #[msg("Holder record belongs to another ledger or holder")]
    HolderMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
