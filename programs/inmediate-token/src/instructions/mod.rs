pub mod initialize_ledger;
pub mod transfer_from;
pub mod transfer;
pub mod transfer_ownership;
pub mod emit_allowance_quote;
pub mod emit_balance_quote;

pub use initialize_ledger::*;
pub use transfer_from::*;
pub use transfer::*;
pub use transfer_ownership::*;
pub use emit_allowance_quote::*;
pub use emit_balance_quote::*;
