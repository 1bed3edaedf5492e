pub mod allocation;
pub mod holder;
pub mod ledger;

pub use allocation::*;
pub use holder::*;
pub use ledger::*;
