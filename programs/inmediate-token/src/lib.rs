use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("EFJ9Wm1XxeKk5NfnQuJ9uZFcbgCVWkYNcC1KsagtCJpf");

#[program]
pub mod inmediate_token {
    use super::*;

    /// Creates the ledger; the signer becomes owner and the clock fixes creation time.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::handle_initialize_ledger(ctx)
    }

    /// Owner-only withdrawal from an allocation, bounded by its unlocked allowance.
    pub fn transfer_from(
        ctx: Context<TransferFrom>,
        allocation: Pubkey,
        recipient: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from::handle_transfer_from(ctx, allocation, recipient, amount)
    }

    pub fn transfer(ctx: Context<HolderTransfer>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer::handle_transfer(ctx, to, amount)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handle_transfer_ownership(ctx, new_owner)
    }

    pub fn emit_allowance_quote(
        ctx: Context<EmitAllowanceQuote>,
        allocation: Pubkey,
        spender: Pubkey,
    ) -> Result<()> {
        instructions::emit_allowance_quote::handle_emit_allowance_quote(ctx, allocation, spender)
    }

    pub fn emit_balance_quote(ctx: Context<EmitBalanceQuote>, account: Pubkey) -> Result<()> {
        instructions::emit_balance_quote::handle_emit_balance_quote(ctx, account)
    }
}
