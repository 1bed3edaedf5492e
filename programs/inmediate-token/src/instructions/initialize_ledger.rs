use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, TOKEN_NAME, TOKEN_SYMBOL};
use crate::state::TokenLedger;

pub fn handle_initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    // Splits total supply across the allocation table and fixes creation time.
    let ledger = TokenLedger::new(owner, now)?;
    let total_supply = ledger.total_supply;
    let decimals = ledger.decimals;
    ctx.accounts.ledger.set_inner(ledger);

    msg!("Ledger created at {} with supply {}", now, total_supply);
    emit!(LedgerInitialized {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        owner,
        creation_ts: now,
        total_supply,
        decimals,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TokenLedger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, TokenLedger>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub name: String,
    pub symbol: String,
    pub owner: Pubkey,
    pub creation_ts: i64,
    pub total_supply: u64,
    pub decimals: u8,
}
