use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::TokenLedger;
use crate::utils::schedule::VestingPhase;

/// Publishes the unlock position of one allocation as seen by `spender` right now.
pub fn handle_emit_allowance_quote(
    ctx: Context<EmitAllowanceQuote>,
    allocation: Pubkey,
    spender: Pubkey,
) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let now = Clock::get()?.unix_timestamp;
    let elapsed = ledger.elapsed(now);

    let (unlocked, withdrawn, phase) = match ledger.allocation(&allocation) {
        Some(a) => (a.unlocked(elapsed), a.withdrawn, a.phase(elapsed)),
        None => (0, 0, VestingPhase::Locked),
    };

    emit!(AllowanceQuote {
        allocation,
        spender,
        now,
        elapsed,
        phase,
        unlocked,
        withdrawn,
        balance: ledger.balance_of(&allocation),
        allowance: ledger.allowance(&allocation, &spender, now),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitAllowanceQuote<'info> {
    #[account(seeds = [LEDGER_SEED], bump)]
    pub ledger: Account<'info, TokenLedger>,
}

#[event]
pub struct AllowanceQuote {
    pub allocation: Pubkey,
    pub spender: Pubkey,
    pub now: i64,
    pub elapsed: i64,
    pub phase: VestingPhase,
    pub unlocked: u64,
    pub withdrawn: u64,
    pub balance: u64,
    pub allowance: u64,
}
