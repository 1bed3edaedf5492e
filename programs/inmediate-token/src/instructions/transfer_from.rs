use anchor_lang::prelude::*;

use crate::constants::{BALANCE_SEED, LEDGER_SEED};
use crate::state::{HolderBalance, TokenLedger};

pub fn handle_transfer_from(
    ctx: Context<TransferFrom>,
    allocation: Pubkey,
    recipient: Pubkey,
    amount: u64,
) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let caller = ctx.accounts.caller.key();
    let now = Clock::get()?.unix_timestamp;

    let recipient_balance = &mut ctx.accounts.recipient_balance;
    recipient_balance.bind(ledger_key, recipient)?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.transfer_from(&allocation, recipient_balance, amount, &caller, now)?;

    emit!(TokensTransferred {
        from: allocation,
        to: recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(allocation: Pubkey, recipient: Pubkey)]
pub struct TransferFrom<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + HolderBalance::SIZE,
        seeds = [BALANCE_SEED, ledger.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, HolderBalance>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Emitted for allocation withdrawals and holder transfers alike.
#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
