use anchor_lang::prelude::*;

use crate::constants::{BALANCE_SEED, LEDGER_SEED};
use crate::error::LedgerError;
use crate::instructions::transfer_from::TokensTransferred;
use crate::state::{self, HolderBalance, TokenLedger};

pub fn handle_transfer(ctx: Context<HolderTransfer>, to: Pubkey, amount: u64) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let sender = ctx.accounts.sender.key();

    // Self transfers resolve to the same PDA on both sides and move nothing.
    if state::check_transfer(&ctx.accounts.sender_balance, &to, amount)? {
        let recipient_balance = &mut ctx.accounts.recipient_balance;
        recipient_balance.bind(ledger_key, to)?;
        state::transfer_between(&mut ctx.accounts.sender_balance, recipient_balance, amount)?;
    }

    emit!(TokensTransferred {
        from: sender,
        to,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct HolderTransfer<'info> {
    #[account(seeds = [LEDGER_SEED], bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, ledger.key().as_ref(), sender.key().as_ref()],
        bump,
        constraint = sender_balance.holder == sender.key() @ LedgerError::HolderMismatch,
    )]
    pub sender_balance: Account<'info, HolderBalance>,

    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + HolderBalance::SIZE,
        seeds = [BALANCE_SEED, ledger.key().as_ref(), to.as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, HolderBalance>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}
