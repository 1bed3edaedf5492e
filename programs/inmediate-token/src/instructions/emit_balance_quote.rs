use anchor_lang::prelude::*;

use crate::constants::{BALANCE_SEED, LEDGER_SEED};
use crate::error::LedgerError;
use crate::state::{self, TokenLedger};

/// Publishes the balance of an allocation or a holder. A holder whose balance
/// PDA holds no data yet has balance zero.
pub fn handle_emit_balance_quote(ctx: Context<EmitBalanceQuote>, account: Pubkey) -> Result<()> {
    let ledger = &ctx.accounts.ledger;

    let balance = if ledger.allocation(&account).is_some() {
        ledger.balance_of(&account)
    } else {
        let info = ctx.accounts.holder_balance.to_account_info();
        if !info.data_is_empty() {
            require_keys_eq!(*info.owner, crate::ID, LedgerError::HolderMismatch);
        }
        let data = info.try_borrow_data()?;
        state::balance_from_data(&data, &ledger.key(), &account)?
    };

    emit!(BalanceQuote { account, balance });
    Ok(())
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct EmitBalanceQuote<'info> {
    #[account(seeds = [LEDGER_SEED], bump)]
    pub ledger: Account<'info, TokenLedger>,

    /// CHECK: holder balance PDA for `account`; may not exist yet, decoded by the handler.
    #[account(seeds = [BALANCE_SEED, ledger.key().as_ref(), account.as_ref()], bump)]
    pub holder_balance: UncheckedAccount<'info>,
}

#[event]
pub struct BalanceQuote {
    pub account: Pubkey,
    pub balance: u64,
}
