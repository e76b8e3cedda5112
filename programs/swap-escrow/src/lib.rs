use anchor_lang::prelude::*;

declare_id!("2GFDdZ1wftnt7wsm3aoe1SRZaYuGtEHUPstmCG1ekBr2");

pub mod constants;
pub use constants::*;
pub mod errors;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

use errors::EscrowError;

#[program]
pub mod swap_escrow {
    use super::*;

    /// Opens an escrow: records the swap terms under a caller-chosen seed and
    /// locks `deposit_amount` of the deposit mint into a freshly created
    /// vault. The initializer pays rent for both new accounts and gets it
    /// back when the escrow closes
    pub fn initialize(
        ctx: Context<Initialize>,
        random_seed: u64,
        deposit_amount: u64,
        receive_amount: u64,
    ) -> Result<()> {
        require_gt!(deposit_amount, 0, EscrowError::InvalidAmount);
        require_gt!(receive_amount, 0, EscrowError::InvalidAmount);
        ctx.accounts.deposit(deposit_amount)?;
        ctx.accounts
            .save_escrow(random_seed, deposit_amount, receive_amount, &ctx.bumps)
    }

    /// Settles an open escrow: the taker pays the recorded receive amount to
    /// the initializer and takes the vaulted deposit in return. Both legs
    /// land in one transaction or neither does; afterwards the record and
    /// the vault are gone and their rent is back with the initializer
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        ctx.accounts.transfer_to_initializer()?;
        ctx.accounts.withdraw_and_close_vault()
    }

    /// Cancels an open escrow: returns the vaulted deposit to the
    /// initializer and closes both accounts. Only callable by the recorded
    /// initializer, and only while no taker has exchanged
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }
}
