use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::errors::EscrowError;
use crate::{EscrowState, AUTHORITY_SEED, STATE_SEED, VAULT_SEED};

/// Accounts for `cancel`: the initializer reclaims the vaulted deposit and
/// closes the escrow before any taker has exchanged. Only the recorded
/// initializer may do this; a taker-side account is never involved.
#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The escrow's initializer; must sign, and must match the record
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Mint of the vaulted deposit
    #[account(mint::token_program = token_program)]
    pub deposit_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Initializer's deposit account exactly as recorded at initialization;
    /// receives the refund
    #[account(
        mut,
        token::mint = deposit_mint,
        token::authority = initializer,
        token::token_program = token_program,
    )]
    pub deposit_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The escrow record being cancelled; closed to the initializer once the
    /// vault has been emptied
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = deposit_mint @ EscrowError::InvalidDepositMint,
        has_one = deposit_token_account @ EscrowError::InvalidDepositTokenAccount,
        seeds = [STATE_SEED, escrow_state.random_seed.to_le_bytes().as_ref()],
        bump = escrow_state.bump,
    )]
    pub escrow_state: Box<Account<'info, EscrowState>>,

    /// Vault holding the initializer's deposit
    #[account(
        mut,
        seeds = [VAULT_SEED, escrow_state.random_seed.to_le_bytes().as_ref()],
        bump = escrow_state.vault_bump,
        token::mint = deposit_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: key-less PDA that signs vault transfers; never holds data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = escrow_state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Cancel<'info> {
    /// Return the vault's entire balance to the initializer's deposit
    /// account, signed by the derived vault authority, then close the empty
    /// vault back to the initializer
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: [&[&[u8]]; 1] = [&[
            AUTHORITY_SEED,
            &[self.escrow_state.vault_authority_bump],
        ]];

        let transfer_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.deposit_mint.to_account_info(),
            to: self.deposit_token_account.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            transfer_accounts,
            &signer_seeds,
        );
        transfer_checked(cpi_ctx, self.vault.amount, self.deposit_mint.decimals)?;

        let close_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            &signer_seeds,
        );
        close_account(cpi_ctx)
    }
}
