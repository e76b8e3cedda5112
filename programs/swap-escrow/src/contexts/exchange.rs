use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::errors::EscrowError;
use crate::{EscrowState, AUTHORITY_SEED, STATE_SEED, VAULT_SEED};

/// Accounts for `exchange`: a taker settles an open escrow by paying the
/// requested amount to the initializer and receiving the vaulted deposit.
/// Every account the record references is cross-checked before any transfer.
#[derive(Accounts)]
pub struct Exchange<'info> {
    /// The counterparty completing the swap
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The escrow's initializer; receives the rent refunds of both closed
    /// accounts in addition to the taker's payment
    #[account(mut)]
    pub initializer: SystemAccount<'info>,

    /// Mint of the vaulted deposit
    #[account(mint::token_program = token_program)]
    pub deposit_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Mint the taker pays with
    #[account(mint::token_program = token_program)]
    pub receive_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Taker's source of receive-mint tokens; must cover the recorded amount
    #[account(
        mut,
        token::mint = receive_mint,
        token::authority = taker,
        token::token_program = token_program,
        constraint = taker_deposit_token_account.amount >= escrow_state.receive_amount
            @ EscrowError::InsufficientTakerBalance,
    )]
    pub taker_deposit_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's destination for the vaulted deposit, created if missing
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = deposit_mint,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_receive_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Initializer's deposit account exactly as recorded at initialization
    pub deposit_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Initializer's recorded destination for the taker's payment
    #[account(mut)]
    pub receive_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The escrow record being settled; closed to the initializer once both
    /// legs have cleared
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = deposit_mint @ EscrowError::InvalidDepositMint,
        has_one = receive_mint @ EscrowError::InvalidReceiveMint,
        has_one = deposit_token_account @ EscrowError::InvalidDepositTokenAccount,
        has_one = receive_token_account @ EscrowError::InvalidReceiveTokenAccount,
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

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Exchange<'info> {
    /// First leg: the taker pays the recorded receive amount into the
    /// initializer's receive account
    pub fn transfer_to_initializer(&mut self) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.taker_deposit_token_account.to_account_info(),
            mint: self.receive_mint.to_account_info(),
            to: self.receive_token_account.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(
            cpi_ctx,
            self.escrow_state.receive_amount,
            self.receive_mint.decimals,
        )
    }

    /// Second leg: release the vault's entire balance to the taker, signed by
    /// the derived vault authority, then close the empty vault back to the
    /// initializer
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: [&[&[u8]]; 1] = [&[
            AUTHORITY_SEED,
            &[self.escrow_state.vault_authority_bump],
        ]];

        let transfer_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.deposit_mint.to_account_info(),
            to: self.taker_receive_token_account.to_account_info(),
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
