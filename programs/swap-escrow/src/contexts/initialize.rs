use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::EscrowError;
use crate::{EscrowState, AUTHORITY_SEED, STATE_SEED, VAULT_SEED};

/// Accounts for `initialize`: the initializer opens an escrow, recording the
/// swap terms and locking the deposit into a freshly created vault.
#[derive(Accounts)]
#[instruction(random_seed: u64, deposit_amount: u64)]
pub struct Initialize<'info> {
    /// The party opening the escrow; signs, funds both new accounts, and
    /// is the only one who may later cancel
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Mint of the asset being locked into the vault
    #[account(mint::token_program = token_program)]
    pub deposit_mint: InterfaceAccount<'info, Mint>,

    /// Mint of the asset the initializer wants in return
    #[account(mint::token_program = token_program)]
    pub receive_mint: InterfaceAccount<'info, Mint>,

    /// Initializer's source of deposit-mint tokens; must cover the deposit
    #[account(
        mut,
        token::mint = deposit_mint,
        token::authority = initializer,
        token::token_program = token_program,
        constraint = deposit_token_account.amount >= deposit_amount
            @ EscrowError::InsufficientDepositBalance,
    )]
    pub deposit_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Initializer's destination for receive-mint tokens, recorded now and
    /// paid into by a future `exchange`
    #[account(
        token::mint = receive_mint,
        token::authority = initializer,
        token::token_program = token_program,
    )]
    pub receive_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The escrow record. Its address is fixed by the caller-chosen seed, so
    /// allocation fails if an escrow with this seed is already open
    #[account(
        init,
        payer = initializer,
        space = 8 + EscrowState::INIT_SPACE,
        seeds = [STATE_SEED, random_seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow_state: Box<Account<'info, EscrowState>>,

    /// Vault holding the deposit while the escrow is open. One vault per
    /// escrow, owned at the token level by the shared vault authority
    #[account(
        init,
        payer = initializer,
        seeds = [VAULT_SEED, random_seed.to_le_bytes().as_ref()],
        bump,
        token::mint = deposit_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: key-less PDA that signs vault transfers; never holds data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Record the swap terms, the caller's seed, and the bumps needed to
    /// verify the state address and re-derive the vault authority later
    pub fn save_escrow(
        &mut self,
        random_seed: u64,
        deposit_amount: u64,
        receive_amount: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.escrow_state.set_inner(EscrowState {
            random_seed,
            initializer: self.initializer.key(),
            deposit_token_account: self.deposit_token_account.key(),
            receive_token_account: self.receive_token_account.key(),
            deposit_mint: self.deposit_mint.key(),
            receive_mint: self.receive_mint.key(),
            deposit_amount,
            receive_amount,
            bump: bumps.escrow_state,
            vault_bump: bumps.vault,
            vault_authority_bump: bumps.vault_authority,
        });
        Ok(())
    }

    /// Move the deposit from the initializer's token account into the vault,
    /// authorized by the initializer's own signature
    pub fn deposit(&mut self, deposit_amount: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.deposit_token_account.to_account_info(),
            mint: self.deposit_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.initializer.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, deposit_amount, self.deposit_mint.decimals)
    }
}
