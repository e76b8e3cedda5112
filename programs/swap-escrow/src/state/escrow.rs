use anchor_lang::prelude::*;

/// Terms of one open escrow.
///
/// Created by `initialize`, read by `exchange` and `cancel`, and closed by
/// whichever of the two settles it. The record is never mutated after
/// creation; its existence is what marks the escrow as open.
#[account]
#[derive(InitSpace)]
pub struct EscrowState {
    pub random_seed: u64,              // caller-chosen seed fixing this escrow's address
    pub initializer: Pubkey,           // depositing party, receives all rent refunds
    pub deposit_token_account: Pubkey, // initializer's source of the deposited asset
    pub receive_token_account: Pubkey, // initializer's destination for the counter asset
    pub deposit_mint: Pubkey,          // asset locked in the vault
    pub receive_mint: Pubkey,          // asset the initializer wants in return
    pub deposit_amount: u64,           // amount of deposit_mint held by the vault
    pub receive_amount: u64,           // amount of receive_mint required from a taker
    pub bump: u8,                      // bump of the state address
    pub vault_bump: u8,                // bump of the vault address
    pub vault_authority_bump: u8,      // bump re-deriving the vault authority's signature
}
