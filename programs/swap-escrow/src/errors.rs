use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Deposit token account balance is below the deposit amount")]
    InsufficientDepositBalance,
    #[msg("Taker token account balance is below the receive amount")]
    InsufficientTakerBalance,
    #[msg("Signer does not match the escrow initializer")]
    InvalidInitializer,
    #[msg("Deposit token account does not match the escrow record")]
    InvalidDepositTokenAccount,
    #[msg("Receive token account does not match the escrow record")]
    InvalidReceiveTokenAccount,
    #[msg("Deposit mint does not match the escrow record")]
    InvalidDepositMint,
    #[msg("Receive mint does not match the escrow record")]
    InvalidReceiveMint,
}
