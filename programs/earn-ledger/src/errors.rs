use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Member is not registered")]
    NotRegistered,

    #[msg("Amount must be greater than zero and meet the minimum")]
    InvalidAmount,

    #[msg("Withdrawal amount is below the minimum")]
    BelowMinimum,

    #[msg("Insufficient withdrawable balance")]
    InsufficientBalance,

    #[msg("A pending request of this kind is already outstanding")]
    DuplicatePending,

    #[msg("No pending record found for this member")]
    NotFound,

    #[msg("Already confirmed")]
    AlreadyConfirmed,

    #[msg("Unauthorized: signer is not the ledger admin")]
    Unauthorized,

    #[msg("Failed to persist member account")]
    PersistenceFailure,

    #[msg("Cannot refer yourself")]
    SelfReferral,

    #[msg("Referrer account does not match the member's referrer")]
    ReferrerMismatch,

    #[msg("Principal of the current investment is still locked")]
    InvestmentLocked,

    #[msg("Payment proof is too long")]
    ProofTooLong,

    #[msg("Destination address is too long")]
    DestinationTooLong,

    #[msg("Required text field is empty")]
    EmptyField,

    #[msg("Ledger is paused by admin")]
    LedgerPaused,

    #[msg("Invalid ledger configuration")]
    InvalidConfig,

    #[msg("Math overflow")]
    MathOverflow,
}
