//! Error types for the permit bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Zero address is not allowed")]
    ZeroAddress,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Request already processed: nonce {nonce}")]
    AlreadyProcessed { nonce: u64 },

    // ========================================================================
    // Liquidity Errors
    // ========================================================================

    #[error("Not enough tokens on the bridge balance: available {available}, requested {requested}")]
    NotEnoughOnBridgeBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Bridge does not own token {token_id}")]
    BridgeDoesNotOwnToken { token_id: String },

    #[error("Invalid token ID: {token_id}")]
    InvalidTokenId { token_id: String },

    // ========================================================================
    // Policy Errors
    // ========================================================================

    #[error("Chain not supported: {chain}")]
    ChainNotSupported { chain: String },

    #[error("Token not supported: {token}")]
    TokenNotSupported { token: String },

    #[error("Transaction amount too low for fees")]
    AmountTooLowForFees,

    #[error("Wrong native amount: expected {expected}, got {got}")]
    WrongNativeAmount { expected: String, got: String },

    #[error("Fee rate is too high: {fee_bps} bps exceeds maximum {max_bps} bps")]
    FeeRateTooHigh { fee_bps: u64, max_bps: u64 },

    #[error("Unsupported operation: {operation} of {asset_class} assets")]
    UnsupportedOperation {
        operation: String,
        asset_class: String,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    #[error("Invalid chain: {reason}")]
    InvalidChain { reason: String },

    #[error("Fee calculation overflow")]
    FeeOverflow,

    // ========================================================================
    // Withdrawal Errors
    // ========================================================================

    #[error("No fees collected for {asset}")]
    NoFeesCollected { asset: String },

    #[error("Withdraw amount too large: accrued {accrued}, requested {requested}")]
    WithdrawTooLarge {
        accrued: Uint128,
        requested: Uint128,
    },
}
