//! Permit Bridge Contract - Attestor-Authorized Cross-Chain Custody
//!
//! Assets move between chains through four permit operations. An off-chain
//! attestor signs a typed-data digest of each operation; the contract checks
//! the signature, consumes the permit nonce, charges the protocol fee and
//! moves the asset.
//!
//! # Operations
//! - `lock` / `burn` (outbound): take custody of an original asset, or burn a
//!   wrapped one, for delivery on a supported destination chain
//! - `unlock` / `mint` (inbound): release a custodied original asset, or mint
//!   a wrapped one, to the receiver
//!
//! Each operation applies to native coins, CW20 tokens, non-fungible tokens
//! and semi-fungible tokens (native coins cannot be minted or burned).
//!
//! # Security
//! - Every permit and fee quote is signed by the attestor and bound to this
//!   contract address and chain ID
//! - Nonces are consumed once, globally across operation kinds
//! - Outbound operations require an allow-listed destination chain
//! - Fee accruals are tracked apart from custody balances

pub mod chain_registry;
pub mod contract;
pub mod custody;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod msg;
pub mod nonce;
mod query;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
pub use crate::fee_manager::{calc_fee_fixed, calc_fee_scaled, FeePolicy};
