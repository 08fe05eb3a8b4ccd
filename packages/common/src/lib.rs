//! Common - Shared Types for the Permit Bridge
//!
//! This package provides the definitions shared between the bridge contract
//! and the off-chain attestor:
//! - `asset` - asset classes, operation kinds and fee denominations
//! - `token` - message interfaces of the non-fungible and semi-fungible
//!   token contracts the bridge custodies or mints
//! - `permit` - the typed-data digests the attestor signs

pub mod asset;
pub mod permit;
pub mod token;

pub use asset::{AssetClass, AssetInfo, FeeDenomination, OperationKind};
pub use permit::{
    bytes32_to_hex, keccak256, FeeQuoteFields, PermitDomain, PermitFields, PermitSignature,
};
