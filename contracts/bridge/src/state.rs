//! State definitions for the permit bridge contract
//!
//! All registries live in contract storage behind cw-storage-plus items and
//! maps, so every execution sees (and atomically commits) a single view.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Contract Info
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:permit-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// 20-byte secp256k1 address of the off-chain attestor
    pub attestor: [u8; 20],
    /// Numeric chain identifier bound into every permit digest
    pub chain_id: u64,
    /// Denom of this chain's native coin
    pub native_denom: String,
    /// CW20 price-reference token fees can be paid in
    pub price_token: Addr,
    /// Stable asset fees can be paid in
    pub stable_asset: AssetInfo,
    /// Stable asset base units per one USD
    pub stable_per_usd: Decimal,
}

pub const CONFIG: Item<Config> = Item::new("config");

// ============================================================================
// Registries
// ============================================================================

/// Consumed permit nonces. Global across asset classes and operation kinds;
/// an entry is never removed.
pub const USED_NONCES: Map<u64, bool> = Map::new("used_nonces");

/// Destination chain name -> enabled
pub const SUPPORTED_CHAINS: Map<&str, bool> = Map::new("supported_chains");

// ============================================================================
// Balances
// ============================================================================

/// Fees accrued per `AssetInfo::key`
pub const FEE_ACCRUALS: Map<&str, Uint128> = Map::new("fee_accruals");

/// Principal held in custody per `AssetInfo::key`
pub const LOCKED_BALANCES: Map<&str, Uint128> = Map::new("locked_balances");
