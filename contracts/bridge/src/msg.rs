//! Message types for the permit bridge contract

use common::{AssetClass, AssetInfo, FeeDenomination, OperationKind, PermitSignature};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Decimal, Decimal256, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Attestor address (0x-prefixed 20-byte hex)
    pub attestor: String,
    /// Numeric chain identifier bound into permit digests
    pub chain_id: u64,
    /// Denom of this chain's native coin
    pub native_denom: String,
    /// CW20 price-reference token
    pub price_token: String,
    /// Stable asset for `native_or_stable` fees
    pub stable_asset: AssetInfo,
    /// Stable asset base units per one USD
    pub stable_per_usd: Decimal,
    /// Scaled fee in basis points (e.g., 30 = 0.3%)
    pub fee_bps: u64,
    /// Flat fee in USD for non-fungible and semi-fungible transfers
    pub fixed_fee_usd: Decimal,
    /// Minimum fee in USD; `None` disables the floor
    pub min_fee_usd: Option<Decimal>,
    /// Destination chains enabled from the start
    pub supported_chains: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Signed fee quote accompanying a permit
#[cw_serde]
pub struct FeeQuote {
    /// Price-reference token base units per one USD
    pub price_token_per_usd: Decimal256,
    /// Transferred token base units per one USD
    pub transfer_token_per_usd: Decimal256,
    /// Attestor signature over the quote and the permit nonce
    pub signature: PermitSignature,
}

/// Parameters of a lock/unlock/mint/burn call
#[cw_serde]
pub struct PermitRequest {
    /// Native denom, or the token contract address
    pub token: String,
    /// Token ID for non-fungible and semi-fungible assets, zero otherwise
    pub token_id: Uint128,
    /// Amount in base units (1 for non-fungible assets)
    pub amount: Uint128,
    /// Receiving account; on the destination chain for outbound operations
    pub receiver: String,
    /// Destination chain name for outbound operations, source chain otherwise
    pub target_chain: String,
    /// Unique permit nonce
    pub nonce: u64,
    /// Asset the caller pays the protocol fee in
    pub fee_denomination: FeeDenomination,
    pub fee_quote: FeeQuote,
    /// Attestor signature over the permit
    pub signature: PermitSignature,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Permit Operations
    // ========================================================================
    /// Take custody of an original asset for bridging out
    LockWithPermit {
        asset_class: AssetClass,
        request: PermitRequest,
    },

    /// Release a custodied original asset to the receiver
    UnlockWithPermit {
        asset_class: AssetClass,
        request: PermitRequest,
    },

    /// Mint a wrapped asset to the receiver
    MintWithPermit {
        asset_class: AssetClass,
        request: PermitRequest,
    },

    /// Burn a wrapped asset held by the caller for bridging out
    BurnWithPermit {
        asset_class: AssetClass,
        request: PermitRequest,
    },

    // ========================================================================
    // Chain Registry (admin only)
    // ========================================================================
    SetSupportedChain { chain: String },

    RemoveSupportedChain { chain: String },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Replace the admin immediately
    SetAdmin { new_admin: String },

    /// Replace the attestor address (0x-prefixed 20-byte hex)
    SetAttestor { attestor: String },

    /// Set the scaled fee rate in basis points
    SetFeeRate { fee_bps: u64 },

    /// Set the flat USD fee for non-fungible and semi-fungible transfers
    SetFixedFee { fixed_fee_usd: Decimal },

    /// Set or disable the minimum USD fee
    SetFeeFloor { min_fee_usd: Option<Decimal> },

    SetPriceToken { token: String },

    SetStableAsset {
        asset: AssetInfo,
        units_per_usd: Decimal,
    },

    /// Send accrued fees of `asset` to the admin
    Withdraw { asset: AssetInfo, amount: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Core Queries
    // ========================================================================
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns fee parameters
    #[returns(FeePolicyResponse)]
    FeePolicy {},

    // ========================================================================
    // Registries
    // ========================================================================
    /// Whether outbound operations to `chain` are allowed
    #[returns(SupportedChainResponse)]
    SupportedChain { chain: String },

    /// Lists registered chains (enabled and removed)
    #[returns(SupportedChainsResponse)]
    SupportedChains {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(NonceConsumedResponse)]
    NonceConsumed { nonce: u64 },

    // ========================================================================
    // Fees & Balances
    // ========================================================================
    /// Preview the scaled fee of a native or fungible transfer
    #[returns(FeeResponse)]
    CalcFeeScaled {
        token: String,
        amount: Uint128,
        fee_denomination: FeeDenomination,
        price_token_per_usd: Decimal256,
        transfer_token_per_usd: Decimal256,
    },

    /// Preview the fixed fee of a non-fungible or semi-fungible transfer
    #[returns(FeeResponse)]
    CalcFeeFixed {
        fee_denomination: FeeDenomination,
        price_token_per_usd: Decimal256,
    },

    #[returns(BalanceResponse)]
    FeeAccrual { asset: AssetInfo },

    #[returns(BalanceResponse)]
    LockedBalance { asset: AssetInfo },

    // ========================================================================
    // Digests
    // ========================================================================
    /// Digest the attestor must sign to authorize an operation
    #[returns(DigestResponse)]
    PermitDigest {
        kind: OperationKind,
        asset_class: AssetClass,
        token: String,
        token_id: Uint128,
        amount: Uint128,
        receiver: String,
        target_chain: String,
        nonce: u64,
    },

    /// Digest the attestor must sign to authorize a fee quote
    #[returns(DigestResponse)]
    FeeQuoteDigest {
        token: String,
        price_token_per_usd: Decimal256,
        transfer_token_per_usd: Decimal256,
        nonce: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    /// 0x-prefixed hex
    pub attestor: String,
    pub chain_id: u64,
    pub native_denom: String,
    pub price_token: Addr,
    pub stable_asset: AssetInfo,
    pub stable_per_usd: Decimal,
}

#[cw_serde]
pub struct FeePolicyResponse {
    pub fee_bps: u64,
    pub fixed_fee_usd: Decimal,
    pub min_fee_usd: Option<Decimal>,
}

#[cw_serde]
pub struct SupportedChainResponse {
    pub chain: String,
    pub supported: bool,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chains: Vec<SupportedChainResponse>,
}

#[cw_serde]
pub struct NonceConsumedResponse {
    pub nonce: u64,
    pub consumed: bool,
}

#[cw_serde]
pub struct FeeResponse {
    /// Denomination actually charged after price fallbacks
    pub denomination: FeeDenomination,
    pub asset: AssetInfo,
    pub amount: Uint128,
    /// USD value of the fee, when it can be priced
    pub usd_value: Option<Decimal>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct DigestResponse {
    /// 32-byte digest
    pub digest: Binary,
}
