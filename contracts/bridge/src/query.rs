//! Query handlers for the permit bridge contract.

use common::{
    AssetClass, AssetInfo, FeeDenomination, FeeQuoteFields, OperationKind, PermitDomain,
    PermitFields,
};
use cosmwasm_std::{Binary, Decimal256, Deps, Env, StdError, StdResult, Uint128};

use crate::chain_registry;
use crate::custody;
use crate::error::ContractError;
use crate::fee_manager::{calc_fee_fixed, calc_fee_scaled, FeeCharge, PriceQuote, FEE_POLICY};
use crate::msg::{
    BalanceResponse, ConfigResponse, DigestResponse, FeePolicyResponse, FeeResponse,
    NonceConsumedResponse, SupportedChainResponse, SupportedChainsResponse,
};
use crate::nonce;
use crate::signature::eth_address_to_hex;
use crate::state::{CONFIG, FEE_ACCRUALS};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        attestor: eth_address_to_hex(&config.attestor),
        chain_id: config.chain_id,
        native_denom: config.native_denom,
        price_token: config.price_token,
        stable_asset: config.stable_asset,
        stable_per_usd: config.stable_per_usd,
    })
}

pub fn query_fee_policy(deps: Deps) -> StdResult<FeePolicyResponse> {
    let policy = FEE_POLICY.load(deps.storage)?;
    Ok(FeePolicyResponse {
        fee_bps: policy.fee_bps,
        fixed_fee_usd: policy.fixed_fee_usd,
        min_fee_usd: policy.min_fee_usd,
    })
}

// ============================================================================
// Registries
// ============================================================================

pub fn query_supported_chain(deps: Deps, chain: String) -> StdResult<SupportedChainResponse> {
    let supported = chain_registry::is_supported(deps.storage, &chain)?;
    Ok(SupportedChainResponse { chain, supported })
}

pub fn query_supported_chains(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<SupportedChainsResponse> {
    let chains = chain_registry::list(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(chain, supported)| SupportedChainResponse { chain, supported })
        .collect();
    Ok(SupportedChainsResponse { chains })
}

pub fn query_nonce_consumed(deps: Deps, nonce: u64) -> StdResult<NonceConsumedResponse> {
    Ok(NonceConsumedResponse {
        nonce,
        consumed: nonce::is_consumed(deps.storage, nonce)?,
    })
}

// ============================================================================
// Fees & Balances
// ============================================================================

fn fee_response(result: Result<FeeCharge, ContractError>) -> StdResult<FeeResponse> {
    let charge = result.map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(FeeResponse {
        denomination: charge.denomination,
        asset: charge.asset,
        amount: charge.amount,
        usd_value: charge.usd_value,
    })
}

/// Scaled fee of transferring `amount` of `token` (the native denom or a CW20).
pub fn query_calc_fee_scaled(
    deps: Deps,
    token: String,
    amount: Uint128,
    fee_denomination: FeeDenomination,
    quote: PriceQuote,
) -> StdResult<FeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let policy = FEE_POLICY.load(deps.storage)?;
    let class = if token == config.native_denom {
        AssetClass::Native
    } else {
        AssetClass::Fungible
    };
    let asset = custody::transfer_asset(class, &token);
    fee_response(calc_fee_scaled(
        &config,
        &policy,
        &asset,
        amount,
        fee_denomination,
        &quote,
    ))
}

pub fn query_calc_fee_fixed(
    deps: Deps,
    fee_denomination: FeeDenomination,
    price_token_per_usd: Decimal256,
) -> StdResult<FeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let policy = FEE_POLICY.load(deps.storage)?;
    let quote = PriceQuote {
        price_token_per_usd,
        transfer_token_per_usd: Decimal256::zero(),
    };
    fee_response(calc_fee_fixed(&config, &policy, fee_denomination, &quote))
}

pub fn query_fee_accrual(deps: Deps, asset: AssetInfo) -> StdResult<BalanceResponse> {
    let amount = FEE_ACCRUALS
        .may_load(deps.storage, &asset.key())?
        .unwrap_or_default();
    Ok(BalanceResponse { asset, amount })
}

pub fn query_locked_balance(deps: Deps, asset: AssetInfo) -> StdResult<BalanceResponse> {
    let amount = custody::locked_balance(deps.storage, &asset)?;
    Ok(BalanceResponse { asset, amount })
}

// ============================================================================
// Digests
// ============================================================================

fn domain(deps: Deps, env: &Env) -> StdResult<PermitDomain> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PermitDomain::new(config.chain_id, env.contract.address.as_str()))
}

pub fn query_permit_digest(
    deps: Deps,
    env: Env,
    kind: OperationKind,
    fields: PermitFields,
) -> StdResult<DigestResponse> {
    let digest = domain(deps, &env)?.permit_digest(kind, &fields);
    Ok(DigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}

pub fn query_fee_quote_digest(
    deps: Deps,
    env: Env,
    fields: FeeQuoteFields,
) -> StdResult<DigestResponse> {
    let digest = domain(deps, &env)?.fee_quote_digest(&fields);
    Ok(DigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}
