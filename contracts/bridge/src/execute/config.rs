//! Configuration handlers: chain registry and fee parameters.

use common::AssetInfo;
use cosmwasm_std::{Addr, Api, Decimal, DepsMut, MessageInfo, Response};

use crate::chain_registry;
use crate::error::ContractError;
use crate::execute::admin::ensure_admin;
use crate::fee_manager::FEE_POLICY;
use crate::state::CONFIG;

// ============================================================================
// Validation
// ============================================================================

/// Validate a CW20 address that must not be empty.
pub fn validate_token(api: &dyn Api, token: &str) -> Result<Addr, ContractError> {
    if token.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    Ok(api.addr_validate(token)?)
}

/// Validate the stable fee asset and its price.
pub fn validate_stable_asset(
    api: &dyn Api,
    asset: &AssetInfo,
    units_per_usd: Decimal,
) -> Result<(), ContractError> {
    match asset {
        AssetInfo::Native { denom } if denom.trim().is_empty() => {
            return Err(ContractError::ZeroAddress)
        }
        AssetInfo::Native { .. } => {}
        AssetInfo::Cw20 { contract_addr } => {
            validate_token(api, contract_addr)?;
        }
    }
    if units_per_usd.is_zero() {
        return Err(ContractError::InvalidPrice {
            reason: "stable asset price must be greater than zero".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Chain Registry
// ============================================================================

pub fn execute_set_supported_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;
    chain_registry::set_supported(deps.storage, &chain, true)?;

    Ok(Response::new()
        .add_attribute("action", "set_new_chain")
        .add_attribute("chain", chain))
}

pub fn execute_remove_supported_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;
    chain_registry::set_supported(deps.storage, &chain, false)?;

    Ok(Response::new()
        .add_attribute("action", "remove_chain")
        .add_attribute("chain", chain))
}

// ============================================================================
// Fee Parameters
// ============================================================================

pub fn execute_set_fee_rate(
    deps: DepsMut,
    info: MessageInfo,
    fee_bps: u64,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut policy = FEE_POLICY.load(deps.storage)?;
    policy.fee_bps = fee_bps;
    policy.validate()?;
    FEE_POLICY.save(deps.storage, &policy)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_rate")
        .add_attribute("fee_bps", fee_bps.to_string()))
}

pub fn execute_set_fixed_fee(
    deps: DepsMut,
    info: MessageInfo,
    fixed_fee_usd: Decimal,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut policy = FEE_POLICY.load(deps.storage)?;
    policy.fixed_fee_usd = fixed_fee_usd;
    FEE_POLICY.save(deps.storage, &policy)?;

    Ok(Response::new()
        .add_attribute("action", "set_fixed_fee")
        .add_attribute("fixed_fee_usd", fixed_fee_usd.to_string()))
}

/// `None` disables the minimum fee.
pub fn execute_set_fee_floor(
    deps: DepsMut,
    info: MessageInfo,
    min_fee_usd: Option<Decimal>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut policy = FEE_POLICY.load(deps.storage)?;
    policy.min_fee_usd = min_fee_usd;
    FEE_POLICY.save(deps.storage, &policy)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_floor")
        .add_attribute(
            "min_fee_usd",
            min_fee_usd.map_or_else(|| "disabled".to_string(), |min| min.to_string()),
        ))
}

pub fn execute_set_price_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.price_token = validate_token(deps.api, &token)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_price_token")
        .add_attribute("token", config.price_token.to_string()))
}

pub fn execute_set_stable_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    units_per_usd: Decimal,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;
    validate_stable_asset(deps.api, &asset, units_per_usd)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.stable_asset = asset;
    config.stable_per_usd = units_per_usd;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_stable_asset")
        .add_attribute("asset", config.stable_asset.to_string())
        .add_attribute("units_per_usd", units_per_usd.to_string()))
}
