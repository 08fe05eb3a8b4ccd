//! Permit Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::{FeeQuoteFields, OperationKind, PermitFields};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::chain_registry;
use crate::error::ContractError;
use crate::execute::{
    execute_permit, execute_remove_supported_chain, execute_set_admin, execute_set_attestor,
    execute_set_fee_floor, execute_set_fee_rate, execute_set_fixed_fee, execute_set_price_token,
    execute_set_stable_asset, execute_set_supported_chain, execute_withdraw,
    validate_stable_asset, validate_token,
};
use crate::fee_manager::{FeePolicy, PriceQuote, FEE_POLICY};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_calc_fee_fixed, query_calc_fee_scaled, query_config, query_fee_accrual,
    query_fee_policy, query_fee_quote_digest, query_locked_balance, query_nonce_consumed,
    query_permit_digest, query_supported_chain, query_supported_chains,
};
use crate::signature::{eth_address_to_hex, parse_eth_address};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.admin.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let admin = deps.api.addr_validate(&msg.admin)?;
    let attestor = parse_eth_address(&msg.attestor)?;
    let price_token = validate_token(deps.api, &msg.price_token)?;
    validate_stable_asset(deps.api, &msg.stable_asset, msg.stable_per_usd)?;
    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }

    let policy = FeePolicy {
        fee_bps: msg.fee_bps,
        fixed_fee_usd: msg.fixed_fee_usd,
        min_fee_usd: msg.min_fee_usd,
    };
    policy.validate()?;
    FEE_POLICY.save(deps.storage, &policy)?;

    let config = Config {
        admin,
        attestor,
        chain_id: msg.chain_id,
        native_denom: msg.native_denom,
        price_token,
        stable_asset: msg.stable_asset,
        stable_per_usd: msg.stable_per_usd,
    };
    CONFIG.save(deps.storage, &config)?;

    for chain in &msg.supported_chains {
        chain_registry::set_supported(deps.storage, chain, true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("attestor", eth_address_to_hex(&config.attestor))
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("fee_bps", policy.fee_bps.to_string())
        .add_attribute("supported_chains", msg.supported_chains.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Permit operations
        ExecuteMsg::LockWithPermit {
            asset_class,
            request,
        } => execute_permit(deps, env, info, OperationKind::Lock, asset_class, request),
        ExecuteMsg::UnlockWithPermit {
            asset_class,
            request,
        } => execute_permit(deps, env, info, OperationKind::Unlock, asset_class, request),
        ExecuteMsg::MintWithPermit {
            asset_class,
            request,
        } => execute_permit(deps, env, info, OperationKind::Mint, asset_class, request),
        ExecuteMsg::BurnWithPermit {
            asset_class,
            request,
        } => execute_permit(deps, env, info, OperationKind::Burn, asset_class, request),

        // Chain registry
        ExecuteMsg::SetSupportedChain { chain } => execute_set_supported_chain(deps, info, chain),
        ExecuteMsg::RemoveSupportedChain { chain } => {
            execute_remove_supported_chain(deps, info, chain)
        }

        // Admin
        ExecuteMsg::SetAdmin { new_admin } => execute_set_admin(deps, info, new_admin),
        ExecuteMsg::SetAttestor { attestor } => execute_set_attestor(deps, info, attestor),
        ExecuteMsg::SetFeeRate { fee_bps } => execute_set_fee_rate(deps, info, fee_bps),
        ExecuteMsg::SetFixedFee { fixed_fee_usd } => {
            execute_set_fixed_fee(deps, info, fixed_fee_usd)
        }
        ExecuteMsg::SetFeeFloor { min_fee_usd } => execute_set_fee_floor(deps, info, min_fee_usd),
        ExecuteMsg::SetPriceToken { token } => execute_set_price_token(deps, info, token),
        ExecuteMsg::SetStableAsset {
            asset,
            units_per_usd,
        } => execute_set_stable_asset(deps, info, asset, units_per_usd),
        ExecuteMsg::Withdraw { asset, amount } => execute_withdraw(deps, info, asset, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::FeePolicy {} => to_json_binary(&query_fee_policy(deps)?),
        QueryMsg::SupportedChain { chain } => to_json_binary(&query_supported_chain(deps, chain)?),
        QueryMsg::SupportedChains { start_after, limit } => {
            to_json_binary(&query_supported_chains(deps, start_after, limit)?)
        }
        QueryMsg::NonceConsumed { nonce } => to_json_binary(&query_nonce_consumed(deps, nonce)?),
        QueryMsg::CalcFeeScaled {
            token,
            amount,
            fee_denomination,
            price_token_per_usd,
            transfer_token_per_usd,
        } => to_json_binary(&query_calc_fee_scaled(
            deps,
            token,
            amount,
            fee_denomination,
            PriceQuote {
                price_token_per_usd,
                transfer_token_per_usd,
            },
        )?),
        QueryMsg::CalcFeeFixed {
            fee_denomination,
            price_token_per_usd,
        } => to_json_binary(&query_calc_fee_fixed(
            deps,
            fee_denomination,
            price_token_per_usd,
        )?),
        QueryMsg::FeeAccrual { asset } => to_json_binary(&query_fee_accrual(deps, asset)?),
        QueryMsg::LockedBalance { asset } => to_json_binary(&query_locked_balance(deps, asset)?),
        QueryMsg::PermitDigest {
            kind,
            asset_class,
            token,
            token_id,
            amount,
            receiver,
            target_chain,
            nonce,
        } => to_json_binary(&query_permit_digest(
            deps,
            env,
            kind,
            PermitFields {
                asset_class,
                receiver,
                token,
                token_id: token_id.u128(),
                amount: amount.u128(),
                target_chain,
                nonce,
            },
        )?),
        QueryMsg::FeeQuoteDigest {
            token,
            price_token_per_usd,
            transfer_token_per_usd,
            nonce,
        } => to_json_binary(&query_fee_quote_digest(
            deps,
            env,
            FeeQuoteFields {
                price_token_per_usd,
                transfer_token_per_usd,
                token,
                nonce,
            },
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
