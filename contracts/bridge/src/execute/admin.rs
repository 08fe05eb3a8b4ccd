//! Admin operations handlers.
//!
//! This module handles:
//! - Admin and attestor reassignment
//! - Withdrawal of accrued fees

use cosmwasm_std::{
    coins, to_json_binary, BankMsg, CosmosMsg, Deps, DepsMut, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::signature::{eth_address_to_hex, parse_eth_address};
use crate::state::{CONFIG, FEE_ACCRUALS};
use common::AssetInfo;

/// Fails with `Unauthorized` unless `info.sender` is the admin.
pub fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Reassignment
// ============================================================================

/// Replace the admin. Takes effect immediately.
pub fn execute_set_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    if new_admin.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }

    let previous = config.admin;
    config.admin = deps.api.addr_validate(&new_admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_admin")
        .add_attribute("previous_admin", previous.to_string())
        .add_attribute("new_admin", config.admin.to_string()))
}

pub fn execute_set_attestor(
    deps: DepsMut,
    info: MessageInfo,
    attestor: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.attestor = parse_eth_address(&attestor)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_attestor")
        .add_attribute("attestor", eth_address_to_hex(&config.attestor)))
}

// ============================================================================
// Fee Withdrawal
// ============================================================================

/// Send `amount` of the fees accrued in `asset` to the admin.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let key = asset.key();
    let accrued = FEE_ACCRUALS
        .may_load(deps.storage, &key)?
        .unwrap_or_default();
    if accrued.is_zero() {
        return Err(ContractError::NoFeesCollected {
            asset: asset.to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdraw amount must be greater than zero".to_string(),
        });
    }
    if amount > accrued {
        return Err(ContractError::WithdrawTooLarge {
            accrued,
            requested: amount,
        });
    }
    FEE_ACCRUALS.save(deps.storage, &key, &(accrued - amount))?;

    let msg: CosmosMsg = match &asset {
        AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: coins(amount.u128(), denom),
        }),
        AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.clone(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: config.admin.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "withdraw")
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", config.admin.to_string()))
}
