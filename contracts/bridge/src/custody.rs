//! Asset custody dispatcher
//!
//! Moves value for one permit operation according to its asset class:
//!
//! | class         | lock                   | unlock              | mint       | burn          |
//! |---------------|------------------------|---------------------|------------|---------------|
//! | native        | funds held by bridge   | bank send           | -          | -             |
//! | fungible      | cw20 `TransferFrom`    | cw20 `Transfer`     | cw20 `Mint`| cw20 `BurnFrom`|
//! | non-fungible  | `TransferNft` to bridge| `TransferNft` out   | `Mint`     | `BurnFrom`    |
//! | semi-fungible | `SendFrom` to bridge   | `SendFrom` out      | `Mint`     | `BurnFrom`    |
//!
//! Dispatch is split in two phases. `check` runs every read-only precondition
//! before the nonce is consumed; `apply` records custody balances and builds
//! the token messages. Token contracts report their own failures
//! (insufficient balance, missing allowance) and abort the whole transaction.

use common::token::{
    MultiTokenBalanceResponse, MultiTokenExecuteMsg, MultiTokenQueryMsg, NftExecuteMsg,
    NftQueryMsg, OwnerOfResponse,
};
use common::{AssetClass, AssetInfo, OperationKind};
use cosmwasm_std::{
    coins, to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, Deps, QuerierWrapper, StdError,
    StdResult, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use serde::Serialize;

use crate::error::ContractError;
use crate::msg::PermitRequest;
use crate::state::{Config, LOCKED_BALANCES};

/// Asset a native or fungible request transfers.
pub fn transfer_asset(class: AssetClass, token: &str) -> AssetInfo {
    match class {
        AssetClass::Native => AssetInfo::native(token),
        _ => AssetInfo::cw20(token),
    }
}

/// Native coin the caller must attach as principal.
pub fn principal_funds(
    kind: OperationKind,
    class: AssetClass,
    request: &PermitRequest,
) -> Option<Coin> {
    match (kind, class) {
        (OperationKind::Lock, AssetClass::Native) => Some(Coin {
            denom: request.token.clone(),
            amount: request.amount,
        }),
        _ => None,
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Static shape checks of a request.
pub fn validate_request(
    api: &dyn Api,
    config: &Config,
    kind: OperationKind,
    class: AssetClass,
    request: &PermitRequest,
) -> Result<(), ContractError> {
    if class == AssetClass::Native && matches!(kind, OperationKind::Mint | OperationKind::Burn) {
        return Err(ContractError::UnsupportedOperation {
            operation: kind.to_string(),
            asset_class: class.to_string(),
        });
    }

    if request.receiver.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    if !kind.is_outbound() {
        api.addr_validate(&request.receiver)?;
    }

    match class {
        AssetClass::Native => {
            if request.token != config.native_denom {
                return Err(ContractError::TokenNotSupported {
                    token: request.token.clone(),
                });
            }
        }
        _ => {
            if request.token.trim().is_empty() {
                return Err(ContractError::ZeroAddress);
            }
            api.addr_validate(&request.token)?;
        }
    }

    if class.is_fungible() && !request.token_id.is_zero() {
        return Err(ContractError::InvalidTokenId {
            token_id: request.token_id.to_string(),
        });
    }

    match class {
        AssetClass::NonFungible if request.amount != Uint128::one() => {
            Err(ContractError::InvalidAmount {
                reason: "non-fungible transfers move exactly one token".to_string(),
            })
        }
        _ if request.amount.is_zero() => Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Read-only custody preconditions.
pub fn check(
    deps: Deps,
    bridge: &Addr,
    kind: OperationKind,
    class: AssetClass,
    caller: &Addr,
    request: &PermitRequest,
) -> Result<(), ContractError> {
    let token_id = request.token_id.to_string();
    match (kind, class) {
        (OperationKind::Unlock, AssetClass::Native | AssetClass::Fungible) => {
            let custody_asset = transfer_asset(class, &request.token);
            let available = locked_balance(deps.storage, &custody_asset)?;
            if available < request.amount {
                return Err(ContractError::NotEnoughOnBridgeBalance {
                    available,
                    requested: request.amount,
                });
            }
        }
        (OperationKind::Unlock, AssetClass::NonFungible) => {
            if nft_owner(&deps.querier, &request.token, &token_id).as_deref()
                != Some(bridge.as_str())
            {
                return Err(ContractError::BridgeDoesNotOwnToken { token_id });
            }
        }
        (OperationKind::Unlock, AssetClass::SemiFungible) => {
            let available =
                multi_token_balance(&deps.querier, &request.token, bridge.as_str(), &token_id)?;
            if available < request.amount {
                return Err(ContractError::NotEnoughOnBridgeBalance {
                    available,
                    requested: request.amount,
                });
            }
        }
        (OperationKind::Lock | OperationKind::Burn, AssetClass::NonFungible) => {
            if nft_owner(&deps.querier, &request.token, &token_id).as_deref()
                != Some(caller.as_str())
            {
                return Err(ContractError::InvalidTokenId { token_id });
            }
        }
        _ => {}
    }
    Ok(())
}

// ============================================================================
// Dispatch
// ============================================================================

/// Record custody changes and build the token messages of the operation.
pub fn apply(
    storage: &mut dyn Storage,
    bridge: &Addr,
    kind: OperationKind,
    class: AssetClass,
    caller: &Addr,
    request: &PermitRequest,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let token = request.token.as_str();
    let token_id = request.token_id.to_string();
    let amount = request.amount;
    let receiver = request.receiver.clone();

    let msg = match (kind, class) {
        (OperationKind::Lock, AssetClass::Native) => {
            add_locked(storage, &AssetInfo::native(token), amount)?;
            None
        }
        (OperationKind::Lock, AssetClass::Fungible) => {
            add_locked(storage, &AssetInfo::cw20(token), amount)?;
            Some(execute_on(
                token,
                &Cw20ExecuteMsg::TransferFrom {
                    owner: caller.to_string(),
                    recipient: bridge.to_string(),
                    amount,
                },
            )?)
        }
        (OperationKind::Lock, AssetClass::NonFungible) => Some(execute_on(
            token,
            &NftExecuteMsg::TransferNft {
                recipient: bridge.to_string(),
                token_id,
            },
        )?),
        (OperationKind::Lock, AssetClass::SemiFungible) => Some(execute_on(
            token,
            &MultiTokenExecuteMsg::SendFrom {
                from: caller.to_string(),
                to: bridge.to_string(),
                token_id,
                value: amount,
                msg: None,
            },
        )?),

        (OperationKind::Unlock, AssetClass::Native) => {
            sub_locked(storage, &AssetInfo::native(token), amount)?;
            Some(CosmosMsg::Bank(BankMsg::Send {
                to_address: receiver,
                amount: coins(amount.u128(), token),
            }))
        }
        (OperationKind::Unlock, AssetClass::Fungible) => {
            sub_locked(storage, &AssetInfo::cw20(token), amount)?;
            Some(execute_on(
                token,
                &Cw20ExecuteMsg::Transfer {
                    recipient: receiver,
                    amount,
                },
            )?)
        }
        (OperationKind::Unlock, AssetClass::NonFungible) => Some(execute_on(
            token,
            &NftExecuteMsg::TransferNft {
                recipient: receiver,
                token_id,
            },
        )?),
        (OperationKind::Unlock, AssetClass::SemiFungible) => Some(execute_on(
            token,
            &MultiTokenExecuteMsg::SendFrom {
                from: bridge.to_string(),
                to: receiver,
                token_id,
                value: amount,
                msg: None,
            },
        )?),

        (OperationKind::Mint, AssetClass::Fungible) => Some(execute_on(
            token,
            &Cw20ExecuteMsg::Mint {
                recipient: receiver,
                amount,
            },
        )?),
        (OperationKind::Mint, AssetClass::NonFungible) => Some(execute_on(
            token,
            &NftExecuteMsg::Mint {
                token_id,
                owner: receiver,
                token_uri: None,
            },
        )?),
        (OperationKind::Mint, AssetClass::SemiFungible) => Some(execute_on(
            token,
            &MultiTokenExecuteMsg::Mint {
                to: receiver,
                token_id,
                value: amount,
                msg: None,
            },
        )?),

        (OperationKind::Burn, AssetClass::Fungible) => Some(execute_on(
            token,
            &Cw20ExecuteMsg::BurnFrom {
                owner: caller.to_string(),
                amount,
            },
        )?),
        (OperationKind::Burn, AssetClass::NonFungible) => Some(execute_on(
            token,
            &NftExecuteMsg::BurnFrom {
                owner: caller.to_string(),
                token_id,
            },
        )?),
        (OperationKind::Burn, AssetClass::SemiFungible) => Some(execute_on(
            token,
            &MultiTokenExecuteMsg::BurnFrom {
                from: caller.to_string(),
                token_id,
                value: amount,
            },
        )?),

        (OperationKind::Mint | OperationKind::Burn, AssetClass::Native) => {
            return Err(ContractError::UnsupportedOperation {
                operation: kind.to_string(),
                asset_class: class.to_string(),
            })
        }
    };

    Ok(msg.into_iter().collect())
}

// ============================================================================
// Helpers
// ============================================================================

fn execute_on<T: Serialize>(contract: &str, msg: &T) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

pub fn locked_balance(storage: &dyn Storage, asset: &AssetInfo) -> StdResult<Uint128> {
    Ok(LOCKED_BALANCES
        .may_load(storage, &asset.key())?
        .unwrap_or_default())
}

fn add_locked(storage: &mut dyn Storage, asset: &AssetInfo, amount: Uint128) -> StdResult<()> {
    let locked = locked_balance(storage, asset)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    LOCKED_BALANCES.save(storage, &asset.key(), &locked)
}

fn sub_locked(
    storage: &mut dyn Storage,
    asset: &AssetInfo,
    amount: Uint128,
) -> Result<(), ContractError> {
    let available = locked_balance(storage, asset)?;
    let remaining = available
        .checked_sub(amount)
        .map_err(|_| ContractError::NotEnoughOnBridgeBalance {
            available,
            requested: amount,
        })?;
    LOCKED_BALANCES.save(storage, &asset.key(), &remaining)?;
    Ok(())
}

/// Current owner of `token_id`, or `None` if the token does not exist.
fn nft_owner(querier: &QuerierWrapper, token: &str, token_id: &str) -> Option<String> {
    querier
        .query_wasm_smart::<OwnerOfResponse>(
            token,
            &NftQueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )
        .ok()
        .map(|res| res.owner)
}

fn multi_token_balance(
    querier: &QuerierWrapper,
    token: &str,
    owner: &str,
    token_id: &str,
) -> StdResult<Uint128> {
    let res: MultiTokenBalanceResponse = querier.query_wasm_smart(
        token,
        &MultiTokenQueryMsg::Balance {
            owner: owner.to_string(),
            token_id: token_id.to_string(),
        },
    )?;
    Ok(res.balance)
}
