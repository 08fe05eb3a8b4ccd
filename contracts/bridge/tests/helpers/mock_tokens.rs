//! Minimal non-fungible and multi-token contracts for exercising custody.
//!
//! Both follow the message shapes in `common::token`, plus an `ApproveAll`
//! operator grant. `Mint` and `BurnFrom` are accepted only from the minter
//! fixed at instantiation.

use common::token::{MultiTokenBalanceResponse, MultiTokenQueryMsg, NftQueryMsg, OwnerOfResponse};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Storage, Uint128,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::{Item, Map};

const MINTER: Item<Addr> = Item::new("minter");
const OPERATORS: Map<(&Addr, &Addr), bool> = Map::new("operators");
const OWNERS: Map<&str, Addr> = Map::new("owners");
const BALANCES: Map<(&str, &Addr), Uint128> = Map::new("balances");

#[cw_serde]
pub struct MockTokenInstantiateMsg {
    pub minter: String,
}

#[cw_serde]
pub enum MockNftExecuteMsg {
    TransferNft {
        recipient: String,
        token_id: String,
    },
    Mint {
        token_id: String,
        owner: String,
        token_uri: Option<String>,
    },
    BurnFrom {
        owner: String,
        token_id: String,
    },
    ApproveAll {
        operator: String,
    },
}

#[cw_serde]
pub enum MockMultiTokenExecuteMsg {
    SendFrom {
        from: String,
        to: String,
        token_id: String,
        value: Uint128,
        msg: Option<Binary>,
    },
    Mint {
        to: String,
        token_id: String,
        value: Uint128,
        msg: Option<Binary>,
    },
    BurnFrom {
        from: String,
        token_id: String,
        value: Uint128,
    },
    ApproveAll {
        operator: String,
    },
}

pub fn contract_nft() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(nft_execute, instantiate, nft_query))
}

pub fn contract_multi_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        multi_token_execute,
        instantiate,
        multi_token_query,
    ))
}

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockTokenInstantiateMsg,
) -> StdResult<Response> {
    MINTER.save(deps.storage, &deps.api.addr_validate(&msg.minter)?)?;
    Ok(Response::new())
}

fn ensure_minter(storage: &dyn Storage, sender: &Addr) -> StdResult<()> {
    if MINTER.load(storage)? != *sender {
        return Err(StdError::generic_err("unauthorized: sender is not the minter"));
    }
    Ok(())
}

fn ensure_approved(storage: &dyn Storage, owner: &Addr, sender: &Addr) -> StdResult<()> {
    if owner == sender || OPERATORS.has(storage, (owner, sender)) {
        return Ok(());
    }
    Err(StdError::generic_err("unauthorized: sender is not approved"))
}

fn nft_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: MockNftExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockNftExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => {
            let owner = OWNERS
                .may_load(deps.storage, &token_id)?
                .ok_or_else(|| StdError::generic_err("invalid token ID"))?;
            ensure_approved(deps.storage, &owner, &info.sender)?;
            OWNERS.save(deps.storage, &token_id, &deps.api.addr_validate(&recipient)?)?;
        }
        MockNftExecuteMsg::Mint {
            token_id, owner, ..
        } => {
            ensure_minter(deps.storage, &info.sender)?;
            if OWNERS.has(deps.storage, &token_id) {
                return Err(StdError::generic_err("token already minted"));
            }
            OWNERS.save(deps.storage, &token_id, &deps.api.addr_validate(&owner)?)?;
        }
        MockNftExecuteMsg::BurnFrom { owner, token_id } => {
            ensure_minter(deps.storage, &info.sender)?;
            match OWNERS.may_load(deps.storage, &token_id)? {
                Some(current) if current.as_str() == owner => {
                    OWNERS.remove(deps.storage, &token_id)
                }
                _ => return Err(StdError::generic_err("invalid token ID")),
            }
        }
        MockNftExecuteMsg::ApproveAll { operator } => {
            let operator = deps.api.addr_validate(&operator)?;
            OPERATORS.save(deps.storage, (&info.sender, &operator), &true)?;
        }
    }
    Ok(Response::new())
}

fn nft_query(deps: Deps, _env: Env, msg: NftQueryMsg) -> StdResult<Binary> {
    match msg {
        NftQueryMsg::OwnerOf { token_id, .. } => {
            let owner = OWNERS
                .may_load(deps.storage, &token_id)?
                .ok_or_else(|| StdError::not_found("token"))?;
            to_json_binary(&OwnerOfResponse {
                owner: owner.to_string(),
            })
        }
    }
}

fn balance(storage: &dyn Storage, token_id: &str, owner: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES
        .may_load(storage, (token_id, owner))?
        .unwrap_or_default())
}

fn credit(
    storage: &mut dyn Storage,
    token_id: &str,
    owner: &Addr,
    value: Uint128,
) -> StdResult<()> {
    let updated = balance(storage, token_id, owner)?.checked_add(value)?;
    BALANCES.save(storage, (token_id, owner), &updated)
}

fn debit(
    storage: &mut dyn Storage,
    token_id: &str,
    owner: &Addr,
    value: Uint128,
) -> StdResult<()> {
    let updated = balance(storage, token_id, owner)?
        .checked_sub(value)
        .map_err(|_| StdError::generic_err("insufficient balance"))?;
    BALANCES.save(storage, (token_id, owner), &updated)
}

fn multi_token_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: MockMultiTokenExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockMultiTokenExecuteMsg::SendFrom {
            from,
            to,
            token_id,
            value,
            ..
        } => {
            let from = deps.api.addr_validate(&from)?;
            let to = deps.api.addr_validate(&to)?;
            ensure_approved(deps.storage, &from, &info.sender)?;
            debit(deps.storage, &token_id, &from, value)?;
            credit(deps.storage, &token_id, &to, value)?;
        }
        MockMultiTokenExecuteMsg::Mint {
            to,
            token_id,
            value,
            ..
        } => {
            ensure_minter(deps.storage, &info.sender)?;
            let to = deps.api.addr_validate(&to)?;
            credit(deps.storage, &token_id, &to, value)?;
        }
        MockMultiTokenExecuteMsg::BurnFrom {
            from,
            token_id,
            value,
        } => {
            ensure_minter(deps.storage, &info.sender)?;
            let from = deps.api.addr_validate(&from)?;
            debit(deps.storage, &token_id, &from, value)?;
        }
        MockMultiTokenExecuteMsg::ApproveAll { operator } => {
            let operator = deps.api.addr_validate(&operator)?;
            OPERATORS.save(deps.storage, (&info.sender, &operator), &true)?;
        }
    }
    Ok(Response::new())
}

fn multi_token_query(deps: Deps, _env: Env, msg: MultiTokenQueryMsg) -> StdResult<Binary> {
    match msg {
        MultiTokenQueryMsg::Balance { owner, token_id } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_json_binary(&MultiTokenBalanceResponse {
                balance: balance(deps.storage, &token_id, &owner)?,
            })
        }
    }
}
