//! Token contract interfaces used by the bridge.
//!
//! Fungible tokens use the standard `cw20` messages. Non-fungible and
//! semi-fungible tokens follow the cw721 / cw1155 shapes for plain transfers
//! and queries. Wrapped representations additionally expose `Mint` and
//! `BurnFrom`, which the token contract accepts only from the single minter
//! (the bridge) fixed at its instantiation.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Execute interface of a non-fungible token contract.
#[cw_serde]
pub enum NftExecuteMsg {
    /// Move `token_id` to `recipient`; the sender must own it or be approved
    TransferNft { recipient: String, token_id: String },
    /// Minter only: create `token_id` owned by `owner`
    Mint {
        token_id: String,
        owner: String,
        token_uri: Option<String>,
    },
    /// Minter only: destroy `token_id`, which must be owned by `owner`
    BurnFrom { owner: String, token_id: String },
}

/// Query interface of a non-fungible token contract.
#[cw_serde]
pub enum NftQueryMsg {
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
}

/// Response to `NftQueryMsg::OwnerOf`.
///
/// Unknown fields (such as cw721 approvals) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerOfResponse {
    pub owner: String,
}

/// Execute interface of a semi-fungible (multi-token) contract.
#[cw_serde]
pub enum MultiTokenExecuteMsg {
    /// Move `value` units of `token_id` from `from` to `to`; the sender must
    /// be `from` or an approved operator
    SendFrom {
        from: String,
        to: String,
        token_id: String,
        value: Uint128,
        msg: Option<Binary>,
    },
    /// Minter only: create `value` units of `token_id` for `to`
    Mint {
        to: String,
        token_id: String,
        value: Uint128,
        msg: Option<Binary>,
    },
    /// Minter only: destroy `value` units of `token_id` held by `from`
    BurnFrom {
        from: String,
        token_id: String,
        value: Uint128,
    },
}

/// Query interface of a semi-fungible (multi-token) contract.
#[cw_serde]
pub enum MultiTokenQueryMsg {
    Balance { owner: String, token_id: String },
}

/// Response to `MultiTokenQueryMsg::Balance`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MultiTokenBalanceResponse {
    pub balance: Uint128,
}
