//! Registry of destination chains outbound permits may target.

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::SUPPORTED_CHAINS;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

pub fn is_supported(storage: &dyn Storage, chain: &str) -> StdResult<bool> {
    Ok(SUPPORTED_CHAINS.may_load(storage, chain)?.unwrap_or(false))
}

/// Fails with `ChainNotSupported` unless `chain` is registered and enabled.
pub fn ensure_supported(storage: &dyn Storage, chain: &str) -> Result<(), ContractError> {
    if !is_supported(storage, chain)? {
        return Err(ContractError::ChainNotSupported {
            chain: chain.to_string(),
        });
    }
    Ok(())
}

pub fn set_supported(
    storage: &mut dyn Storage,
    chain: &str,
    supported: bool,
) -> Result<(), ContractError> {
    if chain.trim().is_empty() {
        return Err(ContractError::InvalidChain {
            reason: "chain name must not be empty".to_string(),
        });
    }
    SUPPORTED_CHAINS.save(storage, chain, &supported)?;
    Ok(())
}

/// Registered chains in name order, with their enabled flag.
pub fn list(
    storage: &dyn Storage,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<(String, bool)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);
    SUPPORTED_CHAINS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
