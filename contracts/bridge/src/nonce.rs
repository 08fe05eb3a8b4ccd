//! Nonce registry: at-most-once execution of every permit.
//!
//! Nonces are global to the bridge instance, so a nonce consumed by a lock
//! can never authorize an unlock, mint or burn.

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::USED_NONCES;

pub fn is_consumed(storage: &dyn Storage, nonce: u64) -> StdResult<bool> {
    Ok(USED_NONCES.may_load(storage, nonce)?.unwrap_or(false))
}

pub fn ensure_unused(storage: &dyn Storage, nonce: u64) -> Result<(), ContractError> {
    if is_consumed(storage, nonce)? {
        return Err(ContractError::AlreadyProcessed { nonce });
    }
    Ok(())
}

/// Mark `nonce` consumed. Fails if it already was.
pub fn consume(storage: &mut dyn Storage, nonce: u64) -> Result<(), ContractError> {
    ensure_unused(storage, nonce)?;
    USED_NONCES.save(storage, nonce, &true)?;
    Ok(())
}
