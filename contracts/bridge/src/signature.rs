//! Attestor signature verification
//!
//! Recovers the secp256k1 signer of a permit digest through the host API and
//! compares its Ethereum-style address (last 20 bytes of the keccak256 of the
//! uncompressed public key) with the configured attestor.

use common::{keccak256, PermitSignature};
use cosmwasm_std::Api;

use crate::error::ContractError;

/// Parse a 0x-prefixed (or bare) 20-byte hex address.
pub fn parse_eth_address(input: &str) -> Result<[u8; 20], ContractError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ContractError::ZeroAddress);
    }
    let hex_str = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(hex_str).map_err(|e| ContractError::InvalidAddress {
        reason: format!("invalid hex: {}", e),
    })?;
    let address: [u8; 20] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidAddress {
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        })?;
    if address == [0u8; 20] {
        return Err(ContractError::ZeroAddress);
    }
    Ok(address)
}

pub fn eth_address_to_hex(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Address of an uncompressed (0x04-prefixed, 65-byte) public key.
pub fn eth_address_from_pubkey(pubkey: &[u8]) -> Result<[u8; 20], ContractError> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(ContractError::InvalidSignature);
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Recover the address that signed `digest`.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &PermitSignature,
) -> Result<[u8; 20], ContractError> {
    if signature.r.len() != 32 || signature.s.len() != 32 {
        return Err(ContractError::InvalidSignature);
    }
    let recovery_param = match signature.v {
        27 | 28 => signature.v - 27,
        0 | 1 => signature.v,
        _ => return Err(ContractError::InvalidSignature),
    };

    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(signature.r.as_slice());
    rs[32..].copy_from_slice(signature.s.as_slice());

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &rs, recovery_param)
        .map_err(|_| ContractError::InvalidSignature)?;
    eth_address_from_pubkey(&pubkey)
}

/// Fails with `InvalidSignature` unless `attestor` signed `digest`.
pub fn verify_attestor(
    api: &dyn Api,
    attestor: &[u8; 20],
    digest: &[u8; 32],
    signature: &PermitSignature,
) -> Result<(), ContractError> {
    if recover_signer(api, digest, signature)? != *attestor {
        return Err(ContractError::InvalidSignature);
    }
    Ok(())
}
