//! Typed-data digests for bridge permits and fee quotes.
//!
//! Digests follow the EIP-712 layout so that a standard secp256k1 signer
//! (the attestor) can authorize operations:
//!
//! ```text
//! digest       = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! domain       = keccak256(typeHash(EIP712Domain) ‖ keccak(name) ‖ keccak(version)
//!                          ‖ uint256(chainId) ‖ keccak(verifyingContract))
//! structHash   = keccak256(typeHash ‖ encodeData)
//! ```
//!
//! Strings are encoded as the keccak256 of their UTF-8 bytes, integers as
//! 32-byte big-endian words. Every operation kind has its own primary type,
//! so a lock permit can never be replayed as an unlock.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Decimal256, Uint256};
use tiny_keccak::{Hasher, Keccak};

use crate::asset::{AssetClass, OperationKind};

/// Domain name bound into every digest
pub const DOMAIN_NAME: &str = "PermitBridge";

/// Domain version bound into every digest
pub const DOMAIN_VERSION: &str = "1";

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,string verifyingContract)";

pub const FEE_QUOTE_TYPE: &str =
    "FeeQuote(uint256 priceTokenPerUsd,uint256 transferTokenPerUsd,string token,uint256 nonce)";

const PERMIT_MEMBERS: &str = "(uint8 assetClass,string receiver,string token,uint256 tokenId,uint256 amount,string targetChain,uint256 nonce)";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Full type string of the permit struct for `kind`.
pub fn permit_type(kind: OperationKind) -> String {
    format!("{}{}", kind.permit_type(), PERMIT_MEMBERS)
}

/// uint256 word, big-endian, left-padded
fn word(value: impl Into<Uint256>) -> [u8; 32] {
    value.into().to_be_bytes()
}

fn hash_words(words: &[[u8; 32]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    for w in words {
        hasher.update(w);
    }
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Secp256k1 signature in Ethereum `(r, s, v)` form.
#[cw_serde]
pub struct PermitSignature {
    /// 32-byte r value
    pub r: Binary,
    /// 32-byte s value
    pub s: Binary,
    /// Recovery id: 27/28, or 0/1
    pub v: u8,
}

impl PermitSignature {
    pub fn from_parts(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self {
            r: Binary::from(r.to_vec()),
            s: Binary::from(s.to_vec()),
            v,
        }
    }
}

/// Fields of a lock/unlock/mint/burn permit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermitFields {
    pub asset_class: AssetClass,
    /// Receiving account (destination chain for outbound operations)
    pub receiver: String,
    /// Native denom or token contract address
    pub token: String,
    /// Zero for native and fungible assets
    pub token_id: u128,
    pub amount: u128,
    pub target_chain: String,
    pub nonce: u64,
}

impl PermitFields {
    pub fn struct_hash(&self, kind: OperationKind) -> [u8; 32] {
        hash_words(&[
            keccak256(permit_type(kind).as_bytes()),
            word(u128::from(self.asset_class.code())),
            keccak256(self.receiver.as_bytes()),
            keccak256(self.token.as_bytes()),
            word(self.token_id),
            word(self.amount),
            keccak256(self.target_chain.as_bytes()),
            word(u128::from(self.nonce)),
        ])
    }
}

/// Fields of a signed fee quote. The nonce is the nonce of the operation the
/// quote prices, so a quote cannot be reused for a different operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeQuoteFields {
    /// Price-reference token base units per one USD
    pub price_token_per_usd: Decimal256,
    /// Transferred token base units per one USD
    pub transfer_token_per_usd: Decimal256,
    pub token: String,
    pub nonce: u64,
}

impl FeeQuoteFields {
    pub fn struct_hash(&self) -> [u8; 32] {
        hash_words(&[
            keccak256(FEE_QUOTE_TYPE.as_bytes()),
            word(self.price_token_per_usd.atomics()),
            word(self.transfer_token_per_usd.atomics()),
            keccak256(self.token.as_bytes()),
            word(u128::from(self.nonce)),
        ])
    }
}

/// Signing domain: one bridge instance on one chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermitDomain {
    pub chain_id: u64,
    /// Address of the bridge contract that verifies the permit
    pub verifying_contract: String,
}

impl PermitDomain {
    pub fn new(chain_id: u64, verifying_contract: impl Into<String>) -> Self {
        Self {
            chain_id,
            verifying_contract: verifying_contract.into(),
        }
    }

    pub fn separator(&self) -> [u8; 32] {
        hash_words(&[
            keccak256(DOMAIN_TYPE.as_bytes()),
            keccak256(DOMAIN_NAME.as_bytes()),
            keccak256(DOMAIN_VERSION.as_bytes()),
            word(u128::from(self.chain_id)),
            keccak256(self.verifying_contract.as_bytes()),
        ])
    }

    /// `keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)`
    pub fn typed_digest(&self, struct_hash: &[u8; 32]) -> [u8; 32] {
        let mut data = [0u8; 66];
        data[0] = 0x19;
        data[1] = 0x01;
        data[2..34].copy_from_slice(&self.separator());
        data[34..66].copy_from_slice(struct_hash);
        keccak256(&data)
    }

    pub fn permit_digest(&self, kind: OperationKind, fields: &PermitFields) -> [u8; 32] {
        self.typed_digest(&fields.struct_hash(kind))
    }

    pub fn fee_quote_digest(&self, fields: &FeeQuoteFields) -> [u8; 32] {
        self.typed_digest(&fields.struct_hash())
    }
}

/// Convert bytes32 to 0x-prefixed hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
