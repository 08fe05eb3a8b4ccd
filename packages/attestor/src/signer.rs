//! Attestor signing
//!
//! Wraps alloy's `PrivateKeySigner` to sign bridge digests with recoverable
//! secp256k1 signatures in `(r, s, v)` form, `v` being 27 or 28.

use alloy::primitives::B256;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use common::{
    bytes32_to_hex, FeeQuoteFields, OperationKind, PermitDomain, PermitFields, PermitSignature,
};
use eyre::{eyre, Result};
use tracing::debug;

use crate::config::AttestorConfig;

/// Signs permits and fee quotes for one bridge instance.
pub struct PermitSigner {
    signer: PrivateKeySigner,
    domain: PermitDomain,
    address: [u8; 20],
}

impl PermitSigner {
    /// Create a signer from a hex private key (with or without 0x prefix).
    pub fn new(private_key: &str, domain: PermitDomain) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|e| eyre!("Invalid private key: {}", e))?;

        let mut address = [0u8; 20];
        address.copy_from_slice(signer.address().as_slice());

        Ok(Self {
            signer,
            domain,
            address,
        })
    }

    pub fn from_config(config: &AttestorConfig) -> Result<Self> {
        Self::new(&config.private_key, config.domain())
    }

    /// 20-byte address the bridge must be configured with.
    pub fn address(&self) -> [u8; 20] {
        self.address
    }

    pub fn address_hex(&self) -> String {
        format!("0x{}", hex::encode(self.address))
    }

    pub fn domain(&self) -> &PermitDomain {
        &self.domain
    }

    /// Sign a 32-byte digest as-is.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<PermitSignature> {
        let signature = self
            .signer
            .sign_hash_sync(&B256::from(*digest))
            .map_err(|e| eyre!("Signing failed: {}", e))?;

        let bytes = signature.as_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        let v = match bytes[64] {
            0 | 1 => bytes[64] + 27,
            v => v,
        };
        Ok(PermitSignature::from_parts(r, s, v))
    }

    pub fn sign_permit(
        &self,
        kind: OperationKind,
        fields: &PermitFields,
    ) -> Result<PermitSignature> {
        let digest = self.domain.permit_digest(kind, fields);
        debug!(
            kind = %kind,
            asset_class = %fields.asset_class,
            nonce = fields.nonce,
            digest = %bytes32_to_hex(&digest),
            "Signing permit"
        );
        self.sign_digest(&digest)
    }

    pub fn sign_fee_quote(&self, fields: &FeeQuoteFields) -> Result<PermitSignature> {
        let digest = self.domain.fee_quote_digest(fields);
        debug!(
            nonce = fields.nonce,
            price_token_per_usd = %fields.price_token_per_usd,
            transfer_token_per_usd = %fields.transfer_token_per_usd,
            digest = %bytes32_to_hex(&digest),
            "Signing fee quote"
        );
        self.sign_digest(&digest)
    }
}
