//! Signing orders
//!
//! A `PermitOrder` is what an operator asks the attestor to authorize. The
//! signed result carries both signatures a bridge caller needs to submit.

use common::{AssetClass, FeeQuoteFields, OperationKind, PermitFields, PermitSignature};
use cosmwasm_std::{Decimal256, Uint128};
use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::signer::PermitSigner;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermitOrder {
    pub kind: OperationKind,
    pub asset_class: AssetClass,
    /// Native denom or token contract address
    pub token: String,
    /// Zero for native and fungible assets
    #[serde(default)]
    pub token_id: Uint128,
    pub amount: Uint128,
    pub receiver: String,
    #[serde(default)]
    pub target_chain: String,
    pub nonce: u64,
    /// Base units per one USD, as decimal strings
    pub price_token_per_usd: Decimal256,
    pub transfer_token_per_usd: Decimal256,
}

impl PermitOrder {
    pub fn permit_fields(&self) -> PermitFields {
        PermitFields {
            asset_class: self.asset_class,
            receiver: self.receiver.clone(),
            token: self.token.clone(),
            token_id: self.token_id.u128(),
            amount: self.amount.u128(),
            target_chain: self.target_chain.clone(),
            nonce: self.nonce,
        }
    }

    pub fn fee_quote_fields(&self) -> FeeQuoteFields {
        FeeQuoteFields {
            price_token_per_usd: self.price_token_per_usd,
            transfer_token_per_usd: self.transfer_token_per_usd,
            token: self.token.clone(),
            nonce: self.nonce,
        }
    }

    /// Sign the permit and its fee quote.
    pub fn sign(self, signer: &PermitSigner) -> Result<SignedPermit> {
        let signature = signer.sign_permit(self.kind, &self.permit_fields())?;
        let fee_quote_signature = signer.sign_fee_quote(&self.fee_quote_fields())?;

        info!(
            kind = %self.kind,
            asset_class = %self.asset_class,
            token = %self.token,
            nonce = self.nonce,
            attestor = %signer.address_hex(),
            "Permit signed"
        );

        Ok(SignedPermit {
            order: self,
            signature,
            fee_quote_signature,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedPermit {
    pub order: PermitOrder,
    pub signature: PermitSignature,
    pub fee_quote_signature: PermitSignature,
}
