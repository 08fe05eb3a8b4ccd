//! Asset and operation selectors shared by the bridge and the attestor.

use std::fmt;

use cosmwasm_schema::cw_serde;

/// A fungible asset the bridge can hold: the chain's native coin or a CW20 token.
#[cw_serde]
#[derive(Eq, Hash)]
pub enum AssetInfo {
    /// Native bank denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Cw20 {
            contract_addr: contract_addr.into(),
        }
    }

    /// Storage key, namespaced by kind so a denom never aliases a CW20 address.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "cw20:{}", contract_addr),
        }
    }
}

/// Asset class selector carried by every permit operation.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum AssetClass {
    Native,
    Fungible,
    NonFungible,
    SemiFungible,
}

impl AssetClass {
    /// Code used in the signed permit (`uint8 assetClass`).
    pub fn code(&self) -> u8 {
        match self {
            AssetClass::Native => 0,
            AssetClass::Fungible => 1,
            AssetClass::NonFungible => 2,
            AssetClass::SemiFungible => 3,
        }
    }

    /// Native and fungible transfers carry an amount that can be priced,
    /// so they pay the scaled fee. The other classes pay the fixed fee.
    pub fn is_fungible(&self) -> bool {
        matches!(self, AssetClass::Native | AssetClass::Fungible)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Native => "native",
            AssetClass::Fungible => "fungible",
            AssetClass::NonFungible => "non_fungible",
            AssetClass::SemiFungible => "semi_fungible",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four custody transitions a permit can authorize.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum OperationKind {
    Lock,
    Unlock,
    Mint,
    Burn,
}

impl OperationKind {
    /// Outbound operations leave this chain and must target a supported chain.
    pub fn is_outbound(&self) -> bool {
        matches!(self, OperationKind::Lock | OperationKind::Burn)
    }

    /// Primary type name of the signed struct for this operation.
    pub fn permit_type(&self) -> &'static str {
        match self {
            OperationKind::Lock => "LockPermit",
            OperationKind::Unlock => "UnlockPermit",
            OperationKind::Mint => "MintPermit",
            OperationKind::Burn => "BurnPermit",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Lock => "lock",
            OperationKind::Unlock => "unlock",
            OperationKind::Mint => "mint",
            OperationKind::Burn => "burn",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset the protocol fee is paid in.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum FeeDenomination {
    /// The configured price-reference CW20 token
    PriceToken,
    /// The asset being transferred (native and fungible classes only)
    TransferToken,
    /// The configured stable asset (native denom or CW20)
    NativeOrStable,
}

impl FeeDenomination {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeDenomination::PriceToken => "price_token",
            FeeDenomination::TransferToken => "transfer_token",
            FeeDenomination::NativeOrStable => "native_or_stable",
        }
    }
}

impl fmt::Display for FeeDenomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
