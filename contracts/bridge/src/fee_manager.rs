//! Fee Manager Module
//!
//! Computes the protocol fee of a permit operation from the attestor's signed
//! price quote, and records collected fees.
//!
//! ## Fee Structure
//!
//! | Asset class                 | Fee type | Base                          |
//! |-----------------------------|----------|-------------------------------|
//! | native, fungible            | scaled   | `amount × fee_bps / 10 000`   |
//! | non-fungible, semi-fungible | fixed    | `fixed_fee_usd`               |
//!
//! Prices are quoted as base units of a token per one USD, in 256-bit
//! decimals so that cheap 18-decimal tokens remain quotable. A scaled fee is
//! valued in USD through the transfer-token price and converted to the
//! requested denomination; a fixed fee is converted directly.
//!
//! ## Price fallbacks
//!
//! 1. Scaled: a zero price-token quote, or a zero transfer-token quote for any
//!    denomination other than the transfer token, charges the transfer token.
//! 2. Fixed: the transfer token cannot pay; it is treated as the price token,
//!    and a zero price-token quote charges the stable asset.

use common::{AssetInfo, FeeDenomination};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Decimal, Decimal256, StdError, Storage, Uint128, Uint256,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Item;

use crate::error::ContractError;
use crate::state::{Config, FEE_ACCRUALS};

// ============================================================================
// Constants
// ============================================================================

/// Maximum fee in basis points (100%)
pub const MAX_FEE_BPS: u64 = 10_000;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee parameters
#[cw_serde]
pub struct FeePolicy {
    /// Scaled fee in basis points
    pub fee_bps: u64,
    /// Flat fee in USD for non-fungible and semi-fungible transfers
    pub fixed_fee_usd: Decimal,
    /// Minimum fee in USD; `None` disables the floor
    pub min_fee_usd: Option<Decimal>,
}

impl FeePolicy {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.fee_bps > MAX_FEE_BPS {
            return Err(ContractError::FeeRateTooHigh {
                fee_bps: self.fee_bps,
                max_bps: MAX_FEE_BPS,
            });
        }
        Ok(())
    }
}

/// Prices from a verified fee quote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub price_token_per_usd: Decimal256,
    pub transfer_token_per_usd: Decimal256,
}

/// A computed fee
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeCharge {
    /// Denomination charged after fallbacks
    pub denomination: FeeDenomination,
    pub asset: AssetInfo,
    pub amount: Uint128,
    pub usd_value: Option<Decimal>,
}

// ============================================================================
// Storage
// ============================================================================

pub const FEE_POLICY: Item<FeePolicy> = Item::new("fee_policy");

// ============================================================================
// Fee Calculation Functions
// ============================================================================

/// Scaled fee of transferring `amount` of `transfer_asset`.
pub fn calc_fee_scaled(
    config: &Config,
    policy: &FeePolicy,
    transfer_asset: &AssetInfo,
    amount: Uint128,
    requested: FeeDenomination,
    quote: &PriceQuote,
) -> Result<FeeCharge, ContractError> {
    let transfer_price = quote.transfer_token_per_usd;
    let denomination = match requested {
        FeeDenomination::PriceToken
            if quote.price_token_per_usd.is_zero() || transfer_price.is_zero() =>
        {
            FeeDenomination::TransferToken
        }
        FeeDenomination::NativeOrStable if transfer_price.is_zero() => {
            FeeDenomination::TransferToken
        }
        other => other,
    };

    let base = Uint256::from(amount)
        .checked_mul(Uint256::from(policy.fee_bps))
        .map_err(|_| ContractError::FeeOverflow)?;

    let (fee, asset) = match denomination {
        FeeDenomination::TransferToken => (
            base / Uint256::from(BPS_DENOMINATOR),
            transfer_asset.clone(),
        ),
        FeeDenomination::PriceToken => (
            convert_scaled(base, quote.price_token_per_usd, transfer_price)?,
            AssetInfo::cw20(config.price_token.as_str()),
        ),
        FeeDenomination::NativeOrStable => (
            convert_scaled(base, Decimal256::from(config.stable_per_usd), transfer_price)?,
            config.stable_asset.clone(),
        ),
    };

    let usd_value = if transfer_price.is_zero() {
        None
    } else {
        let usd = Decimal256::checked_from_ratio(base, Uint256::from(BPS_DENOMINATOR))
            .and_then(|base| base.checked_div(transfer_price))
            .map_err(|_| ContractError::FeeOverflow)?;
        Some(Decimal::try_from(usd).map_err(|_| ContractError::FeeOverflow)?)
    };

    let charge = FeeCharge {
        denomination,
        asset,
        amount: Uint128::try_from(fee).map_err(|_| ContractError::FeeOverflow)?,
        usd_value,
    };
    enforce_floor(policy, &charge)?;
    Ok(charge)
}

/// Fixed fee of a non-fungible or semi-fungible transfer.
pub fn calc_fee_fixed(
    config: &Config,
    policy: &FeePolicy,
    requested: FeeDenomination,
    quote: &PriceQuote,
) -> Result<FeeCharge, ContractError> {
    let (denomination, price, asset) = match requested {
        FeeDenomination::PriceToken | FeeDenomination::TransferToken
            if !quote.price_token_per_usd.is_zero() =>
        {
            (
                FeeDenomination::PriceToken,
                quote.price_token_per_usd,
                AssetInfo::cw20(config.price_token.as_str()),
            )
        }
        _ => (
            FeeDenomination::NativeOrStable,
            Decimal256::from(config.stable_per_usd),
            config.stable_asset.clone(),
        ),
    };

    let fee = Decimal256::from(policy.fixed_fee_usd)
        .checked_mul(price)
        .map_err(|_| ContractError::FeeOverflow)?
        .to_uint_floor();

    let charge = FeeCharge {
        denomination,
        asset,
        amount: Uint128::try_from(fee).map_err(|_| ContractError::FeeOverflow)?,
        usd_value: Some(policy.fixed_fee_usd),
    };
    enforce_floor(policy, &charge)?;
    Ok(charge)
}

/// `floor(base × price / (10 000 × transfer_price))`, computed on 18-decimal
/// atomics so the single division keeps the result monotonic in `base`.
fn convert_scaled(
    base: Uint256,
    price: Decimal256,
    transfer_price: Decimal256,
) -> Result<Uint256, ContractError> {
    let numerator = base
        .checked_mul(price.atomics())
        .map_err(|_| ContractError::FeeOverflow)?;
    let denominator = Uint256::from(BPS_DENOMINATOR)
        .checked_mul(transfer_price.atomics())
        .map_err(|_| ContractError::FeeOverflow)?;
    numerator
        .checked_div(denominator)
        .map_err(|_| ContractError::FeeOverflow)
}

fn enforce_floor(policy: &FeePolicy, charge: &FeeCharge) -> Result<(), ContractError> {
    let Some(min) = policy.min_fee_usd else {
        return Ok(());
    };
    if charge.amount.is_zero() {
        return Err(ContractError::AmountTooLowForFees);
    }
    match charge.usd_value {
        Some(usd) if usd < min => Err(ContractError::AmountTooLowForFees),
        _ => Ok(()),
    }
}

// ============================================================================
// Fee Collection
// ============================================================================

/// Record `charge` as accrued and return the message pulling a CW20 fee from
/// `payer`. Native fees arrive with the call's funds.
pub fn collect_fee(
    storage: &mut dyn Storage,
    charge: &FeeCharge,
    payer: &Addr,
    bridge: &Addr,
) -> Result<Option<CosmosMsg>, ContractError> {
    if charge.amount.is_zero() {
        return Ok(None);
    }

    let key = charge.asset.key();
    let accrued = FEE_ACCRUALS.may_load(storage, &key)?.unwrap_or_default();
    let accrued = accrued.checked_add(charge.amount).map_err(StdError::from)?;
    FEE_ACCRUALS.save(storage, &key, &accrued)?;

    match &charge.asset {
        AssetInfo::Native { .. } => Ok(None),
        AssetInfo::Cw20 { contract_addr } => Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.clone(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: payer.to_string(),
                recipient: bridge.to_string(),
                amount: charge.amount,
            })?,
            funds: vec![],
        }))),
    }
}
