//! Permit-authorized lock, unlock, mint and burn.
//!
//! Every call runs the same pipeline:
//! 1. Request shape and (outbound only) destination chain
//! 2. Attestor signatures over the permit and fee quote digests
//! 3. Nonce unused
//! 4. Fee, attached native funds and custody preconditions
//! 5. Nonce consumed, then custody and fee state updated and messages emitted

use common::{AssetClass, AssetInfo, FeeQuoteFields, OperationKind, PermitDomain, PermitFields};
use cosmwasm_std::{Coin, DepsMut, Env, MessageInfo, Response, StdError};

use crate::chain_registry;
use crate::custody;
use crate::error::ContractError;
use crate::fee_manager::{
    calc_fee_fixed, calc_fee_scaled, collect_fee, FeeCharge, PriceQuote, FEE_POLICY,
};
use crate::msg::PermitRequest;
use crate::nonce;
use crate::signature::verify_attestor;
use crate::state::CONFIG;

pub fn permit_fields(class: AssetClass, request: &PermitRequest) -> PermitFields {
    PermitFields {
        asset_class: class,
        receiver: request.receiver.clone(),
        token: request.token.clone(),
        token_id: request.token_id.u128(),
        amount: request.amount.u128(),
        target_chain: request.target_chain.clone(),
        nonce: request.nonce,
    }
}

pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: OperationKind,
    class: AssetClass,
    request: PermitRequest,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let policy = FEE_POLICY.load(deps.storage)?;
    let bridge = env.contract.address;

    custody::validate_request(deps.api, &config, kind, class, &request)?;
    if kind.is_outbound() {
        chain_registry::ensure_supported(deps.storage, &request.target_chain)?;
    }

    let domain = PermitDomain::new(config.chain_id, bridge.as_str());
    let permit_digest = domain.permit_digest(kind, &permit_fields(class, &request));
    verify_attestor(deps.api, &config.attestor, &permit_digest, &request.signature)?;

    let quote = &request.fee_quote;
    let quote_digest = domain.fee_quote_digest(&FeeQuoteFields {
        price_token_per_usd: quote.price_token_per_usd,
        transfer_token_per_usd: quote.transfer_token_per_usd,
        token: request.token.clone(),
        nonce: request.nonce,
    });
    verify_attestor(deps.api, &config.attestor, &quote_digest, &quote.signature)?;

    nonce::ensure_unused(deps.storage, request.nonce)?;

    let prices = PriceQuote {
        price_token_per_usd: quote.price_token_per_usd,
        transfer_token_per_usd: quote.transfer_token_per_usd,
    };
    let charge = if class.is_fungible() {
        calc_fee_scaled(
            &config,
            &policy,
            &custody::transfer_asset(class, &request.token),
            request.amount,
            request.fee_denomination,
            &prices,
        )?
    } else {
        calc_fee_fixed(&config, &policy, request.fee_denomination, &prices)?
    };
    let expected = expected_funds(custody::principal_funds(kind, class, &request), &charge)?;
    check_native_funds(&info.funds, expected)?;
    custody::check(deps.as_ref(), &bridge, kind, class, &info.sender, &request)?;

    nonce::consume(deps.storage, request.nonce)?;

    let mut messages = custody::apply(deps.storage, &bridge, kind, class, &info.sender, &request)?;
    if let Some(msg) = collect_fee(deps.storage, &charge, &info.sender, &bridge)? {
        messages.push(msg);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", kind.as_str())
        .add_attribute("asset_class", class.as_str())
        .add_attribute("token", &request.token)
        .add_attribute("token_id", request.token_id.to_string())
        .add_attribute("caller", info.sender.to_string())
        .add_attribute("receiver", &request.receiver)
        .add_attribute("amount", request.amount.to_string())
        .add_attribute("nonce", request.nonce.to_string())
        .add_attribute("target_chain", &request.target_chain)
        .add_attribute("price_token_per_usd", quote.price_token_per_usd.to_string())
        .add_attribute("transfer_token_per_usd", quote.transfer_token_per_usd.to_string())
        .add_attribute("fee_denomination", charge.denomination.as_str())
        .add_attribute("fee_asset", charge.asset.key())
        .add_attribute("fee_amount", charge.amount.to_string()))
}

/// Native coins the call must carry: the principal of a native lock plus a
/// fee charged in a native denom.
fn expected_funds(
    principal: Option<Coin>,
    charge: &FeeCharge,
) -> Result<Vec<Coin>, ContractError> {
    let mut expected: Vec<Coin> = principal.into_iter().collect();
    if let AssetInfo::Native { denom } = &charge.asset {
        if !charge.amount.is_zero() {
            match expected.iter_mut().find(|c| &c.denom == denom) {
                Some(coin) => {
                    coin.amount = coin
                        .amount
                        .checked_add(charge.amount)
                        .map_err(StdError::from)?;
                }
                None => expected.push(Coin {
                    denom: denom.clone(),
                    amount: charge.amount,
                }),
            }
        }
    }
    Ok(expected)
}

/// Attached funds must match `expected` exactly: no missing, surplus or
/// foreign coins.
fn check_native_funds(sent: &[Coin], mut expected: Vec<Coin>) -> Result<(), ContractError> {
    let mut got: Vec<Coin> = sent.iter().filter(|c| !c.amount.is_zero()).cloned().collect();
    got.sort_by(|a, b| a.denom.cmp(&b.denom));
    expected.sort_by(|a, b| a.denom.cmp(&b.denom));
    if got != expected {
        return Err(ContractError::WrongNativeAmount {
            expected: format_coins(&expected),
            got: format_coins(&got),
        });
    }
    Ok(())
}

fn format_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "nothing".to_string();
    }
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
