//! Shared cw-multi-test harness for the permit bridge integration tests.

#![allow(dead_code)]

pub mod mock_tokens;

use attestor::{PermitOrder, PermitSigner};
use common::{AssetClass, FeeDenomination, OperationKind, PermitDomain};
use cosmwasm_std::{coin, Addr, Coin, Decimal, Decimal256, Empty, Uint128};
use cw20::{
    BalanceResponse as Cw20BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use mock_tokens::{
    contract_multi_token, contract_nft, MockMultiTokenExecuteMsg, MockNftExecuteMsg,
    MockTokenInstantiateMsg,
};
use permit_bridge::msg::{ExecuteMsg, FeeQuote, InstantiateMsg, PermitRequest, QueryMsg};

// ============================================================================
// Constants
// ============================================================================

/// Development key (hardhat account #0)
pub const ATTESTOR_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// Development key (hardhat account #1)
pub const OTHER_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const CHAIN_ID: u64 = 1;
pub const NATIVE: &str = "uluna";
pub const STABLE: &str = "uusd";
pub const TARGET_CHAIN: &str = "ethereum";
pub const EVM_RECEIVER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const FEE_BPS: u64 = 30;

pub const INITIAL_NATIVE: u128 = 10_000_000_000;
pub const INITIAL_TOKENS: u128 = 1_000_000_000_000;

// ============================================================================
// Test Setup
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        permit_bridge::contract::execute,
        permit_bridge::contract::instantiate,
        permit_bridge::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct TestEnv {
    pub app: App,
    pub admin: Addr,
    pub user: Addr,
    pub receiver: Addr,
    pub bridge: Addr,
    pub price_token: Addr,
    pub cw20_code_id: u64,
    pub signer: PermitSigner,
}

/// $15 worth of price token and $0.5 worth of transferred token per USD, both
/// in 6-decimal base units.
pub fn default_prices() -> (Decimal256, Decimal256) {
    (
        Decimal256::from_ratio(15_000_000u128, 1u128),
        Decimal256::from_ratio(500_000u128, 1u128),
    )
}

pub fn instantiate_msg(attestor: String, price_token: &Addr, admin: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        admin: admin.to_string(),
        attestor,
        chain_id: CHAIN_ID,
        native_denom: NATIVE.to_string(),
        price_token: price_token.to_string(),
        stable_asset: common::AssetInfo::native(STABLE),
        stable_per_usd: Decimal::from_ratio(1_000_000u128, 1u128),
        fee_bps: FEE_BPS,
        fixed_fee_usd: Decimal::percent(50),
        min_fee_usd: None,
        supported_chains: vec![TARGET_CHAIN.to_string()],
    }
}

pub fn setup() -> TestEnv {
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let receiver = Addr::unchecked("terra1receiver");

    let mut app = App::new(|router, _, storage| {
        for account in [&admin, &user] {
            router
                .bank
                .init_balance(
                    storage,
                    account,
                    vec![coin(INITIAL_NATIVE, NATIVE), coin(INITIAL_NATIVE, STABLE)],
                )
                .unwrap();
        }
    });

    let cw20_code_id = app.store_code(contract_cw20());
    let price_token = instantiate_cw20(
        &mut app,
        cw20_code_id,
        &admin,
        "Price Token",
        "PRICE",
        &user,
        None,
    );

    let attestor = PermitSigner::new(ATTESTOR_KEY, PermitDomain::new(CHAIN_ID, ""))
        .unwrap()
        .address_hex();
    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            admin.clone(),
            &instantiate_msg(attestor, &price_token, &admin),
            &[],
            "permit-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    // Digests bind the deployed bridge address
    let signer =
        PermitSigner::new(ATTESTOR_KEY, PermitDomain::new(CHAIN_ID, bridge.as_str())).unwrap();

    let mut env = TestEnv {
        app,
        admin,
        user,
        receiver,
        bridge,
        price_token,
        cw20_code_id,
        signer,
    };
    let price_token = env.price_token.clone();
    env.approve_cw20(&price_token, INITIAL_TOKENS);
    env
}

pub fn instantiate_cw20(
    app: &mut App,
    code_id: u64,
    admin: &Addr,
    name: &str,
    symbol: &str,
    holder: &Addr,
    minter: Option<&Addr>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::new(INITIAL_TOKENS),
            }],
            mint: minter.map(|m| MinterResponse {
                minter: m.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

// ============================================================================
// Permits
// ============================================================================

pub fn order(
    kind: OperationKind,
    asset_class: AssetClass,
    token: &str,
    token_id: u128,
    amount: u128,
    nonce: u64,
) -> PermitOrder {
    let (price_token_per_usd, transfer_token_per_usd) = default_prices();
    let receiver = if kind.is_outbound() {
        EVM_RECEIVER.to_string()
    } else {
        "terra1receiver".to_string()
    };
    PermitOrder {
        kind,
        asset_class,
        token: token.to_string(),
        token_id: Uint128::new(token_id),
        amount: Uint128::new(amount),
        receiver,
        target_chain: TARGET_CHAIN.to_string(),
        nonce,
        price_token_per_usd,
        transfer_token_per_usd,
    }
}

/// Sign `order` and shape it into the request a caller submits.
pub fn signed_request(
    signer: &PermitSigner,
    order: PermitOrder,
    fee_denomination: FeeDenomination,
) -> PermitRequest {
    let signed = order.sign(signer).unwrap();
    let order = signed.order;
    PermitRequest {
        token: order.token,
        token_id: order.token_id,
        amount: order.amount,
        receiver: order.receiver,
        target_chain: order.target_chain,
        nonce: order.nonce,
        fee_denomination,
        fee_quote: FeeQuote {
            price_token_per_usd: order.price_token_per_usd,
            transfer_token_per_usd: order.transfer_token_per_usd,
            signature: signed.fee_quote_signature,
        },
        signature: signed.signature,
    }
}

pub fn permit_msg(
    kind: OperationKind,
    asset_class: AssetClass,
    request: PermitRequest,
) -> ExecuteMsg {
    match kind {
        OperationKind::Lock => ExecuteMsg::LockWithPermit {
            asset_class,
            request,
        },
        OperationKind::Unlock => ExecuteMsg::UnlockWithPermit {
            asset_class,
            request,
        },
        OperationKind::Mint => ExecuteMsg::MintWithPermit {
            asset_class,
            request,
        },
        OperationKind::Burn => ExecuteMsg::BurnWithPermit {
            asset_class,
            request,
        },
    }
}

impl TestEnv {
    /// Submit `request` from the user; errors come back as their root cause.
    pub fn submit(
        &mut self,
        kind: OperationKind,
        asset_class: AssetClass,
        request: PermitRequest,
        funds: &[Coin],
    ) -> Result<AppResponse, String> {
        let user = self.user.clone();
        let bridge = self.bridge.clone();
        self.app
            .execute_contract(user, bridge, &permit_msg(kind, asset_class, request), funds)
            .map_err(|e| e.root_cause().to_string())
    }

    /// Sign and submit `order` from the user.
    pub fn permit(
        &mut self,
        order: PermitOrder,
        fee_denomination: FeeDenomination,
        funds: &[Coin],
    ) -> Result<AppResponse, String> {
        let kind = order.kind;
        let asset_class = order.asset_class;
        let request = signed_request(&self.signer, order, fee_denomination);
        self.submit(kind, asset_class, request, funds)
    }

    pub fn admin_execute(&mut self, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        let admin = self.admin.clone();
        let bridge = self.bridge.clone();
        self.app
            .execute_contract(admin, bridge, msg, &[])
            .map_err(|e| e.root_cause().to_string())
    }

    // ------------------------------------------------------------------------
    // Token setup
    // ------------------------------------------------------------------------

    /// Allow the bridge to pull `amount` of `token` from the user.
    pub fn approve_cw20(&mut self, token: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Original CW20 held by the user.
    pub fn original_cw20(&mut self) -> Addr {
        let admin = self.admin.clone();
        let user = self.user.clone();
        let token = instantiate_cw20(
            &mut self.app,
            self.cw20_code_id,
            &admin,
            "Original Token",
            "ORIG",
            &user,
            None,
        );
        self.approve_cw20(&token, INITIAL_TOKENS);
        token
    }

    /// Wrapped CW20 mintable only by the bridge.
    pub fn wrapped_cw20(&mut self) -> Addr {
        let admin = self.admin.clone();
        let user = self.user.clone();
        let bridge = self.bridge.clone();
        let token = instantiate_cw20(
            &mut self.app,
            self.cw20_code_id,
            &admin,
            "Wrapped Token",
            "WRAP",
            &user,
            Some(&bridge),
        );
        self.approve_cw20(&token, INITIAL_TOKENS);
        token
    }

    /// Non-fungible token contract with `minter`, operator approval granted
    /// from the user to the bridge.
    pub fn nft(&mut self, minter: &Addr) -> Addr {
        let code_id = self.app.store_code(contract_nft());
        let token = self
            .app
            .instantiate_contract(
                code_id,
                self.admin.clone(),
                &MockTokenInstantiateMsg {
                    minter: minter.to_string(),
                },
                &[],
                "nft",
                None,
            )
            .unwrap();
        self.app
            .execute_contract(
                self.user.clone(),
                token.clone(),
                &MockNftExecuteMsg::ApproveAll {
                    operator: self.bridge.to_string(),
                },
                &[],
            )
            .unwrap();
        token
    }

    pub fn mint_nft(&mut self, token: &Addr, token_id: &str, owner: &Addr) {
        self.app
            .execute_contract(
                self.admin.clone(),
                token.clone(),
                &MockNftExecuteMsg::Mint {
                    token_id: token_id.to_string(),
                    owner: owner.to_string(),
                    token_uri: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Multi-token contract with `minter`, operator approval granted from the
    /// user to the bridge.
    pub fn multi_token(&mut self, minter: &Addr) -> Addr {
        let code_id = self.app.store_code(contract_multi_token());
        let token = self
            .app
            .instantiate_contract(
                code_id,
                self.admin.clone(),
                &MockTokenInstantiateMsg {
                    minter: minter.to_string(),
                },
                &[],
                "multi-token",
                None,
            )
            .unwrap();
        self.app
            .execute_contract(
                self.user.clone(),
                token.clone(),
                &MockMultiTokenExecuteMsg::ApproveAll {
                    operator: self.bridge.to_string(),
                },
                &[],
            )
            .unwrap();
        token
    }

    pub fn mint_multi_token(&mut self, token: &Addr, token_id: &str, to: &Addr, value: u128) {
        self.app
            .execute_contract(
                self.admin.clone(),
                token.clone(),
                &MockMultiTokenExecuteMsg::Mint {
                    to: to.to_string(),
                    token_id: token_id.to_string(),
                    value: Uint128::new(value),
                    msg: None,
                },
                &[],
            )
            .unwrap();
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn native_balance(&self, addr: &Addr, denom: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, denom)
            .unwrap()
            .amount
            .u128()
    }

    pub fn cw20_balance(&self, token: &Addr, addr: &Addr) -> u128 {
        let res: Cw20BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn nft_owner(&self, token: &Addr, token_id: &str) -> Option<String> {
        self.app
            .wrap()
            .query_wasm_smart::<common::token::OwnerOfResponse>(
                token,
                &common::token::NftQueryMsg::OwnerOf {
                    token_id: token_id.to_string(),
                    include_expired: None,
                },
            )
            .ok()
            .map(|res| res.owner)
    }

    pub fn multi_token_balance(&self, token: &Addr, owner: &Addr, token_id: &str) -> u128 {
        let res: common::token::MultiTokenBalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &common::token::MultiTokenQueryMsg::Balance {
                    owner: owner.to_string(),
                    token_id: token_id.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app.wrap().query_wasm_smart(&self.bridge, msg).unwrap()
    }

    pub fn fee_accrual(&self, asset: common::AssetInfo) -> u128 {
        let res: permit_bridge::msg::BalanceResponse = self.query(&QueryMsg::FeeAccrual { asset });
        res.amount.u128()
    }

    pub fn locked_balance(&self, asset: common::AssetInfo) -> u128 {
        let res: permit_bridge::msg::BalanceResponse =
            self.query(&QueryMsg::LockedBalance { asset });
        res.amount.u128()
    }
}

/// Value of attribute `key` on the wasm event emitted by `contract`.
pub fn wasm_attr(res: &AppResponse, contract: &Addr, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .filter(|e| {
            e.attributes
                .iter()
                .any(|a| a.key == "_contract_address" && a.value == contract.as_str())
        })
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
