#![cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

use cosmwasm_std::{coin, Addr, Coin};
use cw_multi_test::{
    App, AppBuilder, BankKeeper, Executor, MockApiBech32, SimpleAddressGenerator, WasmKeeper,
};

pub const BECH32_PREFIX: &str = "g8s";

pub type MockApp = App<BankKeeper, MockApiBech32>;

pub fn mock_app(denoms: Option<Vec<&str>>) -> MockApp {
    let denoms = denoms.unwrap_or(vec!["ug8s", "uusd"]);
    AppBuilder::new()
        .with_api(MockApiBech32::new(BECH32_PREFIX))
        .with_wasm(WasmKeeper::new().with_address_generator(SimpleAddressGenerator))
        .build(|router, _api, storage| {
            router
                .bank
                .init_balance(
                    storage,
                    &Addr::unchecked("bank"),
                    denoms
                        .iter()
                        .map(|d| coin(u128::MAX, *d))
                        .collect::<Vec<Coin>>(),
                )
                .unwrap();
        })
}

pub fn init_balances(app: &mut MockApp, balances: Vec<(Addr, &[Coin])>) {
    for (addr, coins) in balances {
        app.send_tokens(Addr::unchecked("bank"), addr, coins)
            .unwrap();
    }
}

/// Moves the block time forward by `seconds`, one block per call
pub fn advance_time(app: &mut MockApp, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += 1;
    });
}

/// Stored code ids and named wallets for a multi-test environment
pub struct MockG8s {
    pub admin_address: Addr,
    pub wallets: HashMap<String, Addr>,
    pub code_ids: HashMap<String, u64>,
}

impl MockG8s {
    pub fn new(app: &mut MockApp, admin_name: &str) -> MockG8s {
        let admin_address = app.api().addr_make(admin_name);
        let mut wallets = HashMap::new();
        wallets.insert(admin_name.to_string(), admin_address.clone());

        MockG8s {
            admin_address,
            wallets,
            code_ids: HashMap::new(),
        }
    }

    pub fn add_wallet(&mut self, app: &mut MockApp, name: &str) -> Addr {
        let addr = app.api().addr_make(name);
        self.wallets
            .entry(name.to_string())
            .and_modify(|_| {
                panic!("Wallet already exists");
            })
            .or_insert(addr.clone());
        addr
    }

    pub fn get_wallet(&self, name: &str) -> &Addr {
        self.wallets
            .get(name)
            .unwrap_or_else(|| panic!("Wallet {name} does not exist"))
    }

    pub fn store_code_id(&mut self, key: &str, code_id: u64) {
        self.code_ids.insert(key.to_string(), code_id);
    }

    pub fn get_code_id(&self, key: &str) -> u64 {
        *self
            .code_ids
            .get(key)
            .unwrap_or_else(|| panic!("Code id for {key} not found"))
    }
}
