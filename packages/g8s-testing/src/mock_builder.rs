use cosmwasm_std::{Coin, Empty};
use cw_multi_test::Contract;

use crate::mock::{init_balances, MockApp, MockG8s};

pub struct MockG8sBuilder {
    admin: String,
    wallets: Vec<(String, Vec<Coin>)>,
    contracts: Vec<(String, Box<dyn Contract<Empty>>)>,
}

impl MockG8sBuilder {
    pub fn new(admin: &str) -> Self {
        Self {
            admin: admin.to_string(),
            wallets: vec![],
            contracts: vec![],
        }
    }

    pub fn with_wallets(self, wallets: Vec<(&str, Vec<Coin>)>) -> Self {
        Self {
            wallets: wallets
                .into_iter()
                .map(|(name, coins)| (name.to_string(), coins))
                .collect(),
            ..self
        }
    }

    pub fn with_contracts(self, contracts: Vec<(&str, Box<dyn Contract<Empty>>)>) -> Self {
        Self {
            contracts: contracts
                .into_iter()
                .map(|(name, contract)| (name.to_string(), contract))
                .collect(),
            ..self
        }
    }

    pub fn build(self, app: &mut MockApp) -> MockG8s {
        let mut g8s = MockG8s::new(app, &self.admin);

        for (name, coins) in self.wallets {
            let addr = g8s.add_wallet(app, &name);
            if !coins.is_empty() {
                init_balances(app, vec![(addr, coins.as_slice())]);
            }
        }

        for (name, contract) in self.contracts {
            let code_id = app.store_code(contract);
            g8s.store_code_id(&name, code_id);
        }

        g8s
    }
}
