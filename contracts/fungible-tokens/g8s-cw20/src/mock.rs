#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]

use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::{Addr, Binary, Empty, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, TokenInfoResponse};
use cw_multi_test::{Contract, ContractWrapper, Executor};
use g8s_fungible_tokens::cw20::{ExecuteMsg, InstantiateMsg, QueryMsg};
use g8s_testing::{
    mock::MockApp,
    mock_contract::{ExecuteResult, MockContract},
    mock_contract,
};

pub struct MockG8sCw20(Addr);
mock_contract!(MockG8sCw20, ExecuteMsg, QueryMsg);

impl MockG8sCw20 {
    pub fn instantiate(
        code_id: u64,
        sender: Addr,
        app: &mut MockApp,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        total_supply: Uint128,
    ) -> MockG8sCw20 {
        let msg = mock_cw20_instantiate_msg(name, symbol, decimals, total_supply);
        let addr = app
            .instantiate_contract(
                code_id,
                sender.clone(),
                &msg,
                &[],
                "G8S Token",
                Some(sender.to_string()),
            )
            .unwrap();
        MockG8sCw20(addr)
    }

    pub fn execute_transfer(
        &self,
        app: &mut MockApp,
        sender: Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> ExecuteResult {
        self.execute(app, &mock_cw20_transfer(recipient, amount), sender, &[])
    }

    pub fn execute_send(
        &self,
        app: &mut MockApp,
        sender: Addr,
        contract: &Addr,
        amount: Uint128,
        msg: Binary,
    ) -> ExecuteResult {
        self.execute(app, &mock_cw20_send(contract, amount, msg), sender, &[])
    }

    pub fn execute_increase_allowance(
        &self,
        app: &mut MockApp,
        sender: Addr,
        spender: &Addr,
        amount: Uint128,
    ) -> ExecuteResult {
        let msg = ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount,
            expires: None,
        };
        self.execute(app, &msg, sender, &[])
    }

    pub fn query_balance(&self, app: &MockApp, address: &Addr) -> Uint128 {
        self.query::<BalanceResponse>(app, mock_get_cw20_balance(address))
            .balance
    }

    pub fn query_allowance(&self, app: &MockApp, owner: &Addr, spender: &Addr) -> Uint128 {
        self.query::<AllowanceResponse>(
            app,
            QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )
        .allowance
    }

    pub fn query_token_info(&self, app: &MockApp) -> TokenInfoResponse {
        self.query::<TokenInfoResponse>(app, QueryMsg::TokenInfo {})
    }
}

pub fn mock_g8s_cw20() -> Box<dyn Contract<Empty>> {
    let contract =
        ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_cw20_instantiate_msg(
    name: impl Into<String>,
    symbol: impl Into<String>,
    decimals: u8,
    total_supply: Uint128,
) -> InstantiateMsg {
    InstantiateMsg {
        name: name.into(),
        symbol: symbol.into(),
        decimals,
        total_supply,
        marketing: None,
    }
}

pub fn mock_get_cw20_balance(address: impl Into<String>) -> QueryMsg {
    QueryMsg::Balance {
        address: address.into(),
    }
}

pub fn mock_cw20_send(contract: &Addr, amount: Uint128, msg: Binary) -> ExecuteMsg {
    ExecuteMsg::Send {
        contract: contract.to_string(),
        amount,
        msg,
    }
}

pub fn mock_cw20_transfer(recipient: &Addr, amount: Uint128) -> ExecuteMsg {
    ExecuteMsg::Transfer {
        recipient: recipient.to_string(),
        amount,
    }
}
