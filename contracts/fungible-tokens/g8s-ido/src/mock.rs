#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]

use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128};
use cw_multi_test::{Contract, ContractWrapper, Executor};
use g8s_fungible_tokens::ido::{
    Cw20HookMsg, ExecuteMsg, InstantiateMsg, PurchasedResponse, QueryMsg, SaleConfig,
    SaleStatusResponse, SimulatePurchaseResponse, SweepPolicy, TokensSoldResponse,
};
use g8s_testing::{
    mock::MockApp,
    mock_contract::{ExecuteResult, MockContract, MockOwnable},
    mock_ownable_contract,
};

pub struct MockG8sIdo(Addr);
mock_ownable_contract!(MockG8sIdo, ExecuteMsg, QueryMsg);

impl MockG8sIdo {
    #[allow(clippy::too_many_arguments)]
    pub fn instantiate(
        code_id: u64,
        sender: Addr,
        app: &mut MockApp,
        token_address: &Addr,
        payment_token_address: &Addr,
        price_per_token: Uint128,
        tokens_for_sale: Uint128,
        start_time: u64,
        end_time: u64,
        sweep_policy: Option<SweepPolicy>,
    ) -> MockG8sIdo {
        let msg = mock_ido_instantiate_msg(
            token_address,
            payment_token_address,
            price_per_token,
            tokens_for_sale,
            start_time,
            end_time,
            sweep_policy,
        );
        let addr = app
            .instantiate_contract(
                code_id,
                sender.clone(),
                &msg,
                &[],
                "G8S IDO",
                Some(sender.to_string()),
            )
            .unwrap();
        MockG8sIdo(addr)
    }

    pub fn execute_purchase(
        &self,
        app: &mut MockApp,
        sender: Addr,
        payment_amount: Uint128,
    ) -> ExecuteResult {
        self.execute(app, &mock_ido_purchase_msg(payment_amount), sender, &[])
    }

    pub fn execute_pause_sale(&self, app: &mut MockApp, sender: Addr) -> ExecuteResult {
        self.execute(app, &ExecuteMsg::PauseSale {}, sender, &[])
    }

    pub fn execute_resume_sale(&self, app: &mut MockApp, sender: Addr) -> ExecuteResult {
        self.execute(app, &ExecuteMsg::ResumeSale {}, sender, &[])
    }

    pub fn execute_set_price(
        &self,
        app: &mut MockApp,
        sender: Addr,
        new_price: Uint128,
    ) -> ExecuteResult {
        self.execute(app, &ExecuteMsg::SetPrice { new_price }, sender, &[])
    }

    pub fn execute_withdraw_payment_token(
        &self,
        app: &mut MockApp,
        sender: Addr,
        to: &Addr,
        amount: Uint128,
    ) -> ExecuteResult {
        let msg = ExecuteMsg::WithdrawPaymentToken {
            to: to.to_string(),
            amount,
        };
        self.execute(app, &msg, sender, &[])
    }

    pub fn execute_sweep_unsold_tokens(
        &self,
        app: &mut MockApp,
        sender: Addr,
        to: &Addr,
        amount: Uint128,
    ) -> ExecuteResult {
        let msg = ExecuteMsg::SweepUnsoldTokens {
            to: to.to_string(),
            amount,
        };
        self.execute(app, &msg, sender, &[])
    }

    pub fn query_tokens_sold(&self, app: &MockApp) -> Uint128 {
        self.query::<TokensSoldResponse>(app, QueryMsg::TokensSold {})
            .tokens_sold
    }

    pub fn query_config(&self, app: &MockApp) -> SaleConfig {
        self.query::<SaleConfig>(app, QueryMsg::Config {})
    }

    pub fn query_sale_status(&self, app: &MockApp) -> SaleStatusResponse {
        self.query::<SaleStatusResponse>(app, QueryMsg::SaleStatus {})
    }

    pub fn query_simulate_purchase(&self, app: &MockApp, payment_amount: Uint128) -> Uint128 {
        self.query::<SimulatePurchaseResponse>(app, QueryMsg::SimulatePurchase { payment_amount })
            .tokens_out
    }

    pub fn query_purchased(&self, app: &MockApp, buyer: &Addr) -> Uint128 {
        self.query::<PurchasedResponse>(
            app,
            QueryMsg::Purchased {
                buyer: buyer.to_string(),
            },
        )
        .tokens_bought
    }
}

pub fn mock_g8s_ido() -> Box<dyn Contract<Empty>> {
    let contract =
        ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_ido_instantiate_msg(
    token_address: &Addr,
    payment_token_address: &Addr,
    price_per_token: Uint128,
    tokens_for_sale: Uint128,
    start_time: u64,
    end_time: u64,
    sweep_policy: Option<SweepPolicy>,
) -> InstantiateMsg {
    InstantiateMsg {
        token_address: token_address.to_string(),
        payment_token_address: payment_token_address.to_string(),
        price_per_token,
        tokens_for_sale,
        start_time,
        end_time,
        sweep_policy,
    }
}

pub fn mock_ido_purchase_msg(payment_amount: Uint128) -> ExecuteMsg {
    ExecuteMsg::Purchase { payment_amount }
}

/// Hook message to attach to a cw20 `Send` of the payment token
pub fn mock_ido_hook_purchase_msg() -> Binary {
    to_json_binary(&Cw20HookMsg::Purchase {}).unwrap()
}
