use std::collections::HashMap;

use cosmwasm_std::{
    from_json,
    testing::{MockApi, MockQuerier, MockStorage},
    to_json_binary, Addr, ContractResult, Empty, OwnedDeps, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse, Cw20QueryMsg};

/// Label used to derive the mock sale token address
pub const MOCK_SALE_TOKEN: &str = "g8s_token";
/// Label used to derive the mock payment token address
pub const MOCK_PAYMENT_TOKEN: &str = "pusd_token";
/// Label used to derive the mock owner address
pub const MOCK_OWNER: &str = "owner";

/// Bech32 address of the mock sale token as produced by `MockApi::default()`
pub fn mock_sale_token() -> Addr {
    MockApi::default().addr_make(MOCK_SALE_TOKEN)
}

/// Bech32 address of the mock payment token as produced by `MockApi::default()`
pub fn mock_payment_token() -> Addr {
    MockApi::default().addr_make(MOCK_PAYMENT_TOKEN)
}

pub fn mock_dependencies_custom() -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: WasmMockQuerier::new(MockQuerier::new(&[])),
        custom_query_type: std::marker::PhantomData,
    }
}

/// Mock querier answering cw20 `Balance` queries from an in-memory table.
///
/// Unknown holders of a known token report a zero balance; unknown tokens fail the query.
pub struct WasmMockQuerier {
    pub base: MockQuerier<Empty>,
    token_balances: HashMap<String, HashMap<String, Uint128>>,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            token_balances: HashMap::new(),
        }
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match from_json::<Cw20QueryMsg>(msg) {
                    Ok(Cw20QueryMsg::Balance { address }) => {
                        self.handle_balance_query(contract_addr, &address)
                    }
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: format!("query for contract {contract_addr}"),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_balance_query(&self, token: &str, address: &str) -> QuerierResult {
        let Some(balances) = self.token_balances.get(token) else {
            return SystemResult::Err(SystemError::NoSuchContract {
                addr: token.to_string(),
            });
        };
        let balance = balances.get(address).copied().unwrap_or_default();
        match to_json_binary(&BalanceResponse { balance }) {
            Ok(bin) => SystemResult::Ok(ContractResult::Ok(bin)),
            Err(e) => SystemResult::Ok(ContractResult::Err(e.to_string())),
        }
    }

    /// Sets the balance `holder` has in the cw20 contract `token`
    pub fn set_token_balance(&mut self, token: &Addr, holder: &Addr, balance: Uint128) {
        self.token_balances
            .entry(token.to_string())
            .or_default()
            .insert(holder.to_string(), balance);
    }
}
