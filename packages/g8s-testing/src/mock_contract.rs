use core::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_multi_test::{AppResponse, Executor};
use g8s_std::ownership::{ContractOwnerResponse, OwnershipMessage};
use serde::{de::DeserializeOwned, Serialize};

pub use anyhow::Result as AnyResult;

use crate::mock::MockApp;

pub type ExecuteResult = AnyResult<AppResponse>;

/// Wire shape shared by every contract exposing `Ownership(OwnershipMessage)`
#[cw_serde]
enum OwnershipExecuteMsg {
    Ownership(OwnershipMessage),
}

/// Wire shape shared by every contract exposing `Owner {}`
#[cw_serde]
enum OwnerQueryMsg {
    Owner {},
}

pub trait MockContract<E: Serialize + fmt::Debug, Q: Serialize + fmt::Debug> {
    fn addr(&self) -> &Addr;

    fn execute(
        &self,
        app: &mut MockApp,
        msg: &E,
        sender: Addr,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        app.execute_contract(sender, self.addr().clone(), &msg, funds)
    }

    fn query<T: DeserializeOwned>(&self, app: &MockApp, msg: Q) -> T {
        app.wrap()
            .query_wasm_smart::<T>(self.addr().clone(), &msg)
            .unwrap()
    }
}

pub trait MockOwnable<E: Serialize + fmt::Debug, Q: Serialize + fmt::Debug>:
    MockContract<E, Q>
{
    fn query_owner(&self, app: &MockApp) -> Option<String> {
        app.wrap()
            .query_wasm_smart::<ContractOwnerResponse>(self.addr(), &OwnerQueryMsg::Owner {})
            .unwrap()
            .owner
    }

    fn execute_ownership(
        &self,
        app: &mut MockApp,
        sender: Addr,
        msg: OwnershipMessage,
    ) -> ExecuteResult {
        app.execute_contract(
            sender,
            self.addr().clone(),
            &OwnershipExecuteMsg::Ownership(msg),
            &[],
        )
    }
}

#[macro_export]
macro_rules! mock_contract {
    ($t:ident, $e:ident, $q:ident) => {
        impl MockContract<$e, $q> for $t {
            fn addr(&self) -> &Addr {
                &self.0
            }
        }

        impl From<Addr> for $t {
            fn from(addr: Addr) -> Self {
                Self(addr)
            }
        }
    };
}

#[macro_export]
macro_rules! mock_ownable_contract {
    ($t:ident, $e:ident, $q:ident) => {
        $crate::mock_contract!($t, $e, $q);

        impl MockOwnable<$e, $q> for $t {}
    };
}
