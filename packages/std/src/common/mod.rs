pub mod context;
pub mod migrate;
pub mod msg_generation;
pub mod queries;
pub mod window;

use crate::error::ContractError;
use cosmwasm_std::{ensure, to_json_binary, Api, Addr, Binary};
use serde::Serialize;

pub use window::{SalePhase, SaleWindow};

pub fn encode_binary<T>(val: &T) -> Result<Binary, ContractError>
where
    T: Serialize,
{
    match to_json_binary(val) {
        Ok(encoded_val) => Ok(encoded_val),
        Err(err) => Err(err.into()),
    }
}

/// Validates an address, mapping a blank input to `empty_err` before bech32 validation runs
pub fn validate_non_empty_addr(
    api: &dyn Api,
    addr: &str,
    empty_err: ContractError,
) -> Result<Addr, ContractError> {
    ensure!(!addr.trim().is_empty(), empty_err);
    Ok(api.addr_validate(addr)?)
}
