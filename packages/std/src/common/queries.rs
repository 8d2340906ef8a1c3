use crate::error::ContractError;
use cosmwasm_std::{Addr, QuerierWrapper, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

/// Queries the cw20 balance held by `address` in `token`
pub fn query_cw20_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    address: &Addr,
) -> Result<Uint128, ContractError> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}
