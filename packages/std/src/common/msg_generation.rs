use crate::error::ContractError;
use cosmwasm_std::{wasm_execute, Addr, SubMsg, Uint128};
use cw20::Cw20ExecuteMsg;

/// Generates a cw20 transfer of `amount` from the calling contract to `recipient`
pub fn generate_cw20_transfer_message(
    token: &Addr,
    recipient: impl Into<String>,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    let transfer_msg = Cw20ExecuteMsg::Transfer {
        recipient: recipient.into(),
        amount,
    };
    let wasm_msg = wasm_execute(token, &transfer_msg, vec![])?;
    Ok(SubMsg::new(wasm_msg))
}

/// Generates a cw20 transfer that spends the calling contract's allowance over `owner`'s tokens
pub fn generate_cw20_transfer_from_message(
    token: &Addr,
    owner: impl Into<String>,
    recipient: impl Into<String>,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    let transfer_msg = Cw20ExecuteMsg::TransferFrom {
        owner: owner.into(),
        recipient: recipient.into(),
        amount,
    };
    let wasm_msg = wasm_execute(token, &transfer_msg, vec![])?;
    Ok(SubMsg::new(wasm_msg))
}
