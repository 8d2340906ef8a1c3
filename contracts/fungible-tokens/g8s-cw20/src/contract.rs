#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{attr, ensure, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use cw2::set_contract_version;
use cw20_base::contract::{
    execute as execute_cw20, instantiate as cw20_instantiate, query as query_cw20,
};
use cw_utils::nonpayable;
use g8s_fungible_tokens::cw20::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use g8s_std::{common::migrate::migrate as migrate_contract, error::ContractError};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:g8s-cw20";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure!(!msg.total_supply.is_zero(), ContractError::ZeroTotalSupply {});

    let deployer = info.sender.clone();
    let total_supply = msg.total_supply;
    let cw20_msg = msg.into_cw20_instantiate_msg(&deployer);
    let cw20_resp = cw20_instantiate(deps.branch(), env, info, cw20_msg)?;
    // cw20-base records its own version, overwrite it with ours
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(cw20_resp.add_attributes(vec![
        attr("method", "instantiate"),
        attr("type", "g8s-cw20"),
        attr("deployer", deployer),
        attr("total_supply", total_supply),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    Ok(execute_cw20(deps, env, info, msg.into())?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, CONTRACT_NAME, CONTRACT_VERSION)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    Ok(query_cw20(deps, env, msg)?)
}
