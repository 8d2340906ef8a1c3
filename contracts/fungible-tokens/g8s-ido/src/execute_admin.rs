use cosmwasm_std::{attr, ensure, Addr, Env, QuerierWrapper, Response, SubMsg, Uint128};
use g8s_fungible_tokens::ido::SweepPolicy;
use g8s_std::{
    common::{
        context::ExecuteContext, msg_generation::generate_cw20_transfer_message,
        queries::query_cw20_balance, validate_non_empty_addr,
    },
    error::ContractError,
    ownership::OwnerCap,
};

use crate::state::{CONFIG, STATE};

/// Pausing an already paused sale is rejected rather than ignored
pub fn execute_pause_sale(ctx: ExecuteContext, cap: OwnerCap) -> Result<Response, ContractError> {
    let ExecuteContext { deps, .. } = ctx;
    let mut state = STATE.load(deps.storage)?;
    ensure!(!state.paused, ContractError::AlreadyPaused {});

    state.paused = true;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "pause_sale"),
        attr("owner", cap.owner()),
    ]))
}

pub fn execute_resume_sale(ctx: ExecuteContext, cap: OwnerCap) -> Result<Response, ContractError> {
    let ExecuteContext { deps, .. } = ctx;
    let mut state = STATE.load(deps.storage)?;
    ensure!(state.paused, ContractError::NotPaused {});

    state.paused = false;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "resume_sale"),
        attr("owner", cap.owner()),
    ]))
}

/// Changes the price for all subsequent purchases
pub fn execute_set_price(
    ctx: ExecuteContext,
    cap: OwnerCap,
    new_price: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteContext { deps, .. } = ctx;
    ensure!(!new_price.is_zero(), ContractError::ZeroPrice {});

    let mut config = CONFIG.load(deps.storage)?;
    let old_price = config.price_per_token;
    config.price_per_token = new_price;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_price"),
        attr("owner", cap.owner()),
        attr("old_price", old_price),
        attr("new_price", new_price),
    ]))
}

pub fn execute_withdraw_payment_token(
    ctx: ExecuteContext,
    cap: OwnerCap,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteContext { deps, env, .. } = ctx;
    let recipient = validate_non_empty_addr(deps.api, &to, ContractError::ZeroRecipient {})?;
    ensure!(!amount.is_zero(), ContractError::ZeroWithdrawAmount {});

    let config = CONFIG.load(deps.storage)?;
    let transfer_msg = checked_transfer_out(
        &deps.querier,
        &env,
        &config.payment_token,
        &recipient,
        amount,
    )?;

    Ok(Response::new()
        .add_submessage(transfer_msg)
        .add_attributes(vec![
            attr("action", "withdraw_payment_token"),
            attr("owner", cap.owner()),
            attr("recipient", recipient),
            attr("amount", amount),
        ]))
}

/// Reclaims sale tokens held by the contract, gated by the configured [`SweepPolicy`]
pub fn execute_sweep_unsold_tokens(
    ctx: ExecuteContext,
    cap: OwnerCap,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteContext { deps, env, .. } = ctx;
    let recipient = validate_non_empty_addr(deps.api, &to, ContractError::ZeroRecipient {})?;
    ensure!(!amount.is_zero(), ContractError::ZeroWithdrawAmount {});

    let config = CONFIG.load(deps.storage)?;
    if config.sweep_policy == SweepPolicy::AfterEnd {
        ensure!(
            config.window().has_ended(&env.block),
            ContractError::SaleNotEnded {}
        );
    }

    let transfer_msg =
        checked_transfer_out(&deps.querier, &env, &config.token, &recipient, amount)?;

    Ok(Response::new()
        .add_submessage(transfer_msg)
        .add_attributes(vec![
            attr("action", "sweep_unsold_tokens"),
            attr("owner", cap.owner()),
            attr("recipient", recipient),
            attr("amount", amount),
        ]))
}

/// Builds a cw20 transfer out of the contract after checking it holds enough of `token`
fn checked_transfer_out(
    querier: &QuerierWrapper,
    env: &Env,
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    let available = query_cw20_balance(querier, token, &env.contract.address)?;
    ensure!(
        available >= amount,
        ContractError::InsufficientBalance {
            available,
            requested: amount
        }
    );
    generate_cw20_transfer_message(token, recipient, amount)
}
