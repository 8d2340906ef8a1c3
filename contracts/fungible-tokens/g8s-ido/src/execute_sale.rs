use cosmwasm_std::{attr, ensure, Addr, Event, Response, StdResult, Uint128};
use g8s_std::{
    common::{
        context::ExecuteContext,
        msg_generation::{generate_cw20_transfer_from_message, generate_cw20_transfer_message},
        queries::query_cw20_balance,
    },
    error::ContractError,
};

use crate::state::{CONFIG, PURCHASES, STATE};

/// How the payment reaches the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentSource {
    /// Pulled from the buyer with `TransferFrom`, requires a prior allowance
    Allowance,
    /// Already moved into the contract by a cw20 `Send`
    Received,
}

/// Purchases sale tokens by spending the sender's payment token allowance
pub fn execute_purchase(
    ctx: ExecuteContext,
    payment_amount: Uint128,
) -> Result<Response, ContractError> {
    let buyer = ctx.info.sender.clone();
    purchase(ctx, buyer, payment_amount, PaymentSource::Allowance)
}

/// Purchases sale tokens with payment tokens received through a cw20 `Send`
pub fn execute_purchase_cw20(
    ctx: ExecuteContext,
    buyer: Addr,
    payment_amount: Uint128,
) -> Result<Response, ContractError> {
    purchase(ctx, buyer, payment_amount, PaymentSource::Received)
}

fn purchase(
    ctx: ExecuteContext,
    buyer: Addr,
    payment_amount: Uint128,
    source: PaymentSource,
) -> Result<Response, ContractError> {
    let ExecuteContext { deps, env, .. } = ctx;
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    ensure!(!state.paused, ContractError::SalePaused {});
    config.window().ensure_active(&env.block)?;
    ensure!(!payment_amount.is_zero(), ContractError::ZeroPaymentAmount {});

    let tokens_out = config.tokens_for_payment(payment_amount)?;
    ensure!(
        !tokens_out.is_zero(),
        ContractError::PaymentTooSmall { payment_amount }
    );

    // No partial fills
    let remaining = config.tokens_for_sale.checked_sub(state.tokens_sold)?;
    ensure!(
        tokens_out <= remaining,
        ContractError::ExceedsAllocation { remaining }
    );

    let available = query_cw20_balance(&deps.querier, &config.token, &env.contract.address)?;
    ensure!(
        available >= tokens_out,
        ContractError::SaleUnderfunded {
            available,
            required: tokens_out
        }
    );

    // State is committed before any token message is dispatched
    state.tokens_sold = state.tokens_sold.checked_add(tokens_out)?;
    STATE.save(deps.storage, &state)?;
    PURCHASES.update(deps.storage, &buyer, |bought| -> StdResult<_> {
        Ok(bought.unwrap_or_default().checked_add(tokens_out)?)
    })?;

    let mut resp = Response::new();
    // The payment pull is ordered before the sale token release
    if source == PaymentSource::Allowance {
        resp = resp.add_submessage(generate_cw20_transfer_from_message(
            &config.payment_token,
            &buyer,
            &env.contract.address,
            payment_amount,
        )?);
    }
    resp = resp.add_submessage(generate_cw20_transfer_message(
        &config.token,
        &buyer,
        tokens_out,
    )?);

    Ok(resp
        .add_event(Event::new("purchased").add_attributes(vec![
            attr("buyer", buyer.as_str()),
            attr("payment_amount_in", payment_amount),
            attr("tokens_out", tokens_out),
        ]))
        .add_attributes(vec![
            attr("action", "purchase"),
            attr("buyer", buyer),
            attr("payment_amount_in", payment_amount),
            attr("tokens_out", tokens_out),
            attr("tokens_sold", state.tokens_sold),
        ]))
}
