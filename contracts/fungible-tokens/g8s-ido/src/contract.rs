#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, ensure, from_json, Binary, Decimal, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw20::Cw20ReceiveMsg;
use cw_utils::nonpayable;
use g8s_fungible_tokens::ido::{
    Cw20HookMsg, EndTimeResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, PausedResponse,
    PricePerTokenResponse, PurchasedResponse, QueryMsg, SaleConfig, SaleState,
    SaleStatusResponse, SimulatePurchaseResponse, StartTimeResponse, TokensForSaleResponse,
    TokensSoldResponse,
};
use g8s_std::{
    common::{
        context::ExecuteContext, encode_binary, migrate::migrate as migrate_contract,
        queries::query_cw20_balance, SalePhase, SaleWindow,
    },
    error::ContractError,
    ownership::Ownership,
};

use crate::{
    execute_admin::{
        execute_pause_sale, execute_resume_sale, execute_set_price, execute_sweep_unsold_tokens,
        execute_withdraw_payment_token,
    },
    execute_sale::{execute_purchase, execute_purchase_cw20},
    state::{CONFIG, PURCHASES, STATE},
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:g8s-ido";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure!(
        !msg.token_address.trim().is_empty(),
        ContractError::ZeroSaleTokenAddress {}
    );
    ensure!(
        !msg.payment_token_address.trim().is_empty(),
        ContractError::ZeroPaymentTokenAddress {}
    );
    let token = deps.api.addr_validate(&msg.token_address)?;
    let payment_token = deps.api.addr_validate(&msg.payment_token_address)?;
    ensure!(
        token != payment_token,
        ContractError::SameTokenAndPaymentToken {}
    );
    ensure!(!msg.price_per_token.is_zero(), ContractError::ZeroPrice {});
    ensure!(
        !msg.tokens_for_sale.is_zero(),
        ContractError::ZeroAllocation {}
    );
    let window = SaleWindow::new(msg.start_time, msg.end_time)?;

    let config = SaleConfig {
        token,
        payment_token,
        price_per_token: msg.price_per_token,
        tokens_for_sale: msg.tokens_for_sale,
        start_time: window.start_time,
        end_time: window.end_time,
        sweep_policy: msg.sweep_policy.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;
    STATE.save(deps.storage, &SaleState::default())?;

    Ownership::default().initialize(deps.storage, &info.sender)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attributes(vec![
        attr("method", "instantiate"),
        attr("type", "g8s-ido"),
        attr("owner", info.sender),
        attr("token", config.token),
        attr("payment_token", config.payment_token),
        attr("price_per_token", config.price_per_token),
        attr("tokens_for_sale", config.tokens_for_sale),
        attr("start_time", config.start_time.to_string()),
        attr("end_time", config.end_time.to_string()),
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
    let ctx = ExecuteContext::new(deps, info, env);

    match msg {
        ExecuteMsg::Purchase { payment_amount } => execute_purchase(ctx, payment_amount),
        ExecuteMsg::Receive(receive_msg) => execute_receive(ctx, receive_msg),
        ExecuteMsg::PauseSale {} => {
            let cap = ctx.assert_owner()?;
            execute_pause_sale(ctx, cap)
        }
        ExecuteMsg::ResumeSale {} => {
            let cap = ctx.assert_owner()?;
            execute_resume_sale(ctx, cap)
        }
        ExecuteMsg::SetPrice { new_price } => {
            let cap = ctx.assert_owner()?;
            execute_set_price(ctx, cap, new_price)
        }
        ExecuteMsg::WithdrawPaymentToken { to, amount } => {
            let cap = ctx.assert_owner()?;
            execute_withdraw_payment_token(ctx, cap, to, amount)
        }
        ExecuteMsg::SweepUnsoldTokens { to, amount } => {
            let cap = ctx.assert_owner()?;
            execute_sweep_unsold_tokens(ctx, cap, to, amount)
        }
        ExecuteMsg::Ownership(ownership_msg) => {
            let ExecuteContext { deps, env, info } = ctx;
            Ownership::default().execute(deps, env, info, ownership_msg)
        }
    }
}

/// Only the payment token may call `Receive`; its `sender` is the buyer
pub fn execute_receive(
    ctx: ExecuteContext,
    receive_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(ctx.deps.storage)?;
    ensure!(
        ctx.info.sender == config.payment_token,
        ContractError::InvalidPaymentToken {
            token: ctx.info.sender.to_string()
        }
    );

    match from_json(&receive_msg.msg)? {
        Cw20HookMsg::Purchase {} => {
            let buyer = ctx.deps.api.addr_validate(&receive_msg.sender)?;
            execute_purchase_cw20(ctx, buyer, receive_msg.amount)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, CONTRACT_NAME, CONTRACT_VERSION)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Owner {} => encode_binary(&Ownership::default().query_owner(deps.storage)?),
        QueryMsg::OwnershipRequest {} => {
            encode_binary(&Ownership::default().ownership_request(deps.storage)?)
        }
        QueryMsg::Paused {} => encode_binary(&PausedResponse {
            paused: STATE.load(deps.storage)?.paused,
        }),
        QueryMsg::PricePerToken {} => encode_binary(&PricePerTokenResponse {
            price_per_token: CONFIG.load(deps.storage)?.price_per_token,
        }),
        QueryMsg::TokensForSale {} => encode_binary(&TokensForSaleResponse {
            tokens_for_sale: CONFIG.load(deps.storage)?.tokens_for_sale,
        }),
        QueryMsg::TokensSold {} => encode_binary(&TokensSoldResponse {
            tokens_sold: STATE.load(deps.storage)?.tokens_sold,
        }),
        QueryMsg::StartTime {} => encode_binary(&StartTimeResponse {
            start_time: CONFIG.load(deps.storage)?.start_time,
        }),
        QueryMsg::EndTime {} => encode_binary(&EndTimeResponse {
            end_time: CONFIG.load(deps.storage)?.end_time,
        }),
        QueryMsg::Config {} => encode_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::State {} => encode_binary(&STATE.load(deps.storage)?),
        QueryMsg::SaleStatus {} => encode_binary(&query_sale_status(deps, env)?),
        QueryMsg::SimulatePurchase { payment_amount } => {
            encode_binary(&query_simulate_purchase(deps, payment_amount)?)
        }
        QueryMsg::Purchased { buyer } => encode_binary(&query_purchased(deps, buyer)?),
        QueryMsg::Version {} => encode_binary(&query_version(deps)?),
    }
}

fn query_sale_status(deps: Deps, env: Env) -> Result<SaleStatusResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;

    let phase = config.window().phase(&env.block);
    let tokens_remaining = config.tokens_for_sale.checked_sub(state.tokens_sold)?;
    let sale_token_balance =
        query_cw20_balance(&deps.querier, &config.token, &env.contract.address)?;
    let accepting_purchases = phase == SalePhase::Active
        && !state.paused
        && !tokens_remaining.is_zero()
        && !sale_token_balance.is_zero();

    Ok(SaleStatusResponse {
        phase,
        paused: state.paused,
        accepting_purchases,
        tokens_sold: state.tokens_sold,
        tokens_for_sale: config.tokens_for_sale,
        tokens_remaining,
        sale_token_balance,
        funded: sale_token_balance >= tokens_remaining,
        progress: Decimal::checked_from_ratio(state.tokens_sold, config.tokens_for_sale)?,
    })
}

fn query_simulate_purchase(
    deps: Deps,
    payment_amount: Uint128,
) -> Result<SimulatePurchaseResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(SimulatePurchaseResponse {
        tokens_out: config.tokens_for_payment(payment_amount)?,
    })
}

fn query_purchased(deps: Deps, buyer: String) -> Result<PurchasedResponse, ContractError> {
    let buyer = deps.api.addr_validate(&buyer)?;
    let tokens_bought = PURCHASES
        .may_load(deps.storage, &buyer)?
        .unwrap_or_default();
    Ok(PurchasedResponse {
        buyer,
        tokens_bought,
    })
}

fn query_version(deps: Deps) -> Result<ContractVersion, ContractError> {
    Ok(get_contract_version(deps.storage)?)
}
