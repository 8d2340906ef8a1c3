use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw20::Cw20ReceiveMsg;
use g8s_std::{
    common::{SalePhase, SaleWindow},
    error::ContractError,
    ownership::{ContractOwnerResponse, ContractPotentialOwnerResponse, OwnershipMessage},
};

pub use g8s_std::common::migrate::MigrateMsg;

/// Fixed-point scale of `price_per_token`: the price is quoted per 10^18 base units of the sale token
pub const PRICE_SCALE: Uint128 = Uint128::new(1_000_000_000_000_000_000);

/// When the owner may reclaim sale tokens held by the contract
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub enum SweepPolicy {
    /// Only once the sale window has closed
    #[default]
    AfterEnd,
    /// At any time, including before and during the sale
    Anytime,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the cw20 token being sold
    pub token_address: String,
    /// Address of the cw20 token accepted as payment
    pub payment_token_address: String,
    /// Payment token amount required per 10^18 base units of the sale token
    pub price_per_token: Uint128,
    /// Total allocation reserved for the sale
    pub tokens_for_sale: Uint128,
    /// UNIX seconds from which purchases are accepted
    pub start_time: u64,
    /// UNIX seconds after which purchases are rejected
    pub end_time: u64,
    /// Defaults to [`SweepPolicy::AfterEnd`]
    pub sweep_policy: Option<SweepPolicy>,
}

/// Sale parameters fixed at instantiation. Only `price_per_token` may change afterwards.
#[cw_serde]
pub struct SaleConfig {
    pub token: Addr,
    pub payment_token: Addr,
    pub price_per_token: Uint128,
    pub tokens_for_sale: Uint128,
    pub start_time: u64,
    pub end_time: u64,
    pub sweep_policy: SweepPolicy,
}

impl SaleConfig {
    pub fn window(&self) -> SaleWindow {
        SaleWindow {
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Sale tokens bought by `payment_amount` at the current price, rounded down
    pub fn tokens_for_payment(&self, payment_amount: Uint128) -> Result<Uint128, ContractError> {
        Ok(payment_amount.checked_multiply_ratio(PRICE_SCALE, self.price_per_token)?)
    }
}

#[cw_serde]
#[derive(Default)]
pub struct SaleState {
    /// Sale tokens disbursed so far, never above `tokens_for_sale`
    pub tokens_sold: Uint128,
    pub paused: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buys sale tokens, pulling `payment_amount` of the payment token through a prior allowance
    Purchase { payment_amount: Uint128 },
    /// Receive for cw20 payment tokens, used for purchasing with `Send`
    Receive(Cw20ReceiveMsg),
    PauseSale {},
    ResumeSale {},
    SetPrice { new_price: Uint128 },
    /// Transfers collected payment tokens out of the contract
    WithdrawPaymentToken { to: String, amount: Uint128 },
    /// Transfers sale tokens held by the contract out, subject to the sweep policy
    SweepUnsoldTokens { to: String, amount: Uint128 },
    Ownership(OwnershipMessage),
}

#[cw_serde]
pub enum Cw20HookMsg {
    /// Purchases tokens with the payment tokens sent along
    Purchase {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ContractOwnerResponse)]
    Owner {},
    #[returns(ContractPotentialOwnerResponse)]
    OwnershipRequest {},
    #[returns(PausedResponse)]
    Paused {},
    #[returns(PricePerTokenResponse)]
    PricePerToken {},
    #[returns(TokensForSaleResponse)]
    TokensForSale {},
    #[returns(TokensSoldResponse)]
    TokensSold {},
    #[returns(StartTimeResponse)]
    StartTime {},
    #[returns(EndTimeResponse)]
    EndTime {},
    #[returns(SaleConfig)]
    Config {},
    #[returns(SaleState)]
    State {},
    /// Derived status for dashboards: phase, funding and progress
    #[returns(SaleStatusResponse)]
    SaleStatus {},
    /// Quotes a purchase at the current price without checking window, pause or capacity
    #[returns(SimulatePurchaseResponse)]
    SimulatePurchase { payment_amount: Uint128 },
    /// Total sale tokens bought by `buyer`
    #[returns(PurchasedResponse)]
    Purchased { buyer: String },
    #[returns(cw2::ContractVersion)]
    Version {},
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct PricePerTokenResponse {
    pub price_per_token: Uint128,
}

#[cw_serde]
pub struct TokensForSaleResponse {
    pub tokens_for_sale: Uint128,
}

#[cw_serde]
pub struct TokensSoldResponse {
    pub tokens_sold: Uint128,
}

#[cw_serde]
pub struct StartTimeResponse {
    pub start_time: u64,
}

#[cw_serde]
pub struct EndTimeResponse {
    pub end_time: u64,
}

#[cw_serde]
pub struct SaleStatusResponse {
    pub phase: SalePhase,
    pub paused: bool,
    /// True only when active, running and funded for at least one more base unit
    pub accepting_purchases: bool,
    pub tokens_sold: Uint128,
    pub tokens_for_sale: Uint128,
    pub tokens_remaining: Uint128,
    /// Sale tokens currently held by the contract
    pub sale_token_balance: Uint128,
    /// Whether the held balance covers the remaining allocation
    pub funded: bool,
    /// `tokens_sold / tokens_for_sale`
    pub progress: Decimal,
}

#[cw_serde]
pub struct SimulatePurchaseResponse {
    pub tokens_out: Uint128,
}

#[cw_serde]
pub struct PurchasedResponse {
    pub buyer: Addr,
    pub tokens_bought: Uint128,
}
