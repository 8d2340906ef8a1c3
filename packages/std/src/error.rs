use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyRatioError, OverflowError, StdError, Uint128,
};
use cw20_base::ContractError as Cw20ContractError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Overflow")]
    Overflow {},

    // BEGIN SALE CONFIGURATION ERRORS
    #[error("Sale token address cannot be empty (g8s=0)")]
    ZeroSaleTokenAddress {},

    #[error("Payment token address cannot be empty (pusd=0)")]
    ZeroPaymentTokenAddress {},

    #[error("Sale token and payment token must differ")]
    SameTokenAndPaymentToken {},

    #[error("Price per token cannot be zero (price=0)")]
    ZeroPrice {},

    #[error("Tokens for sale cannot be zero (alloc=0)")]
    ZeroAllocation {},

    #[error("InvalidSaleWindow: start {start_time} must be before end {end_time}")]
    InvalidSaleWindow { start_time: u64, end_time: u64 },
    // END SALE CONFIGURATION ERRORS

    // BEGIN SALE STATE ERRORS
    #[error("SalePaused")]
    SalePaused {},

    #[error("SaleNotStarted")]
    SaleNotStarted {},

    #[error("SaleEnded")]
    SaleEnded {},

    #[error("SaleNotEnded")]
    SaleNotEnded {},

    #[error("AlreadyPaused")]
    AlreadyPaused {},

    #[error("NotPaused")]
    NotPaused {},
    // END SALE STATE ERRORS

    // BEGIN PURCHASE ERRORS
    #[error("Payment amount cannot be zero")]
    ZeroPaymentAmount {},

    #[error("Payment of {payment_amount} buys zero tokens at the current price")]
    PaymentTooSmall { payment_amount: Uint128 },

    #[error("Purchase exceeds allocation, {remaining} tokens remaining")]
    ExceedsAllocation { remaining: Uint128 },

    #[error("Sale is underfunded: {available} available, {required} required")]
    SaleUnderfunded {
        available: Uint128,
        required: Uint128,
    },

    #[error("InvalidPaymentToken: {token}")]
    InvalidPaymentToken { token: String },
    // END PURCHASE ERRORS

    // BEGIN TREASURY ERRORS
    #[error("Recipient address cannot be empty")]
    ZeroRecipient {},

    #[error("Withdraw amount cannot be zero")]
    ZeroWithdrawAmount {},

    #[error("Insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },
    // END TREASURY ERRORS

    // BEGIN CW20 ERRORS
    #[error("Total supply cannot be zero")]
    ZeroTotalSupply {},

    #[error("Cannot set to own account")]
    CannotSetOwnAccount {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Allowance is expired")]
    Expired {},

    #[error("No allowance for this account")]
    NoAllowance {},

    #[error("Minting cannot exceed the cap")]
    CannotExceedCap {},

    #[error("Logo binary data exceeds 5KB limit")]
    LogoTooBig {},

    #[error("Invalid xml preamble for SVG")]
    InvalidXmlPreamble {},

    #[error("Invalid png header")]
    InvalidPngHeader {},

    #[error("Duplicate initial balance addresses")]
    DuplicateInitialBalanceAddresses {},

    #[error("Invalid expiration value")]
    InvalidExpiration {},

    #[error("Cw20: {msg}")]
    Cw20 { msg: String },
    // END CW20 ERRORS

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}

impl From<Cw20ContractError> for ContractError {
    fn from(err: Cw20ContractError) -> Self {
        match err {
            Cw20ContractError::Std(std) => ContractError::Std(std),
            Cw20ContractError::Expired {} => ContractError::Expired {},
            Cw20ContractError::LogoTooBig {} => ContractError::LogoTooBig {},
            Cw20ContractError::NoAllowance {} => ContractError::NoAllowance {},
            Cw20ContractError::Unauthorized {} => ContractError::Unauthorized {},
            Cw20ContractError::CannotExceedCap {} => ContractError::CannotExceedCap {},
            Cw20ContractError::InvalidPngHeader {} => ContractError::InvalidPngHeader {},
            Cw20ContractError::InvalidXmlPreamble {} => ContractError::InvalidXmlPreamble {},
            Cw20ContractError::CannotSetOwnAccount {} => ContractError::CannotSetOwnAccount {},
            Cw20ContractError::InvalidZeroAmount {} => ContractError::InvalidZeroAmount {},
            Cw20ContractError::DuplicateInitialBalanceAddresses {} => {
                ContractError::DuplicateInitialBalanceAddresses {}
            }
            Cw20ContractError::InvalidExpiration {} => ContractError::InvalidExpiration {},
            err => ContractError::Cw20 {
                msg: err.to_string(),
            },
        }
    }
}

impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::Overflow {}
    }
}

impl From<CheckedMultiplyRatioError> for ContractError {
    fn from(_err: CheckedMultiplyRatioError) -> Self {
        ContractError::Overflow {}
    }
}

impl From<CheckedFromRatioError> for ContractError {
    fn from(_err: CheckedFromRatioError) -> Self {
        ContractError::Overflow {}
    }
}

pub fn from_semver(err: semver::Error) -> StdError {
    StdError::generic_err(format!("Semver: {err}"))
}
