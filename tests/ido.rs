use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_multi_test::AppResponse;
use g8s_cw20::mock::{mock_g8s_cw20, MockG8sCw20};
use g8s_fungible_tokens::ido::{SweepPolicy, PRICE_SCALE};
use g8s_ido::mock::{mock_g8s_ido, mock_ido_hook_purchase_msg, MockG8sIdo};
use g8s_std::{common::SalePhase, error::ContractError, ownership::OwnershipMessage};
use g8s_testing::{
    mock::{advance_time, mock_app, MockApp},
    mock_builder::MockG8sBuilder,
    mock_contract::{MockContract, MockOwnable},
};
use rstest::rstest;

/// One whole token in base units
const ONE: u128 = 1_000_000_000_000_000_000;

fn tokens(amount: u128) -> Uint128 {
    Uint128::new(amount * ONE)
}

struct Sale {
    router: MockApp,
    token: MockG8sCw20,
    pusd: MockG8sCw20,
    ido: MockG8sIdo,
    owner: Addr,
    buyer: Addr,
    other_buyer: Addr,
    treasury: Addr,
}

/// 1:1 sale of 1000 G8S over `[now + start_offset, now + start_offset + 70]`,
/// funded with `funding` sale tokens
fn setup(sweep_policy: Option<SweepPolicy>, start_offset: i64, funding: Uint128) -> Sale {
    let mut router = mock_app(None);
    let g8s = MockG8sBuilder::new("admin")
        .with_wallets(vec![
            ("owner", vec![]),
            ("buyer", vec![]),
            ("other_buyer", vec![]),
            ("treasury", vec![]),
        ])
        .with_contracts(vec![("cw20", mock_g8s_cw20()), ("ido", mock_g8s_ido())])
        .build(&mut router);
    let owner = g8s.get_wallet("owner").clone();
    let buyer = g8s.get_wallet("buyer").clone();
    let other_buyer = g8s.get_wallet("other_buyer").clone();
    let treasury = g8s.get_wallet("treasury").clone();

    let token = MockG8sCw20::instantiate(
        g8s.get_code_id("cw20"),
        owner.clone(),
        &mut router,
        "G8S Token",
        "GEES",
        18,
        tokens(1_000_000),
    );
    let pusd = MockG8sCw20::instantiate(
        g8s.get_code_id("cw20"),
        owner.clone(),
        &mut router,
        "Payment USD",
        "PUSD",
        18,
        tokens(1_000_000),
    );

    let now = router.block_info().time.seconds() as i64;
    let ido = MockG8sIdo::instantiate(
        g8s.get_code_id("ido"),
        owner.clone(),
        &mut router,
        token.addr(),
        pusd.addr(),
        PRICE_SCALE,
        tokens(1_000),
        (now + start_offset) as u64,
        (now + start_offset + 70) as u64,
        sweep_policy,
    );

    if !funding.is_zero() {
        token
            .execute_transfer(&mut router, owner.clone(), ido.addr(), funding)
            .unwrap();
    }
    for wallet in [&buyer, &other_buyer] {
        pusd.execute_transfer(&mut router, owner.clone(), wallet, tokens(2_000))
            .unwrap();
    }

    Sale {
        router,
        token,
        pusd,
        ido,
        owner,
        buyer,
        other_buyer,
        treasury,
    }
}

fn funded_sale() -> Sale {
    setup(None, -10, tokens(1_000))
}

impl Sale {
    fn approve_and_purchase(&mut self, buyer: &Addr, payment_amount: Uint128) -> AppResponse {
        self.pusd
            .execute_increase_allowance(
                &mut self.router,
                buyer.clone(),
                self.ido.addr(),
                payment_amount,
            )
            .unwrap();
        self.ido
            .execute_purchase(&mut self.router, buyer.clone(), payment_amount)
            .unwrap()
    }

    fn purchase_err(&mut self, buyer: &Addr, payment_amount: Uint128) -> ContractError {
        self.ido
            .execute_purchase(&mut self.router, buyer.clone(), payment_amount)
            .unwrap_err()
            .downcast()
            .unwrap()
    }
}

fn purchased_attr(res: &AppResponse, key: &str) -> String {
    let event = res
        .events
        .iter()
        .find(|ev| ev.ty == "wasm-purchased")
        .unwrap();
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .unwrap()
        .value
        .clone()
}

#[test]
fn test_purchase() {
    let mut sale = funded_sale();
    let buyer = sale.buyer.clone();

    let res = sale.approve_and_purchase(&buyer, tokens(10));

    assert_eq!(purchased_attr(&res, "buyer"), buyer.to_string());
    assert_eq!(
        purchased_attr(&res, "payment_amount_in"),
        tokens(10).to_string()
    );
    assert_eq!(purchased_attr(&res, "tokens_out"), tokens(10).to_string());

    assert_eq!(sale.token.query_balance(&sale.router, &buyer), tokens(10));
    assert_eq!(
        sale.token.query_balance(&sale.router, sale.ido.addr()),
        tokens(990)
    );
    assert_eq!(sale.pusd.query_balance(&sale.router, &buyer), tokens(1_990));
    assert_eq!(
        sale.pusd.query_balance(&sale.router, sale.ido.addr()),
        tokens(10)
    );
    assert_eq!(sale.ido.query_tokens_sold(&sale.router), tokens(10));
    assert_eq!(sale.ido.query_purchased(&sale.router, &buyer), tokens(10));

    let status = sale.ido.query_sale_status(&sale.router);
    assert_eq!(status.phase, SalePhase::Active);
    assert!(status.accepting_purchases);
    assert!(status.funded);
    assert_eq!(status.tokens_remaining, tokens(990));
    assert_eq!(status.progress, Decimal::percent(1));
}

#[test]
fn test_purchase_without_allowance() {
    let mut sale = funded_sale();
    let buyer = sale.buyer.clone();

    // The payment pull fails and the whole purchase is reverted
    let res = sale
        .ido
        .execute_purchase(&mut sale.router, buyer.clone(), tokens(10));
    assert!(res.is_err());

    assert!(sale.ido.query_tokens_sold(&sale.router).is_zero());
    assert!(sale.ido.query_purchased(&sale.router, &buyer).is_zero());
    assert!(sale.token.query_balance(&sale.router, &buyer).is_zero());
    assert_eq!(
        sale.token.query_balance(&sale.router, sale.ido.addr()),
        tokens(1_000)
    );
}

#[test]
fn test_purchase_with_send() {
    let mut sale = funded_sale();
    let buyer = sale.buyer.clone();

    let res = sale
        .pusd
        .execute_send(
            &mut sale.router,
            buyer.clone(),
            sale.ido.addr(),
            tokens(5),
            mock_ido_hook_purchase_msg(),
        )
        .unwrap();
    assert_eq!(purchased_attr(&res, "tokens_out"), tokens(5).to_string());

    assert_eq!(sale.token.query_balance(&sale.router, &buyer), tokens(5));
    assert_eq!(
        sale.pusd.query_balance(&sale.router, sale.ido.addr()),
        tokens(5)
    );
    assert_eq!(sale.ido.query_tokens_sold(&sale.router), tokens(5));
}

#[test]
fn test_send_of_wrong_token() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();

    // Sale tokens sent with the purchase hook are refused
    let res = sale.token.execute_send(
        &mut sale.router,
        owner.clone(),
        sale.ido.addr(),
        tokens(5),
        mock_ido_hook_purchase_msg(),
    );
    assert!(res.is_err());
    assert!(sale.ido.query_tokens_sold(&sale.router).is_zero());
    assert_eq!(
        sale.token.query_balance(&sale.router, sale.ido.addr()),
        tokens(1_000)
    );
}

#[rstest]
#[case::not_started(30, 0, ContractError::SaleNotStarted {})]
#[case::ended(-10, 61, ContractError::SaleEnded {})]
fn test_purchase_outside_window(
    #[case] start_offset: i64,
    #[case] advance: u64,
    #[case] expected: ContractError,
) {
    let mut sale = setup(None, start_offset, tokens(1_000));
    let buyer = sale.buyer.clone();
    advance_time(&mut sale.router, advance);

    let err = sale.purchase_err(&buyer, tokens(10));
    assert_eq!(err, expected);
    assert!(sale.ido.query_tokens_sold(&sale.router).is_zero());
}

#[test]
fn test_purchase_at_window_edges() {
    // Starts exactly now
    let mut sale = setup(None, 0, tokens(1_000));
    let buyer = sale.buyer.clone();
    sale.approve_and_purchase(&buyer, tokens(1));

    // Last second of the window
    advance_time(&mut sale.router, 70);
    sale.approve_and_purchase(&buyer, tokens(1));
    assert_eq!(sale.ido.query_tokens_sold(&sale.router), tokens(2));

    advance_time(&mut sale.router, 1);
    let err = sale.purchase_err(&buyer, tokens(1));
    assert_eq!(err, ContractError::SaleEnded {});
}

#[test]
fn test_pause_and_resume() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();
    let buyer = sale.buyer.clone();

    let err: ContractError = sale
        .ido
        .execute_pause_sale(&mut sale.router, buyer.clone())
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::Unauthorized {});

    sale.ido
        .execute_pause_sale(&mut sale.router, owner.clone())
        .unwrap();
    let err = sale.purchase_err(&buyer, tokens(10));
    assert_eq!(err, ContractError::SalePaused {});

    let status = sale.ido.query_sale_status(&sale.router);
    assert!(status.paused);
    assert!(!status.accepting_purchases);

    sale.ido
        .execute_resume_sale(&mut sale.router, owner)
        .unwrap();
    sale.approve_and_purchase(&buyer, tokens(10));
    assert_eq!(sale.ido.query_tokens_sold(&sale.router), tokens(10));
}

#[test]
fn test_allocation_cap() {
    let mut sale = funded_sale();
    let buyer = sale.buyer.clone();
    let other_buyer = sale.other_buyer.clone();

    let err = sale.purchase_err(&buyer, tokens(1_001));
    assert_eq!(
        err,
        ContractError::ExceedsAllocation {
            remaining: tokens(1_000)
        }
    );

    sale.approve_and_purchase(&buyer, tokens(600));
    let err = sale.purchase_err(&other_buyer, tokens(401));
    assert_eq!(
        err,
        ContractError::ExceedsAllocation {
            remaining: tokens(400)
        }
    );

    sale.approve_and_purchase(&other_buyer, tokens(400));
    let status = sale.ido.query_sale_status(&sale.router);
    assert_eq!(status.tokens_sold, tokens(1_000));
    assert!(status.tokens_remaining.is_zero());
    assert!(!status.accepting_purchases);
    assert_eq!(status.progress, Decimal::one());
}

#[test]
fn test_purchase_sequence_accounting() {
    let mut sale = funded_sale();
    let buyer = sale.buyer.clone();
    let other_buyer = sale.other_buyer.clone();

    let purchases = [
        (&buyer, tokens(10)),
        (&other_buyer, tokens(25)),
        (&buyer, Uint128::new(7)),
        (&other_buyer, tokens(100)),
    ];
    let mut expected_sold = Uint128::zero();
    for (who, amount) in purchases {
        let who = who.clone();
        sale.approve_and_purchase(&who, amount);
        expected_sold += amount;

        let status = sale.ido.query_sale_status(&sale.router);
        assert_eq!(status.tokens_sold, expected_sold);
        assert!(status.tokens_sold <= status.tokens_for_sale);
    }

    let sold = sale.ido.query_tokens_sold(&sale.router);
    assert_eq!(sold, tokens(135) + Uint128::new(7));
    assert_eq!(
        sale.ido.query_purchased(&sale.router, &buyer)
            + sale.ido.query_purchased(&sale.router, &other_buyer),
        sold
    );
    assert_eq!(
        sale.token.query_balance(&sale.router, sale.ido.addr()),
        tokens(1_000) - sold
    );
    assert_eq!(
        sale.pusd.query_balance(&sale.router, sale.ido.addr()),
        sold
    );

    // Reads do not change state
    assert_eq!(sale.ido.query_tokens_sold(&sale.router), sold);
}

#[test]
fn test_set_price() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();
    let buyer = sale.buyer.clone();

    sale.ido
        .execute_set_price(&mut sale.router, owner, PRICE_SCALE * Uint128::new(2))
        .unwrap();
    assert_eq!(
        sale.ido.query_simulate_purchase(&sale.router, tokens(10)),
        tokens(5)
    );

    let res = sale.approve_and_purchase(&buyer, tokens(10));
    assert_eq!(purchased_attr(&res, "tokens_out"), tokens(5).to_string());
    assert_eq!(sale.token.query_balance(&sale.router, &buyer), tokens(5));
}

#[test]
fn test_underfunded_sale() {
    let mut sale = setup(None, -10, tokens(5));
    let buyer = sale.buyer.clone();

    let status = sale.ido.query_sale_status(&sale.router);
    assert!(!status.funded);
    assert_eq!(status.sale_token_balance, tokens(5));

    let err = sale.purchase_err(&buyer, tokens(10));
    assert_eq!(
        err,
        ContractError::SaleUnderfunded {
            available: tokens(5),
            required: tokens(10)
        }
    );

    sale.approve_and_purchase(&buyer, tokens(5));
    assert_eq!(sale.token.query_balance(&sale.router, &buyer), tokens(5));
}

#[test]
fn test_withdraw_payment_token() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();
    let buyer = sale.buyer.clone();
    let treasury = sale.treasury.clone();
    sale.approve_and_purchase(&buyer, tokens(10));

    let err: ContractError = sale
        .ido
        .execute_withdraw_payment_token(&mut sale.router, buyer, &treasury, tokens(10))
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::Unauthorized {});

    let err: ContractError = sale
        .ido
        .execute_withdraw_payment_token(&mut sale.router, owner.clone(), &treasury, tokens(11))
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            available: tokens(10),
            requested: tokens(11)
        }
    );

    sale.ido
        .execute_withdraw_payment_token(&mut sale.router, owner, &treasury, tokens(10))
        .unwrap();
    assert_eq!(sale.pusd.query_balance(&sale.router, &treasury), tokens(10));
    assert!(sale
        .pusd
        .query_balance(&sale.router, sale.ido.addr())
        .is_zero());
}

#[test]
fn test_sweep_after_end() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();
    let buyer = sale.buyer.clone();
    let treasury = sale.treasury.clone();
    sale.approve_and_purchase(&buyer, tokens(10));

    let err: ContractError = sale
        .ido
        .execute_sweep_unsold_tokens(&mut sale.router, owner.clone(), &treasury, tokens(990))
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::SaleNotEnded {});

    advance_time(&mut sale.router, 61);
    assert_eq!(
        sale.ido.query_sale_status(&sale.router).phase,
        SalePhase::Ended
    );

    sale.ido
        .execute_sweep_unsold_tokens(&mut sale.router, owner, &treasury, tokens(990))
        .unwrap();
    assert_eq!(sale.token.query_balance(&sale.router, &treasury), tokens(990));
    assert!(sale
        .token
        .query_balance(&sale.router, sale.ido.addr())
        .is_zero());
}

#[test]
fn test_sweep_anytime() {
    let mut sale = setup(Some(SweepPolicy::Anytime), -10, tokens(1_000));
    let owner = sale.owner.clone();
    let treasury = sale.treasury.clone();

    sale.ido
        .execute_sweep_unsold_tokens(&mut sale.router, owner, &treasury, tokens(400))
        .unwrap();
    assert_eq!(sale.token.query_balance(&sale.router, &treasury), tokens(400));

    let status = sale.ido.query_sale_status(&sale.router);
    assert!(!status.funded);
    assert_eq!(
        sale.ido.query_config(&sale.router).sweep_policy,
        SweepPolicy::Anytime
    );
}

#[test]
fn test_ownership_transfer() {
    let mut sale = funded_sale();
    let owner = sale.owner.clone();
    let treasury = sale.treasury.clone();

    sale.ido
        .execute_ownership(
            &mut sale.router,
            owner.clone(),
            OwnershipMessage::UpdateOwner {
                new_owner: treasury.to_string(),
                expiration: None,
            },
        )
        .unwrap();
    // Offer alone does not hand over control
    assert_eq!(sale.ido.query_owner(&sale.router), Some(owner.to_string()));

    sale.ido
        .execute_ownership(
            &mut sale.router,
            treasury.clone(),
            OwnershipMessage::AcceptOwnership {},
        )
        .unwrap();
    assert_eq!(
        sale.ido.query_owner(&sale.router),
        Some(treasury.to_string())
    );

    let err: ContractError = sale
        .ido
        .execute_pause_sale(&mut sale.router, owner)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::Unauthorized {});
    sale.ido
        .execute_pause_sale(&mut sale.router, treasury)
        .unwrap();
}
