use crate::tests::test_utils::*;
use crate::*;
use near_sdk::PromiseOrValue;

#[test]
fn admin_replaces_the_verified_asset_list() {
    let mut contract = new_contract();
    contract
        .set_verified_payment_assets(vec![asset(), asset2()])
        .unwrap();
    assert_eq!(
        contract.get_verified_payment_assets(),
        vec![asset(), asset2()]
    );
    assert!(contract.is_verified_asset(asset()));

    contract.set_verified_payment_assets(vec![asset2()]).unwrap();
    assert_eq!(contract.get_verified_payment_assets(), vec![asset2()]);
    assert!(!contract.is_verified_asset(asset()));
}

#[test]
fn non_admin_cannot_verify_assets() {
    let mut contract = new_contract();
    as_caller(&buyer());
    let err = contract
        .set_verified_payment_assets(vec![asset()])
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn verified_deposit_credits_the_sender() {
    let mut contract = bootstrap();

    as_caller(&asset());
    let kept = contract.ft_on_transfer(buyer(), U128(50_000), String::new());
    assert!(matches!(kept, PromiseOrValue::Value(U128(0))));
    assert_eq!(contract.get_payment_balance(asset(), buyer()), U128(50_000));

    // Deposits accumulate.
    as_caller(&asset());
    contract.ft_on_transfer(buyer(), U128(10_000), String::new());
    assert_eq!(contract.get_payment_balance(asset(), buyer()), U128(60_000));
}

#[test]
fn unverified_asset_deposit_is_refunded_in_full() {
    let mut contract = new_contract();

    as_caller(&asset());
    let refunded = contract.ft_on_transfer(buyer(), U128(50_000), String::new());
    match refunded {
        PromiseOrValue::Value(amount) => assert_eq!(amount, U128(50_000)),
        PromiseOrValue::Promise(_) => panic!("expected a value refund"),
    }
    assert_eq!(contract.get_payment_balance(asset(), buyer()), U128(0));
}

#[test]
fn approve_overwrites_rather_than_accumulates() {
    let mut contract = bootstrap();

    as_caller(&buyer());
    contract.approve_payment(asset(), U128(40_000)).unwrap();
    contract.approve_payment(asset(), U128(25_000)).unwrap();
    assert_eq!(
        contract.get_payment_allowance(asset(), buyer()),
        U128(25_000)
    );
}

#[test]
fn approve_requires_a_verified_asset() {
    let mut contract = new_contract();
    as_caller(&buyer());
    let err = contract.approve_payment(asset(), U128(1)).unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn withdraw_debits_the_deposit() {
    let mut contract = bootstrap();
    fund(&mut contract, &buyer(), &asset(), 50_000, 0);

    as_caller(&buyer());
    contract.withdraw_payment(asset(), U128(20_000)).unwrap();
    assert_eq!(contract.get_payment_balance(asset(), buyer()), U128(30_000));
}

#[test]
fn withdraw_beyond_the_deposit_fails() {
    let mut contract = bootstrap();
    fund(&mut contract, &buyer(), &asset(), 10_000, 0);

    as_caller(&buyer());
    let err = contract.withdraw_payment(asset(), U128(10_001)).unwrap_err();
    assert!(matches!(err, MarketError::InsufficientBalance(_)));
    assert_eq!(contract.get_payment_balance(asset(), buyer()), U128(10_000));
}

#[test]
fn balances_are_scoped_per_asset_and_account() {
    let mut contract = bootstrap();
    fund(&mut contract, &buyer(), &asset(), 50_000, 0);

    assert_eq!(contract.get_payment_balance(asset2(), buyer()), U128(0));
    assert_eq!(contract.get_payment_balance(asset(), owner()), U128(0));
}
