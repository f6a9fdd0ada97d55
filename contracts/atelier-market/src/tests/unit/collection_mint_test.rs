use crate::tests::test_utils::*;
use crate::*;

#[test]
fn mint_creates_sequential_escrowed_items() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 10);

    assert_eq!(collection_id, 1);
    assert_eq!(contract.get_token_supply(), 10);
    let item_ids = contract.get_collection_items(collection_id);
    assert_eq!(item_ids, (1..=10).collect::<Vec<u64>>());
    for id in item_ids {
        assert!(contract.is_escrow_held(id));
        assert_eq!(contract.get_item_custody(id), Some(Custody::Escrow));
    }
}

#[test]
fn minted_items_inherit_the_collection_spec() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 3);

    assert_eq!(contract.get_collection_amount(collection_id), 3);
    assert_eq!(contract.get_token_uri(1), "uri-1");
    assert_eq!(contract.get_token_creator(1), publisher());
    assert_eq!(contract.get_token_collection(2), collection_id);
    assert_eq!(contract.get_token_accepted_assets(3), vec![asset()]);
    assert_eq!(contract.get_token_base_prices(3), vec![U128(BASE_PRICE)]);
    assert_eq!(contract.get_token_print_type(1), "shirt");
    assert_eq!(contract.get_token_discount(1), 10);
    assert!(!contract.get_token_collectors_only(1));
    assert_eq!(contract.get_token_fulfiller(2), 1);
    assert_eq!(contract.get_token_minted_at(1), TEST_TIMESTAMP);
    assert_eq!(contract.get_token_publisher_context(1), CTX);
    assert!(!contract.get_token_is_burned(1));
}

#[test]
fn second_mint_continues_the_item_sequence() {
    let mut contract = bootstrap();
    mint_default_collection(&mut contract, 10);
    let second = mint_default_collection(&mut contract, 4);

    assert_eq!(second, 2);
    assert_eq!(
        contract.get_collection_items(second),
        (11..=14).collect::<Vec<u64>>()
    );
    assert_eq!(contract.get_collection_supply(), 2);
}

#[test]
fn minting_someone_elses_grant_fails() {
    let mut contract = bootstrap();

    as_caller(&buyer());
    let err = contract
        .mint_collection(10, default_spec(), GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn unknown_grant_name_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let err = contract
        .mint_collection(10, default_spec(), "winter-run".to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn mismatched_asset_and_price_lengths_fail() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.accepted_assets = vec![asset(), asset2()];
    spec.base_prices = vec![U128(BASE_PRICE)];
    let err = contract
        .mint_collection(10, spec, GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn empty_asset_list_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.accepted_assets = Vec::new();
    spec.base_prices = Vec::new();
    let err = contract
        .mint_collection(10, spec, GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn unverified_payment_asset_fails() {
    let mut contract = bootstrap();

    as_caller(&owner());
    contract.set_verified_payment_assets(vec![asset2()]).unwrap();

    as_caller(&publisher());
    let err = contract
        .mint_collection(10, default_spec(), GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn duplicate_accepted_asset_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.accepted_assets = vec![asset(), asset()];
    spec.base_prices = vec![U128(1), U128(2)];
    let err = contract
        .mint_collection(10, spec, GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn unknown_fulfiller_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.fulfiller_id = 9;
    let err = contract
        .mint_collection(10, spec, GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

#[test]
fn amount_bounds_are_enforced() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let err = contract
        .mint_collection(0, default_spec(), GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));

    let err = contract
        .mint_collection(MAX_BATCH_MINT + 1, default_spec(), GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn discount_above_100_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.discount_percent = 101;
    let err = contract
        .mint_collection(10, spec, GRANT.to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn failed_mint_creates_nothing() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let mut spec = default_spec();
    spec.fulfiller_id = 9;
    let _ = contract.mint_collection(10, spec, GRANT.to_string());

    assert_eq!(contract.get_collection_supply(), 0);
    assert_eq!(contract.get_token_supply(), 0);
}
