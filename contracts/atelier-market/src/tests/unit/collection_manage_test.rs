use crate::tests::test_utils::*;
use crate::*;

fn contract_with_collection() -> (Contract, u64) {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 5);
    (contract, collection_id)
}

#[test]
fn uri_update_fans_out_to_every_item() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&publisher());
    contract
        .set_collection_uri(collection_id, "uri-2".to_string())
        .unwrap();

    assert_eq!(contract.get_collection_uri(collection_id), "uri-2");
    for id in contract.get_collection_items(collection_id) {
        assert_eq!(contract.get_token_uri(id), "uri-2");
    }
}

#[test]
fn base_price_update_fans_out() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&publisher());
    contract
        .set_collection_base_prices(collection_id, vec![U128(55_000)])
        .unwrap();

    assert_eq!(
        contract.get_collection_base_prices(collection_id),
        vec![U128(55_000)]
    );
    assert_eq!(contract.get_token_base_prices(3), vec![U128(55_000)]);
    // The asset half of the pair list is untouched.
    assert_eq!(contract.get_token_accepted_assets(3), vec![asset()]);
}

#[test]
fn accepted_asset_update_keeps_prices_aligned() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&publisher());
    contract
        .set_collection_accepted_assets(collection_id, vec![asset2()])
        .unwrap();

    assert_eq!(
        contract.get_collection_accepted_assets(collection_id),
        vec![asset2()]
    );
    assert_eq!(contract.get_token_accepted_assets(1), vec![asset2()]);
    assert_eq!(contract.get_token_base_prices(1), vec![U128(BASE_PRICE)]);
}

#[test]
fn pair_list_length_is_revalidated_on_edit() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&publisher());
    let err = contract
        .set_collection_accepted_assets(collection_id, vec![asset(), asset2()])
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));

    let err = contract
        .set_collection_base_prices(collection_id, vec![U128(1), U128(2)])
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn fulfiller_discount_and_gating_updates_fan_out() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&owner());
    contract.create_fulfiller(10, fulfiller()).unwrap();

    as_caller(&publisher());
    contract.set_collection_fulfiller(collection_id, 2).unwrap();
    contract.set_collection_discount(collection_id, 25).unwrap();
    contract
        .set_collection_collectors_only(collection_id, true)
        .unwrap();
    contract
        .set_collection_print_type(collection_id, "poster".to_string())
        .unwrap();

    assert_eq!(contract.get_collection_fulfiller(collection_id), 2);
    assert_eq!(contract.get_token_fulfiller(4), 2);
    assert_eq!(contract.get_token_discount(4), 25);
    assert!(contract.get_token_collectors_only(4));
    assert_eq!(contract.get_token_print_type(4), "poster");
}

#[test]
fn setting_an_unknown_fulfiller_fails() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&publisher());
    let err = contract
        .set_collection_fulfiller(collection_id, 9)
        .unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

#[test]
fn only_the_creator_can_edit() {
    let (mut contract, collection_id) = contract_with_collection();

    as_caller(&buyer());
    let err = contract
        .set_collection_uri(collection_id, "uri-x".to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));

    // Admins hold no special edit rights over collections.
    as_caller(&owner());
    let err = contract
        .set_collection_discount(collection_id, 5)
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn a_single_sale_freezes_the_shared_attributes() {
    let (mut contract, collection_id) = contract_with_collection();
    fund(&mut contract, &buyer(), &asset(), 100_000, 100_000);

    as_caller(&buyer());
    contract
        .buy_tokens(vec![1], asset(), "fulfillment data".to_string())
        .unwrap();

    as_caller(&publisher());
    let err = contract
        .set_collection_uri(collection_id, "uri-2".to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
    let err = contract
        .set_collection_discount(collection_id, 50)
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
    assert_eq!(contract.get_collection_uri(collection_id), "uri-1");
}

#[test]
fn editing_an_unknown_collection_fails() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let err = contract
        .set_collection_uri(9, "uri-2".to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}
