use crate::tests::test_utils::*;
use crate::*;

#[test]
fn burn_marks_the_collection_and_escrowed_items() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 3);

    as_caller(&publisher());
    contract.burn_collection(collection_id).unwrap();

    assert!(contract.get_collection_is_burned(collection_id));
    for id in 1..=3 {
        assert!(contract.get_token_is_burned(id));
        assert_eq!(contract.get_item_custody(id), None);
    }
}

#[test]
fn only_the_creator_can_burn() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 3);

    as_caller(&buyer());
    let err = contract.burn_collection(collection_id).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert!(!contract.get_collection_is_burned(collection_id));
    assert!(contract.is_escrow_held(1));
}

#[test]
fn burning_twice_fails() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 3);

    as_caller(&publisher());
    contract.burn_collection(collection_id).unwrap();
    let err = contract.burn_collection(collection_id).unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
}

#[test]
fn sold_items_survive_a_collection_burn() {
    let mut contract = bootstrap();
    let collection_id = mint_default_collection(&mut contract, 3);
    fund(&mut contract, &buyer(), &asset(), 100_000, 100_000);

    as_caller(&buyer());
    contract
        .buy_tokens(vec![2], asset(), "fulfillment data".to_string())
        .unwrap();

    as_caller(&publisher());
    contract.burn_collection(collection_id).unwrap();

    assert!(contract.get_token_is_burned(1));
    assert!(contract.get_token_is_burned(3));
    assert!(!contract.get_token_is_burned(2));
    assert_eq!(contract.get_item_custody(2), Some(Custody::Held(buyer())));
}

#[test]
fn burn_cascades_out_of_the_drop() {
    let mut contract = bootstrap();
    let first = mint_default_collection(&mut contract, 2);
    let second = mint_default_collection(&mut contract, 2);
    let third = mint_default_collection(&mut contract, 2);

    as_caller(&publisher());
    contract
        .create_drop(vec![first, second, third], "drop_uri".to_string())
        .unwrap();

    contract.burn_collection(first).unwrap();

    // Swap-remove: the last member takes the vacated slot.
    assert_eq!(contract.get_collections_in_drop(1), vec![third, second]);
    assert_eq!(contract.get_collection_id_to_drop(first), 0);
}
