use crate::tests::test_utils::*;
use crate::*;

fn sold_item(contract: &mut Contract) -> u64 {
    mint_default_collection(contract, 3);
    fund(contract, &buyer(), &asset(), 100_000, 100_000);

    as_caller(&buyer());
    contract
        .buy_tokens(vec![1], asset(), "fulfillment data".to_string())
        .unwrap();
    1
}

#[test]
fn custody_moves_from_escrow_to_the_buyer_on_sale() {
    let mut contract = bootstrap();
    let item_id = sold_item(&mut contract);

    assert_eq!(
        contract.get_item_custody(item_id),
        Some(Custody::Held(buyer()))
    );
    assert!(!contract.is_escrow_held(item_id));
    // The other items stayed behind in escrow.
    assert_eq!(contract.get_item_custody(2), Some(Custody::Escrow));
}

#[test]
fn a_buyer_burns_their_own_token() {
    let mut contract = bootstrap();
    let item_id = sold_item(&mut contract);

    as_caller(&buyer());
    contract.burn_token(item_id).unwrap();

    assert!(contract.get_token_is_burned(item_id));
    assert_eq!(contract.get_item_custody(item_id), None);
    // The burned item leaves its collection's member list.
    assert_eq!(contract.get_collection_items(1), vec![2, 3]);
}

#[test]
fn only_the_holder_can_burn() {
    let mut contract = bootstrap();
    let item_id = sold_item(&mut contract);

    as_caller(&publisher());
    let err = contract.burn_token(item_id).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));

    // Escrow-held items have no burnable holder either.
    as_caller(&buyer());
    let err = contract.burn_token(2).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn burn_batch_requires_ownership_of_every_token() {
    let mut contract = bootstrap();
    mint_default_collection(&mut contract, 3);
    fund(&mut contract, &buyer(), &asset(), 100_000, 100_000);

    as_caller(&buyer());
    contract
        .buy_tokens(vec![1, 2], asset(), "fulfillment data".to_string())
        .unwrap();

    // Item 3 never sold, so the batch is rejected up front.
    let err = contract.burn_token_batch(vec![3, 1]).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));

    contract.burn_token_batch(vec![1, 2]).unwrap();
    assert!(contract.get_token_is_burned(1));
    assert!(contract.get_token_is_burned(2));
}

#[test]
fn burning_a_burned_token_fails() {
    let mut contract = bootstrap();
    let item_id = sold_item(&mut contract);

    as_caller(&buyer());
    contract.burn_token(item_id).unwrap();
    let err = contract.burn_token(item_id).unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
}

#[test]
fn unknown_tokens_have_no_custody() {
    let contract = bootstrap();
    assert_eq!(contract.get_item_custody(42), None);
    assert!(!contract.is_escrow_held(42));
}
