use crate::tests::test_utils::*;
use crate::*;

#[test]
fn writer_registers_a_grant() {
    let contract = bootstrap();
    assert!(contract.is_authorized_publisher(publisher(), GRANT.to_string()));
    assert_eq!(
        contract.get_grant_status(publisher(), GRANT.to_string()),
        GRANT_STATUS_LIVE
    );
    assert_eq!(
        contract.get_grant_context_id(publisher(), GRANT.to_string()),
        CTX
    );
    assert_eq!(
        contract.get_grant_timestamp(publisher(), GRANT.to_string()),
        TEST_TIMESTAMP
    );
}

#[test]
fn grant_names_are_unique_per_publisher() {
    let mut contract = bootstrap();

    as_caller(&publisher());
    let err = contract.register_grant(GRANT.to_string(), 7).unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));

    // The same name is free under a different publisher.
    as_caller(&owner());
    contract.register_grant(GRANT.to_string(), 7).unwrap();
    assert!(contract.is_authorized_publisher(owner(), GRANT.to_string()));
}

#[test]
fn non_writer_cannot_register() {
    let mut contract = new_contract();
    as_caller(&buyer());
    let err = contract
        .register_grant("someone-elses".to_string(), 1)
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn empty_grant_name_is_rejected() {
    let mut contract = bootstrap();
    as_caller(&publisher());
    let err = contract.register_grant(String::new(), 1).unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn admin_flips_grant_status() {
    let mut contract = bootstrap();

    as_caller(&owner());
    contract
        .set_grant_status(publisher(), GRANT.to_string(), "finished".to_string())
        .unwrap();
    assert_eq!(
        contract.get_grant_status(publisher(), GRANT.to_string()),
        "finished"
    );

    as_caller(&buyer());
    let err = contract
        .set_grant_status(publisher(), GRANT.to_string(), "live".to_string())
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn collector_verification_round_trip() {
    let mut contract = bootstrap();

    as_caller(&owner());
    contract.add_verified_collector(buyer(), CTX).unwrap();
    assert!(contract.is_verified_collector(buyer(), CTX));
    // Scoped per publisher context.
    assert!(!contract.is_verified_collector(buyer(), CTX + 1));

    contract.remove_verified_collector(buyer(), CTX).unwrap();
    assert!(!contract.is_verified_collector(buyer(), CTX));
}

#[test]
fn collector_verification_is_admin_only() {
    let mut contract = bootstrap();
    as_caller(&buyer());
    let err = contract.add_verified_collector(buyer(), CTX).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}
