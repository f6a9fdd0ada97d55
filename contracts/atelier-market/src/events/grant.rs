use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::GRANT;

// --- GRANT_UPDATE ---

pub fn emit_grant_registered(publisher: &AccountId, grant_name: &str, publisher_context_id: u64) {
    EventBuilder::new(GRANT, "register", publisher)
        .field("publisher", publisher)
        .field("grant_name", grant_name)
        .field("publisher_context_id", publisher_context_id)
        .emit();
}

pub fn emit_grant_status_updated(
    publisher: &AccountId,
    grant_name: &str,
    status: &str,
    actor: &AccountId,
) {
    EventBuilder::new(GRANT, "status_update", actor)
        .field("publisher", publisher)
        .field("grant_name", grant_name)
        .field("status", status)
        .emit();
}

pub fn emit_collector_verified(account: &AccountId, publisher_context_id: u64, actor: &AccountId) {
    EventBuilder::new(GRANT, "collector_verified", actor)
        .field("account", account)
        .field("publisher_context_id", publisher_context_id)
        .emit();
}

pub fn emit_collector_revoked(account: &AccountId, publisher_context_id: u64, actor: &AccountId) {
    EventBuilder::new(GRANT, "collector_revoked", actor)
        .field("account", account)
        .field("publisher_context_id", publisher_context_id)
        .emit();
}
