use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::ACCESS;

// --- ACCESS_UPDATE ---

pub fn emit_admin_added(account: &AccountId, actor: &AccountId) {
    EventBuilder::new(ACCESS, "admin_added", actor)
        .field("account", account)
        .emit();
}

pub fn emit_admin_removed(account: &AccountId, actor: &AccountId) {
    EventBuilder::new(ACCESS, "admin_removed", actor)
        .field("account", account)
        .emit();
}

pub fn emit_writer_added(account: &AccountId, actor: &AccountId) {
    EventBuilder::new(ACCESS, "writer_added", actor)
        .field("account", account)
        .emit();
}

pub fn emit_writer_removed(account: &AccountId, actor: &AccountId) {
    EventBuilder::new(ACCESS, "writer_removed", actor)
        .field("account", account)
        .emit();
}
