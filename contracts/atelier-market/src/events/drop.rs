use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::DROP;

// --- DROP_UPDATE ---

pub fn emit_drop_created(drop_id: u64, collection_ids: &[u64], creator: &AccountId) {
    EventBuilder::new(DROP, "create", creator)
        .field("drop_id", drop_id)
        .field("collection_ids", collection_ids)
        .field("creator", creator)
        .emit();
}

pub fn emit_collection_added_to_drop(drop_id: u64, collection_ids: &[u64], actor: &AccountId) {
    EventBuilder::new(DROP, "add_collections", actor)
        .field("drop_id", drop_id)
        .field("collection_ids", collection_ids)
        .emit();
}

pub fn emit_collection_removed_from_drop(drop_id: u64, collection_id: u64, actor: &AccountId) {
    EventBuilder::new(DROP, "remove_collection", actor)
        .field("drop_id", drop_id)
        .field("collection_id", collection_id)
        .emit();
}

pub fn emit_drop_deleted(drop_id: u64, creator: &AccountId) {
    EventBuilder::new(DROP, "delete", creator)
        .field("drop_id", drop_id)
        .field("creator", creator)
        .emit();
}

pub fn emit_drop_uri_updated(drop_id: u64, uri: &str, actor: &AccountId) {
    EventBuilder::new(DROP, "uri_update", actor)
        .field("drop_id", drop_id)
        .field("uri", uri)
        .emit();
}
