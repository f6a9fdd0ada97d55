use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::COLLECTION;

// --- COLLECTION_UPDATE ---

pub fn emit_collection_minted(collection_id: u64, uri: &str, amount: u32, creator: &AccountId) {
    EventBuilder::new(COLLECTION, "mint", creator)
        .field("collection_id", collection_id)
        .field("uri", uri)
        .field("amount", amount)
        .field("creator", creator)
        .emit();
}

pub fn emit_collection_burned(actor: &AccountId, collection_id: u64) {
    EventBuilder::new(COLLECTION, "burn", actor)
        .field("collection_id", collection_id)
        .emit();
}

pub fn emit_collection_uri_updated(collection_id: u64, old: &str, new: &str, actor: &AccountId) {
    EventBuilder::new(COLLECTION, "uri_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_assets_updated(
    collection_id: u64,
    old: &[AccountId],
    new: &[AccountId],
    actor: &AccountId,
) {
    EventBuilder::new(COLLECTION, "accepted_assets_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_prices_updated(
    collection_id: u64,
    old: &[U128],
    new: &[U128],
    actor: &AccountId,
) {
    EventBuilder::new(COLLECTION, "base_prices_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_fulfiller_updated(
    collection_id: u64,
    old: u64,
    new: u64,
    actor: &AccountId,
) {
    EventBuilder::new(COLLECTION, "fulfiller_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_print_type_updated(
    collection_id: u64,
    old: &str,
    new: &str,
    actor: &AccountId,
) {
    EventBuilder::new(COLLECTION, "print_type_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_discount_updated(collection_id: u64, old: u8, new: u8, actor: &AccountId) {
    EventBuilder::new(COLLECTION, "discount_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}

pub fn emit_collection_collectors_only_updated(
    collection_id: u64,
    old: bool,
    new: bool,
    actor: &AccountId,
) {
    EventBuilder::new(COLLECTION, "collectors_only_update", actor)
        .field("collection_id", collection_id)
        .field("old", old)
        .field("new", new)
        .emit();
}
