use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;

// --- MARKET_UPDATE ---

pub fn emit_tokens_bought(item_ids: &[u64], buyer: &AccountId, asset: &AccountId) {
    EventBuilder::new(MARKET, "tokens_bought", buyer)
        .field("item_ids", item_ids)
        .field("buyer", buyer)
        .field("asset", asset)
        .emit();
}

pub fn emit_order_is_fulfilled(order_id: u64, fulfiller: &AccountId) {
    EventBuilder::new(MARKET, "order_fulfilled", fulfiller)
        .field("order_id", order_id)
        .field("fulfiller", fulfiller)
        .emit();
}

pub fn emit_update_order_status(order_id: u64, status: &str, actor: &AccountId) {
    EventBuilder::new(MARKET, "order_status_update", actor)
        .field("order_id", order_id)
        .field("status", status)
        .emit();
}

pub fn emit_update_order_details(order_id: u64, details: &str, actor: &AccountId) {
    EventBuilder::new(MARKET, "order_details_update", actor)
        .field("order_id", order_id)
        .field("details", details)
        .emit();
}
