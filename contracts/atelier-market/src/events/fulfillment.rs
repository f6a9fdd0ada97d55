use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::FULFILLMENT;

// --- FULFILLMENT_UPDATE ---

pub fn emit_fulfiller_created(
    id: u64,
    percent_cut: u8,
    payout_address: &AccountId,
    actor: &AccountId,
) {
    EventBuilder::new(FULFILLMENT, "create", actor)
        .field("fulfiller_id", id)
        .field("percent_cut", percent_cut)
        .field("payout_address", payout_address)
        .emit();
}

pub fn emit_fulfiller_percent_updated(id: u64, percent_cut: u8, actor: &AccountId) {
    EventBuilder::new(FULFILLMENT, "percent_update", actor)
        .field("fulfiller_id", id)
        .field("percent_cut", percent_cut)
        .emit();
}

pub fn emit_fulfiller_address_updated(id: u64, payout_address: &AccountId, actor: &AccountId) {
    EventBuilder::new(FULFILLMENT, "address_update", actor)
        .field("fulfiller_id", id)
        .field("payout_address", payout_address)
        .emit();
}
