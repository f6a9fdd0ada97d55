use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::TOKEN;

// --- TOKEN_UPDATE ---

pub fn emit_token_burned(item_id: u64, owner: &AccountId) {
    EventBuilder::new(TOKEN, "burn", owner)
        .field("item_id", item_id)
        .emit();
}

pub fn emit_token_batch_burned(item_ids: &[u64], owner: &AccountId) {
    EventBuilder::new(TOKEN, "burn_batch", owner)
        .field("item_ids", item_ids)
        .emit();
}
