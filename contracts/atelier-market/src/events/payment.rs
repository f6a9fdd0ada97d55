use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::PAYMENT;

// --- PAYMENT_UPDATE ---

pub fn emit_verified_assets_updated(assets: &[AccountId], actor: &AccountId) {
    EventBuilder::new(PAYMENT, "verified_assets_update", actor)
        .field("assets", assets)
        .emit();
}

pub fn emit_payment_deposited(asset: &AccountId, account: &AccountId, amount: u128) {
    EventBuilder::new(PAYMENT, "deposit", account)
        .field("asset", asset)
        .field("account", account)
        .field("amount", amount)
        .emit();
}

pub fn emit_payment_approved(asset: &AccountId, account: &AccountId, amount: u128) {
    EventBuilder::new(PAYMENT, "approve", account)
        .field("asset", asset)
        .field("account", account)
        .field("amount", amount)
        .emit();
}

pub fn emit_payment_withdrawn(asset: &AccountId, account: &AccountId, amount: u128) {
    EventBuilder::new(PAYMENT, "withdraw", account)
        .field("asset", asset)
        .field("account", account)
        .field("amount", amount)
        .emit();
}
