//! Atelier Market — escrow-backed sale of numbered editions minted under
//! publisher grants, with drop grouping and fulfiller revenue splits.
//!
//! Every component of the protocol (token ledger, escrow custody,
//! collection registry, drop registry, marketplace, fulfiller registry and
//! the access/payment boundaries) lives in this one contract so that each
//! public entry point runs as a single indivisible operation; a failed
//! precondition anywhere in a call reverts the whole call.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, PanicOnDefault};

// --- Modules ---

mod access;
mod collections;
pub mod constants;
mod drops;
mod errors;
mod escrow;
mod events;
mod external;
mod fulfillment;
mod grants;
mod guards;
mod ledger;
mod market;
mod payments;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MarketError;
pub use types::*;

// --- Helpers ---

/// Grant key format: `"publisher\0grant_name"`; names are unique per publisher.
pub(crate) fn grant_key(publisher: &AccountId, grant_name: &str) -> String {
    format!("{}\0{}", publisher, grant_name)
}

/// Payment ledger key format: `"asset:account"`.
pub(crate) fn payment_key(asset: &AccountId, owner: &AccountId) -> String {
    format!("{}:{}", asset, owner)
}

/// Collector key format: `"publisher_context_id:account"`.
pub(crate) fn collector_key(account: &AccountId, publisher_context_id: u64) -> String {
    format!("{}:{}", publisher_context_id, account)
}

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Admins,
    Writers,
    Grants,
    VerifiedCollectors,
    VerifiedAssets,
    PaymentDeposits,
    PaymentAllowances,
    Fulfillers,
    Items,
    Custody,
    Collections,
    Drops,
    Orders,
    SoldItems,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub owner_id: AccountId,

    pub admins: IterableSet<AccountId>,
    pub writers: IterableSet<AccountId>,

    /// Publishing-identity boundary; key = `grant_key(publisher, name)`.
    pub grants: IterableMap<String, Grant>,
    /// Key = `collector_key(account, context)`; membership = verified.
    pub verified_collectors: IterableSet<String>,

    /// Payment-asset allow-list, consulted at every accepted-asset write.
    pub verified_assets: IterableSet<AccountId>,
    /// Key = `payment_key(asset, account)`; credited via `ft_on_transfer`.
    pub payment_deposits: LookupMap<String, u128>,
    /// Key = `payment_key(asset, account)`; overwritten by `approve_payment`.
    pub payment_allowances: LookupMap<String, u128>,

    pub fulfillers: IterableMap<u64, Fulfiller>,
    pub next_fulfiller_id: u64,

    pub items: IterableMap<u64, Item>,
    pub next_item_id: u64,
    /// Custody between mint and sale; a missing entry is the burn sentinel.
    pub custody: LookupMap<u64, Custody>,

    pub collections: IterableMap<u64, Collection>,
    pub next_collection_id: u64,

    pub drops: IterableMap<u64, Drop>,
    pub next_drop_id: u64,

    pub orders: IterableMap<u64, Order>,
    pub next_order_id: u64,
    /// Item ids sold per collection, in sale order.
    pub sold_items: LookupMap<u64, Vec<u64>>,
}

// --- Init ---

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        let mut admins = IterableSet::new(StorageKey::Admins);
        admins.insert(owner_id.clone());

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            admins,
            writers: IterableSet::new(StorageKey::Writers),
            grants: IterableMap::new(StorageKey::Grants),
            verified_collectors: IterableSet::new(StorageKey::VerifiedCollectors),
            verified_assets: IterableSet::new(StorageKey::VerifiedAssets),
            payment_deposits: LookupMap::new(StorageKey::PaymentDeposits),
            payment_allowances: LookupMap::new(StorageKey::PaymentAllowances),
            fulfillers: IterableMap::new(StorageKey::Fulfillers),
            next_fulfiller_id: 1,
            items: IterableMap::new(StorageKey::Items),
            next_item_id: 1,
            custody: LookupMap::new(StorageKey::Custody),
            collections: IterableMap::new(StorageKey::Collections),
            next_collection_id: 1,
            drops: IterableMap::new(StorageKey::Drops),
            next_drop_id: 1,
            orders: IterableMap::new(StorageKey::Orders),
            next_order_id: 1,
            sold_items: LookupMap::new(StorageKey::SoldItems),
        }
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
