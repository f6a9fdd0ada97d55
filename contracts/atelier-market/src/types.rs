//! Records held by the protocol registries.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// One accepted payment asset and the base price charged in it. Assets are
/// matched by membership at purchase time, never by position, so the list
/// order only reflects insertion order.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AssetPrice {
    pub asset: AccountId,
    pub price: U128,
}

/// Who holds a token between mint and its final disposition. Items with no
/// custody entry are burned (or were never minted).
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub enum Custody {
    Escrow,
    Held(AccountId),
}

/// A uniquely numbered item. Custody is tracked separately in the escrow
/// map; everything here is ownership-agnostic metadata.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Item {
    pub id: u64,
    pub collection_id: u64,
    pub creator: AccountId,
    pub uri: String,
    pub prices: Vec<AssetPrice>,
    pub print_type: String,
    pub discount_percent: u8,
    pub collectors_only: bool,
    pub fulfiller_id: u64,
    pub is_burned: bool,
    pub minted_at: u64,
    /// Opaque reference into the external publishing-identity system.
    pub publisher_context_id: u64,
}

impl Item {
    pub fn price_of(&self, asset: &AccountId) -> Option<u128> {
        self.prices
            .iter()
            .find(|entry| &entry.asset == asset)
            .map(|entry| entry.price.0)
    }

    pub fn accepted_assets(&self) -> Vec<AccountId> {
        self.prices.iter().map(|entry| entry.asset.clone()).collect()
    }

    pub fn base_prices(&self) -> Vec<U128> {
        self.prices.iter().map(|entry| entry.price).collect()
    }
}

/// A batch of items minted together under a publisher grant. The shared
/// mutable attributes are authoritative here and fan out to every
/// still-escrowed member item on edit.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Collection {
    pub id: u64,
    pub publisher: AccountId,
    pub grant_name: String,
    pub publisher_context_id: u64,
    pub creator: AccountId,
    pub item_ids: Vec<u64>,
    pub uri: String,
    pub amount: u32,
    pub is_burned: bool,
    /// 0 = not grouped into any drop.
    pub drop_id: u64,
    pub created_at: u64,
    pub prices: Vec<AssetPrice>,
    pub fulfiller_id: u64,
    pub print_type: String,
    pub discount_percent: u8,
    pub collectors_only: bool,
}

impl Collection {
    pub fn accepted_assets(&self) -> Vec<AccountId> {
        self.prices.iter().map(|entry| entry.asset.clone()).collect()
    }

    pub fn base_prices(&self) -> Vec<U128> {
        self.prices.iter().map(|entry| entry.price).collect()
    }
}

/// Caller-supplied shape of a new collection. Accepted assets and base
/// prices arrive as two parallel vectors and are zipped into
/// [`AssetPrice`] pairs after length validation.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct CollectionSpec {
    pub accepted_assets: Vec<AccountId>,
    pub base_prices: Vec<U128>,
    pub uri: String,
    pub print_type: String,
    pub fulfiller_id: u64,
    pub discount_percent: u8,
    pub collectors_only: bool,
}

/// A party entitled to a percentage of sale proceeds in exchange for
/// physical fulfillment.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Fulfiller {
    pub id: u64,
    pub percent_cut: u8,
    pub payout_address: AccountId,
}

/// One purchase batch. Mutated only by the designated fulfiller
/// (status / fulfilled flag) or the buyer (details); never destroyed.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Order {
    pub id: u64,
    pub item_ids: Vec<u64>,
    pub buyer: AccountId,
    pub asset: AccountId,
    pub details: String,
    pub status: String,
    pub is_fulfilled: bool,
    pub fulfiller_id: u64,
    pub created_at: u64,
}

/// A named grouping of collections; membership is exclusive per collection.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Drop {
    pub id: u64,
    pub creator: AccountId,
    pub collection_ids: Vec<u64>,
    pub uri: String,
    pub created_at: u64,
}

/// A publisher-scoped namespace registered through the publishing-identity
/// boundary; collections are minted under a grant.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Grant {
    pub publisher: AccountId,
    pub name: String,
    pub publisher_context_id: u64,
    pub status: String,
    pub created_at: u64,
}
