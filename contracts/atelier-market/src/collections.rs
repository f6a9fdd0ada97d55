//! Collection registry: publisher-scoped minting, shared-attribute edits
//! that fan out to every escrowed member item, and the collection burn
//! path with its drop cascade.

use crate::*;

#[near]
impl Contract {
    /// Mint a new collection of `amount` sequential items under one of the
    /// caller's grants. Every item starts in escrow custody.
    #[handle_result]
    pub fn mint_collection(
        &mut self,
        amount: u32,
        spec: CollectionSpec,
        grant_name: String,
    ) -> Result<u64, MarketError> {
        let actor = env::predecessor_account_id();
        self.check_publisher(&actor, &grant_name)?;

        if amount == 0 || amount > MAX_BATCH_MINT {
            return Err(MarketError::InvalidInput(format!(
                "Amount must be 1-{}",
                MAX_BATCH_MINT
            )));
        }
        if spec.uri.len() > MAX_URI_LEN {
            return Err(MarketError::InvalidInput(format!(
                "URI exceeds max length of {} bytes",
                MAX_URI_LEN
            )));
        }
        if spec.print_type.len() > MAX_PRINT_TYPE_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Print type exceeds max length of {} bytes",
                MAX_PRINT_TYPE_LEN
            )));
        }
        if spec.discount_percent > 100 {
            return Err(MarketError::InvalidInput(
                "Discount can not be greater than 100".into(),
            ));
        }
        let prices = self.build_price_list(&spec.accepted_assets, &spec.base_prices)?;
        if !self.fulfillers.contains_key(&spec.fulfiller_id) {
            return Err(MarketError::fulfiller_not_found(spec.fulfiller_id));
        }

        let publisher_context_id = self
            .grants
            .get(&grant_key(&actor, &grant_name))
            .ok_or_else(MarketError::grant_not_found)?
            .publisher_context_id;

        let collection_id = self.next_collection_id;
        self.next_collection_id = self
            .next_collection_id
            .checked_add(1)
            .ok_or_else(|| MarketError::InternalError("Collection id counter overflow".into()))?;

        let mut collection = Collection {
            id: collection_id,
            publisher: actor.clone(),
            grant_name,
            publisher_context_id,
            creator: actor.clone(),
            item_ids: Vec::new(),
            uri: spec.uri.clone(),
            amount,
            is_burned: false,
            drop_id: 0,
            created_at: env::block_timestamp(),
            prices,
            fulfiller_id: spec.fulfiller_id,
            print_type: spec.print_type,
            discount_percent: spec.discount_percent,
            collectors_only: spec.collectors_only,
        };
        collection.item_ids = self.mint_item_batch(&collection, amount)?;
        self.collections.insert(collection_id, collection);

        events::emit_collection_minted(collection_id, &spec.uri, amount, &actor);
        Ok(collection_id)
    }

    // --- Shared-attribute setters (creator-only, fully-escrowed only) ---

    #[handle_result]
    pub fn set_collection_uri(&mut self, collection_id: u64, uri: String) -> Result<(), MarketError> {
        if uri.len() > MAX_URI_LEN {
            return Err(MarketError::InvalidInput(format!(
                "URI exceeds max length of {} bytes",
                MAX_URI_LEN
            )));
        }
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;
        let old = collection.uri.clone();

        self.fan_out(&collection.item_ids, |item| item.uri = uri.clone());
        let collection = self.expect_collection_mut(collection_id);
        collection.uri = uri.clone();

        events::emit_collection_uri_updated(collection_id, &old, &uri, &actor);
        Ok(())
    }

    /// Replaces the asset half of the (asset, price) pair list. The new
    /// vector must match the current list length, pairing each asset with
    /// the existing price at its position.
    #[handle_result]
    pub fn set_collection_accepted_assets(
        &mut self,
        collection_id: u64,
        accepted_assets: Vec<AccountId>,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;

        if accepted_assets.len() != collection.prices.len() {
            return Err(MarketError::InvalidInput(
                "Accepted assets must match the existing price list length".into(),
            ));
        }
        self.check_asset_list(&accepted_assets)?;

        let old = collection.accepted_assets();
        let prices: Vec<AssetPrice> = accepted_assets
            .iter()
            .zip(collection.prices.iter())
            .map(|(asset, pair)| AssetPrice {
                asset: asset.clone(),
                price: pair.price,
            })
            .collect();

        self.fan_out(&collection.item_ids, |item| item.prices = prices.clone());
        let collection = self.expect_collection_mut(collection_id);
        collection.prices = prices;

        events::emit_collection_assets_updated(collection_id, &old, &accepted_assets, &actor);
        Ok(())
    }

    /// Replaces the price half of the (asset, price) pair list; same
    /// length rule as `set_collection_accepted_assets`.
    #[handle_result]
    pub fn set_collection_base_prices(
        &mut self,
        collection_id: u64,
        base_prices: Vec<U128>,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;

        if base_prices.len() != collection.prices.len() {
            return Err(MarketError::InvalidInput(
                "Base prices must match the existing accepted asset list length".into(),
            ));
        }

        let old = collection.base_prices();
        let prices: Vec<AssetPrice> = collection
            .prices
            .iter()
            .zip(base_prices.iter())
            .map(|(pair, price)| AssetPrice {
                asset: pair.asset.clone(),
                price: *price,
            })
            .collect();

        self.fan_out(&collection.item_ids, |item| item.prices = prices.clone());
        let collection = self.expect_collection_mut(collection_id);
        collection.prices = prices;

        events::emit_collection_prices_updated(collection_id, &old, &base_prices, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_collection_fulfiller(
        &mut self,
        collection_id: u64,
        fulfiller_id: u64,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;
        if !self.fulfillers.contains_key(&fulfiller_id) {
            return Err(MarketError::fulfiller_not_found(fulfiller_id));
        }
        let old = collection.fulfiller_id;

        self.fan_out(&collection.item_ids, |item| item.fulfiller_id = fulfiller_id);
        let collection = self.expect_collection_mut(collection_id);
        collection.fulfiller_id = fulfiller_id;

        events::emit_collection_fulfiller_updated(collection_id, old, fulfiller_id, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_collection_print_type(
        &mut self,
        collection_id: u64,
        print_type: String,
    ) -> Result<(), MarketError> {
        if print_type.len() > MAX_PRINT_TYPE_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Print type exceeds max length of {} bytes",
                MAX_PRINT_TYPE_LEN
            )));
        }
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;
        let old = collection.print_type.clone();

        self.fan_out(&collection.item_ids, |item| {
            item.print_type = print_type.clone()
        });
        let collection = self.expect_collection_mut(collection_id);
        collection.print_type = print_type.clone();

        events::emit_collection_print_type_updated(collection_id, &old, &print_type, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_collection_discount(
        &mut self,
        collection_id: u64,
        discount_percent: u8,
    ) -> Result<(), MarketError> {
        if discount_percent > 100 {
            return Err(MarketError::InvalidInput(
                "Discount can not be greater than 100".into(),
            ));
        }
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;
        let old = collection.discount_percent;

        self.fan_out(&collection.item_ids, |item| {
            item.discount_percent = discount_percent
        });
        let collection = self.expect_collection_mut(collection_id);
        collection.discount_percent = discount_percent;

        events::emit_collection_discount_updated(collection_id, old, discount_percent, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_collection_collectors_only(
        &mut self,
        collection_id: u64,
        collectors_only: bool,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let collection = self.editable_collection(collection_id, &actor)?;
        let old = collection.collectors_only;

        self.fan_out(&collection.item_ids, |item| {
            item.collectors_only = collectors_only
        });
        let collection = self.expect_collection_mut(collection_id);
        collection.collectors_only = collectors_only;

        events::emit_collection_collectors_only_updated(
            collection_id,
            old,
            collectors_only,
            &actor,
        );
        Ok(())
    }

    /// Burn a collection: every still-escrowed member item is released to
    /// the burn sentinel; sold items stay with their buyers. Cascades out
    /// of the collection's drop, if any.
    #[handle_result]
    pub fn burn_collection(&mut self, collection_id: u64) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let collection = self
            .collections
            .get(&collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        if collection.creator != actor {
            return Err(MarketError::only_creator("collection"));
        }
        if collection.is_burned {
            return Err(MarketError::InvalidState(
                "Collection is already burned".into(),
            ));
        }

        let item_ids = collection.item_ids.clone();
        let drop_id = collection.drop_id;
        for item_id in item_ids {
            if self.is_escrow_held(item_id) {
                self.escrow_release(item_id, None)?;
            }
        }

        let collection = self.expect_collection_mut(collection_id);
        collection.is_burned = true;
        if drop_id != 0 {
            self.internal_remove_collection_from_drop(collection_id)?;
        }

        events::emit_collection_burned(&actor, collection_id);
        Ok(())
    }

    // --- Views ---

    pub fn get_collection_supply(&self) -> u64 {
        self.next_collection_id - 1
    }

    pub fn get_collection_uri(&self, collection_id: u64) -> String {
        self.expect_collection(collection_id).uri.clone()
    }

    pub fn get_collection_creator(&self, collection_id: u64) -> AccountId {
        self.expect_collection(collection_id).creator.clone()
    }

    pub fn get_collection_items(&self, collection_id: u64) -> Vec<u64> {
        self.expect_collection(collection_id).item_ids.clone()
    }

    pub fn get_collection_amount(&self, collection_id: u64) -> u32 {
        self.expect_collection(collection_id).amount
    }

    pub fn get_collection_accepted_assets(&self, collection_id: u64) -> Vec<AccountId> {
        self.expect_collection(collection_id).accepted_assets()
    }

    pub fn get_collection_base_prices(&self, collection_id: u64) -> Vec<U128> {
        self.expect_collection(collection_id).base_prices()
    }

    pub fn get_collection_fulfiller(&self, collection_id: u64) -> u64 {
        self.expect_collection(collection_id).fulfiller_id
    }

    pub fn get_collection_print_type(&self, collection_id: u64) -> String {
        self.expect_collection(collection_id).print_type.clone()
    }

    pub fn get_collection_discount(&self, collection_id: u64) -> u8 {
        self.expect_collection(collection_id).discount_percent
    }

    pub fn get_collection_collectors_only(&self, collection_id: u64) -> bool {
        self.expect_collection(collection_id).collectors_only
    }

    pub fn get_collection_timestamp(&self, collection_id: u64) -> u64 {
        self.expect_collection(collection_id).created_at
    }

    pub fn get_collection_publisher(&self, collection_id: u64) -> AccountId {
        self.expect_collection(collection_id).publisher.clone()
    }

    pub fn get_collection_grant_name(&self, collection_id: u64) -> String {
        self.expect_collection(collection_id).grant_name.clone()
    }

    pub fn get_collection_is_burned(&self, collection_id: u64) -> bool {
        self.expect_collection(collection_id).is_burned
    }
}

// --- Internal helpers ---

impl Contract {
    fn expect_collection(&self, collection_id: u64) -> &Collection {
        self.collections
            .get(&collection_id)
            .expect("Collection not found")
    }

    fn expect_collection_mut(&mut self, collection_id: u64) -> &mut Collection {
        self.collections
            .get_mut(&collection_id)
            .expect("Collection not found")
    }

    /// Zip the parallel asset/price vectors into the stored pair list,
    /// validating length, allow-list membership and uniqueness.
    fn build_price_list(
        &self,
        accepted_assets: &[AccountId],
        base_prices: &[U128],
    ) -> Result<Vec<AssetPrice>, MarketError> {
        if accepted_assets.is_empty() {
            return Err(MarketError::InvalidInput(
                "At least one accepted payment asset is required".into(),
            ));
        }
        if accepted_assets.len() != base_prices.len() {
            return Err(MarketError::InvalidInput(
                "Accepted assets and base prices must have the same length".into(),
            ));
        }
        if accepted_assets.len() > MAX_ACCEPTED_ASSETS {
            return Err(MarketError::InvalidInput(format!(
                "At most {} accepted payment assets are allowed",
                MAX_ACCEPTED_ASSETS
            )));
        }
        self.check_asset_list(accepted_assets)?;

        Ok(accepted_assets
            .iter()
            .zip(base_prices.iter())
            .map(|(asset, price)| AssetPrice {
                asset: asset.clone(),
                price: *price,
            })
            .collect())
    }

    fn check_asset_list(&self, accepted_assets: &[AccountId]) -> Result<(), MarketError> {
        for (index, asset) in accepted_assets.iter().enumerate() {
            if !self.verified_assets.contains(asset) {
                return Err(MarketError::InvalidInput(format!(
                    "Payment asset is not verified: {}",
                    asset
                )));
            }
            if accepted_assets[..index].contains(asset) {
                return Err(MarketError::InvalidInput(format!(
                    "Duplicate accepted payment asset: {}",
                    asset
                )));
            }
        }
        Ok(())
    }

    /// A collection is editable by its creator while every member item is
    /// still escrow-held; a single sold item freezes the shared attributes.
    fn editable_collection(
        &self,
        collection_id: u64,
        actor: &AccountId,
    ) -> Result<Collection, MarketError> {
        let collection = self
            .collections
            .get(&collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        if collection.is_burned {
            return Err(MarketError::InvalidState(
                "Collection is already burned".into(),
            ));
        }
        if &collection.creator != actor {
            return Err(MarketError::only_creator("collection"));
        }
        for &item_id in &collection.item_ids {
            if !self.is_escrow_held(item_id) {
                return Err(MarketError::InvalidState(
                    "Collection has members no longer held by escrow".into(),
                ));
            }
        }
        Ok(collection.clone())
    }

    fn fan_out(&mut self, item_ids: &[u64], mut apply: impl FnMut(&mut Item)) {
        for item_id in item_ids {
            if let Some(item) = self.items.get_mut(item_id) {
                apply(item);
            }
        }
    }
}
