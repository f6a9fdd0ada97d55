//! Token ledger: per-item records, batch minting for the collection
//! registry, and the owner burn path for sold items.

use crate::*;

impl Contract {
    /// Mint `amount` sequential items inheriting the collection's shared
    /// attributes and deposit each into escrow. Collection-mint path only.
    pub(crate) fn mint_item_batch(
        &mut self,
        collection: &Collection,
        amount: u32,
    ) -> Result<Vec<u64>, MarketError> {
        let minted_at = env::block_timestamp();
        let mut item_ids = Vec::with_capacity(amount as usize);

        for _ in 0..amount {
            let id = self.next_item_id;
            self.next_item_id = self
                .next_item_id
                .checked_add(1)
                .ok_or_else(|| MarketError::InternalError("Token id counter overflow".into()))?;

            self.items.insert(
                id,
                Item {
                    id,
                    collection_id: collection.id,
                    creator: collection.creator.clone(),
                    uri: collection.uri.clone(),
                    prices: collection.prices.clone(),
                    print_type: collection.print_type.clone(),
                    discount_percent: collection.discount_percent,
                    collectors_only: collection.collectors_only,
                    fulfiller_id: collection.fulfiller_id,
                    is_burned: false,
                    minted_at,
                    publisher_context_id: collection.publisher_context_id,
                },
            );
            self.escrow_deposit(id)?;
            item_ids.push(id);
        }

        Ok(item_ids)
    }

    /// Burn an item held by its post-sale owner. Escrow-held items can only
    /// be burned through the collection burn path.
    fn internal_owner_burn(&mut self, item_id: u64, actor: &AccountId) -> Result<(), MarketError> {
        let item = self
            .items
            .get(&item_id)
            .ok_or_else(MarketError::token_not_found)?;
        if item.is_burned {
            return Err(MarketError::InvalidState("Token is already burned".into()));
        }
        match self.custody.get(&item_id) {
            Some(Custody::Held(owner)) if owner == actor => {}
            _ => {
                return Err(MarketError::Unauthorized(
                    "Only the token owner can burn the token".into(),
                ))
            }
        }

        let collection_id = item.collection_id;
        self.custody.remove(&item_id);
        if let Some(item) = self.items.get_mut(&item_id) {
            item.is_burned = true;
        }
        // A burned item leaves its collection's member list.
        if let Some(collection) = self.collections.get_mut(&collection_id) {
            if let Some(pos) = collection.item_ids.iter().position(|id| *id == item_id) {
                collection.item_ids.remove(pos);
            }
        }
        Ok(())
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn burn_token(&mut self, item_id: u64) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.internal_owner_burn(item_id, &actor)?;
        events::emit_token_burned(item_id, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn burn_token_batch(&mut self, item_ids: Vec<u64>) -> Result<(), MarketError> {
        if item_ids.is_empty() {
            return Err(MarketError::InvalidInput(
                "At least one token is required".into(),
            ));
        }
        let actor = env::predecessor_account_id();
        for &item_id in &item_ids {
            self.internal_owner_burn(item_id, &actor)?;
        }
        events::emit_token_batch_burned(&item_ids, &actor);
        Ok(())
    }

    // --- Views ---

    pub fn get_token_supply(&self) -> u64 {
        self.next_item_id - 1
    }

    pub fn get_token_uri(&self, item_id: u64) -> String {
        self.expect_item(item_id).uri.clone()
    }

    pub fn get_token_creator(&self, item_id: u64) -> AccountId {
        self.expect_item(item_id).creator.clone()
    }

    pub fn get_token_collection(&self, item_id: u64) -> u64 {
        self.expect_item(item_id).collection_id
    }

    pub fn get_token_accepted_assets(&self, item_id: u64) -> Vec<AccountId> {
        self.expect_item(item_id).accepted_assets()
    }

    pub fn get_token_base_prices(&self, item_id: u64) -> Vec<U128> {
        self.expect_item(item_id).base_prices()
    }

    pub fn get_token_print_type(&self, item_id: u64) -> String {
        self.expect_item(item_id).print_type.clone()
    }

    pub fn get_token_discount(&self, item_id: u64) -> u8 {
        self.expect_item(item_id).discount_percent
    }

    pub fn get_token_collectors_only(&self, item_id: u64) -> bool {
        self.expect_item(item_id).collectors_only
    }

    pub fn get_token_fulfiller(&self, item_id: u64) -> u64 {
        self.expect_item(item_id).fulfiller_id
    }

    pub fn get_token_minted_at(&self, item_id: u64) -> u64 {
        self.expect_item(item_id).minted_at
    }

    pub fn get_token_is_burned(&self, item_id: u64) -> bool {
        self.expect_item(item_id).is_burned
    }

    pub fn get_token_publisher_context(&self, item_id: u64) -> u64 {
        self.expect_item(item_id).publisher_context_id
    }
}

impl Contract {
    fn expect_item(&self, item_id: u64) -> &Item {
        self.items.get(&item_id).expect("Token not found")
    }
}
