//! Drop registry: optional grouping of collections with exclusive
//! membership. The drop owns the member list; a collection only carries a
//! non-owning `drop_id` back-reference. Removal is swap-remove, so the
//! order of the remaining entries is not preserved.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn create_drop(
        &mut self,
        collection_ids: Vec<u64>,
        uri: String,
    ) -> Result<u64, MarketError> {
        let actor = env::predecessor_account_id();
        if collection_ids.is_empty() {
            return Err(MarketError::InvalidInput(
                "At least one collection is required".into(),
            ));
        }
        if uri.len() > MAX_URI_LEN {
            return Err(MarketError::InvalidInput(format!(
                "URI exceeds max length of {} bytes",
                MAX_URI_LEN
            )));
        }

        let drop_id = self.next_drop_id;
        self.next_drop_id = self
            .next_drop_id
            .checked_add(1)
            .ok_or_else(|| MarketError::InternalError("Drop id counter overflow".into()))?;

        for &collection_id in &collection_ids {
            self.attach_collection_to_drop(collection_id, drop_id, &actor)?;
        }

        self.drops.insert(
            drop_id,
            Drop {
                id: drop_id,
                creator: actor.clone(),
                collection_ids: collection_ids.clone(),
                uri,
                created_at: env::block_timestamp(),
            },
        );

        events::emit_drop_created(drop_id, &collection_ids, &actor);
        Ok(drop_id)
    }

    #[handle_result]
    pub fn add_collection_to_drop(
        &mut self,
        drop_id: u64,
        collection_ids: Vec<u64>,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        if collection_ids.is_empty() {
            return Err(MarketError::InvalidInput(
                "At least one collection is required".into(),
            ));
        }
        if !self.drops.contains_key(&drop_id) {
            return Err(MarketError::drop_not_found());
        }

        for &collection_id in &collection_ids {
            self.attach_collection_to_drop(collection_id, drop_id, &actor)?;
        }
        let drop = self.expect_drop_mut(drop_id);
        drop.collection_ids.extend_from_slice(&collection_ids);

        events::emit_collection_added_to_drop(drop_id, &collection_ids, &actor);
        Ok(())
    }

    /// Remove one collection from its drop. Caller must be the drop's
    /// creator; the collection burn path cascades in below this check.
    #[handle_result]
    pub fn remove_collection_from_drop(&mut self, collection_id: u64) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let drop_id = self
            .collections
            .get(&collection_id)
            .ok_or_else(MarketError::collection_not_found)?
            .drop_id;
        if drop_id == 0 {
            return Err(MarketError::InvalidState(
                "Collection is not part of a drop".into(),
            ));
        }
        let drop = self.drops.get(&drop_id).ok_or_else(MarketError::drop_not_found)?;
        if drop.creator != actor {
            return Err(MarketError::Unauthorized(
                "Only the drop creator can remove a collection".into(),
            ));
        }

        self.internal_remove_collection_from_drop(collection_id)
    }

    #[handle_result]
    pub fn delete_drop(&mut self, drop_id: u64) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let drop = self.drops.get(&drop_id).ok_or_else(MarketError::drop_not_found)?;
        if drop.creator != actor {
            return Err(MarketError::only_creator("drop"));
        }

        let member_ids = drop.collection_ids.clone();
        for collection_id in member_ids {
            if let Some(collection) = self.collections.get_mut(&collection_id) {
                collection.drop_id = 0;
            }
        }
        self.drops.remove(&drop_id);

        events::emit_drop_deleted(drop_id, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_drop_uri(&mut self, drop_id: u64, uri: String) -> Result<(), MarketError> {
        if uri.len() > MAX_URI_LEN {
            return Err(MarketError::InvalidInput(format!(
                "URI exceeds max length of {} bytes",
                MAX_URI_LEN
            )));
        }
        let actor = env::predecessor_account_id();
        let drop = self
            .drops
            .get_mut(&drop_id)
            .ok_or_else(MarketError::drop_not_found)?;
        if drop.creator != actor {
            return Err(MarketError::only_creator("drop"));
        }

        drop.uri = uri.clone();
        events::emit_drop_uri_updated(drop_id, &uri, &actor);
        Ok(())
    }

    // --- Views ---

    pub fn get_drop_supply(&self) -> u64 {
        self.next_drop_id - 1
    }

    pub fn get_collections_in_drop(&self, drop_id: u64) -> Vec<u64> {
        self.expect_drop(drop_id).collection_ids.clone()
    }

    /// 0 when the collection is not grouped into any drop.
    pub fn get_collection_id_to_drop(&self, collection_id: u64) -> u64 {
        self.collections
            .get(&collection_id)
            .expect("Collection not found")
            .drop_id
    }

    pub fn get_drop_uri(&self, drop_id: u64) -> String {
        self.expect_drop(drop_id).uri.clone()
    }

    pub fn get_drop_creator(&self, drop_id: u64) -> AccountId {
        self.expect_drop(drop_id).creator.clone()
    }

    pub fn get_drop_timestamp(&self, drop_id: u64) -> u64 {
        self.expect_drop(drop_id).created_at
    }
}

// --- Internal helpers ---

impl Contract {
    fn expect_drop(&self, drop_id: u64) -> &Drop {
        self.drops.get(&drop_id).expect("Drop not found")
    }

    fn expect_drop_mut(&mut self, drop_id: u64) -> &mut Drop {
        self.drops.get_mut(&drop_id).expect("Drop not found")
    }

    /// Validate one collection for drop membership and point its
    /// back-reference at `drop_id`.
    fn attach_collection_to_drop(
        &mut self,
        collection_id: u64,
        drop_id: u64,
        actor: &AccountId,
    ) -> Result<(), MarketError> {
        self.check_writer(actor)?;
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        if collection.is_burned {
            return Err(MarketError::InvalidState(
                "Collection is already burned".into(),
            ));
        }
        if &collection.creator != actor {
            return Err(MarketError::Unauthorized(
                "Only the owner of a collection can add it to a drop".into(),
            ));
        }
        if collection.drop_id != 0 {
            return Err(MarketError::InvalidState(
                "Collection is already part of another existing drop".into(),
            ));
        }

        collection.drop_id = drop_id;
        Ok(())
    }

    /// Swap-remove the collection from its drop's list and reset the
    /// back-reference. Shared by the public removal path and the collection
    /// burn cascade.
    pub(crate) fn internal_remove_collection_from_drop(
        &mut self,
        collection_id: u64,
    ) -> Result<(), MarketError> {
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        let drop_id = collection.drop_id;
        if drop_id == 0 {
            return Err(MarketError::InvalidState(
                "Collection is not part of a drop".into(),
            ));
        }
        collection.drop_id = 0;

        let actor = env::predecessor_account_id();
        let drop = self
            .drops
            .get_mut(&drop_id)
            .ok_or_else(MarketError::drop_not_found)?;
        let pos = drop
            .collection_ids
            .iter()
            .position(|id| *id == collection_id)
            .ok_or_else(|| {
                MarketError::InternalError("Drop member list out of sync".into())
            })?;
        drop.collection_ids.swap_remove(pos);

        events::emit_collection_removed_from_drop(drop_id, collection_id, &actor);
        Ok(())
    }
}
