//! Escrow vault: exclusive custodian of every item between mint and its
//! final disposition.
//!
//! The two mutators are `pub(crate)` with fixed call sites: the mint and
//! burn paths for `escrow_deposit`/`escrow_release(None)`, the marketplace
//! sale path for `escrow_release(Some(buyer))`. Nothing in the public
//! surface moves custody directly.
//!
//! Custody transitions: none → escrow (mint), escrow → buyer (sale),
//! escrow → ∅ (burn sentinel, with `is_burned` set atomically).

use crate::*;

impl Contract {
    pub(crate) fn escrow_deposit(&mut self, item_id: u64) -> Result<(), MarketError> {
        if self.custody.contains_key(&item_id) {
            return Err(MarketError::InternalError(format!(
                "Custody entry already exists for token {}",
                item_id
            )));
        }
        self.custody.insert(item_id, Custody::Escrow);
        Ok(())
    }

    pub(crate) fn escrow_release(
        &mut self,
        item_id: u64,
        recipient: Option<AccountId>,
    ) -> Result<(), MarketError> {
        match self.custody.get(&item_id) {
            Some(Custody::Escrow) => {}
            _ => return Err(MarketError::not_in_escrow()),
        }

        match recipient {
            Some(buyer) => {
                self.custody.insert(item_id, Custody::Held(buyer));
            }
            None => {
                self.custody.remove(&item_id);
                if let Some(item) = self.items.get_mut(&item_id) {
                    item.is_burned = true;
                }
            }
        }
        Ok(())
    }
}

#[near]
impl Contract {
    // --- Views ---

    /// `None` for burned (or never-minted) items.
    pub fn get_item_custody(&self, item_id: u64) -> Option<Custody> {
        self.custody.get(&item_id).cloned()
    }

    pub fn is_escrow_held(&self, item_id: u64) -> bool {
        matches!(self.custody.get(&item_id), Some(Custody::Escrow))
    }
}
