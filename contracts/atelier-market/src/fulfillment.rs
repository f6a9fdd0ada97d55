//! Fulfiller registry: parties entitled to a percentage of sale proceeds.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn create_fulfiller(
        &mut self,
        percent_cut: u8,
        payout_address: AccountId,
    ) -> Result<u64, MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        if percent_cut > 100 {
            return Err(MarketError::InvalidInput(
                "Percent can not be greater than 100".into(),
            ));
        }

        let id = self.next_fulfiller_id;
        self.next_fulfiller_id = self
            .next_fulfiller_id
            .checked_add(1)
            .ok_or_else(|| MarketError::InternalError("Fulfiller id counter overflow".into()))?;
        self.fulfillers.insert(
            id,
            Fulfiller {
                id,
                percent_cut,
                payout_address: payout_address.clone(),
            },
        );
        events::emit_fulfiller_created(id, percent_cut, &payout_address, &actor);
        Ok(id)
    }

    #[handle_result]
    pub fn update_fulfiller_percent(
        &mut self,
        fulfiller_id: u64,
        percent_cut: u8,
    ) -> Result<(), MarketError> {
        if percent_cut > 100 {
            return Err(MarketError::InvalidInput(
                "Percent can not be greater than 100".into(),
            ));
        }
        let actor = env::predecessor_account_id();
        let fulfiller = self
            .fulfillers
            .get_mut(&fulfiller_id)
            .ok_or_else(|| MarketError::fulfiller_not_found(fulfiller_id))?;
        if fulfiller.payout_address != actor {
            return Err(MarketError::Unauthorized(
                "Only the fulfiller can update".into(),
            ));
        }

        fulfiller.percent_cut = percent_cut;
        events::emit_fulfiller_percent_updated(fulfiller_id, percent_cut, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn update_fulfiller_address(
        &mut self,
        fulfiller_id: u64,
        payout_address: AccountId,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let fulfiller = self
            .fulfillers
            .get_mut(&fulfiller_id)
            .ok_or_else(|| MarketError::fulfiller_not_found(fulfiller_id))?;
        if fulfiller.payout_address != actor {
            return Err(MarketError::Unauthorized(
                "Only the fulfiller can update".into(),
            ));
        }

        fulfiller.payout_address = payout_address.clone();
        events::emit_fulfiller_address_updated(fulfiller_id, &payout_address, &actor);
        Ok(())
    }

    // --- Views ---

    pub fn get_fulfiller_percent(&self, fulfiller_id: u64) -> u8 {
        self.fulfillers
            .get(&fulfiller_id)
            .expect("Fulfiller not found")
            .percent_cut
    }

    pub fn get_fulfiller_address(&self, fulfiller_id: u64) -> AccountId {
        self.fulfillers
            .get(&fulfiller_id)
            .expect("Fulfiller not found")
            .payout_address
            .clone()
    }

    pub fn get_fulfiller_count(&self) -> u64 {
        self.next_fulfiller_id - 1
    }
}
