//! Publishing-identity boundary: grants scope minting per publisher, and
//! collector verification gates discounts and collector-only purchases.
//! Grant status flips arrive from an off-chain keeper through an
//! admin-gated setter.

use crate::*;
use atelier_access::AccessPolicy;

#[near]
impl Contract {
    #[handle_result]
    pub fn register_grant(
        &mut self,
        grant_name: String,
        publisher_context_id: u64,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_writer(&actor)?;

        if grant_name.is_empty() || grant_name.len() > MAX_GRANT_NAME_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Grant name must be 1-{} bytes",
                MAX_GRANT_NAME_LEN
            )));
        }
        let key = grant_key(&actor, &grant_name);
        if self.grants.contains_key(&key) {
            return Err(MarketError::InvalidState(
                "Grant name must be unique per publisher".into(),
            ));
        }

        self.grants.insert(
            key,
            Grant {
                publisher: actor.clone(),
                name: grant_name.clone(),
                publisher_context_id,
                status: GRANT_STATUS_LIVE.to_string(),
                created_at: env::block_timestamp(),
            },
        );
        events::emit_grant_registered(&actor, &grant_name, publisher_context_id);
        Ok(())
    }

    #[handle_result]
    pub fn set_grant_status(
        &mut self,
        publisher: AccountId,
        grant_name: String,
        status: String,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;

        let grant = self
            .grants
            .get_mut(&grant_key(&publisher, &grant_name))
            .ok_or_else(MarketError::grant_not_found)?;
        grant.status = status.clone();
        events::emit_grant_status_updated(&publisher, &grant_name, &status, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn add_verified_collector(
        &mut self,
        account: AccountId,
        publisher_context_id: u64,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        self.verified_collectors
            .insert(collector_key(&account, publisher_context_id));
        events::emit_collector_verified(&account, publisher_context_id, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn remove_verified_collector(
        &mut self,
        account: AccountId,
        publisher_context_id: u64,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        self.verified_collectors
            .remove(&collector_key(&account, publisher_context_id));
        events::emit_collector_revoked(&account, publisher_context_id, &actor);
        Ok(())
    }

    // --- Views ---

    pub fn is_authorized_publisher(&self, publisher: AccountId, grant_name: String) -> bool {
        AccessPolicy::is_authorized_publisher(self, &publisher, &grant_name)
    }

    pub fn is_verified_collector(&self, account: AccountId, publisher_context_id: u64) -> bool {
        self.collector_status(&account, publisher_context_id)
    }

    pub fn get_grant_status(&self, publisher: AccountId, grant_name: String) -> String {
        self.expect_grant(&publisher, &grant_name).status.clone()
    }

    pub fn get_grant_timestamp(&self, publisher: AccountId, grant_name: String) -> u64 {
        self.expect_grant(&publisher, &grant_name).created_at
    }

    pub fn get_grant_context_id(&self, publisher: AccountId, grant_name: String) -> u64 {
        self.expect_grant(&publisher, &grant_name).publisher_context_id
    }
}

impl Contract {
    fn expect_grant(&self, publisher: &AccountId, grant_name: &str) -> &Grant {
        self.grants
            .get(&grant_key(publisher, grant_name))
            .expect("Grant not found")
    }
}
