use crate::*;
use atelier_access::AccessPolicy;

impl AccessPolicy for Contract {
    fn is_admin(&self, actor: &AccountId) -> bool {
        self.admins.contains(actor)
    }

    fn is_writer(&self, actor: &AccountId) -> bool {
        self.writers.contains(actor)
    }

    fn is_authorized_publisher(&self, actor: &AccountId, grant_name: &str) -> bool {
        self.grants.contains_key(&grant_key(actor, grant_name))
    }

    fn is_verified_collector(&self, actor: &AccountId, publisher_context_id: u64) -> bool {
        self.verified_collectors
            .contains(&collector_key(actor, publisher_context_id))
    }
}

impl Contract {
    pub(crate) fn check_admin(&self, actor: &AccountId) -> Result<(), MarketError> {
        Ok(atelier_access::ensure_admin(self, actor)?)
    }

    pub(crate) fn check_writer(&self, actor: &AccountId) -> Result<(), MarketError> {
        Ok(atelier_access::ensure_writer(self, actor)?)
    }

    pub(crate) fn check_publisher(
        &self,
        actor: &AccountId,
        grant_name: &str,
    ) -> Result<(), MarketError> {
        Ok(atelier_access::ensure_publisher(self, actor, grant_name)?)
    }

    pub(crate) fn collector_status(&self, actor: &AccountId, publisher_context_id: u64) -> bool {
        AccessPolicy::is_verified_collector(self, actor, publisher_context_id)
    }
}
