//! Admin/writer role management — the capability boundary every mutating
//! call re-checks.

use crate::*;
use atelier_access::AccessPolicy;

#[near]
impl Contract {
    #[handle_result]
    pub fn add_admin(&mut self, account: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        self.admins.insert(account.clone());
        events::emit_admin_added(&account, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn remove_admin(&mut self, account: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        if account == self.owner_id {
            return Err(MarketError::InvalidInput(
                "The contract owner cannot be removed as admin".into(),
            ));
        }
        self.admins.remove(&account);
        events::emit_admin_removed(&account, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn add_writer(&mut self, account: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        self.writers.insert(account.clone());
        events::emit_writer_added(&account, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn remove_writer(&mut self, account: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;
        self.writers.remove(&account);
        events::emit_writer_removed(&account, &actor);
        Ok(())
    }

    pub fn is_admin(&self, account: AccountId) -> bool {
        AccessPolicy::is_admin(self, &account)
    }

    pub fn is_writer(&self, account: AccountId) -> bool {
        AccessPolicy::is_writer(self, &account)
    }
}
