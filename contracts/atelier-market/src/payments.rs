//! Payment-asset allow-list plus the fungible-asset ledger the marketplace
//! debits at purchase time.
//!
//! Buyers move funds in through the standard NEP-141 `ft_transfer_call`
//! flow — the asset contract calls `ft_on_transfer` here — and set a
//! spending allowance with `approve_payment`. Purchases check the
//! allowance before the balance so the two shortfalls stay distinguishable.

use crate::*;
use near_sdk::PromiseOrValue;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_verified_payment_assets(
        &mut self,
        assets: Vec<AccountId>,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_admin(&actor)?;

        self.verified_assets.clear();
        for asset in &assets {
            self.verified_assets.insert(asset.clone());
        }
        events::emit_verified_assets_updated(&assets, &actor);
        Ok(())
    }

    /// NEP-141 receiver hook. Deposits of verified assets credit the
    /// sender's purchase balance; unverified assets are refunded in full.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        // The deposit flow carries no routing payload.
        let _ = msg;
        let asset = env::predecessor_account_id();
        if !self.verified_assets.contains(&asset) {
            return PromiseOrValue::Value(amount);
        }

        let key = payment_key(&asset, &sender_id);
        let balance = self.payment_deposits.get(&key).copied().unwrap_or(0);
        match balance.checked_add(amount.0) {
            Some(new_balance) => {
                self.payment_deposits.insert(key, new_balance);
                events::emit_payment_deposited(&asset, &sender_id, amount.0);
                PromiseOrValue::Value(U128(0))
            }
            None => PromiseOrValue::Value(amount),
        }
    }

    /// ERC-20-style `approve`: overwrites any previous allowance for the
    /// (asset, caller) pair.
    #[handle_result]
    pub fn approve_payment(&mut self, asset: AccountId, amount: U128) -> Result<(), MarketError> {
        if !self.verified_assets.contains(&asset) {
            return Err(MarketError::InvalidInput(format!(
                "Payment asset is not verified: {}",
                asset
            )));
        }
        let actor = env::predecessor_account_id();
        self.payment_allowances
            .insert(payment_key(&asset, &actor), amount.0);
        events::emit_payment_approved(&asset, &actor, amount.0);
        Ok(())
    }

    #[handle_result]
    pub fn withdraw_payment(&mut self, asset: AccountId, amount: U128) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        let key = payment_key(&asset, &actor);
        let balance = self.payment_deposits.get(&key).copied().unwrap_or(0);
        if balance < amount.0 {
            return Err(MarketError::InsufficientBalance(format!(
                "Deposited balance {} is below the requested {}",
                balance, amount.0
            )));
        }

        self.payment_deposits.insert(key, balance - amount.0);
        events::emit_payment_withdrawn(&asset, &actor, amount.0);
        external::ft_transfer_to(&asset, &actor, amount.0);
        Ok(())
    }

    // --- Views ---

    pub fn get_verified_payment_assets(&self) -> Vec<AccountId> {
        self.verified_assets.iter().cloned().collect()
    }

    pub fn is_verified_asset(&self, asset: AccountId) -> bool {
        self.verified_assets.contains(&asset)
    }

    pub fn get_payment_balance(&self, asset: AccountId, account: AccountId) -> U128 {
        U128(self.deposit_of(&asset, &account))
    }

    pub fn get_payment_allowance(&self, asset: AccountId, account: AccountId) -> U128 {
        U128(self.allowance_of(&asset, &account))
    }
}

impl Contract {
    pub(crate) fn deposit_of(&self, asset: &AccountId, owner: &AccountId) -> u128 {
        self.payment_deposits
            .get(&payment_key(asset, owner))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn allowance_of(&self, asset: &AccountId, owner: &AccountId) -> u128 {
        self.payment_allowances
            .get(&payment_key(asset, owner))
            .copied()
            .unwrap_or(0)
    }
}
