//! Marketplace: the escrow-backed purchase protocol and order records.
//!
//! `buy_tokens` follows a strict checks-effects-interactions discipline:
//! price/eligibility validation and the allowance/balance checks run
//! first, then every piece of internal bookkeeping (payment debits, sold
//! lists, custody releases, the order record) is finalized, and only then
//! are the fungible-asset transfer promises issued. A reentrant call from
//! a malicious asset contract observes the items as already sold and
//! fails on the escrow check.

use std::collections::{BTreeMap, HashSet};

use crate::*;
use primitive_types::U256;

/// Outcome of pricing a purchase batch: the grand total plus the payout
/// accumulators, computed per item and summed.
pub(crate) struct PurchaseQuote {
    pub total_due: u128,
    /// Fulfiller id → accumulated cut.
    pub fulfiller_cuts: BTreeMap<u64, u128>,
    /// Creator → accumulated remainder.
    pub creator_payouts: BTreeMap<AccountId, u128>,
    /// The first item's fulfiller, recorded on the order.
    pub order_fulfiller_id: u64,
}

#[near]
impl Contract {
    /// Purchase a batch of escrowed items with one payment asset.
    /// Atomic: any failed check aborts the whole batch.
    #[handle_result]
    pub fn buy_tokens(
        &mut self,
        item_ids: Vec<u64>,
        asset: AccountId,
        fulfillment_details: String,
    ) -> Result<u64, MarketError> {
        let buyer = env::predecessor_account_id();
        if fulfillment_details.len() > MAX_ORDER_DETAILS_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Fulfillment details exceed max length of {} bytes",
                MAX_ORDER_DETAILS_LEN
            )));
        }

        let quote = self.quote_purchase(&item_ids, &asset, &buyer)?;

        // Allowance before balance; the two shortfalls are distinct errors.
        let allowance = self.allowance_of(&asset, &buyer);
        if allowance < quote.total_due {
            return Err(MarketError::InsufficientAllowance(format!(
                "Approval allowance {} is below the required {}",
                allowance, quote.total_due
            )));
        }
        let balance = self.deposit_of(&asset, &buyer);
        if balance < quote.total_due {
            return Err(MarketError::InsufficientBalance(format!(
                "Deposited balance {} is below the required {}",
                balance, quote.total_due
            )));
        }

        // Effects: all bookkeeping lands before any external interaction.
        let key = payment_key(&asset, &buyer);
        self.payment_allowances
            .insert(key.clone(), allowance - quote.total_due);
        self.payment_deposits.insert(key, balance - quote.total_due);

        for &item_id in &item_ids {
            let collection_id = self
                .items
                .get(&item_id)
                .ok_or_else(MarketError::token_not_found)?
                .collection_id;
            if let Some(sold) = self.sold_items.get_mut(&collection_id) {
                sold.push(item_id);
            } else {
                self.sold_items.insert(collection_id, vec![item_id]);
            }
            self.escrow_release(item_id, Some(buyer.clone()))?;
        }

        let order_id = self.next_order_id;
        self.next_order_id = self
            .next_order_id
            .checked_add(1)
            .ok_or_else(|| MarketError::InternalError("Order id counter overflow".into()))?;
        self.orders.insert(
            order_id,
            Order {
                id: order_id,
                item_ids: item_ids.clone(),
                buyer: buyer.clone(),
                asset: asset.clone(),
                details: fulfillment_details,
                status: ORDER_STATUS_ORDERED.to_string(),
                is_fulfilled: false,
                fulfiller_id: quote.order_fulfiller_id,
                created_at: env::block_timestamp(),
            },
        );

        events::emit_tokens_bought(&item_ids, &buyer, &asset);

        // Interactions: payout promises run after this call's state is final.
        for (&fulfiller_id, &cut) in &quote.fulfiller_cuts {
            let payout_address = self
                .fulfillers
                .get(&fulfiller_id)
                .ok_or_else(|| MarketError::fulfiller_not_found(fulfiller_id))?
                .payout_address
                .clone();
            external::ft_transfer_to(&asset, &payout_address, cut);
        }
        for (creator, &amount) in &quote.creator_payouts {
            external::ft_transfer_to(&asset, creator, amount);
        }

        Ok(order_id)
    }

    // --- Order mutation ---

    #[handle_result]
    pub fn set_order_is_fulfilled(&mut self, order_id: u64) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.check_order_fulfiller(order_id, &actor)?;

        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(MarketError::order_not_found)?;
        order.is_fulfilled = true;
        events::emit_order_is_fulfilled(order_id, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_order_status(&mut self, order_id: u64, status: String) -> Result<(), MarketError> {
        if status.len() > MAX_ORDER_STATUS_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Status exceeds max length of {} bytes",
                MAX_ORDER_STATUS_LEN
            )));
        }
        let actor = env::predecessor_account_id();
        self.check_order_fulfiller(order_id, &actor)?;

        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(MarketError::order_not_found)?;
        order.status = status.clone();
        events::emit_update_order_status(order_id, &status, &actor);
        Ok(())
    }

    #[handle_result]
    pub fn set_order_details(&mut self, order_id: u64, details: String) -> Result<(), MarketError> {
        if details.len() > MAX_ORDER_DETAILS_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Details exceed max length of {} bytes",
                MAX_ORDER_DETAILS_LEN
            )));
        }
        let actor = env::predecessor_account_id();
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(MarketError::order_not_found)?;
        if order.buyer != actor {
            return Err(MarketError::Unauthorized(
                "Only the buyer can update their order details".into(),
            ));
        }

        order.details = details.clone();
        events::emit_update_order_details(order_id, &details, &actor);
        Ok(())
    }

    // --- Views ---

    pub fn get_order_supply(&self) -> u64 {
        self.next_order_id - 1
    }

    pub fn get_order_items(&self, order_id: u64) -> Vec<u64> {
        self.expect_order(order_id).item_ids.clone()
    }

    pub fn get_order_buyer(&self, order_id: u64) -> AccountId {
        self.expect_order(order_id).buyer.clone()
    }

    pub fn get_order_chosen_asset(&self, order_id: u64) -> AccountId {
        self.expect_order(order_id).asset.clone()
    }

    pub fn get_order_details(&self, order_id: u64) -> String {
        self.expect_order(order_id).details.clone()
    }

    pub fn get_order_status(&self, order_id: u64) -> String {
        self.expect_order(order_id).status.clone()
    }

    pub fn get_order_is_fulfilled(&self, order_id: u64) -> bool {
        self.expect_order(order_id).is_fulfilled
    }

    pub fn get_order_fulfiller_id(&self, order_id: u64) -> u64 {
        self.expect_order(order_id).fulfiller_id
    }

    pub fn get_order_timestamp(&self, order_id: u64) -> u64 {
        self.expect_order(order_id).created_at
    }

    pub fn get_collection_sold_count(&self, collection_id: u64) -> u64 {
        self.sold_items
            .get(&collection_id)
            .map(|sold| sold.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_tokens_sold_collection(&self, collection_id: u64) -> Vec<u64> {
        self.sold_items
            .get(&collection_id)
            .cloned()
            .unwrap_or_default()
    }
}

// --- Internal helpers ---

impl Contract {
    fn expect_order(&self, order_id: u64) -> &Order {
        self.orders.get(&order_id).expect("Order not found")
    }

    fn check_order_fulfiller(&self, order_id: u64, actor: &AccountId) -> Result<(), MarketError> {
        let order = self
            .orders
            .get(&order_id)
            .ok_or_else(MarketError::order_not_found)?;
        let fulfiller = self
            .fulfillers
            .get(&order.fulfiller_id)
            .ok_or_else(|| MarketError::fulfiller_not_found(order.fulfiller_id))?;
        if &fulfiller.payout_address != actor {
            return Err(MarketError::Unauthorized(
                "Only the fulfiller can update this status".into(),
            ));
        }
        Ok(())
    }

    /// Validate and price a purchase batch without touching state. Price
    /// and split are computed per item and summed; the discount applies
    /// only when the buyer passes the collector predicate for that item's
    /// publisher context.
    pub(crate) fn quote_purchase(
        &self,
        item_ids: &[u64],
        asset: &AccountId,
        buyer: &AccountId,
    ) -> Result<PurchaseQuote, MarketError> {
        if item_ids.is_empty() {
            return Err(MarketError::InvalidInput(
                "At least one token is required".into(),
            ));
        }
        if item_ids.len() as u32 > MAX_BATCH_PURCHASE {
            return Err(MarketError::InvalidInput(format!(
                "Cannot purchase more than {} tokens at once",
                MAX_BATCH_PURCHASE
            )));
        }
        let mut seen = HashSet::new();
        for &item_id in item_ids {
            if !seen.insert(item_id) {
                return Err(MarketError::InvalidInput(format!(
                    "Duplicate token id in purchase batch: {}",
                    item_id
                )));
            }
        }

        let mut quote = PurchaseQuote {
            total_due: 0,
            fulfiller_cuts: BTreeMap::new(),
            creator_payouts: BTreeMap::new(),
            order_fulfiller_id: 0,
        };

        for &item_id in item_ids {
            let item = self
                .items
                .get(&item_id)
                .ok_or_else(MarketError::token_not_found)?;
            if !self.is_escrow_held(item_id) {
                return Err(MarketError::not_in_escrow());
            }
            let base_price = item.price_of(asset).ok_or_else(|| {
                MarketError::InvalidInput(
                    "Chosen asset is not an accepted payment asset for the collection".into(),
                )
            })?;

            let collector = self.collector_status(buyer, item.publisher_context_id);
            if item.collectors_only && !collector {
                return Err(MarketError::Unauthorized(
                    "Must be an authorized grant collector".into(),
                ));
            }

            // Non-collectors never receive the discount, gated or not.
            let price = if collector && item.discount_percent > 0 {
                base_price - percent_of(base_price, item.discount_percent)
            } else {
                base_price
            };

            let fulfiller = self
                .fulfillers
                .get(&item.fulfiller_id)
                .ok_or_else(|| MarketError::fulfiller_not_found(item.fulfiller_id))?;
            let cut = percent_of(price, fulfiller.percent_cut);

            if quote.order_fulfiller_id == 0 {
                quote.order_fulfiller_id = item.fulfiller_id;
            }
            *quote.fulfiller_cuts.entry(item.fulfiller_id).or_default() += cut;
            *quote
                .creator_payouts
                .entry(item.creator.clone())
                .or_default() += price - cut;
            quote.total_due = quote
                .total_due
                .checked_add(price)
                .ok_or_else(|| MarketError::InternalError("Purchase total overflow".into()))?;
        }

        Ok(quote)
    }
}

/// Truncating integer percentage, widened through U256 so pathological
/// u128 prices cannot overflow the multiply.
pub(crate) fn percent_of(amount: u128, percent: u8) -> u128 {
    (U256::from(amount) * U256::from(percent) / U256::from(100u8)).as_u128()
}
