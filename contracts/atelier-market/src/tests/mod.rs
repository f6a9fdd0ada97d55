
// --- Unit Tests ---
pub mod unit {
    pub mod access_test;
    pub mod collection_burn_test;
    pub mod collection_manage_test;
    pub mod collection_mint_test;
    pub mod drop_test;
    pub mod escrow_test;
    pub mod fulfillment_test;
    pub mod grant_test;
    pub mod order_test;
    pub mod payment_test;
    pub mod purchase_test;
}
