//! Protocol-wide limits and fixed values.

use near_sdk::Gas;

/// Upper bound on items minted into a collection in one call.
pub const MAX_BATCH_MINT: u32 = 100;

/// Upper bound on items purchased in one `buy_tokens` call.
pub const MAX_BATCH_PURCHASE: u32 = 50;

/// Accepted payment assets per collection.
pub const MAX_ACCEPTED_ASSETS: usize = 16;

pub const MAX_URI_LEN: usize = 2048;
pub const MAX_GRANT_NAME_LEN: usize = 64;
pub const MAX_PRINT_TYPE_LEN: usize = 64;
pub const MAX_ORDER_STATUS_LEN: usize = 128;
pub const MAX_ORDER_DETAILS_LEN: usize = 4096;

/// Status a fresh order is created with.
pub const ORDER_STATUS_ORDERED: &str = "ordered";

/// Status a fresh grant is registered with; an off-chain keeper flips it
/// through `set_grant_status`.
pub const GRANT_STATUS_LIVE: &str = "live";

pub const GAS_FOR_FT_TRANSFER: Gas = Gas::from_tgas(10);
