//! Typed error handling for the Atelier market contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes. A panicking call reverts every state write
//! made earlier in the same call, which is what gives each public
//! operation its commit-or-discard semantics.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketError {
    /// Caller lacks the admin/creator/fulfiller/buyer role for the action.
    Unauthorized(String),
    /// Malformed input: mismatched lengths, out-of-range percents, unknown asset.
    InvalidInput(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// Precondition on custody or grouping violated.
    InvalidState(String),
    /// Pre-authorized spending allowance below the required amount.
    InsufficientAllowance(String),
    /// Deposited balance below the required amount.
    InsufficientBalance(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientAllowance(msg) => write!(f, "Insufficient allowance: {}", msg),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<atelier_access::AccessError> for MarketError {
    fn from(err: atelier_access::AccessError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketError {
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn collection_not_found() -> Self {
        Self::NotFound("Collection not found".into())
    }
    pub fn drop_not_found() -> Self {
        Self::NotFound("Drop not found".into())
    }
    pub fn order_not_found() -> Self {
        Self::NotFound("Order not found".into())
    }
    pub fn fulfiller_not_found(id: u64) -> Self {
        Self::NotFound(format!("Fulfiller not found: {}", id))
    }
    pub fn grant_not_found() -> Self {
        Self::NotFound("Grant not found".into())
    }
    pub fn not_in_escrow() -> Self {
        Self::InvalidState("Token must be owned by escrow".into())
    }
    pub fn only_creator(what: &str) -> Self {
        Self::Unauthorized(format!("Only the creator can edit this {}", what))
    }
}
