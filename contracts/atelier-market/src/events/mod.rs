mod builder;
mod types;

mod access;
mod collection;
mod drop;
mod fulfillment;
mod grant;
mod market;
mod payment;
mod token;

pub use access::*;
pub use collection::*;
pub use drop::*;
pub use fulfillment::*;
pub use grant::*;
pub use market::*;
pub use payment::*;
pub use token::*;

pub(crate) const STANDARD: &str = "atelier";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const ACCESS: &str = "ACCESS_UPDATE";
pub(crate) const GRANT: &str = "GRANT_UPDATE";
pub(crate) const PAYMENT: &str = "PAYMENT_UPDATE";
pub(crate) const FULFILLMENT: &str = "FULFILLMENT_UPDATE";
pub(crate) const COLLECTION: &str = "COLLECTION_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const DROP: &str = "DROP_UPDATE";
pub(crate) const MARKET: &str = "MARKET_UPDATE";
