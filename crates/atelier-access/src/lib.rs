//! Capability checks for Atelier contracts: one trait method per role the
//! protocol distinguishes, plus guard helpers that turn a failed check into
//! a typed error the caller can map onto its own error surface.

use near_sdk::AccountId;

/// Role checks re-evaluated on every call; implementations must not cache.
pub trait AccessPolicy {
    fn is_admin(&self, actor: &AccountId) -> bool;

    fn is_writer(&self, actor: &AccountId) -> bool;

    /// Whether `actor` publishes under the grant named `grant_name`.
    /// Grant names are scoped per publisher, so the actor is the key's
    /// publisher half.
    fn is_authorized_publisher(&self, actor: &AccountId, grant_name: &str) -> bool;

    /// Externally verified collector eligibility for a publisher context.
    fn is_verified_collector(&self, actor: &AccountId, publisher_context_id: u64) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    NotAdmin,
    NotWriter,
    NotPublisher { grant_name: String },
    NotCollector { publisher_context_id: u64 },
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAdmin => write!(f, "Only an admin can perform this action"),
            Self::NotWriter => write!(f, "Only a writer can perform this action"),
            Self::NotPublisher { grant_name } => {
                write!(f, "Caller does not publish the grant '{}'", grant_name)
            }
            Self::NotCollector {
                publisher_context_id,
            } => write!(
                f,
                "Caller is not a verified collector for publisher context {}",
                publisher_context_id
            ),
        }
    }
}

pub fn ensure_admin<P: AccessPolicy>(policy: &P, actor: &AccountId) -> Result<(), AccessError> {
    if !policy.is_admin(actor) {
        return Err(AccessError::NotAdmin);
    }
    Ok(())
}

/// Admins implicitly hold the writer capability.
pub fn ensure_writer<P: AccessPolicy>(policy: &P, actor: &AccountId) -> Result<(), AccessError> {
    if !policy.is_writer(actor) && !policy.is_admin(actor) {
        return Err(AccessError::NotWriter);
    }
    Ok(())
}

pub fn ensure_publisher<P: AccessPolicy>(
    policy: &P,
    actor: &AccountId,
    grant_name: &str,
) -> Result<(), AccessError> {
    if !policy.is_authorized_publisher(actor, grant_name) {
        return Err(AccessError::NotPublisher {
            grant_name: grant_name.to_string(),
        });
    }
    Ok(())
}

pub fn ensure_collector<P: AccessPolicy>(
    policy: &P,
    actor: &AccountId,
    publisher_context_id: u64,
) -> Result<(), AccessError> {
    if !policy.is_verified_collector(actor, publisher_context_id) {
        return Err(AccessError::NotCollector {
            publisher_context_id,
        });
    }
    Ok(())
}
