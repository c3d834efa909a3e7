// RecoMate Engine — Identity Lookup
//
// Resolves a user id to an email through the auth collaborator. Lookup
// failure is always non-fatal: the engine degrades to the anonymous
// identity and carries on.

use crate::atoms::error::ServiceResult;
use async_trait::async_trait;

pub const ANONYMOUS: &str = "anonymous";

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn email_for(&self, user_id: &str) -> ServiceResult<String>;
}

/// Default provider for deployments without an auth backend: everyone is
/// anonymous.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn email_for(&self, _user_id: &str) -> ServiceResult<String> {
        Ok(ANONYMOUS.to_string())
    }
}
