//! Create Claim Use Case
//!
//! Opens a new claim for the authenticated user. Claims always start in
//! `active` status; the details payload is stored verbatim.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::identity::AuthIdentity;

use crate::domain::entity::Claim;
use crate::domain::repository::ClaimRepository;
use crate::error::ClaimsResult;

/// Create claim input
pub struct CreateClaimInput {
    pub claim_details: serde_json::Value,
}

/// Create claim use case
pub struct CreateClaimUseCase<R>
where
    R: ClaimRepository,
{
    claim_repo: Arc<R>,
}

impl<R> CreateClaimUseCase<R>
where
    R: ClaimRepository,
{
    pub fn new(claim_repo: Arc<R>) -> Self {
        Self { claim_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: CreateClaimInput,
    ) -> ClaimsResult<Claim> {
        let claim = Claim::new(UserId::from_uuid(identity.user_id), input.claim_details);
        self.claim_repo.create(&claim).await?;

        tracing::info!(claim_id = %claim.claim_id, user_id = %claim.user_id, "Claim created");

        Ok(claim)
    }
}
