//! Update Claim Use Case
//!
//! Replaces the details payload of a claim owned by the caller. The status
//! and lifecycle fields are untouched; there is no partial merge.

use std::sync::Arc;

use kernel::id::ClaimId;
use kernel::identity::AuthIdentity;

use crate::domain::entity::Claim;
use crate::domain::guards::{ClaimAction, require_owner};
use crate::domain::repository::ClaimRepository;
use crate::error::{ClaimsError, ClaimsResult};

/// Update claim input
pub struct UpdateClaimInput {
    pub claim_id: ClaimId,
    pub claim_details: serde_json::Value,
}

/// Update claim use case
pub struct UpdateClaimUseCase<R>
where
    R: ClaimRepository,
{
    claim_repo: Arc<R>,
}

impl<R> UpdateClaimUseCase<R>
where
    R: ClaimRepository,
{
    pub fn new(claim_repo: Arc<R>) -> Self {
        Self { claim_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: UpdateClaimInput,
    ) -> ClaimsResult<Claim> {
        let mut claim = self
            .claim_repo
            .find_by_id(&input.claim_id)
            .await?
            .ok_or(ClaimsError::ClaimNotFound)?;

        require_owner(&claim, identity, ClaimAction::Update)?;

        claim.replace_details(input.claim_details);
        self.claim_repo.update(&claim).await?;

        tracing::info!(claim_id = %claim.claim_id, "Claim details updated");

        Ok(claim)
    }
}
