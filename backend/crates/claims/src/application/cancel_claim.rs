//! Cancel Claim Use Case
//!
//! Cancels a claim owned by the caller. Cancellation is allowed from any
//! status, including claims that are already cancelled or completed.

use std::sync::Arc;

use kernel::id::ClaimId;
use kernel::identity::AuthIdentity;

use crate::domain::entity::Claim;
use crate::domain::guards::{ClaimAction, require_owner};
use crate::domain::repository::ClaimRepository;
use crate::error::{ClaimsError, ClaimsResult};

/// Cancel claim input
pub struct CancelClaimInput {
    pub claim_id: ClaimId,
}

/// Cancel claim use case
pub struct CancelClaimUseCase<R>
where
    R: ClaimRepository,
{
    claim_repo: Arc<R>,
}

impl<R> CancelClaimUseCase<R>
where
    R: ClaimRepository,
{
    pub fn new(claim_repo: Arc<R>) -> Self {
        Self { claim_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: CancelClaimInput,
    ) -> ClaimsResult<Claim> {
        let mut claim = self
            .claim_repo
            .find_by_id(&input.claim_id)
            .await?
            .ok_or(ClaimsError::ClaimNotFound)?;

        require_owner(&claim, identity, ClaimAction::Cancel)?;

        claim.cancel();
        self.claim_repo.update(&claim).await?;

        tracing::info!(claim_id = %claim.claim_id, "Claim cancelled");

        Ok(claim)
    }
}
