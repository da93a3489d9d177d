//! Appeal Claim Use Case
//!
//! Moves a rejected claim into appeal, recording the reason and the time
//! the appeal was lodged. Ownership is checked before the status guard, so
//! a non-owner appealing someone else's rejected claim sees 403, not 400.

use std::sync::Arc;

use kernel::id::ClaimId;
use kernel::identity::AuthIdentity;

use crate::domain::entity::{Claim, ClaimStatus};
use crate::domain::guards::{ClaimAction, require_owner, require_status};
use crate::domain::repository::ClaimRepository;
use crate::error::{ClaimsError, ClaimsResult};

/// Appeal claim input
pub struct AppealClaimInput {
    pub claim_id: ClaimId,
    pub appeal_reason: String,
}

/// Appeal claim use case
pub struct AppealClaimUseCase<R>
where
    R: ClaimRepository,
{
    claim_repo: Arc<R>,
}

impl<R> AppealClaimUseCase<R>
where
    R: ClaimRepository,
{
    pub fn new(claim_repo: Arc<R>) -> Self {
        Self { claim_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: AppealClaimInput,
    ) -> ClaimsResult<Claim> {
        let mut claim = self
            .claim_repo
            .find_by_id(&input.claim_id)
            .await?
            .ok_or(ClaimsError::ClaimNotFound)?;

        require_owner(&claim, identity, ClaimAction::Appeal)?;
        require_status(&claim, ClaimStatus::Rejected, ClaimsError::ClaimNotAppealable)?;

        claim.appeal(input.appeal_reason);
        self.claim_repo.update(&claim).await?;

        tracing::info!(claim_id = %claim.claim_id, "Claim appealed");

        Ok(claim)
    }
}
