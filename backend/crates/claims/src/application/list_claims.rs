//! List Claims Use Case
//!
//! Lists the caller's claims in insertion order. The optional status
//! filter is matched verbatim against stored values; an unrecognised
//! status yields an empty list rather than an error.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::identity::AuthIdentity;

use crate::domain::entity::Claim;
use crate::domain::repository::ClaimRepository;
use crate::error::ClaimsResult;

/// List claims input
pub struct ListClaimsInput {
    pub status: Option<String>,
}

/// List claims use case
pub struct ListClaimsUseCase<R>
where
    R: ClaimRepository,
{
    claim_repo: Arc<R>,
}

impl<R> ListClaimsUseCase<R>
where
    R: ClaimRepository,
{
    pub fn new(claim_repo: Arc<R>) -> Self {
        Self { claim_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: ListClaimsInput,
    ) -> ClaimsResult<Vec<Claim>> {
        let user_id = UserId::from_uuid(identity.user_id);
        self.claim_repo
            .list_by_user(&user_id, input.status.as_deref())
            .await
    }
}
