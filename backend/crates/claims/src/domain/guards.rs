//! Ownership and status guards shared by the claim and feedback use cases.

use kernel::identity::AuthIdentity;

use crate::domain::entity::{Claim, ClaimStatus};
use crate::error::ClaimsError;

/// The operation being attempted on a claim, used to word the 403 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimAction {
    Update,
    Cancel,
    Appeal,
    ProvideFeedback,
}

impl ClaimAction {
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Cancel => "cancel",
            Self::Appeal => "appeal",
            Self::ProvideFeedback => "provide feedback for",
        }
    }
}

/// Rejects callers that do not own the claim.
pub fn require_owner(
    claim: &Claim,
    identity: &AuthIdentity,
    action: ClaimAction,
) -> Result<(), ClaimsError> {
    if *claim.user_id.as_uuid() == identity.user_id {
        Ok(())
    } else {
        Err(ClaimsError::NotClaimOwner(action))
    }
}

/// Rejects claims that are not in the expected status, with a caller-chosen
/// error so each operation keeps its own message.
pub fn require_status(
    claim: &Claim,
    expected: ClaimStatus,
    on_mismatch: ClaimsError,
) -> Result<(), ClaimsError> {
    if claim.status == expected {
        Ok(())
    } else {
        Err(on_mismatch)
    }
}
