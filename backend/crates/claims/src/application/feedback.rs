//! Feedback Use Cases
//!
//! Feedback can only be left by the claim's owner, and only once the claim
//! has completed. Nothing prevents the same claim receiving several
//! feedback entries.

use std::sync::Arc;

use kernel::id::{ClaimId, UserId};
use kernel::identity::AuthIdentity;

use crate::domain::entity::{Claim, ClaimStatus, Feedback};
use crate::domain::guards::{ClaimAction, require_owner, require_status};
use crate::domain::repository::{ClaimRepository, FeedbackRepository};
use crate::error::{ClaimsError, ClaimsResult};

// ============================================================================
// Submit feedback
// ============================================================================

/// Submit feedback input
pub struct SubmitFeedbackInput {
    pub claim_id: ClaimId,
    pub rating: i16,
    pub comments: Option<String>,
}

/// Submit feedback use case
pub struct SubmitFeedbackUseCase<C, F>
where
    C: ClaimRepository,
    F: FeedbackRepository,
{
    claim_repo: Arc<C>,
    feedback_repo: Arc<F>,
}

impl<C, F> SubmitFeedbackUseCase<C, F>
where
    C: ClaimRepository,
    F: FeedbackRepository,
{
    pub fn new(claim_repo: Arc<C>, feedback_repo: Arc<F>) -> Self {
        Self {
            claim_repo,
            feedback_repo,
        }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: SubmitFeedbackInput,
    ) -> ClaimsResult<Feedback> {
        let claim = self
            .claim_repo
            .find_by_id(&input.claim_id)
            .await?
            .ok_or(ClaimsError::ClaimNotFound)?;

        require_owner(&claim, identity, ClaimAction::ProvideFeedback)?;
        require_status(&claim, ClaimStatus::Completed, ClaimsError::ClaimNotCompleted)?;

        let feedback = Feedback::new(
            UserId::from_uuid(identity.user_id),
            input.claim_id,
            input.rating,
            input.comments,
        );
        self.feedback_repo.create(&feedback).await?;

        tracing::info!(
            feedback_id = %feedback.feedback_id,
            claim_id = %feedback.claim_id,
            "Feedback submitted"
        );

        Ok(feedback)
    }
}

// ============================================================================
// List feedback
// ============================================================================

/// List feedback input
pub struct ListFeedbackInput {
    /// Raw user filter, used verbatim when supplied; an unparseable value
    /// matches nothing. Defaults to the caller's own id.
    pub user_id: Option<String>,
}

/// List feedback use case
pub struct ListFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    feedback_repo: Arc<F>,
}

impl<F> ListFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback_repo: Arc<F>) -> Self {
        Self { feedback_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: ListFeedbackInput,
    ) -> ClaimsResult<Vec<(Feedback, Option<Claim>)>> {
        let user_id = match input.user_id.as_deref() {
            // The filter is taken verbatim; any caller may list any user's
            // feedback, and a malformed id simply matches nothing.
            Some(raw) => match raw.parse() {
                Ok(user_id) => user_id,
                Err(_) => return Ok(Vec::new()),
            },
            None => UserId::from_uuid(identity.user_id),
        };

        self.feedback_repo.list_by_user(&user_id).await
    }
}
