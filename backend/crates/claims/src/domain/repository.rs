//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ClaimId, RepairCentreId, UserId};

use crate::domain::entity::{Claim, Feedback, RepairCentre};
use crate::error::ClaimsResult;

/// Claim repository trait (the claim document store)
#[trait_variant::make(ClaimRepository: Send)]
pub trait LocalClaimRepository {
    /// Persist a new claim
    async fn create(&self, claim: &Claim) -> ClaimsResult<()>;

    /// Find a claim by ID
    async fn find_by_id(&self, claim_id: &ClaimId) -> ClaimsResult<Option<Claim>>;

    /// List a user's claims, optionally narrowed to a raw status value.
    /// Unknown status values simply match nothing.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        status: Option<&str>,
    ) -> ClaimsResult<Vec<Claim>>;

    /// Persist claim changes
    async fn update(&self, claim: &Claim) -> ClaimsResult<()>;
}

/// Feedback repository trait
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// Persist a new feedback entry
    async fn create(&self, feedback: &Feedback) -> ClaimsResult<()>;

    /// List a user's feedback, each entry paired with its claim when the
    /// claim still exists.
    async fn list_by_user(&self, user_id: &UserId)
    -> ClaimsResult<Vec<(Feedback, Option<Claim>)>>;
}

/// Repair centre repository trait
#[trait_variant::make(RepairCentreRepository: Send)]
pub trait LocalRepairCentreRepository {
    /// Persist a new repair centre
    async fn create(&self, centre: &RepairCentre) -> ClaimsResult<()>;

    /// Find a repair centre by ID
    async fn find_by_id(&self, centre_id: &RepairCentreId) -> ClaimsResult<Option<RepairCentre>>;

    /// List centres within `radius_metres` of the point, nearest first
    async fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_metres: f64,
    ) -> ClaimsResult<Vec<RepairCentre>>;
}
