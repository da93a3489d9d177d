//! Repair Centre Use Cases
//!
//! Registration is auth-gated; the nearby search and detail lookup are
//! public so a claimant can find a centre before signing in.

use std::sync::Arc;

use kernel::id::RepairCentreId;

use crate::domain::entity::RepairCentre;
use crate::domain::repository::RepairCentreRepository;
use crate::error::{ClaimsError, ClaimsResult};

/// Search radius applied when the caller does not pass one, in metres.
pub const DEFAULT_NEARBY_RADIUS_METRES: f64 = 5000.0;

// ============================================================================
// Create repair centre
// ============================================================================

/// Create repair centre input
pub struct CreateRepairCentreInput {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

/// Create repair centre use case
pub struct CreateRepairCentreUseCase<R>
where
    R: RepairCentreRepository,
{
    centre_repo: Arc<R>,
}

impl<R> CreateRepairCentreUseCase<R>
where
    R: RepairCentreRepository,
{
    pub fn new(centre_repo: Arc<R>) -> Self {
        Self { centre_repo }
    }

    pub async fn execute(&self, input: CreateRepairCentreInput) -> ClaimsResult<RepairCentre> {
        let centre = RepairCentre::new(
            input.name,
            input.address,
            input.contact_number,
            input.latitude,
            input.longitude,
            input.description,
        );
        self.centre_repo.create(&centre).await?;

        tracing::info!(centre_id = %centre.centre_id, name = %centre.name, "Repair centre registered");

        Ok(centre)
    }
}

// ============================================================================
// Nearby search
// ============================================================================

/// Nearby repair centres input
pub struct NearbyRepairCentresInput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Radius in metres; defaults to [`DEFAULT_NEARBY_RADIUS_METRES`].
    pub radius: Option<f64>,
}

/// Nearby repair centres use case
pub struct NearbyRepairCentresUseCase<R>
where
    R: RepairCentreRepository,
{
    centre_repo: Arc<R>,
}

impl<R> NearbyRepairCentresUseCase<R>
where
    R: RepairCentreRepository,
{
    pub fn new(centre_repo: Arc<R>) -> Self {
        Self { centre_repo }
    }

    pub async fn execute(&self, input: NearbyRepairCentresInput) -> ClaimsResult<Vec<RepairCentre>> {
        let (Some(latitude), Some(longitude)) = (input.latitude, input.longitude) else {
            return Err(ClaimsError::MissingCoordinates);
        };
        let radius = input.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_METRES);

        self.centre_repo
            .find_nearby(latitude, longitude, radius)
            .await
    }
}

// ============================================================================
// Detail lookup
// ============================================================================

/// Get repair centre input
pub struct GetRepairCentreInput {
    /// Raw path segment; validated here rather than by the router so a
    /// malformed ID yields a meaningful 400.
    pub centre_id: String,
}

/// Get repair centre use case
pub struct GetRepairCentreUseCase<R>
where
    R: RepairCentreRepository,
{
    centre_repo: Arc<R>,
}

impl<R> GetRepairCentreUseCase<R>
where
    R: RepairCentreRepository,
{
    pub fn new(centre_repo: Arc<R>) -> Self {
        Self { centre_repo }
    }

    pub async fn execute(&self, input: GetRepairCentreInput) -> ClaimsResult<RepairCentre> {
        let centre_id: RepairCentreId = input
            .centre_id
            .parse()
            .map_err(|_| ClaimsError::InvalidRepairCentreId)?;

        self.centre_repo
            .find_by_id(&centre_id)
            .await?
            .ok_or(ClaimsError::RepairCentreNotFound)
    }
}
