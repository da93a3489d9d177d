//! Request / Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{Claim, ClaimStatus, Feedback, RepairCentre};

// ============================================================================
// Claim requests
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub claim_details: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    pub claim_details: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealClaimRequest {
    pub appeal_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct ListClaimsQuery {
    pub status: Option<String>,
}

// ============================================================================
// Claim responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: ClaimStatus,
    pub claim_details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appeal_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appeal_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.claim_id.into_uuid(),
            user_id: claim.user_id.into_uuid(),
            status: claim.status,
            claim_details: claim.claim_details.clone(),
            appeal_reason: claim.appeal_reason.clone(),
            appeal_date: claim.appeal_date,
            cancellation_reason: claim.cancellation_reason.clone(),
            cancellation_date: claim.cancellation_date,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimEnvelope {
    pub claim: ClaimResponse,
}

#[derive(Debug, Serialize)]
pub struct ClaimsEnvelope {
    pub claims: Vec<ClaimResponse>,
}

#[derive(Debug, Serialize)]
pub struct MessageClaimResponse {
    pub message: String,
    pub claim: ClaimResponse,
}

// ============================================================================
// Feedback
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub claim_id: Uuid,
    pub rating: i16,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeedbackQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub claim_id: Uuid,
    pub rating: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.feedback_id.into_uuid(),
            user_id: feedback.user_id.into_uuid(),
            claim_id: feedback.claim_id.into_uuid(),
            rating: feedback.rating,
            comments: feedback.comments.clone(),
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

/// Feedback with its claim embedded where the id would otherwise be, the
/// shape listing endpoints return. A deleted claim serialises as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedFeedbackResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub claim_id: Option<ClaimResponse>,
    pub rating: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PopulatedFeedbackResponse {
    pub fn from_pair(feedback: &Feedback, claim: Option<&Claim>) -> Self {
        Self {
            id: feedback.feedback_id.into_uuid(),
            user_id: feedback.user_id.into_uuid(),
            claim_id: claim.map(ClaimResponse::from),
            rating: feedback.rating,
            comments: feedback.comments.clone(),
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackEnvelope {
    pub feedback: FeedbackResponse,
}

#[derive(Debug, Serialize)]
pub struct FeedbacksEnvelope {
    pub feedbacks: Vec<PopulatedFeedbackResponse>,
}

// ============================================================================
// Repair centres
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepairCentreRequest {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
}

/// GeoJSON-style point; coordinates are `[longitude, latitude]`.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub r#type: &'static str,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairCentreResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub location: LocationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&RepairCentre> for RepairCentreResponse {
    fn from(centre: &RepairCentre) -> Self {
        Self {
            id: centre.centre_id.into_uuid(),
            name: centre.name.clone(),
            address: centre.address.clone(),
            contact_number: centre.contact_number.clone(),
            location: LocationResponse {
                r#type: "Point",
                coordinates: [centre.longitude, centre.latitude],
            },
            description: centre.description.clone(),
            created_at: centre.created_at,
            updated_at: centre.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairCentreEnvelope {
    pub repair_centre: RepairCentreResponse,
}

#[derive(Debug, Serialize)]
pub struct CentresEnvelope {
    pub centres: Vec<RepairCentreResponse>,
}

#[derive(Debug, Serialize)]
pub struct CentreEnvelope {
    pub centre: RepairCentreResponse,
}
