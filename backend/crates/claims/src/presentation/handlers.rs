//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::ClaimId;
use kernel::identity::AuthIdentity;
use std::sync::Arc;

use crate::application::{
    AppealClaimInput, AppealClaimUseCase, CancelClaimInput, CancelClaimUseCase, CreateClaimInput,
    CreateClaimUseCase, CreateRepairCentreInput, CreateRepairCentreUseCase, GetRepairCentreInput,
    GetRepairCentreUseCase, ListClaimsInput, ListClaimsUseCase, ListFeedbackInput,
    ListFeedbackUseCase, NearbyRepairCentresInput, NearbyRepairCentresUseCase, SubmitFeedbackInput,
    SubmitFeedbackUseCase, UpdateClaimInput, UpdateClaimUseCase,
};
use crate::domain::repository::{ClaimRepository, FeedbackRepository, RepairCentreRepository};
use crate::error::{ClaimsError, ClaimsResult};
use crate::presentation::dto::{
    AppealClaimRequest, CentreEnvelope, CentresEnvelope, ClaimEnvelope, ClaimResponse,
    ClaimsEnvelope, CreateClaimRequest, CreateRepairCentreRequest, FeedbackEnvelope,
    FeedbackResponse, FeedbacksEnvelope, ListClaimsQuery, ListFeedbackQuery, MessageClaimResponse,
    NearbyQuery, PopulatedFeedbackResponse, RepairCentreEnvelope, RepairCentreResponse,
    SubmitFeedbackRequest, UpdateClaimRequest,
};

/// Shared state for claim handlers
#[derive(Clone)]
pub struct ClaimsAppState<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

// ============================================================================
// Claims
// ============================================================================

/// Claim ids arrive as raw path segments; anything that does not parse is
/// treated as a claim that does not exist, so every claim route answers
/// in the same error shape.
fn parse_claim_id(raw: &str) -> Result<ClaimId, ClaimsError> {
    raw.parse().map_err(|_| ClaimsError::ClaimNotFound)
}

/// POST /claims
pub async fn create_claim<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Json(req): Json<CreateClaimRequest>,
) -> ClaimsResult<impl IntoResponse>
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateClaimUseCase::new(state.store.clone());
    let claim = use_case
        .execute(
            &identity,
            CreateClaimInput {
                claim_details: req.claim_details,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClaimEnvelope {
            claim: ClaimResponse::from(&claim),
        }),
    ))
}

/// GET /claims
pub async fn list_claims<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Query(query): Query<ListClaimsQuery>,
) -> ClaimsResult<Json<ClaimsEnvelope>>
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListClaimsUseCase::new(state.store.clone());
    let claims = use_case
        .execute(
            &identity,
            ListClaimsInput {
                status: query.status,
            },
        )
        .await?;

    Ok(Json(ClaimsEnvelope {
        claims: claims.iter().map(ClaimResponse::from).collect(),
    }))
}

/// PUT /claims/{id}
pub async fn update_claim<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Path(claim_id): Path<String>,
    Json(req): Json<UpdateClaimRequest>,
) -> ClaimsResult<Json<ClaimEnvelope>>
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateClaimUseCase::new(state.store.clone());
    let claim = use_case
        .execute(
            &identity,
            UpdateClaimInput {
                claim_id: parse_claim_id(&claim_id)?,
                claim_details: req.claim_details,
            },
        )
        .await?;

    Ok(Json(ClaimEnvelope {
        claim: ClaimResponse::from(&claim),
    }))
}

/// DELETE /claims/{id}
///
/// "Delete" cancels the claim; the record itself is kept.
pub async fn cancel_claim<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Path(claim_id): Path<String>,
) -> ClaimsResult<Json<MessageClaimResponse>>
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let use_case = CancelClaimUseCase::new(state.store.clone());
    let claim = use_case
        .execute(
            &identity,
            CancelClaimInput {
                claim_id: parse_claim_id(&claim_id)?,
            },
        )
        .await?;

    Ok(Json(MessageClaimResponse {
        message: "Claim has been cancelled.".to_string(),
        claim: ClaimResponse::from(&claim),
    }))
}

/// POST /claims/{id}/appeal
pub async fn appeal_claim<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Path(claim_id): Path<String>,
    Json(req): Json<AppealClaimRequest>,
) -> ClaimsResult<Json<MessageClaimResponse>>
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let use_case = AppealClaimUseCase::new(state.store.clone());
    let claim = use_case
        .execute(
            &identity,
            AppealClaimInput {
                claim_id: parse_claim_id(&claim_id)?,
                appeal_reason: req.appeal_reason,
            },
        )
        .await?;

    Ok(Json(MessageClaimResponse {
        message: "Claim has been appealed.".to_string(),
        claim: ClaimResponse::from(&claim),
    }))
}

// ============================================================================
// Feedback
// ============================================================================

/// POST /feedback
pub async fn submit_feedback<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Json(req): Json<SubmitFeedbackRequest>,
) -> ClaimsResult<impl IntoResponse>
where
    S: ClaimRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitFeedbackUseCase::new(state.store.clone(), state.store.clone());
    let feedback = use_case
        .execute(
            &identity,
            SubmitFeedbackInput {
                claim_id: ClaimId::from_uuid(req.claim_id),
                rating: req.rating,
                comments: req.comments,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackEnvelope {
            feedback: FeedbackResponse::from(&feedback),
        }),
    ))
}

/// GET /feedback
pub async fn list_feedback<S>(
    State(state): State<ClaimsAppState<S>>,
    identity: AuthIdentity,
    Query(query): Query<ListFeedbackQuery>,
) -> ClaimsResult<Json<FeedbacksEnvelope>>
where
    S: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListFeedbackUseCase::new(state.store.clone());
    let feedbacks = use_case
        .execute(
            &identity,
            ListFeedbackInput {
                user_id: query.user_id,
            },
        )
        .await?;

    Ok(Json(FeedbacksEnvelope {
        feedbacks: feedbacks
            .iter()
            .map(|(feedback, claim)| {
                PopulatedFeedbackResponse::from_pair(feedback, claim.as_ref())
            })
            .collect(),
    }))
}

// ============================================================================
// Repair centres
// ============================================================================

/// POST /repair-centres
pub async fn create_repair_centre<S>(
    State(state): State<ClaimsAppState<S>>,
    _identity: AuthIdentity,
    Json(req): Json<CreateRepairCentreRequest>,
) -> ClaimsResult<impl IntoResponse>
where
    S: RepairCentreRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateRepairCentreUseCase::new(state.store.clone());
    let centre = use_case
        .execute(CreateRepairCentreInput {
            name: req.name,
            address: req.address,
            contact_number: req.contact_number,
            latitude: req.latitude,
            longitude: req.longitude,
            description: req.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RepairCentreEnvelope {
            repair_centre: RepairCentreResponse::from(&centre),
        }),
    ))
}

/// GET /repair-centres/nearby
pub async fn nearby_repair_centres<S>(
    State(state): State<ClaimsAppState<S>>,
    Query(query): Query<NearbyQuery>,
) -> ClaimsResult<Json<CentresEnvelope>>
where
    S: RepairCentreRepository + Clone + Send + Sync + 'static,
{
    let use_case = NearbyRepairCentresUseCase::new(state.store.clone());
    let centres = use_case
        .execute(NearbyRepairCentresInput {
            latitude: query.latitude,
            longitude: query.longitude,
            radius: query.radius,
        })
        .await?;

    Ok(Json(CentresEnvelope {
        centres: centres.iter().map(RepairCentreResponse::from).collect(),
    }))
}

/// GET /repair-centres/{id}
///
/// The path segment stays a string here so a malformed UUID produces the
/// dedicated 400 response instead of a router rejection.
pub async fn get_repair_centre<S>(
    State(state): State<ClaimsAppState<S>>,
    Path(centre_id): Path<String>,
) -> ClaimsResult<Json<CentreEnvelope>>
where
    S: RepairCentreRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetRepairCentreUseCase::new(state.store.clone());
    let centre = use_case.execute(GetRepairCentreInput { centre_id }).await?;

    Ok(Json(CentreEnvelope {
        centre: RepairCentreResponse::from(&centre),
    }))
}
