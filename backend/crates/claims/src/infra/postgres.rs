//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ClaimId, FeedbackId, RepairCentreId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Claim, ClaimStatus, Feedback, RepairCentre};
use crate::domain::repository::{ClaimRepository, FeedbackRepository, RepairCentreRepository};
use crate::error::{ClaimsError, ClaimsResult};

const CLAIM_COLUMNS: &str = "claim_id, user_id, status, claim_details, appeal_reason, \
     appeal_date, cancellation_reason, cancellation_date, created_at, updated_at";

/// PostgreSQL-backed store for claims, feedback and repair centres
#[derive(Clone)]
pub struct PgClaimsStore {
    pool: PgPool,
}

impl PgClaimsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Claim Repository Implementation
// ============================================================================

impl ClaimRepository for PgClaimsStore {
    async fn create(&self, claim: &Claim) -> ClaimsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO claims (
                claim_id,
                user_id,
                status,
                claim_details,
                appeal_reason,
                appeal_date,
                cancellation_reason,
                cancellation_date,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(claim.claim_id.as_uuid())
        .bind(claim.user_id.as_uuid())
        .bind(claim.status.as_str())
        .bind(&claim.claim_details)
        .bind(&claim.appeal_reason)
        .bind(claim.appeal_date)
        .bind(&claim.cancellation_reason)
        .bind(claim.cancellation_date)
        .bind(claim.created_at)
        .bind(claim.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, claim_id: &ClaimId) -> ClaimsResult<Option<Claim>> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1"
        ))
        .bind(claim_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ClaimRow::into_claim).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        status: Option<&str>,
    ) -> ClaimsResult<Vec<Claim>> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            r#"
            SELECT {CLAIM_COLUMNS}
            FROM claims
            WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at
            "#
        ))
        .bind(user_id.as_uuid())
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ClaimRow::into_claim).collect()
    }

    async fn update(&self, claim: &Claim) -> ClaimsResult<()> {
        sqlx::query(
            r#"
            UPDATE claims SET
                status = $2,
                claim_details = $3,
                appeal_reason = $4,
                appeal_date = $5,
                cancellation_reason = $6,
                cancellation_date = $7,
                updated_at = $8
            WHERE claim_id = $1
            "#,
        )
        .bind(claim.claim_id.as_uuid())
        .bind(claim.status.as_str())
        .bind(&claim.claim_details)
        .bind(&claim.appeal_reason)
        .bind(claim.appeal_date)
        .bind(&claim.cancellation_reason)
        .bind(claim.cancellation_date)
        .bind(claim.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

impl FeedbackRepository for PgClaimsStore {
    async fn create(&self, feedback: &Feedback) -> ClaimsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                feedback_id,
                user_id,
                claim_id,
                rating,
                comments,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(feedback.feedback_id.as_uuid())
        .bind(feedback.user_id.as_uuid())
        .bind(feedback.claim_id.as_uuid())
        .bind(feedback.rating)
        .bind(&feedback.comments)
        .bind(feedback.created_at)
        .bind(feedback.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> ClaimsResult<Vec<(Feedback, Option<Claim>)>> {
        // LEFT JOIN so feedback survives its claim being deleted.
        let rows = sqlx::query_as::<_, FeedbackWithClaimRow>(
            r#"
            SELECT
                f.feedback_id,
                f.user_id,
                f.claim_id,
                f.rating,
                f.comments,
                f.created_at,
                f.updated_at,
                c.user_id            AS claim_user_id,
                c.status             AS claim_status,
                c.claim_details      AS claim_details,
                c.appeal_reason      AS claim_appeal_reason,
                c.appeal_date        AS claim_appeal_date,
                c.cancellation_reason AS claim_cancellation_reason,
                c.cancellation_date  AS claim_cancellation_date,
                c.created_at         AS claim_created_at,
                c.updated_at         AS claim_updated_at
            FROM feedback f
            LEFT JOIN claims c ON c.claim_id = f.claim_id
            WHERE f.user_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(FeedbackWithClaimRow::into_pair)
            .collect()
    }
}

// ============================================================================
// Repair Centre Repository Implementation
// ============================================================================

impl RepairCentreRepository for PgClaimsStore {
    async fn create(&self, centre: &RepairCentre) -> ClaimsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO repair_centres (
                centre_id,
                name,
                address,
                contact_number,
                latitude,
                longitude,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(centre.centre_id.as_uuid())
        .bind(&centre.name)
        .bind(&centre.address)
        .bind(&centre.contact_number)
        .bind(centre.latitude)
        .bind(centre.longitude)
        .bind(&centre.description)
        .bind(centre.created_at)
        .bind(centre.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, centre_id: &RepairCentreId) -> ClaimsResult<Option<RepairCentre>> {
        let row = sqlx::query_as::<_, RepairCentreRow>(
            r#"
            SELECT centre_id, name, address, contact_number, latitude, longitude,
                   description, created_at, updated_at
            FROM repair_centres
            WHERE centre_id = $1
            "#,
        )
        .bind(centre_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RepairCentreRow::into_centre))
    }

    async fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_metres: f64,
    ) -> ClaimsResult<Vec<RepairCentre>> {
        // Great-circle distance (haversine) on a 6 371 km sphere, computed
        // in SQL so ordering and the radius cut-off stay in one place.
        let rows = sqlx::query_as::<_, RepairCentreRow>(
            r#"
            SELECT centre_id, name, address, contact_number, latitude, longitude,
                   description, created_at, updated_at
            FROM (
                SELECT *,
                       6371000.0 * 2.0 * asin(sqrt(
                           pow(sin(radians(latitude - $1) / 2.0), 2)
                           + cos(radians($1)) * cos(radians(latitude))
                             * pow(sin(radians(longitude - $2) / 2.0), 2)
                       )) AS distance_metres
                FROM repair_centres
            ) AS with_distance
            WHERE distance_metres <= $3
            ORDER BY distance_metres
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(radius_metres)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RepairCentreRow::into_centre).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    user_id: Uuid,
    status: String,
    claim_details: serde_json::Value,
    appeal_reason: Option<String>,
    appeal_date: Option<DateTime<Utc>>,
    cancellation_reason: Option<String>,
    cancellation_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClaimRow {
    fn into_claim(self) -> ClaimsResult<Claim> {
        let status = ClaimStatus::parse(&self.status).ok_or_else(|| {
            ClaimsError::Internal(format!("unknown claim status in store: {}", self.status))
        })?;

        Ok(Claim {
            claim_id: ClaimId::from_uuid(self.claim_id),
            user_id: UserId::from_uuid(self.user_id),
            status,
            claim_details: self.claim_details,
            appeal_reason: self.appeal_reason,
            appeal_date: self.appeal_date,
            cancellation_reason: self.cancellation_reason,
            cancellation_date: self.cancellation_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackWithClaimRow {
    feedback_id: Uuid,
    user_id: Uuid,
    claim_id: Uuid,
    rating: i16,
    comments: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    claim_user_id: Option<Uuid>,
    claim_status: Option<String>,
    claim_details: Option<serde_json::Value>,
    claim_appeal_reason: Option<String>,
    claim_appeal_date: Option<DateTime<Utc>>,
    claim_cancellation_reason: Option<String>,
    claim_cancellation_date: Option<DateTime<Utc>>,
    claim_created_at: Option<DateTime<Utc>>,
    claim_updated_at: Option<DateTime<Utc>>,
}

impl FeedbackWithClaimRow {
    fn into_pair(self) -> ClaimsResult<(Feedback, Option<Claim>)> {
        let feedback = Feedback {
            feedback_id: FeedbackId::from_uuid(self.feedback_id),
            user_id: UserId::from_uuid(self.user_id),
            claim_id: ClaimId::from_uuid(self.claim_id),
            rating: self.rating,
            comments: self.comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };

        let claim = match (
            self.claim_user_id,
            self.claim_status,
            self.claim_details,
            self.claim_created_at,
            self.claim_updated_at,
        ) {
            (Some(user_id), Some(status), Some(details), Some(created_at), Some(updated_at)) => {
                let status = ClaimStatus::parse(&status).ok_or_else(|| {
                    ClaimsError::Internal(format!("unknown claim status in store: {status}"))
                })?;
                Some(Claim {
                    claim_id: ClaimId::from_uuid(self.claim_id),
                    user_id: UserId::from_uuid(user_id),
                    status,
                    claim_details: details,
                    appeal_reason: self.claim_appeal_reason,
                    appeal_date: self.claim_appeal_date,
                    cancellation_reason: self.claim_cancellation_reason,
                    cancellation_date: self.claim_cancellation_date,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Ok((feedback, claim))
    }
}

#[derive(sqlx::FromRow)]
struct RepairCentreRow {
    centre_id: Uuid,
    name: String,
    address: String,
    contact_number: String,
    latitude: f64,
    longitude: f64,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RepairCentreRow {
    fn into_centre(self) -> RepairCentre {
        RepairCentre {
            centre_id: RepairCentreId::from_uuid(self.centre_id),
            name: self.name,
            address: self.address,
            contact_number: self.contact_number,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
