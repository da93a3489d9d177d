use chrono::{DateTime, Utc};
use kernel::id::{ClaimId, FeedbackId, RepairCentreId, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Claim status
// ============================================================================

/// Lifecycle state of a claim.
///
/// New claims start out `Active`; back-office processing moves them to
/// `Rejected` or `Completed`, while the claimant can move them to
/// `Cancelled` (from any state) or `Appeal` (from `Rejected` only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Active,
    Rejected,
    Appeal,
    Cancelled,
    Completed,
}

impl ClaimStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Rejected => "rejected",
            Self::Appeal => "appeal",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "rejected" => Some(Self::Rejected),
            "appeal" => Some(Self::Appeal),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Claim
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub claim_id: ClaimId,
    pub user_id: UserId,
    pub status: ClaimStatus,
    /// Opaque claimant-supplied payload; stored and returned verbatim.
    pub claim_details: serde_json::Value,
    pub appeal_reason: Option<String>,
    pub appeal_date: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub cancellation_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    pub fn new(user_id: UserId, claim_details: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            claim_id: ClaimId::new(),
            user_id,
            status: ClaimStatus::Active,
            claim_details,
            appeal_reason: None,
            appeal_date: None,
            cancellation_reason: None,
            cancellation_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the claim details wholesale; no merge is attempted.
    pub fn replace_details(&mut self, claim_details: serde_json::Value) {
        self.claim_details = claim_details;
        self.updated_at = Utc::now();
    }

    /// Marks the claim cancelled. Only the status changes; cancellation
    /// reason and date are left untouched.
    pub fn cancel(&mut self) {
        self.status = ClaimStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Moves a claim into appeal, recording the reason and the time the
    /// appeal was lodged. Callers must check the claim is `Rejected` first.
    pub fn appeal(&mut self, reason: String) {
        let now = Utc::now();
        self.status = ClaimStatus::Appeal;
        self.appeal_reason = Some(reason);
        self.appeal_date = Some(now);
        self.updated_at = now;
    }
}

// ============================================================================
// Feedback
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub feedback_id: FeedbackId,
    pub user_id: UserId,
    pub claim_id: ClaimId,
    pub rating: i16,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(user_id: UserId, claim_id: ClaimId, rating: i16, comments: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            feedback_id: FeedbackId::new(),
            user_id,
            claim_id,
            rating,
            comments,
            created_at: now,
            updated_at: now,
        }
    }
}

// ============================================================================
// Repair centre
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RepairCentre {
    pub centre_id: RepairCentreId,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RepairCentre {
    pub fn new(
        name: String,
        address: String,
        contact_number: String,
        latitude: f64,
        longitude: f64,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            centre_id: RepairCentreId::new(),
            name,
            address,
            contact_number,
            latitude,
            longitude,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}
