use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};

use crate::domain::guards::ClaimAction;

pub type ClaimsResult<T> = Result<T, ClaimsError>;

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("Claim not found.")]
    ClaimNotFound,

    #[error("Forbidden. You cannot {} this claim.", .0.verb())]
    NotClaimOwner(ClaimAction),

    #[error("Only rejected claims can be appealed.")]
    ClaimNotAppealable,

    #[error("Feedback can only be provided for completed claims.")]
    ClaimNotCompleted,

    #[error("Latitude and longitude are required.")]
    MissingCoordinates,

    #[error("Invalid repair centre ID.")]
    InvalidRepairCentreId,

    #[error("Repair centre not found.")]
    RepairCentreNotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl ClaimsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ClaimNotFound | Self::RepairCentreNotFound => ErrorKind::NotFound,
            Self::NotClaimOwner(_) => ErrorKind::Forbidden,
            Self::ClaimNotAppealable
            | Self::ClaimNotCompleted
            | Self::MissingCoordinates
            | Self::InvalidRepairCentreId => ErrorKind::BadRequest,
            Self::Database(_) | Self::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Converts to the shared [`AppError`], collapsing server-side details
    /// into a generic message so they never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal Server Error."),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            Self::Database(source) => {
                tracing::error!(error = %source, "claims database error");
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "claims internal error");
            }
            other => {
                tracing::debug!(error = %other, "claims request rejected");
            }
        }
    }
}

impl IntoResponse for ClaimsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
