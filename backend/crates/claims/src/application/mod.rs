pub mod appeal_claim;
pub mod cancel_claim;
pub mod create_claim;
pub mod feedback;
pub mod list_claims;
pub mod repair_centres;
pub mod update_claim;

pub use appeal_claim::{AppealClaimInput, AppealClaimUseCase};
pub use cancel_claim::{CancelClaimInput, CancelClaimUseCase};
pub use create_claim::{CreateClaimInput, CreateClaimUseCase};
pub use feedback::{
    ListFeedbackInput, ListFeedbackUseCase, SubmitFeedbackInput, SubmitFeedbackUseCase,
};
pub use list_claims::{ListClaimsInput, ListClaimsUseCase};
pub use repair_centres::{
    CreateRepairCentreInput, CreateRepairCentreUseCase, GetRepairCentreInput,
    GetRepairCentreUseCase, NearbyRepairCentresInput, NearbyRepairCentresUseCase,
    DEFAULT_NEARBY_RADIUS_METRES,
};
pub use update_claim::{UpdateClaimInput, UpdateClaimUseCase};
