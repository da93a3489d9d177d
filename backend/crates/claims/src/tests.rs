//! Unit tests for the claims crate
//!
//! Use-case tests run against an in-memory store so the lifecycle rules
//! are exercised without a database.

#[cfg(test)]
mod status_tests {
    use crate::domain::entity::ClaimStatus;

    #[test]
    fn test_as_str_parse_roundtrip() {
        for status in [
            ClaimStatus::Active,
            ClaimStatus::Rejected,
            ClaimStatus::Appeal,
            ClaimStatus::Cancelled,
            ClaimStatus::Completed,
        ] {
            assert_eq!(ClaimStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(ClaimStatus::parse("archived"), None);
        assert_eq!(ClaimStatus::parse("Active"), None);
        assert_eq!(ClaimStatus::parse(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ClaimStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}

#[cfg(test)]
mod entity_tests {
    use crate::domain::entity::{Claim, ClaimStatus};
    use kernel::id::UserId;

    #[test]
    fn test_new_claim_starts_active() {
        let claim = Claim::new(UserId::new(), serde_json::json!({"item": "phone"}));
        assert_eq!(claim.status, ClaimStatus::Active);
        assert!(claim.appeal_reason.is_none());
        assert!(claim.cancellation_reason.is_none());
    }

    #[test]
    fn test_replace_details_is_wholesale() {
        let mut claim = Claim::new(
            UserId::new(),
            serde_json::json!({"item": "phone", "value": 100}),
        );
        claim.replace_details(serde_json::json!({"item": "laptop"}));

        assert_eq!(claim.claim_details, serde_json::json!({"item": "laptop"}));
    }

    #[test]
    fn test_cancel_changes_only_the_status() {
        let mut claim = Claim::new(UserId::new(), serde_json::json!({}));
        claim.cancel();

        assert_eq!(claim.status, ClaimStatus::Cancelled);
        assert!(claim.cancellation_reason.is_none());
        assert!(claim.cancellation_date.is_none());
    }

    #[test]
    fn test_appeal_records_reason_and_date() {
        let mut claim = Claim::new(UserId::new(), serde_json::json!({}));
        claim.status = ClaimStatus::Rejected;
        claim.appeal("assessor missed the receipts".to_string());

        assert_eq!(claim.status, ClaimStatus::Appeal);
        assert_eq!(
            claim.appeal_reason.as_deref(),
            Some("assessor missed the receipts")
        );
        assert!(claim.appeal_date.is_some());
    }
}

#[cfg(test)]
mod guards_tests {
    use crate::domain::entity::{Claim, ClaimStatus};
    use crate::domain::guards::{ClaimAction, require_owner, require_status};
    use crate::error::ClaimsError;
    use kernel::id::UserId;
    use kernel::identity::AuthIdentity;

    fn identity_for(user_id: &UserId) -> AuthIdentity {
        AuthIdentity {
            user_id: user_id.into_uuid(),
            email: "claimant@example.com".to_string(),
        }
    }

    #[test]
    fn test_require_owner_accepts_the_owner() {
        let claim = Claim::new(UserId::new(), serde_json::json!({}));
        let identity = identity_for(&claim.user_id);

        assert!(require_owner(&claim, &identity, ClaimAction::Update).is_ok());
    }

    #[test]
    fn test_require_owner_rejects_other_users() {
        let claim = Claim::new(UserId::new(), serde_json::json!({}));
        let identity = identity_for(&UserId::new());

        let err = require_owner(&claim, &identity, ClaimAction::Cancel).unwrap_err();
        assert!(matches!(err, ClaimsError::NotClaimOwner(ClaimAction::Cancel)));
    }

    #[test]
    fn test_require_status_uses_the_caller_error() {
        let claim = Claim::new(UserId::new(), serde_json::json!({}));

        assert!(
            require_status(&claim, ClaimStatus::Active, ClaimsError::ClaimNotAppealable).is_ok()
        );
        let err = require_status(&claim, ClaimStatus::Rejected, ClaimsError::ClaimNotAppealable)
            .unwrap_err();
        assert!(matches!(err, ClaimsError::ClaimNotAppealable));
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{RepairCentreId, UserId};
    use kernel::identity::AuthIdentity;

    use crate::application::{
        AppealClaimInput, AppealClaimUseCase, CancelClaimInput, CancelClaimUseCase,
        CreateClaimInput, CreateClaimUseCase, CreateRepairCentreInput, CreateRepairCentreUseCase,
        DEFAULT_NEARBY_RADIUS_METRES, GetRepairCentreInput, GetRepairCentreUseCase,
        ListClaimsInput, ListClaimsUseCase, ListFeedbackInput, ListFeedbackUseCase,
        NearbyRepairCentresInput, NearbyRepairCentresUseCase, SubmitFeedbackInput,
        SubmitFeedbackUseCase, UpdateClaimInput, UpdateClaimUseCase,
    };
    use crate::domain::entity::{Claim, ClaimStatus, Feedback, RepairCentre};
    use crate::domain::guards::ClaimAction;
    use crate::domain::repository::{
        ClaimRepository, FeedbackRepository, RepairCentreRepository,
    };
    use crate::error::{ClaimsError, ClaimsResult};

    #[derive(Clone, Default)]
    struct MemStore {
        claims: Arc<Mutex<Vec<Claim>>>,
        feedback: Arc<Mutex<Vec<Feedback>>>,
        centres: Arc<Mutex<Vec<RepairCentre>>>,
    }

    impl ClaimRepository for MemStore {
        async fn create(&self, claim: &Claim) -> ClaimsResult<()> {
            self.claims.lock().unwrap().push(claim.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            claim_id: &kernel::id::ClaimId,
        ) -> ClaimsResult<Option<Claim>> {
            Ok(self
                .claims
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.claim_id == *claim_id)
                .cloned())
        }

        async fn list_by_user(
            &self,
            user_id: &UserId,
            status: Option<&str>,
        ) -> ClaimsResult<Vec<Claim>> {
            Ok(self
                .claims
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.user_id == *user_id)
                .filter(|c| status.is_none_or(|s| c.status.as_str() == s))
                .cloned()
                .collect())
        }

        async fn update(&self, claim: &Claim) -> ClaimsResult<()> {
            let mut claims = self.claims.lock().unwrap();
            if let Some(stored) = claims.iter_mut().find(|c| c.claim_id == claim.claim_id) {
                *stored = claim.clone();
            }
            Ok(())
        }
    }

    impl FeedbackRepository for MemStore {
        async fn create(&self, feedback: &Feedback) -> ClaimsResult<()> {
            self.feedback.lock().unwrap().push(feedback.clone());
            Ok(())
        }

        async fn list_by_user(
            &self,
            user_id: &UserId,
        ) -> ClaimsResult<Vec<(Feedback, Option<Claim>)>> {
            let claims = self.claims.lock().unwrap();
            Ok(self
                .feedback
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.user_id == *user_id)
                .map(|f| {
                    let claim = claims.iter().find(|c| c.claim_id == f.claim_id).cloned();
                    (f.clone(), claim)
                })
                .collect())
        }
    }

    fn haversine_metres(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let half_dlat = ((lat2 - lat1).to_radians() / 2.0).sin();
        let half_dlon = ((lon2 - lon1).to_radians() / 2.0).sin();
        let a = half_dlat * half_dlat
            + lat1.to_radians().cos() * lat2.to_radians().cos() * half_dlon * half_dlon;
        6_371_000.0 * 2.0 * a.sqrt().asin()
    }

    impl RepairCentreRepository for MemStore {
        async fn create(&self, centre: &RepairCentre) -> ClaimsResult<()> {
            self.centres.lock().unwrap().push(centre.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            centre_id: &RepairCentreId,
        ) -> ClaimsResult<Option<RepairCentre>> {
            Ok(self
                .centres
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.centre_id == *centre_id)
                .cloned())
        }

        async fn find_nearby(
            &self,
            latitude: f64,
            longitude: f64,
            radius_metres: f64,
        ) -> ClaimsResult<Vec<RepairCentre>> {
            let mut hits: Vec<(f64, RepairCentre)> = self
                .centres
                .lock()
                .unwrap()
                .iter()
                .map(|c| {
                    (
                        haversine_metres(latitude, longitude, c.latitude, c.longitude),
                        c.clone(),
                    )
                })
                .filter(|(distance, _)| *distance <= radius_metres)
                .collect();
            hits.sort_by(|a, b| a.0.total_cmp(&b.0));
            Ok(hits.into_iter().map(|(_, c)| c).collect())
        }
    }

    fn identity_for(user_id: &UserId) -> AuthIdentity {
        AuthIdentity {
            user_id: user_id.into_uuid(),
            email: "claimant@example.com".to_string(),
        }
    }

    async fn seed_claim(store: &MemStore, status: ClaimStatus) -> Claim {
        let mut claim = Claim::new(UserId::new(), serde_json::json!({"item": "phone"}));
        claim.status = status;
        ClaimRepository::create(store, &claim).await.unwrap();
        claim
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_claim_persists_an_active_claim() {
        let store = MemStore::default();
        let user_id = UserId::new();
        let use_case = CreateClaimUseCase::new(Arc::new(store.clone()));

        let claim = use_case
            .execute(
                &identity_for(&user_id),
                CreateClaimInput {
                    claim_details: serde_json::json!({"item": "bicycle"}),
                },
            )
            .await
            .unwrap();

        assert_eq!(claim.status, ClaimStatus::Active);
        assert_eq!(claim.user_id, user_id);
        assert_eq!(store.claims.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_claim_replaces_details_for_the_owner() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Active).await;
        let use_case = UpdateClaimUseCase::new(Arc::new(store.clone()));

        let updated = use_case
            .execute(
                &identity_for(&claim.user_id),
                UpdateClaimInput {
                    claim_id: claim.claim_id,
                    claim_details: serde_json::json!({"item": "tablet"}),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.claim_details, serde_json::json!({"item": "tablet"}));
        assert_eq!(updated.status, ClaimStatus::Active);
    }

    #[tokio::test]
    async fn test_update_claim_rejects_non_owner() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Active).await;
        let use_case = UpdateClaimUseCase::new(Arc::new(store.clone()));

        let err = use_case
            .execute(
                &identity_for(&UserId::new()),
                UpdateClaimInput {
                    claim_id: claim.claim_id,
                    claim_details: serde_json::json!({}),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::NotClaimOwner(ClaimAction::Update)));
    }

    #[tokio::test]
    async fn test_update_claim_missing_claim_is_not_found() {
        let store = MemStore::default();
        let use_case = UpdateClaimUseCase::new(Arc::new(store));

        let err = use_case
            .execute(
                &identity_for(&UserId::new()),
                UpdateClaimInput {
                    claim_id: kernel::id::ClaimId::new(),
                    claim_details: serde_json::json!({}),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::ClaimNotFound));
    }

    #[tokio::test]
    async fn test_cancel_claim_sets_status_only() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Active).await;
        let use_case = CancelClaimUseCase::new(Arc::new(store.clone()));

        let cancelled = use_case
            .execute(
                &identity_for(&claim.user_id),
                CancelClaimInput {
                    claim_id: claim.claim_id,
                },
            )
            .await
            .unwrap();

        assert_eq!(cancelled.status, ClaimStatus::Cancelled);
        assert!(cancelled.cancellation_reason.is_none());
        assert!(cancelled.cancellation_date.is_none());
    }

    #[tokio::test]
    async fn test_cancel_is_allowed_from_any_status() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let use_case = CancelClaimUseCase::new(Arc::new(store.clone()));

        let cancelled = use_case
            .execute(
                &identity_for(&claim.user_id),
                CancelClaimInput {
                    claim_id: claim.claim_id,
                },
            )
            .await
            .unwrap();

        assert_eq!(cancelled.status, ClaimStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_appeal_moves_a_rejected_claim_into_appeal() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Rejected).await;
        let use_case = AppealClaimUseCase::new(Arc::new(store.clone()));

        let appealed = use_case
            .execute(
                &identity_for(&claim.user_id),
                AppealClaimInput {
                    claim_id: claim.claim_id,
                    appeal_reason: "repair quote was valid".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(appealed.status, ClaimStatus::Appeal);
        assert_eq!(appealed.appeal_reason.as_deref(), Some("repair quote was valid"));
        assert!(appealed.appeal_date.is_some());
    }

    #[tokio::test]
    async fn test_appeal_rejects_non_rejected_claims() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Active).await;
        let use_case = AppealClaimUseCase::new(Arc::new(store.clone()));

        let err = use_case
            .execute(
                &identity_for(&claim.user_id),
                AppealClaimInput {
                    claim_id: claim.claim_id,
                    appeal_reason: "please".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::ClaimNotAppealable));
    }

    #[tokio::test]
    async fn test_appeal_checks_ownership_before_status() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Rejected).await;
        let use_case = AppealClaimUseCase::new(Arc::new(store.clone()));

        let err = use_case
            .execute(
                &identity_for(&UserId::new()),
                AppealClaimInput {
                    claim_id: claim.claim_id,
                    appeal_reason: "mine now".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::NotClaimOwner(ClaimAction::Appeal)));
    }

    #[tokio::test]
    async fn test_list_claims_filters_by_raw_status() {
        let store = MemStore::default();
        let user_id = UserId::new();
        for status in [ClaimStatus::Active, ClaimStatus::Rejected, ClaimStatus::Active] {
            let mut claim = Claim::new(user_id, serde_json::json!({}));
            claim.status = status;
            ClaimRepository::create(&store, &claim).await.unwrap();
        }
        let use_case = ListClaimsUseCase::new(Arc::new(store.clone()));
        let identity = identity_for(&user_id);

        let all = use_case
            .execute(&identity, ListClaimsInput { status: None })
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let active = use_case
            .execute(
                &identity,
                ListClaimsInput {
                    status: Some("active".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(active.len(), 2);

        // Unknown status values match nothing rather than failing
        let bogus = use_case
            .execute(
                &identity,
                ListClaimsInput {
                    status: Some("archived".to_string()),
                },
            )
            .await
            .unwrap();
        assert!(bogus.is_empty());
    }

    // ------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_feedback_is_accepted_for_a_completed_own_claim() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let arc = Arc::new(store.clone());
        let use_case = SubmitFeedbackUseCase::new(arc.clone(), arc);

        let feedback = use_case
            .execute(
                &identity_for(&claim.user_id),
                SubmitFeedbackInput {
                    claim_id: claim.claim_id,
                    rating: 5,
                    comments: Some("quick payout".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(feedback.claim_id, claim.claim_id);
        assert_eq!(store.feedback.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_feedback_requires_a_completed_claim() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Active).await;
        let arc = Arc::new(store);
        let use_case = SubmitFeedbackUseCase::new(arc.clone(), arc);

        let err = use_case
            .execute(
                &identity_for(&claim.user_id),
                SubmitFeedbackInput {
                    claim_id: claim.claim_id,
                    rating: 3,
                    comments: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::ClaimNotCompleted));
    }

    #[tokio::test]
    async fn test_feedback_requires_claim_ownership() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let arc = Arc::new(store);
        let use_case = SubmitFeedbackUseCase::new(arc.clone(), arc);

        let err = use_case
            .execute(
                &identity_for(&UserId::new()),
                SubmitFeedbackInput {
                    claim_id: claim.claim_id,
                    rating: 1,
                    comments: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimsError::NotClaimOwner(ClaimAction::ProvideFeedback)
        ));
    }

    #[tokio::test]
    async fn test_list_feedback_pairs_entries_with_their_claims() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let feedback = Feedback::new(claim.user_id, claim.claim_id, 4, None);
        FeedbackRepository::create(&store, &feedback).await.unwrap();
        let use_case = ListFeedbackUseCase::new(Arc::new(store));

        let listed = use_case
            .execute(
                &identity_for(&UserId::new()),
                ListFeedbackInput {
                    user_id: Some(claim.user_id.to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].1.as_ref().unwrap().claim_id, claim.claim_id);
    }

    #[tokio::test]
    async fn test_list_feedback_defaults_to_the_caller() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let feedback = Feedback::new(claim.user_id, claim.claim_id, 4, None);
        FeedbackRepository::create(&store, &feedback).await.unwrap();
        let use_case = ListFeedbackUseCase::new(Arc::new(store));

        let own = use_case
            .execute(&identity_for(&claim.user_id), ListFeedbackInput { user_id: None })
            .await
            .unwrap();
        assert_eq!(own.len(), 1);

        let someone_else = use_case
            .execute(&identity_for(&UserId::new()), ListFeedbackInput { user_id: None })
            .await
            .unwrap();
        assert!(someone_else.is_empty());
    }

    #[tokio::test]
    async fn test_list_feedback_with_unparseable_filter_is_empty() {
        let store = MemStore::default();
        let claim = seed_claim(&store, ClaimStatus::Completed).await;
        let feedback = Feedback::new(claim.user_id, claim.claim_id, 4, None);
        FeedbackRepository::create(&store, &feedback).await.unwrap();
        let use_case = ListFeedbackUseCase::new(Arc::new(store));

        let listed = use_case
            .execute(
                &identity_for(&claim.user_id),
                ListFeedbackInput {
                    user_id: Some("not-a-uuid".to_string()),
                },
            )
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    // ------------------------------------------------------------------
    // Repair centres
    // ------------------------------------------------------------------

    fn centre_at(name: &str, latitude: f64, longitude: f64) -> RepairCentre {
        RepairCentre::new(
            name.to_string(),
            "1 High St".to_string(),
            "0123456789".to_string(),
            latitude,
            longitude,
            None,
        )
    }

    #[tokio::test]
    async fn test_create_repair_centre_persists_it() {
        let store = MemStore::default();
        let use_case = CreateRepairCentreUseCase::new(Arc::new(store.clone()));

        let centre = use_case
            .execute(CreateRepairCentreInput {
                name: "Speedy Repairs".to_string(),
                address: "1 High St".to_string(),
                contact_number: "0123456789".to_string(),
                latitude: 51.5,
                longitude: -0.1,
                description: Some("open late".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(centre.name, "Speedy Repairs");
        assert_eq!(store.centres.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_nearby_requires_both_coordinates() {
        let store = MemStore::default();
        let use_case = NearbyRepairCentresUseCase::new(Arc::new(store));

        let err = use_case
            .execute(NearbyRepairCentresInput {
                latitude: Some(51.5),
                longitude: None,
                radius: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::MissingCoordinates));
    }

    #[tokio::test]
    async fn test_nearby_returns_centres_in_radius_nearest_first() {
        let store = MemStore::default();
        // Roughly 0 m, 1.1 km and 11 km north of the search point
        for centre in [
            centre_at("far", 51.6, -0.1),
            centre_at("close", 51.51, -0.1),
            centre_at("here", 51.5, -0.1),
        ] {
            RepairCentreRepository::create(&store, &centre).await.unwrap();
        }
        let use_case = NearbyRepairCentresUseCase::new(Arc::new(store));

        let centres = use_case
            .execute(NearbyRepairCentresInput {
                latitude: Some(51.5),
                longitude: Some(-0.1),
                radius: None,
            })
            .await
            .unwrap();

        // Default radius keeps "far" out
        assert_eq!(DEFAULT_NEARBY_RADIUS_METRES, 5000.0);
        let names: Vec<&str> = centres.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["here", "close"]);
    }

    #[tokio::test]
    async fn test_nearby_honours_an_explicit_radius() {
        let store = MemStore::default();
        RepairCentreRepository::create(&store, &centre_at("far", 51.6, -0.1))
            .await
            .unwrap();
        let use_case = NearbyRepairCentresUseCase::new(Arc::new(store));

        let centres = use_case
            .execute(NearbyRepairCentresInput {
                latitude: Some(51.5),
                longitude: Some(-0.1),
                radius: Some(20_000.0),
            })
            .await
            .unwrap();

        assert_eq!(centres.len(), 1);
    }

    #[tokio::test]
    async fn test_get_repair_centre_rejects_malformed_ids() {
        let store = MemStore::default();
        let use_case = GetRepairCentreUseCase::new(Arc::new(store));

        let err = use_case
            .execute(GetRepairCentreInput {
                centre_id: "123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::InvalidRepairCentreId));
    }

    #[tokio::test]
    async fn test_get_repair_centre_unknown_id_is_not_found() {
        let store = MemStore::default();
        let use_case = GetRepairCentreUseCase::new(Arc::new(store));

        let err = use_case
            .execute(GetRepairCentreInput {
                centre_id: RepairCentreId::new().to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClaimsError::RepairCentreNotFound));
    }

    #[tokio::test]
    async fn test_get_repair_centre_returns_the_centre() {
        let store = MemStore::default();
        let centre = centre_at("Speedy Repairs", 51.5, -0.1);
        RepairCentreRepository::create(&store, &centre).await.unwrap();
        let use_case = GetRepairCentreUseCase::new(Arc::new(store));

        let found = use_case
            .execute(GetRepairCentreInput {
                centre_id: centre.centre_id.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(found.centre_id, centre.centre_id);
    }
}
