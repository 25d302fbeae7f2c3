use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::{Calculation, CalculationFactory};
use crate::modules::calculation::application::ports::incoming::use_cases::{
    PatchCalculationError, PatchCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::{
    CalculationQuery, CalculationRepository, CalculationRepositoryError, UpdateCalculationData,
};
use crate::modules::calculation::application::schemas::{CalculationUpdate, MergeError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Reads the owner's record, merges the supplied fields, validates the merged
/// record and stores it with a freshly computed result.
pub struct PatchCalculationService<Q, R>
where
    Q: CalculationQuery,
    R: CalculationRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> PatchCalculationService<Q, R>
where
    Q: CalculationQuery,
    R: CalculationRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> PatchCalculationUseCase for PatchCalculationService<Q, R>
where
    Q: CalculationQuery + Send + Sync,
    R: CalculationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        calculation_id: i32,
        update: CalculationUpdate,
    ) -> Result<Calculation, PatchCalculationError> {
        let current = self
            .query
            .find_by_id(owner, calculation_id)
            .await
            .map_err(|e| PatchCalculationError::RepositoryError(e.to_string()))?
            .ok_or(PatchCalculationError::NotFound)?;

        let merged = update.merge(&current).map_err(|e| match e {
            MergeError::Invalid(e) => PatchCalculationError::Validation(e),
            MergeError::Stored(e) => PatchCalculationError::Calculation(e),
        })?;

        // A client-supplied result never overrides the computed one
        let result = CalculationFactory::apply(merged.calculation_type, merged.a, merged.b)?;

        self.repository
            .update_calculation(
                owner,
                calculation_id,
                UpdateCalculationData {
                    a: merged.a,
                    b: merged.b,
                    calculation_type: merged.calculation_type,
                    result,
                },
            )
            .await
            .map_err(|e| match e {
                CalculationRepositoryError::NotFound => PatchCalculationError::NotFound,
                CalculationRepositoryError::DatabaseError(msg) => {
                    PatchCalculationError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::calculation::application::domain::{CalculationError, CalculationType};
    use crate::modules::calculation::application::ports::outgoing::{
        CalculationQueryError, CreateCalculationData,
    };
    use crate::modules::calculation::application::schemas::CalculationValidationError;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn stored(owner: UserId, tag: &str, a: f64, b: f64) -> Calculation {
        let now = Utc::now();
        Calculation {
            id: 5,
            owner: Some(owner),
            a,
            b,
            calculation_type: tag.to_string(),
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    struct MockCalculationQuery {
        current: Option<Calculation>,
    }

    #[async_trait]
    impl CalculationQuery for MockCalculationQuery {
        async fn list_by_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<Calculation>, CalculationQueryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn find_by_id(
            &self,
            owner: UserId,
            _calculation_id: i32,
        ) -> Result<Option<Calculation>, CalculationQueryError> {
            Ok(self.current.clone().filter(|c| c.is_owned_by(owner)))
        }
    }

    #[derive(Default)]
    struct MockCalculationRepo {
        updated: Mutex<Option<UpdateCalculationData>>,
        fail: Option<CalculationRepositoryError>,
    }

    #[async_trait]
    impl CalculationRepository for MockCalculationRepo {
        async fn create_calculation(
            &self,
            _data: CreateCalculationData,
        ) -> Result<Calculation, CalculationRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn update_calculation(
            &self,
            owner: UserId,
            calculation_id: i32,
            data: UpdateCalculationData,
        ) -> Result<Calculation, CalculationRepositoryError> {
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }
            *self.updated.lock().unwrap() = Some(data.clone());
            let mut calc = stored(owner, data.calculation_type.as_str(), data.a, data.b);
            calc.id = calculation_id;
            calc.result = Some(data.result);
            Ok(calc)
        }

        async fn delete_calculation(
            &self,
            _owner: UserId,
            _calculation_id: i32,
        ) -> Result<(), CalculationRepositoryError> {
            unimplemented!("not needed for patch tests")
        }
    }

    fn service(
        current: Option<Calculation>,
        repo: MockCalculationRepo,
    ) -> PatchCalculationService<MockCalculationQuery, MockCalculationRepo> {
        PatchCalculationService::new(MockCalculationQuery { current }, repo)
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_merges_and_recomputes() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Add", 2.0, 3.0)),
            MockCalculationRepo::default(),
        );

        let update = CalculationUpdate {
            calculation_type: Some(CalculationType::Multiply),
            result: Some(999.0),
            ..Default::default()
        };
        let calc = svc.execute(owner, 5, update).await.unwrap();

        assert_eq!(calc.calculation_type, "Multiply");
        assert_eq!(calc.result, Some(6.0));

        let written = svc.repository.updated.lock().unwrap().clone().unwrap();
        assert_eq!(
            written,
            UpdateCalculationData {
                a: 2.0,
                b: 3.0,
                calculation_type: CalculationType::Multiply,
                result: 6.0,
            }
        );
    }

    #[tokio::test]
    async fn test_execute_empty_update_recomputes_stored_values() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Divide", 9.0, 3.0)),
            MockCalculationRepo::default(),
        );

        let calc = svc
            .execute(owner, 5, CalculationUpdate::default())
            .await
            .unwrap();

        assert_eq!(calc.result, Some(3.0));
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_rejects_zero_divisor_after_merge() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Divide", 9.0, 3.0)),
            MockCalculationRepo::default(),
        );

        let update = CalculationUpdate {
            b: Some(0.0),
            ..Default::default()
        };
        let err = svc.execute(owner, 5, update).await.unwrap_err();

        assert!(matches!(
            err,
            PatchCalculationError::Validation(CalculationValidationError::ZeroDivisor)
        ));
        assert!(svc.repository.updated.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_execute_other_owner_is_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Add", 1.0, 1.0)),
            MockCalculationRepo::default(),
        );

        let err = svc
            .execute(UserId::from(Uuid::new_v4()), 5, CalculationUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PatchCalculationError::NotFound));
    }

    #[tokio::test]
    async fn test_execute_unknown_stored_tag() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Pow", 1.0, 1.0)),
            MockCalculationRepo::default(),
        );

        let err = svc
            .execute(owner, 5, CalculationUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PatchCalculationError::Calculation(CalculationError::UnsupportedType(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_repository_errors() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(
            Some(stored(owner, "Add", 1.0, 1.0)),
            MockCalculationRepo {
                fail: Some(CalculationRepositoryError::DatabaseError("db down".to_string())),
                ..Default::default()
            },
        );

        let err = svc
            .execute(owner, 5, CalculationUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PatchCalculationError::RepositoryError(msg) if msg == "db down"
        ));
    }
}
