use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::adapter::outgoing::sea_orm_entity::calculations::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::calculation::application::domain::Calculation;
use crate::modules::calculation::application::ports::outgoing::{
    CalculationRepository, CalculationRepositoryError, CreateCalculationData,
    UpdateCalculationData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CalculationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CalculationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalculationRepository for CalculationRepositoryPostgres {
    async fn create_calculation(
        &self,
        data: CreateCalculationData,
    ) -> Result<Calculation, CalculationRepositoryError> {
        let owner_uuid: Uuid = data.owner.into();
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            a: Set(data.a),
            b: Set(data.b),
            calculation_type: Set(data.calculation_type.to_string()),
            result: Set(Some(data.result)),
            user_id: Set(Some(owner_uuid)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_calculation(inserted))
    }

    async fn update_calculation(
        &self,
        owner: UserId,
        calculation_id: i32,
        data: UpdateCalculationData,
    ) -> Result<Calculation, CalculationRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let model = ActiveModel {
            a: Set(data.a),
            b: Set(data.b),
            calculation_type: Set(data.calculation_type.to_string()),
            result: Set(Some(data.result)),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(calculation_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_calculation)
            .ok_or(CalculationRepositoryError::NotFound)
    }

    async fn delete_calculation(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<(), CalculationRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(calculation_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CalculationRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_calculation(model: calculations::Model) -> Calculation {
    Calculation {
        id: model.id,
        owner: model.user_id.map(UserId::from),
        a: model.a,
        b: model.b,
        calculation_type: model.calculation_type,
        result: model.result,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CalculationRepositoryError {
    CalculationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::calculation::application::domain::CalculationType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Value};

    /// Statements the repository sent, once it has released the connection
    fn logged_statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
        let db = Arc::try_unwrap(db).expect("repository should be dropped first");
        db.into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().to_vec())
            .collect()
    }

    fn binds(stmt: &Statement, value: impl Into<Value>) -> bool {
        let value = value.into();
        stmt.values
            .as_ref()
            .is_some_and(|values| values.0.contains(&value))
    }

    fn calculation_model(id: i32, owner: Uuid, tag: &str, a: f64, b: f64, result: f64) -> calculations::Model {
        let now = Utc::now().fixed_offset();
        calculations::Model {
            id,
            a,
            b,
            calculation_type: tag.to_string(),
            result: Some(result),
            user_id: Some(owner),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_calculation_success() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![calculation_model(1, owner, "Add", 2.0, 3.0, 5.0)]])
            .into_connection();
        let repo = CalculationRepositoryPostgres::new(Arc::new(db));

        let calc = repo
            .create_calculation(CreateCalculationData {
                owner: UserId::from(owner),
                a: 2.0,
                b: 3.0,
                calculation_type: CalculationType::Add,
                result: 5.0,
            })
            .await
            .unwrap();

        assert_eq!(calc.id, 1);
        assert_eq!(calc.owner, Some(UserId::from(owner)));
        assert_eq!(calc.calculation_type, "Add");
        assert_eq!(calc.result, Some(5.0));
    }

    #[tokio::test]
    async fn test_create_calculation_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("insert failed".to_string())])
            .into_connection();
        let repo = CalculationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_calculation(CreateCalculationData {
                owner: UserId::from(Uuid::new_v4()),
                a: 2.0,
                b: 3.0,
                calculation_type: CalculationType::Add,
                result: 5.0,
            })
            .await;

        assert!(matches!(
            result,
            Err(CalculationRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_calculation_success() {
        let owner = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![calculation_model(
                    4, owner, "Multiply", 2.0, 3.0, 6.0,
                )]])
                .into_connection(),
        );
        let repo = CalculationRepositoryPostgres::new(Arc::clone(&db));

        let calc = repo
            .update_calculation(
                UserId::from(owner),
                4,
                UpdateCalculationData {
                    a: 2.0,
                    b: 3.0,
                    calculation_type: CalculationType::Multiply,
                    result: 6.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(calc.id, 4);
        assert_eq!(calc.result, Some(6.0));
        drop(repo);

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.starts_with(r#"UPDATE "calculations""#), "{sql}");
        assert!(sql.contains(r#""id" = $"#), "{sql}");
        assert!(sql.contains(r#""user_id" = $"#), "{sql}");
        assert!(binds(&statements[0], owner));
        assert!(binds(&statements[0], 4));
    }

    #[tokio::test]
    async fn test_update_calculation_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<calculations::Model>::new()])
            .into_connection();
        let repo = CalculationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_calculation(
                UserId::from(Uuid::new_v4()),
                4,
                UpdateCalculationData {
                    a: 1.0,
                    b: 1.0,
                    calculation_type: CalculationType::Add,
                    result: 2.0,
                },
            )
            .await;

        assert!(matches!(result, Err(CalculationRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_calculation_success() {
        let owner = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let repo = CalculationRepositoryPostgres::new(Arc::clone(&db));

        let result = repo.delete_calculation(UserId::from(owner), 1).await;

        assert!(result.is_ok());
        drop(repo);

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.starts_with(r#"DELETE FROM "calculations""#), "{sql}");
        assert!(sql.contains(r#""id" = $1"#), "{sql}");
        assert!(sql.contains(r#""user_id" = $2"#), "{sql}");
        assert!(binds(&statements[0], owner));
    }

    #[tokio::test]
    async fn test_delete_calculation_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = CalculationRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_calculation(UserId::from(Uuid::new_v4()), 1).await;

        assert!(matches!(result, Err(CalculationRepositoryError::NotFound)));
    }

    #[test]
    fn test_model_without_owner() {
        let mut model = calculation_model(2, Uuid::new_v4(), "Sub", 5.0, 1.0, 4.0);
        model.user_id = None;

        let calc = model_to_calculation(model);

        assert!(calc.owner.is_none());
        assert_eq!(calc.compute().unwrap(), 4.0);
    }
}
