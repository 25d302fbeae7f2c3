use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::adapter::outgoing::calculation_repository_postgres::model_to_calculation;
use crate::modules::calculation::adapter::outgoing::sea_orm_entity::calculations::{
    Column, Entity,
};
use crate::modules::calculation::application::domain::Calculation;
use crate::modules::calculation::application::ports::outgoing::{
    CalculationQuery, CalculationQueryError,
};

#[derive(Clone)]
pub struct CalculationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CalculationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalculationQuery for CalculationQueryPostgres {
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Calculation>, CalculationQueryError> {
        let owner_uuid: Uuid = owner.into();

        let rows = Entity::find()
            .filter(Column::UserId.eq(owner_uuid))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CalculationQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_calculation).collect())
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        calculation_id: i32,
    ) -> Result<Option<Calculation>, CalculationQueryError> {
        let owner_uuid: Uuid = owner.into();

        let row = Entity::find_by_id(calculation_id)
            .filter(Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(|e| CalculationQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(model_to_calculation))
    }
}
