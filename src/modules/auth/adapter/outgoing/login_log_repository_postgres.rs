use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::login_logs::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::{LoginLog, LoginStatus};
use crate::auth::application::ports::outgoing::{
    LoginLogRepository, LoginLogRepositoryError, LoginStats, NewLoginLog,
};

#[derive(Clone, Debug)]
pub struct LoginLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LoginLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LoginLogRepository for LoginLogRepositoryPostgres {
    async fn record(&self, entry: NewLoginLog) -> Result<(), LoginLogRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(entry.user.map(|id| id.value())),
            email: Set(entry.email),
            user_name: Set(entry.user_name),
            login_time: Set(Utc::now().fixed_offset()),
            ip_address: Set(entry.ip_address),
            user_agent: Set(entry.user_agent),
            status: Set(entry.status.as_str().to_string()),
            failure_reason: Set(entry.failure_reason),
        };

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<LoginLog>, LoginLogRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::LoginTime)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn stats(&self) -> Result<LoginStats, LoginLogRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        let successful = Entity::find()
            .filter(Column::Status.eq(LoginStatus::Success.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(LoginStats {
            total,
            successful,
            failed: total.saturating_sub(successful),
        })
    }
}

fn map_db_err(e: DbErr) -> LoginLogRepositoryError {
    LoginLogRepositoryError::DatabaseError(e.to_string())
}
