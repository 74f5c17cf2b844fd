use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::db_errors::{ensure_deleted, map_read_err, map_write_err};
use super::sea_orm_entity::jobs::{ActiveModel, Column, Entity, Model};
use crate::catalog::application::domain::Job;
use crate::catalog::application::ports::outgoing::{CatalogRepositoryError, JobData, JobRepository};

#[derive(Clone, Debug)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Job>, CatalogRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        Ok(models.iter().map(Model::to_domain).collect())
    }

    async fn create(&self, data: JobData) -> Result<Job, CatalogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            role_id: Set(data.role_id),
            title: Set(data.title),
            company: Set(data.company),
            salary_range: Set(data.salary_range),
            location: Set(data.location),
            link: Set(data.link),
            description: Set(data.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(&self, id: Uuid, data: JobData) -> Result<Job, CatalogRepositoryError> {
        let changes = ActiveModel {
            role_id: Set(data.role_id),
            title: Set(data.title),
            company: Set(data.company),
            salary_range: Set(data.salary_range),
            location: Set(data.location),
            link: Set(data.link),
            description: Set(data.description),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let rows: Vec<Model> = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        rows.first()
            .map(Model::to_domain)
            .ok_or(CatalogRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError> {
        // nothing references a job
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_read_err)?;

        ensure_deleted(result)
    }
}
