use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::db_errors::{
    ensure_deleted, map_decode_err, map_encode_err, map_read_err, map_write_err,
};
use super::sea_orm_entity::courses::{ActiveModel, Column, Entity, Model};
use crate::catalog::application::domain::Course;
use crate::catalog::application::ports::outgoing::{
    CatalogRepositoryError, CourseData, CourseRepository,
};

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Every column except `id` and `created_at`.
fn columns_from(data: CourseData) -> Result<ActiveModel, CatalogRepositoryError> {
    Ok(ActiveModel {
        title: Set(data.title),
        slug: Set(data.slug),
        skill: Set(data.skill),
        stream_id: Set(data.stream_id),
        sub_domain_id: Set(data.sub_domain_id),
        role_id: Set(data.role_id),
        course_type: Set(data.pricing.course_type().as_str().to_string()),
        amount: Set(data.pricing.amount()),
        provider: Set(data.provider),
        duration: Set(data.duration),
        link: Set(data.link),
        description: Set(data.description),
        resource_links: Set(serde_json::to_value(&data.resource_links).map_err(map_encode_err)?),
        certificate_links: Set(
            serde_json::to_value(&data.certificate_links).map_err(map_encode_err)?,
        ),
        target_companies: Set(
            serde_json::to_value(&data.target_companies).map_err(map_encode_err)?,
        ),
        level: Set(data.level.as_str().to_string()),
        is_featured: Set(data.is_featured),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Course>, CatalogRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        models
            .iter()
            .map(|m| m.to_domain().map_err(map_decode_err))
            .collect()
    }

    async fn create(&self, data: CourseData) -> Result<Course, CatalogRepositoryError> {
        let mut model = columns_from(data)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        inserted.to_domain().map_err(map_decode_err)
    }

    async fn update(&self, id: Uuid, data: CourseData) -> Result<Course, CatalogRepositoryError> {
        let rows: Vec<Model> = Entity::update_many()
            .set(columns_from(data)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        rows.first()
            .ok_or(CatalogRepositoryError::NotFound)?
            .to_domain()
            .map_err(map_decode_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError> {
        // progress entries pointing at the course simply resolve to null afterwards
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_read_err)?;

        ensure_deleted(result)
    }
}
