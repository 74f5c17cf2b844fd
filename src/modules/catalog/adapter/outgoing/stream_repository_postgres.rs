use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::db_errors::{ensure_deleted, map_delete_err, map_read_err, map_write_err};
use super::sea_orm_entity::streams::{ActiveModel, Column, Entity, Model};
use crate::catalog::application::domain::Stream;
use crate::catalog::application::ports::outgoing::{
    CatalogRepositoryError, StreamData, StreamRepository,
};

#[derive(Clone, Debug)]
pub struct StreamRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StreamRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StreamRepository for StreamRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Stream>, CatalogRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        Ok(models.iter().map(Model::to_domain).collect())
    }

    async fn create(&self, data: StreamData) -> Result<Stream, CatalogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(&self, id: Uuid, data: StreamData) -> Result<Stream, CatalogRepositoryError> {
        let changes = ActiveModel {
            name: Set(data.name),
            slug: Set(data.slug),
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
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        ensure_deleted(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn data() -> StreamData {
        StreamData {
            name: "Electronics & Communication".into(),
            slug: "ece".into(),
            description: "Circuits and signals".into(),
        }
    }

    #[tokio::test]
    async fn create_returns_inserted_stream() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![Model::fixture(id, "Electronics & Communication", "ece")]])
            .into_connection();

        let repo = StreamRepositoryPostgres::new(Arc::new(db));
        let stream = repo.create(data()).await.unwrap();

        assert_eq!(stream.id, id);
        assert_eq!(stream.slug, "ece");
    }

    #[tokio::test]
    async fn duplicate_slug_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_streams_slug\"".into(),
            ))])
            .into_connection();

        let repo = StreamRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(data()).await;

        assert_eq!(result, Err(CatalogRepositoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn update_missing_stream_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = StreamRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), data()).await;

        assert_eq!(result, Err(CatalogRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_with_sub_domains_has_dependents() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal(
                "update or delete on table \"streams\" violates foreign key constraint".into(),
            ))])
            .into_connection();

        let repo = StreamRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert_eq!(result, Err(CatalogRepositoryError::HasDependents));
    }

    #[tokio::test]
    async fn delete_existing_stream() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = StreamRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.delete(Uuid::new_v4()).await, Ok(()));
    }
}
