use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::sea_orm_entity::{roles, streams, sub_domains, RowDecodeError};
use crate::catalog::application::domain::{RoleView, StreamWithSubDomains, SubDomain};
use crate::catalog::application::ports::outgoing::{CatalogQuery, CatalogQueryError};

#[derive(Clone, Debug)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}

fn map_decode_err(e: RowDecodeError) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}

fn decode_all(models: &[sub_domains::Model]) -> Result<Vec<SubDomain>, CatalogQueryError> {
    models
        .iter()
        .map(|m| m.to_domain().map_err(map_decode_err))
        .collect()
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn streams_with_sub_domains(
        &self,
    ) -> Result<Vec<StreamWithSubDomains>, CatalogQueryError> {
        let stream_models = streams::Entity::find()
            .order_by_asc(streams::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let sub_domain_models = sub_domains::Entity::find()
            .order_by_asc(sub_domains::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut grouped: HashMap<Uuid, Vec<SubDomain>> = HashMap::new();
        for sub_domain in decode_all(&sub_domain_models)? {
            grouped
                .entry(sub_domain.stream_id)
                .or_default()
                .push(sub_domain);
        }

        Ok(stream_models
            .iter()
            .map(|model| StreamWithSubDomains {
                stream: model.to_domain(),
                sub_domains: grouped.remove(&model.id).unwrap_or_default(),
            })
            .collect())
    }

    async fn career_path(
        &self,
        stream_id: Uuid,
    ) -> Result<Option<StreamWithSubDomains>, CatalogQueryError> {
        let Some(stream) = streams::Entity::find_by_id(stream_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let sub_domain_models = sub_domains::Entity::find()
            .filter(sub_domains::Column::StreamId.eq(stream_id))
            .order_by_asc(sub_domains::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(StreamWithSubDomains {
            stream: stream.to_domain(),
            sub_domains: decode_all(&sub_domain_models)?,
        }))
    }

    async fn roles_by_sub_domain(
        &self,
        sub_domain_id: Uuid,
    ) -> Result<Vec<RoleView>, CatalogQueryError> {
        let role_models = roles::Entity::find()
            .filter(roles::Column::SubDomainId.eq(sub_domain_id))
            .order_by_asc(roles::Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if role_models.is_empty() {
            return Ok(Vec::new());
        }

        let sub_domain = sub_domains::Entity::find_by_id(sub_domain_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
            .map_err(map_decode_err)?;

        role_models
            .iter()
            .map(|model| {
                Ok(RoleView {
                    role: model.to_domain().map_err(map_decode_err)?,
                    sub_domain: sub_domain.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn streams_embed_their_own_sub_domains() {
        let cse = Uuid::new_v4();
        let ece = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                streams::Model::fixture(cse, "Computer Science & Engineering", "cse"),
                streams::Model::fixture(ece, "Electronics & Communication", "ece"),
            ]])
            .append_query_results(vec![vec![
                sub_domains::Model::fixture(Uuid::new_v4(), cse, "CSE - Cyber Security", "cse-cyber-security"),
                sub_domains::Model::fixture(Uuid::new_v4(), cse, "CSE - Data Science", "cse-data-science"),
            ]])
            .into_connection();

        let query = CatalogQueryPostgres::new(Arc::new(db));
        let streams = query.streams_with_sub_domains().await.unwrap();

        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].sub_domains.len(), 2);
        assert!(streams[1].sub_domains.is_empty());
    }

    #[tokio::test]
    async fn career_path_of_missing_stream_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<streams::Model>::new()])
            .into_connection();

        let query = CatalogQueryPostgres::new(Arc::new(db));

        assert_eq!(query.career_path(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn roles_carry_their_sub_domain() {
        let stream_id = Uuid::new_v4();
        let sub_domain_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![roles::Model::fixture(
                Uuid::new_v4(),
                sub_domain_id,
                "Blockchain Developer",
                &["Blockchain"],
            )]])
            .append_query_results(vec![vec![sub_domains::Model::fixture(
                sub_domain_id,
                stream_id,
                "CSE - Cyber Security",
                "cse-cyber-security",
            )]])
            .into_connection();

        let query = CatalogQueryPostgres::new(Arc::new(db));
        let roles = query.roles_by_sub_domain(sub_domain_id).await.unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].sub_domain.as_ref().unwrap().id, sub_domain_id);
    }
}
