use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::db_errors::{
    ensure_deleted, map_decode_err, map_delete_err, map_encode_err, map_read_err, map_write_err,
};
use super::sea_orm_entity::{roles, streams, sub_domains};
use crate::catalog::application::domain::{Role, RoleAdminView, SubDomainView};
use crate::catalog::application::ports::outgoing::{
    CatalogRepositoryError, RoleData, RoleRepository,
};

#[derive(Clone, Debug)]
pub struct RoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Sub-domains by id, each with its stream attached.
    async fn sub_domain_views(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, SubDomainView>, CatalogRepositoryError> {
        let sub_domain_models = sub_domains::Entity::find()
            .filter(sub_domains::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        if sub_domain_models.is_empty() {
            return Ok(HashMap::new());
        }

        let stream_ids: Vec<Uuid> = sub_domain_models.iter().map(|m| m.stream_id).collect();
        let streams: HashMap<Uuid, _> = streams::Entity::find()
            .filter(streams::Column::Id.is_in(stream_ids))
            .all(&*self.db)
            .await
            .map_err(map_read_err)?
            .iter()
            .map(|s| (s.id, s.to_domain()))
            .collect();

        sub_domain_models
            .iter()
            .map(|model| {
                let view = SubDomainView {
                    sub_domain: model.to_domain().map_err(map_decode_err)?,
                    stream: streams.get(&model.stream_id).cloned(),
                };
                Ok((model.id, view))
            })
            .collect()
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn list(&self) -> Result<Vec<RoleAdminView>, CatalogRepositoryError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let sub_domains = self
            .sub_domain_views(models.iter().map(|m| m.sub_domain_id).collect())
            .await?;

        models
            .iter()
            .map(|model| {
                Ok(RoleAdminView {
                    role: model.to_domain().map_err(map_decode_err)?,
                    sub_domain: sub_domains.get(&model.sub_domain_id).cloned(),
                })
            })
            .collect()
    }

    async fn create(&self, data: RoleData) -> Result<Role, CatalogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = roles::ActiveModel {
            id: Set(Uuid::new_v4()),
            sub_domain_id: Set(data.sub_domain_id),
            title: Set(data.title),
            description: Set(data.description),
            skills: Set(serde_json::to_value(&data.skills).map_err(map_encode_err)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        inserted.to_domain().map_err(map_decode_err)
    }

    async fn update(&self, id: Uuid, data: RoleData) -> Result<Role, CatalogRepositoryError> {
        let changes = roles::ActiveModel {
            sub_domain_id: Set(data.sub_domain_id),
            title: Set(data.title),
            description: Set(data.description),
            skills: Set(serde_json::to_value(&data.skills).map_err(map_encode_err)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let rows: Vec<roles::Model> = roles::Entity::update_many()
            .set(changes)
            .filter(roles::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        rows.first()
            .ok_or(CatalogRepositoryError::NotFound)?
            .to_domain()
            .map_err(map_decode_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError> {
        let result = roles::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        ensure_deleted(result)
    }
}
