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
use super::sea_orm_entity::{streams, sub_domains};
use crate::catalog::application::domain::{Certification, SubDomain, SubDomainView};
use crate::catalog::application::ports::outgoing::{
    CatalogRepositoryError, SubDomainData, SubDomainRepository,
};

#[derive(Clone, Debug)]
pub struct SubDomainRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubDomainRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_one(
        &self,
        id: Uuid,
        mut changes: sub_domains::ActiveModel,
    ) -> Result<SubDomain, CatalogRepositoryError> {
        changes.updated_at = Set(Utc::now().fixed_offset());

        let rows: Vec<sub_domains::Model> = sub_domains::Entity::update_many()
            .set(changes)
            .filter(sub_domains::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        rows.first()
            .ok_or(CatalogRepositoryError::NotFound)?
            .to_domain()
            .map_err(map_decode_err)
    }
}

fn certifications_json(
    certifications: &[Certification],
) -> Result<serde_json::Value, CatalogRepositoryError> {
    serde_json::to_value(certifications).map_err(map_encode_err)
}

#[async_trait]
impl SubDomainRepository for SubDomainRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SubDomainView>, CatalogRepositoryError> {
        let models = sub_domains::Entity::find()
            .order_by_asc(sub_domains::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_read_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let stream_ids: Vec<Uuid> = models.iter().map(|m| m.stream_id).collect();
        let streams: HashMap<Uuid, _> = streams::Entity::find()
            .filter(streams::Column::Id.is_in(stream_ids))
            .all(&*self.db)
            .await
            .map_err(map_read_err)?
            .iter()
            .map(|s| (s.id, s.to_domain()))
            .collect();

        models
            .iter()
            .map(|model| {
                Ok(SubDomainView {
                    sub_domain: model.to_domain().map_err(map_decode_err)?,
                    stream: streams.get(&model.stream_id).cloned(),
                })
            })
            .collect()
    }

    async fn create(&self, data: SubDomainData) -> Result<SubDomain, CatalogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = sub_domains::ActiveModel {
            id: Set(Uuid::new_v4()),
            stream_id: Set(data.stream_id),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            recommended_certifications: Set(certifications_json(&data.recommended_certifications)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        inserted.to_domain().map_err(map_decode_err)
    }

    async fn update(
        &self,
        id: Uuid,
        data: SubDomainData,
    ) -> Result<SubDomain, CatalogRepositoryError> {
        let changes = sub_domains::ActiveModel {
            stream_id: Set(data.stream_id),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            recommended_certifications: Set(certifications_json(&data.recommended_certifications)?),
            ..Default::default()
        };

        self.update_one(id, changes).await
    }

    async fn replace_certifications(
        &self,
        id: Uuid,
        certifications: Vec<Certification>,
    ) -> Result<SubDomain, CatalogRepositoryError> {
        let changes = sub_domains::ActiveModel {
            recommended_certifications: Set(certifications_json(&certifications)?),
            ..Default::default()
        };

        self.update_one(id, changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogRepositoryError> {
        let result = sub_domains::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        ensure_deleted(result)
    }
}
