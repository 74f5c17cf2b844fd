use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::career::application::ports::outgoing::{CareerQuery, CareerQueryError};
use crate::catalog::adapter::outgoing::sea_orm_entity::{
    courses, jobs, roles, streams, sub_domains, RowDecodeError,
};
use crate::catalog::application::domain::{Course, Job, Role, Stream, SubDomain};
use crate::progress::application::domain::CourseProgressList;

#[derive(Clone, Debug)]
pub struct CareerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CareerQueryError {
    CareerQueryError::DatabaseError(e.to_string())
}

fn map_decode_err(e: RowDecodeError) -> CareerQueryError {
    CareerQueryError::DatabaseError(e.to_string())
}

fn decode_courses(models: &[courses::Model]) -> Result<Vec<Course>, CareerQueryError> {
    models
        .iter()
        .map(|m| m.to_domain().map_err(map_decode_err))
        .collect()
}

#[async_trait]
impl CareerQuery for CareerQueryPostgres {
    async fn role(&self, role_id: Uuid) -> Result<Option<Role>, CareerQueryError> {
        roles::Entity::find_by_id(role_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
            .map_err(map_decode_err)
    }

    async fn sub_domain(&self, sub_domain_id: Uuid) -> Result<Option<SubDomain>, CareerQueryError> {
        sub_domains::Entity::find_by_id(sub_domain_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
            .map_err(map_decode_err)
    }

    async fn courses_linked_to_role(&self, role_id: Uuid) -> Result<Vec<Course>, CareerQueryError> {
        let models = courses::Entity::find()
            .filter(courses::Column::RoleId.eq(role_id))
            .order_by_asc(courses::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_courses(&models)
    }

    async fn courses_with_skills(&self, skills: &[String]) -> Result<Vec<Course>, CareerQueryError> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }

        let models = courses::Entity::find()
            .filter(courses::Column::Skill.is_in(skills.iter().cloned()))
            .order_by_asc(courses::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_courses(&models)
    }

    async fn jobs_for_roles(&self, role_ids: &[Uuid]) -> Result<Vec<Job>, CareerQueryError> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = jobs::Entity::find()
            .filter(jobs::Column::RoleId.is_in(role_ids.iter().copied()))
            .order_by_desc(jobs::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(jobs::Model::to_domain).collect())
    }

    async fn stream_by_slug(&self, slug: &str) -> Result<Option<Stream>, CareerQueryError> {
        let model = streams::Entity::find()
            .filter(streams::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn sub_domain_by_slug(
        &self,
        stream_id: Uuid,
        slug: &str,
    ) -> Result<Option<SubDomain>, CareerQueryError> {
        sub_domains::Entity::find()
            .filter(sub_domains::Column::StreamId.eq(stream_id))
            .filter(sub_domains::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
            .map_err(map_decode_err)
    }

    async fn roles_in_sub_domain(&self, sub_domain_id: Uuid) -> Result<Vec<Role>, CareerQueryError> {
        let models = roles::Entity::find()
            .filter(roles::Column::SubDomainId.eq(sub_domain_id))
            .order_by_asc(roles::Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .iter()
            .map(|m| m.to_domain().map_err(map_decode_err))
            .collect()
    }

    async fn courses_for_sub_domain(
        &self,
        sub_domain_id: Uuid,
        role_ids: &[Uuid],
    ) -> Result<Vec<Course>, CareerQueryError> {
        let mut scope = Condition::any().add(courses::Column::SubDomainId.eq(sub_domain_id));
        if !role_ids.is_empty() {
            scope = scope.add(courses::Column::RoleId.is_in(role_ids.iter().copied()));
        }

        let models = courses::Entity::find()
            .filter(scope)
            .order_by_desc(courses::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_courses(&models)
    }

    async fn course_progress(
        &self,
        user_id: UserId,
    ) -> Result<Option<CourseProgressList>, CareerQueryError> {
        let Some(user) = users::Entity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        user.course_progress()
            .map(Some)
            .map_err(|e| CareerQueryError::DatabaseError(format!("Invalid course progress: {e}")))
    }
}
