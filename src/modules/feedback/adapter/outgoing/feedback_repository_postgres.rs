use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::feedback::{ActiveModel, Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::feedback::application::domain::{
    Feedback, FeedbackAuthor, FeedbackWithAuthor, RatingOutOfRange,
};
use crate::feedback::application::ports::outgoing::{
    FeedbackRepository, FeedbackRepositoryError, NewFeedback,
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

#[derive(Clone, Debug)]
pub struct FeedbackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> FeedbackRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::ForeignKey) => FeedbackRepositoryError::UnknownUser,
        _ => FeedbackRepositoryError::DatabaseError(e.to_string()),
    }
}

fn map_rating_err(e: RatingOutOfRange) -> FeedbackRepositoryError {
    FeedbackRepositoryError::DatabaseError(format!("Stored feedback is invalid: {e}"))
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryPostgres {
    async fn create(&self, data: NewFeedback) -> Result<Feedback, FeedbackRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user.value()),
            comment: Set(data.comment),
            rating: Set(data.rating.value().into()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        inserted.to_domain().map_err(map_rating_err)
    }

    async fn list_with_authors(&self) -> Result<Vec<FeedbackWithAuthor>, FeedbackRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<Uuid> = rows.iter().map(|r| r.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let authors: HashMap<Uuid, FeedbackAuthor> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    FeedbackAuthor {
                        name: u.name,
                        email: u.email,
                    },
                )
            })
            .collect();

        rows.iter()
            .map(|row| {
                let feedback = row.to_domain().map_err(map_rating_err)?;
                let author = authors.get(&row.user_id).cloned();
                Ok(FeedbackWithAuthor::new(feedback, author))
            })
            .collect()
    }
}
