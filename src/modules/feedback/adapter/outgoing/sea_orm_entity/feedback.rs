use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::feedback::application::domain::{Feedback, Rating, RatingOutOfRange};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub comment: String,
    pub rating: i16,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Feedback, RatingOutOfRange> {
        Ok(Feedback {
            id: self.id,
            user: UserId::from(self.user_id),
            comment: self.comment.clone(),
            rating: Rating::new(self.rating.into())?,
            created_at: self.created_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
