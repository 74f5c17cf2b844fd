use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{LoginLog, LoginStatus, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "login_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub email: String,
    pub user_name: String,
    pub login_time: DateTimeWithTimeZone,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: String,
    pub failure_reason: Option<String>,
}

impl Model {
    pub fn to_domain(&self) -> LoginLog {
        LoginLog {
            id: self.id,
            user: self.user_id.map(UserId::from),
            email: self.email.clone(),
            user_name: self.user_name.clone(),
            login_time: self.login_time.into(),
            ip_address: self.ip_address.clone(),
            user_agent: self.user_agent.clone(),
            status: self.status.parse().unwrap_or(LoginStatus::Failed),
            failure_reason: self.failure_reason.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
