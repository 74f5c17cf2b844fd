use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::progress::application::domain::SkillProgress;
use crate::progress::application::ports::{
    incoming::use_cases::{
        UpdateSkillProgressCommand, UpdateSkillProgressError, UpdateSkillProgressUseCase,
    },
    outgoing::{UserProgressRepository, UserProgressRepositoryError},
};

pub struct UpdateSkillProgressService<R>
where
    R: UserProgressRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSkillProgressService<R>
where
    R: UserProgressRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<UserProgressRepositoryError> for UpdateSkillProgressError {
    fn from(err: UserProgressRepositoryError) -> Self {
        match err {
            UserProgressRepositoryError::UserNotFound => UpdateSkillProgressError::UserNotFound,
            UserProgressRepositoryError::DatabaseError(msg) => {
                UpdateSkillProgressError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
impl<R> UpdateSkillProgressUseCase for UpdateSkillProgressService<R>
where
    R: UserProgressRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateSkillProgressCommand,
    ) -> Result<Vec<SkillProgress>, UpdateSkillProgressError> {
        let mut progress = self.repository.skill_progress(user_id).await?;
        progress.upsert(command.skill(), command.level());
        self.repository.save_skill_progress(user_id, &progress).await?;

        debug!(user_id = %user_id, skill = %command.skill(), level = %command.level(), "Skill progress saved");

        Ok(progress.entries().to_vec())
    }
}
