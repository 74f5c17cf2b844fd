use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::progress::application::domain::{SkillLevel, SkillProgress};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateSkillProgressCommandError {
    #[error("Skill is required")]
    EmptySkill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSkillProgressCommand {
    skill: String,
    level: SkillLevel,
}

impl UpdateSkillProgressCommand {
    pub fn new(skill: &str, level: SkillLevel) -> Result<Self, UpdateSkillProgressCommandError> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(UpdateSkillProgressCommandError::EmptySkill);
        }

        Ok(Self {
            skill: skill.to_string(),
            level,
        })
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateSkillProgressError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Sets the caller's level for one skill and returns the whole skill list.
#[async_trait]
pub trait UpdateSkillProgressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateSkillProgressCommand,
    ) -> Result<Vec<SkillProgress>, UpdateSkillProgressError>;
}
