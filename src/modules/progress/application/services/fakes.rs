//! In-memory progress store for service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    CourseProgressView, UserProfileQuery, UserProfileView, UserQueryError,
};
use crate::progress::application::domain::{CourseProgressList, SkillProgressList};
use crate::progress::application::ports::outgoing::{
    UserProgressRepository, UserProgressRepositoryError,
};

#[derive(Default)]
struct State {
    skills: HashMap<UserId, SkillProgressList>,
    courses: HashMap<UserId, CourseProgressList>,
    catalog: Vec<Uuid>,
    fail_writes: bool,
}

/// Backs `UserProgressRepository` and `UserProfileQuery` with the same maps.
#[derive(Clone, Default)]
pub struct FakeProgressStore {
    state: Arc<Mutex<State>>,
}

impl FakeProgressStore {
    pub fn with_user(self, user_id: UserId) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.skills.insert(user_id, SkillProgressList::new());
            state.courses.insert(user_id, CourseProgressList::new());
        }
        self
    }

    pub fn with_course(self, course_id: Uuid) -> Self {
        self.state.lock().unwrap().catalog.push(course_id);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.state.lock().unwrap().fail_writes = true;
        self
    }

    pub fn skills_of(&self, user_id: UserId) -> SkillProgressList {
        self.state.lock().unwrap().skills[&user_id].clone()
    }

    pub fn courses_of(&self, user_id: UserId) -> CourseProgressList {
        self.state.lock().unwrap().courses[&user_id].clone()
    }
}

#[async_trait]
impl UserProgressRepository for FakeProgressStore {
    async fn skill_progress(
        &self,
        user_id: UserId,
    ) -> Result<SkillProgressList, UserProgressRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .skills
            .get(&user_id)
            .cloned()
            .ok_or(UserProgressRepositoryError::UserNotFound)
    }

    async fn save_skill_progress(
        &self,
        user_id: UserId,
        progress: &SkillProgressList,
    ) -> Result<(), UserProgressRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(UserProgressRepositoryError::DatabaseError("disk full".into()));
        }
        match state.skills.get_mut(&user_id) {
            Some(list) => {
                *list = progress.clone();
                Ok(())
            }
            None => Err(UserProgressRepositoryError::UserNotFound),
        }
    }

    async fn course_progress(
        &self,
        user_id: UserId,
    ) -> Result<CourseProgressList, UserProgressRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .courses
            .get(&user_id)
            .cloned()
            .ok_or(UserProgressRepositoryError::UserNotFound)
    }

    async fn save_course_progress(
        &self,
        user_id: UserId,
        progress: &CourseProgressList,
    ) -> Result<(), UserProgressRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(UserProgressRepositoryError::DatabaseError("disk full".into()));
        }
        match state.courses.get_mut(&user_id) {
            Some(list) => {
                *list = progress.clone();
                Ok(())
            }
            None => Err(UserProgressRepositoryError::UserNotFound),
        }
    }

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, UserProgressRepositoryError> {
        Ok(self.state.lock().unwrap().catalog.contains(&course_id))
    }
}

#[async_trait]
impl UserProfileQuery for FakeProgressStore {
    async fn profile(&self, user_id: UserId) -> Result<Option<UserProfileView>, UserQueryError> {
        let state = self.state.lock().unwrap();
        let (Some(skills), Some(courses)) = (state.skills.get(&user_id), state.courses.get(&user_id))
        else {
            return Ok(None);
        };

        Ok(Some(UserProfileView {
            id: user_id,
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            role: UserRole::User,
            avatar: String::new(),
            stream: None,
            skill_progress: skills.entries().to_vec(),
            course_progress: courses
                .entries()
                .iter()
                .map(|entry| CourseProgressView::resolve(entry, None))
                .collect(),
            created_at: Utc::now(),
        }))
    }
}
