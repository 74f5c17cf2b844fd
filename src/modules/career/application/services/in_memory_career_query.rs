use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::career::application::ports::outgoing::{CareerQuery, CareerQueryError};
use crate::catalog::application::domain::{
    Course, CourseLevel, Job, Pricing, Role, Stream, SubDomain,
};
use crate::progress::application::domain::CourseProgressList;

/// Catalog held in vectors, filtered the same way the Postgres query filters rows.
#[derive(Default)]
pub struct InMemoryCareerQuery {
    pub streams: Vec<Stream>,
    pub sub_domains: Vec<SubDomain>,
    pub roles: Vec<Role>,
    pub courses: Vec<Course>,
    pub jobs: Vec<Job>,
    pub progress: Option<CourseProgressList>,
    pub fail: bool,
}

impl InMemoryCareerQuery {
    fn check(&self) -> Result<(), CareerQueryError> {
        if self.fail {
            return Err(CareerQueryError::DatabaseError("connection lost".into()));
        }
        Ok(())
    }
}

fn newest_first<T, F>(mut items: Vec<T>, created: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<Utc>,
{
    items.sort_by_key(|item| std::cmp::Reverse(created(item)));
    items
}

#[async_trait]
impl CareerQuery for InMemoryCareerQuery {
    async fn role(&self, role_id: Uuid) -> Result<Option<Role>, CareerQueryError> {
        self.check()?;
        Ok(self.roles.iter().find(|r| r.id == role_id).cloned())
    }

    async fn sub_domain(&self, sub_domain_id: Uuid) -> Result<Option<SubDomain>, CareerQueryError> {
        self.check()?;
        Ok(self
            .sub_domains
            .iter()
            .find(|s| s.id == sub_domain_id)
            .cloned())
    }

    async fn courses_linked_to_role(&self, role_id: Uuid) -> Result<Vec<Course>, CareerQueryError> {
        self.check()?;
        Ok(self
            .courses
            .iter()
            .filter(|c| c.role_id == Some(role_id))
            .cloned()
            .collect())
    }

    async fn courses_with_skills(&self, skills: &[String]) -> Result<Vec<Course>, CareerQueryError> {
        self.check()?;
        Ok(self
            .courses
            .iter()
            .filter(|c| skills.contains(&c.skill))
            .cloned()
            .collect())
    }

    async fn jobs_for_roles(&self, role_ids: &[Uuid]) -> Result<Vec<Job>, CareerQueryError> {
        self.check()?;
        let jobs = self
            .jobs
            .iter()
            .filter(|j| role_ids.contains(&j.role_id))
            .cloned()
            .collect();
        Ok(newest_first(jobs, |j: &Job| j.created_at))
    }

    async fn stream_by_slug(&self, slug: &str) -> Result<Option<Stream>, CareerQueryError> {
        self.check()?;
        Ok(self.streams.iter().find(|s| s.slug == slug).cloned())
    }

    async fn sub_domain_by_slug(
        &self,
        stream_id: Uuid,
        slug: &str,
    ) -> Result<Option<SubDomain>, CareerQueryError> {
        self.check()?;
        Ok(self
            .sub_domains
            .iter()
            .find(|s| s.stream_id == stream_id && s.slug == slug)
            .cloned())
    }

    async fn roles_in_sub_domain(&self, sub_domain_id: Uuid) -> Result<Vec<Role>, CareerQueryError> {
        self.check()?;
        Ok(self
            .roles
            .iter()
            .filter(|r| r.sub_domain_id == sub_domain_id)
            .cloned()
            .collect())
    }

    async fn courses_for_sub_domain(
        &self,
        sub_domain_id: Uuid,
        role_ids: &[Uuid],
    ) -> Result<Vec<Course>, CareerQueryError> {
        self.check()?;
        let courses = self
            .courses
            .iter()
            .filter(|c| {
                c.sub_domain_id == Some(sub_domain_id)
                    || c.role_id.is_some_and(|r| role_ids.contains(&r))
            })
            .cloned()
            .collect();
        Ok(newest_first(courses, |c: &Course| c.created_at))
    }

    async fn course_progress(
        &self,
        _user_id: UserId,
    ) -> Result<Option<CourseProgressList>, CareerQueryError> {
        self.check()?;
        Ok(self.progress.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog builders
// ──────────────────────────────────────────────────────────
//

/// Creation times grow with `n`, so a higher `n` is newer.
fn at(n: u128) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n as i64)
}

pub fn stream(n: u128, slug: &str) -> Stream {
    Stream {
        id: Uuid::from_u128(n),
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        description: String::new(),
        created_at: at(n),
        updated_at: at(n),
    }
}

pub fn sub_domain(n: u128, stream_id: Uuid, slug: &str) -> SubDomain {
    SubDomain {
        id: Uuid::from_u128(n),
        stream_id,
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        recommended_certifications: vec![],
        created_at: at(n),
        updated_at: at(n),
    }
}

pub fn role(n: u128, sub_domain_id: Uuid, title: &str, skills: &[&str]) -> Role {
    Role {
        id: Uuid::from_u128(n),
        sub_domain_id,
        title: title.to_string(),
        description: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        created_at: at(n),
        updated_at: at(n),
    }
}

pub fn course(n: u128, skill: &str) -> Course {
    Course {
        id: Uuid::from_u128(n),
        title: format!("{skill} #{n}"),
        slug: format!("{}-{n}", skill.to_lowercase()),
        skill: skill.to_string(),
        stream_id: None,
        sub_domain_id: None,
        role_id: None,
        pricing: Pricing::Free,
        provider: "Coursera".into(),
        duration: None,
        link: "https://example.com".into(),
        description: None,
        resource_links: vec![],
        certificate_links: vec![],
        target_companies: vec![],
        level: CourseLevel::Beginner,
        is_featured: false,
        created_at: at(n),
        updated_at: at(n),
    }
}

pub fn job(n: u128, role_id: Uuid) -> Job {
    Job {
        id: Uuid::from_u128(n),
        role_id,
        title: format!("Job #{n}"),
        company: "Polygon".into(),
        salary_range: "12-18 LPA".into(),
        location: None,
        link: None,
        description: None,
        created_at: at(n),
        updated_at: at(n),
    }
}
