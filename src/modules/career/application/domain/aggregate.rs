use std::collections::HashSet;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::catalog::application::domain::{Course, Job, PopulatedRole, Role, Stream, SubDomain};
use crate::progress::application::domain::{CourseProgress, CourseProgressList};

/// A course as seen by one user: the catalog record plus that user's progress, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseWithProgress {
    #[serde(flatten)]
    pub course: Course,
    pub progress: Option<CourseProgress>,
}

/// Serializes as the role's own fields, with `subDomain` holding the loaded
/// sub-domain, next to `courses` and `jobs`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDetails {
    pub role: Role,
    pub sub_domain: Option<SubDomain>,
    pub courses: Vec<CourseWithProgress>,
    pub jobs: Vec<Job>,
}

#[derive(Serialize)]
struct RoleDetailsDto<'a> {
    #[serde(flatten)]
    role: PopulatedRole<'a, &'a Option<SubDomain>>,
    courses: &'a [CourseWithProgress],
    jobs: &'a [Job],
}

impl Serialize for RoleDetails {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RoleDetailsDto {
            role: PopulatedRole::new(&self.role, &self.sub_domain),
            courses: &self.courses,
            jobs: &self.jobs,
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStreamCourses {
    pub stream: Stream,
    pub sub_stream: SubDomain,
    pub roles: Vec<Role>,
    pub courses: Vec<CourseWithProgress>,
    pub jobs: Vec<Job>,
}

/// Concatenates `linked` and `skill_matched`, keeping only the first
/// occurrence of each course id.
pub fn merge_unique_courses(linked: Vec<Course>, skill_matched: Vec<Course>) -> Vec<Course> {
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(linked.len() + skill_matched.len());
    linked
        .into_iter()
        .chain(skill_matched)
        .filter(|course| seen.insert(course.id))
        .collect()
}

pub fn annotate_progress(
    courses: Vec<Course>,
    progress: &CourseProgressList,
) -> Vec<CourseWithProgress> {
    courses
        .into_iter()
        .map(|course| {
            let progress = progress.get(&course.id).cloned();
            CourseWithProgress { course, progress }
        })
        .collect()
}
