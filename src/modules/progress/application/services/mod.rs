#[cfg(test)]
mod fakes;
mod track_course_progress;
mod update_skill_progress;

pub use track_course_progress::TrackCourseProgressService;
pub use update_skill_progress::UpdateSkillProgressService;
