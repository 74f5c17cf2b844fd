mod track_course_progress;
mod update_skill_progress;

pub use track_course_progress::*;
pub use update_skill_progress::*;
