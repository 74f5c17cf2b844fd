pub mod course_progress;
pub mod skill_progress;

pub use course_progress::{
    CompletionPercentage, CourseProgress, CourseProgressList, InvalidCompletionPercentage,
};
pub use skill_progress::{InvalidSkillLevel, SkillLevel, SkillProgress, SkillProgressList};
