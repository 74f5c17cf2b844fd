mod aggregate;

pub use aggregate::{
    annotate_progress, merge_unique_courses, CourseWithProgress, RoleDetails, SubStreamCourses,
};
