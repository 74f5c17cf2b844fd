mod get_role_details;
mod get_sub_stream_courses;

pub use get_role_details::{GetRoleDetailsError, GetRoleDetailsUseCase};
pub use get_sub_stream_courses::{
    GetSubStreamCoursesError, GetSubStreamCoursesQuery, GetSubStreamCoursesUseCase,
};
