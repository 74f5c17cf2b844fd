mod get_role_details_service;
mod get_sub_stream_courses_service;

#[cfg(test)]
mod in_memory_career_query;

pub use get_role_details_service::GetRoleDetailsService;
pub use get_sub_stream_courses_service::GetSubStreamCoursesService;
