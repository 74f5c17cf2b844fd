mod get_role_details;
mod get_sub_stream_courses;

pub use get_role_details::*;
pub use get_sub_stream_courses::*;
