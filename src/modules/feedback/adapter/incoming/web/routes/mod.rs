mod list_feedback;
mod submit_feedback;

pub use list_feedback::*;
pub use submit_feedback::*;
