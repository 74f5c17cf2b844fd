mod list_feedback;
mod submit_feedback;

pub use list_feedback::ListFeedbackService;
pub use submit_feedback::SubmitFeedbackService;
