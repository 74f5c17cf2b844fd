mod entities;

pub use entities::{Feedback, FeedbackAuthor, FeedbackWithAuthor, Rating, RatingOutOfRange};
