mod career_query;

pub use career_query::{CareerQuery, CareerQueryError};
