pub mod domain;
pub mod feedback_use_cases;
pub mod ports;
pub mod services;
