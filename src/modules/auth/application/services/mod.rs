pub mod account;
pub mod login_logs;
pub mod user_profile;

#[cfg(test)]
pub(crate) mod fakes;
