mod fetch_profile;
mod select_stream;
mod update_details;

pub use fetch_profile::FetchProfileService;
pub use select_stream::SelectStreamService;
pub use update_details::UpdateDetailsService;
