pub mod api;
pub mod db_error;
pub mod slug;
