//! Session detection from the inbound request

pub mod cookie;
pub mod models;

pub use cookie::{cookie_value, read_session};
pub use models::UserProfile;
