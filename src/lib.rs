//! NakVaksin - landing page server
//!
//! Renders the NakVaksin marketing page on the server, seeding the client
//! query cache with the signed-in user read from the session cookie.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod hydration;
pub mod session;
pub mod ui;

pub use config::Config;
pub use error::Error;
pub use session::UserProfile;
pub use ui::Site;
