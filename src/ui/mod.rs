//! Server-rendered landing page

pub mod assets;
pub mod components;
pub mod handlers;
pub mod page;

pub use handlers::{home, static_asset};
pub use page::{LandingPage, Site};
