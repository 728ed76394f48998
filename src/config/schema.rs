//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

/// Server configuration for the HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Landing page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Product name shown in the hero, header and footer
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Cookie carrying the serialized user profile
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,

    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_logout_path")]
    pub logout_path: String,

    #[serde(default = "default_github_url")]
    pub github_url: String,

    /// What to do when the session cookie cannot be parsed
    #[serde(default)]
    pub malformed_session: MalformedSessionPolicy,
}

fn default_site_name() -> String {
    "NakVaksin".to_string()
}

fn default_session_cookie() -> String {
    "userProfile".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_logout_path() -> String {
    "/logout".to_string()
}

fn default_github_url() -> String {
    "https://github.com/nakvaksin".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            session_cookie: default_session_cookie(),
            dashboard_path: default_dashboard_path(),
            login_path: default_login_path(),
            logout_path: default_logout_path(),
            github_url: default_github_url(),
            malformed_session: MalformedSessionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MalformedSessionPolicy {
    /// Fail the request with a server error
    #[default]
    Fail,
    /// Ignore the cookie and render the signed-out page
    SignedOut,
}
