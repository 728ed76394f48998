//! CLI command implementations

use anyhow::Result;
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::fs;
use std::path::Path;

use crate::cli::{error, info, success, warn};
use crate::config::{self, loader::CONFIG_FILENAME, Config};
use crate::ui::Site;

/// Initialize a new nakvaksin.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() {
        warn(&format!("{} already exists", CONFIG_FILENAME));
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success(&format!("Created {}", CONFIG_FILENAME));
    info("Edit the configuration file and run 'nakvaksin serve' to start the server");

    Ok(())
}

/// Start the HTTP server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = load_config()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting server at http://{}:{}", host, port));

    if let Err(e) = crate::api::run_server(config, &host, port).await {
        error(&format!("Server stopped: {}", e));
        return Err(e.into());
    }
    Ok(())
}

/// Render the landing page to stdout
pub async fn render(profile: Option<String>) -> Result<()> {
    let config = load_config()?;
    let headers = session_headers(&config.site.session_cookie, profile.as_deref())?;

    let site = Site::new(config.site)?;
    println!("{}", site.home(&headers)?);
    Ok(())
}

/// Request headers carrying `profile` in the session cookie, as a browser would send them
fn session_headers(cookie_name: &str, profile: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(profile) = profile {
        let cookie = format!(
            "{}={}",
            cookie_name,
            utf8_percent_encode(profile, NON_ALPHANUMERIC)
        );
        headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(headers)
}

fn load_config() -> Result<Config> {
    Ok(config::load_config_or_default()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::read_session;

    #[test]
    fn test_session_headers_roundtrip_through_cookie() {
        let headers =
            session_headers("userProfile", Some(r#"{"id":"u-1","name":"Siti; Nur"}"#)).unwrap();
        let profile = read_session(&headers, "userProfile").unwrap().unwrap();
        assert_eq!(profile.name(), Some("Siti; Nur"));
    }

    #[test]
    fn test_session_headers_without_profile() {
        let headers = session_headers("userProfile", None).unwrap();
        assert!(headers.get(COOKIE).is_none());
    }
}
