//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Config;

pub const CONFIG_FILENAME: &str = "nakvaksin.toml";

/// Load configuration from nakvaksin.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config_or_default() -> Result<Config> {
    match load_config() {
        Ok(config) => Ok(config),
        Err(Error::ConfigNotFound) => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::ConfigNotFound,
        _ => Error::Io(e),
    })?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Save configuration to a specific path
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // Compile-time constant pattern; a failure here is a bug, not a runtime condition
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# NakVaksin landing page configuration

[server]
host = "${NAKVAKSIN_HOST:-0.0.0.0}"
port = 3000

[site]
name = "NakVaksin"
# Cookie set by the login flow with the serialized user profile
session_cookie = "userProfile"
dashboard_path = "/dashboard"
login_path = "/login"
logout_path = "/logout"
github_url = "https://github.com/nakvaksin"
# "fail" answers a malformed session cookie with a server error,
# "signed_out" ignores it and renders the signed-out page
malformed_session = "fail"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MalformedSessionPolicy;

    #[test]
    fn test_env_interpolation() {
        env::set_var("NAKVAKSIN_TEST_VAR", "hello");
        let content = "value = \"${NAKVAKSIN_TEST_VAR}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"hello\"");
        env::remove_var("NAKVAKSIN_TEST_VAR");
    }

    #[test]
    fn test_env_interpolation_with_default() {
        let content = "value = \"${NAKVAKSIN_NONEXISTENT_VAR:-default_value}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"default_value\"");
    }

    #[test]
    fn test_default_content_parses() {
        let content = interpolate_env_vars(default_config_content());
        let config: Config = toml::from_str(&content).expect("default config must parse");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.session_cookie, "userProfile");
        assert_eq!(config.site.malformed_session, MalformedSessionPolicy::Fail);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let mut config = Config::default();
        config.server.port = 8123;
        config.site.malformed_session = MalformedSessionPolicy::SignedOut;
        save_config(&config, &path).unwrap();

        let loaded = load_config_from_path(&path).unwrap();
        assert_eq!(loaded.server.port, 8123);
        assert_eq!(
            loaded.site.malformed_session,
            MalformedSessionPolicy::SignedOut
        );
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::create_dir(&path).unwrap();

        let result = load_config_from_path(&path);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound)));
    }
}
