//! Configuration management

use anyhow::Result;
use serde::Deserialize;

use crate::site::SiteContent;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Page content; any field left out keeps the built-in sample
    #[serde(default)]
    pub site: SiteContent,
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            site: SiteContent::default(),
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/portfolio-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("portfolio-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/portfolio-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("portfolio-site");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Prefixed variables with their own handling, kept out of the generic
/// environment source
const RESERVED_ENV: &[&str] = &["PORTFOLIO_PORT", "PORTFOLIO_CONFIG_DIR"];

fn parse_port(var: &str) -> Option<u16> {
    let value = std::env::var(var).ok()?;
    match value.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", var, value);
            None
        }
    }
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let env_vars: ::config::Map<String, String> = std::env::vars()
        .filter(|(key, _)| !RESERVED_ENV.contains(&key.as_str()))
        .collect();

    let mut builder = ::config::Config::builder()
        .set_default("port", i64::from(default_port()))?
        // config.toml / config.json / ... if present
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // PORTFOLIO_SITE__OWNER -> site.owner
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env_vars)),
        );

    // Port precedence: PORTFOLIO_PORT > PORT > config file > default.
    // An unparseable value falls through to the next one.
    // PORT is set by most container hosts.
    if let Some(port) = parse_port("PORTFOLIO_PORT").or_else(|| parse_port("PORT")) {
        builder = builder.set_override("port", i64::from(port))?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("PORTFOLIO_PORT");
        env::remove_var("PORT");
        env::remove_var("PORTFOLIO_SITE__OWNER");
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("PORTFOLIO_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.site, SiteContent::default());
    }

    #[test]
    #[serial]
    fn port_env_fallback() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn portfolio_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORTFOLIO_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn invalid_port_uses_default() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 8080, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn invalid_portfolio_port_uses_default() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORTFOLIO_PORT", "abc");

        let config = load_config().expect("invalid PORTFOLIO_PORT must not abort startup");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn invalid_portfolio_port_falls_back_to_port() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORTFOLIO_PORT", "abc");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn config_file_overrides_some_site_fields() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "port = 9090\n\n[site]\nowner = \"Alex Dupont\"\n",
        )
        .expect("write config");
        env::set_var("PORTFOLIO_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 9090);
        assert_eq!(config.site.owner, "Alex Dupont");
        // Untouched fields keep the sample content
        assert_eq!(config.site.projects, SiteContent::default().projects);
    }

    #[test]
    #[serial]
    fn port_env_beats_config_file() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "port = 9090\n").expect("write config");
        env::set_var("PORTFOLIO_CONFIG_DIR", temp_dir.path());
        env::set_var("PORT", "4000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 4000);
    }

    #[test]
    #[serial]
    fn site_field_from_env() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORTFOLIO_SITE__OWNER", "Sam Leroy");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.site.owner, "Sam Leroy");
    }
}
