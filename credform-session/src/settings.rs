use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_signup_path")]
    pub signup_path: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Directory for the persisted store; the user cache dir when unset
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_signup_path() -> String {
    "/api/signup".to_string()
}

fn default_login_path() -> String {
    "/api/login".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            signup_path: default_signup_path(),
            login_path: default_login_path(),
            storage_dir: None,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CREDFORM_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        Self::load_from(&config_path)
    }

    /// Load from the given file (optional) layered under `CREDFORM__*` env vars
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CREDFORM").separator("__"))
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        tracing::debug!("Loaded settings for server {}", settings.server_url);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server_url.is_empty() {
            return Err("server_url is required".to_string());
        }
        if !self.server_url.starts_with("http") {
            return Err("server_url must be a valid HTTP(S) URL".to_string());
        }
        for (key, path) in [
            ("signup_path", &self.signup_path),
            ("login_path", &self.login_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("{} must start with '/'", key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_local_server() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://localhost:5000");
        assert_eq!(settings.signup_path, "/api/signup");
        assert_eq!(settings.login_path, "/api/login");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.login_path, "/api/login");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "server_url = \"https://auth.example.com\"").unwrap();
        writeln!(file, "login_path = \"/v2/login\"").unwrap();

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.server_url, "https://auth.example.com");
        assert_eq!(settings.login_path, "/v2/login");
        assert_eq!(settings.signup_path, "/api/signup");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut settings = Settings {
            server_url: "localhost:5000".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        settings.server_url = "http://localhost:5000".to_string();
        settings.signup_path = "api/signup".to_string();
        assert_eq!(
            settings.validate(),
            Err("signup_path must start with '/'".to_string())
        );
    }

    #[test]
    fn timeout_keys_are_not_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "request_timeout_secs = 0").unwrap();

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }
}
