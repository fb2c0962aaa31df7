use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub roast: RoastConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoastConfig {
    /// Pause before a roast is returned, in milliseconds
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_thinking_delay_ms() -> u64 {
    2000 // 2 seconds
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("roast.thinking_delay_ms", default_thinking_delay_ms() as i64)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER__HOST, SERVER__PORT, ROAST__THINKING_DELAY_MS, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.server.allowed_origins()?;

        Ok(settings)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.roast.thinking_delay_ms)
    }
}

impl ServerConfig {
    /// Parse `cors_origins` into header values, failing on the first invalid entry
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    ConfigError::Message(format!("invalid CORS origin: {:?}", origin))
                })
            })
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8001);
        assert!(server.cors_origins.is_empty());
    }

    #[test]
    fn test_thinking_delay() {
        let mut settings = Settings::default();
        assert_eq!(settings.thinking_delay(), Duration::from_secs(2));

        settings.roast.thinking_delay_ms = 250;
        assert_eq!(settings.thinking_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_allowed_origins() {
        let mut server = ServerConfig::default();
        assert!(server.allowed_origins().unwrap().is_empty());

        server.cors_origins = vec!["http://a.example".into(), "http://b.example".into()];
        let origins: Vec<String> = server
            .allowed_origins()
            .unwrap()
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);

        server.cors_origins.push("bad\norigin".into());
        assert!(server.allowed_origins().is_err());
    }

    // Environment variables are process-wide, so every env-driven case lives in one test
    #[test]
    fn test_environment_overrides() {
        env::set_var("SERVER__CORS_ORIGINS", "http://a.example,http://b.example");
        env::set_var("ROAST__THINKING_DELAY_MS", "15");
        env::set_var("SERVER__PORT", "9090");

        let settings = Settings::new().unwrap();
        assert_eq!(
            settings.server.cors_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        assert_eq!(settings.thinking_delay(), Duration::from_millis(15));
        assert_eq!(settings.server.port, 9090);

        env::set_var("SERVER__CORS_ORIGINS", "http://ok.example,bad\u{7f}origin");
        let err = Settings::new().unwrap_err();
        assert!(err.to_string().contains("invalid CORS origin"));

        env::remove_var("SERVER__CORS_ORIGINS");
        env::remove_var("ROAST__THINKING_DELAY_MS");
        env::remove_var("SERVER__PORT");

        let settings = Settings::new().unwrap();
        assert!(settings.server.cors_origins.is_empty());
        assert_eq!(settings.thinking_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_server_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr(), "0.0.0.0:8001");
    }
}
