mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Environment variable consulted when the config file carries no API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if config.llm.api_key.is_none() {
        config.llm.api_key = env::var(OPENAI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        if config.llm.api_key.is_some() {
            debug!("Using API key from environment variables");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9090
  auth_token: "sekrit"
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:11434/v1"
  api_key: "file-key"
  model: "gpt-4o-mini"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.auth_token.as_deref(), Some("sekrit"));
        assert_eq!(config.server.logs.level, "debug");
        assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
        assert_eq!(config.llm.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn empty_config_gets_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.server.auth_token, None);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.api_key, None);
        assert_eq!(config.llm.base_url, "");
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("server: [not, a, map]");
        assert!(result.is_err());
    }
}
