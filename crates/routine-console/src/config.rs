use std::net::SocketAddr;

use routine_client::config::BASE_URL_ENV;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

/// Where the tracker API lives. Unset means the client falls back to its
/// compiled-in default.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.bind, self.port).parse().ok()
    }
}

/// Publish the configured API base URL to the environment the client reads.
/// Must run before any other thread exists.
pub fn export_api_base_url(api: &ApiConfig) -> bool {
    match api.base_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            tracing::info!("api base url {url}");
            std::env::set_var(BASE_URL_ENV, url);
            true
        }
        None => false,
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}

/// Value following `--config`, or the example file next to the binary.
pub fn path_from_args(args: &[String]) -> String {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
        .unwrap_or_else(|| "config.example.toml".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let config = parse(
            r#"
            [server]
            bind = "0.0.0.0"
            port = 8080

            [api]
            base_url = "https://tracker.example.com/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://tracker.example.com/api")
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = parse("[server]\nport = 4000\n").unwrap();

        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.api.base_url, None);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse("[server]\nport = \"eighty\"\n").is_err());
    }

    #[test]
    fn socket_addr_requires_an_ip() {
        let mut server = ServerConfig::default();
        assert_eq!(
            server.socket_addr(),
            Some("127.0.0.1:3000".parse().unwrap())
        );

        server.bind = "localhost".into();
        assert_eq!(server.socket_addr(), None);
    }

    #[test]
    fn config_path_from_args() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            path_from_args(&args(&["console", "--config", "/etc/routine.toml"])),
            "/etc/routine.toml"
        );
        assert_eq!(path_from_args(&args(&["console", "--config"])), "config.example.toml");
        assert_eq!(path_from_args(&args(&["console"])), "config.example.toml");
    }

    #[test]
    fn base_url_is_exported_only_when_set() {
        assert!(!export_api_base_url(&ApiConfig::default()));
        assert!(!export_api_base_url(&ApiConfig {
            base_url: Some("  ".into()),
        }));

        assert!(export_api_base_url(&ApiConfig {
            base_url: Some("https://tracker.example.com/api".into()),
        }));
        assert_eq!(
            std::env::var(BASE_URL_ENV).as_deref(),
            Ok("https://tracker.example.com/api")
        );
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        assert_eq!(load("/nonexistent/routine.toml"), Config::default());
    }
}
