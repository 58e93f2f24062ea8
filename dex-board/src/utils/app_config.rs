use config::{Config, ConfigError, Environment, File, FileFormat};
use dex_screener::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: i64 = 8080;
const DEFAULT_LOG_FILTER: &str = "info";
const ENV_PREFIX: &str = "DEXBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub rust_log: String,
    /// Transport timeout for upstream requests; unset means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Defaults, then the optional YAML file, then `DEXBOARD_*` variables.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT)?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("rust_log", DEFAULT_LOG_FILTER)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT as u16,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            request_timeout_secs: None,
        }
    }
}
