//! Application configuration
//!
//! Read from process environment variables without a prefix. Empty
//! variables count as unset. A variable that cannot be used falls back to
//! its own default without affecting the others.
//!
//! | variable | default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `9090` |
//! | `GEOCODING_API_URL` | `https://geocoding-api.open-meteo.com` |
//! | `WEATHER_API_URL` | `https://api.open-meteo.com` |
//! | `API_TIMEOUT_SECONDS` | `10` |
//! | `LOG_FORMAT` | `text` |

use std::time::Duration;

use config::ConfigError;
use integration_openmeteo::OpenMeteoConfig;
use serde::de::DeserializeOwned;

use crate::telemetry::LogFormat;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Geocoding API base URL
    pub geocoding_api_url: String,

    /// Forecast API base URL
    pub weather_api_url: String,

    /// Timeout applied to each upstream call, in seconds
    pub api_timeout_seconds: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
            geocoding_api_url: "https://geocoding-api.open-meteo.com".to_string(),
            weather_api_url: "https://api.open-meteo.com".to_string(),
            api_timeout_seconds: 10,
            log_format: "text".to_string(),
        }
    }
}

/// A variable that was set but unusable, replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Environment variable name
    pub variable: String,
    /// Why the value was rejected
    pub reason: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}, using default", self.variable, self.reason)
    }
}

/// Reads one key at a time so a bad value only costs its own setting
struct Settings {
    source: config::Config,
    warnings: Vec<ConfigWarning>,
}

impl Settings {
    fn get<T, R>(&mut self, key: &str, default: R, check: impl FnOnce(T) -> Result<R, String>) -> R
    where
        T: DeserializeOwned,
    {
        let reason = match self.source.get::<T>(key) {
            Ok(raw) => match check(raw) {
                Ok(value) => return value,
                Err(reason) => reason,
            },
            Err(ConfigError::NotFound(_)) => return default,
            Err(e) => e.to_string(),
        };

        self.warnings.push(ConfigWarning {
            variable: key.to_ascii_uppercase(),
            reason,
        });
        default
    }
}

fn http_url(url: String) -> Result<String, String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(format!("must be an http(s) URL, got '{url}'"))
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error only if the environment cannot be read at all.
    /// Unusable values fall back to their defaults and are reported as
    /// warnings.
    pub fn load() -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load`].
    pub fn load_from(
        vars: config::Map<String, String>,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        Self::from_environment(config::Environment::default().source(Some(vars)))
    }

    fn from_environment(
        environment: config::Environment,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        let source = config::Config::builder()
            // e.g. API_TIMEOUT_SECONDS -> api_timeout_seconds
            .add_source(environment.ignore_empty(true).try_parsing(true))
            .build()?;
        let mut settings = Settings {
            source,
            warnings: Vec::new(),
        };
        let defaults = Self::default();

        let config = Self {
            host: settings.get("host", defaults.host, Ok),
            port: settings.get("port", defaults.port, |port: i64| {
                u16::try_from(port).map_err(|_| format!("{port} is not a valid port"))
            }),
            geocoding_api_url: settings.get(
                "geocoding_api_url",
                defaults.geocoding_api_url,
                http_url,
            ),
            weather_api_url: settings.get("weather_api_url", defaults.weather_api_url, http_url),
            api_timeout_seconds: settings.get(
                "api_timeout_seconds",
                defaults.api_timeout_seconds,
                |secs: i64| match u64::try_from(secs) {
                    Ok(secs) if secs > 0 => Ok(secs),
                    _ => Err(format!("must be greater than zero, got {secs}")),
                },
            ),
            log_format: settings.get("log_format", defaults.log_format, |format: String| {
                format.parse::<LogFormat>().map(|_| format)
            }),
        };

        Ok((config, settings.warnings))
    }

    /// Upstream call timeout
    pub const fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_seconds)
    }

    /// Socket address string to bind the server to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed log format, falling back to text for unknown values
    pub fn log_format(&self) -> LogFormat {
        self.log_format.parse().unwrap_or_default()
    }

    /// Client configuration for both Open-Meteo APIs
    pub fn openmeteo(&self) -> OpenMeteoConfig {
        OpenMeteoConfig {
            geocoding_base_url: self.geocoding_api_url.clone(),
            forecast_base_url: self.weather_api_url.clone(),
            timeout_secs: self.api_timeout_seconds,
            ..OpenMeteoConfig::default()
        }
    }
}
