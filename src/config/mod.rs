use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub selection: SelectionConfig,
    pub limits: LimitsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let quota = env::var("APP_SELECTION_QUOTA")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidQuota)?;

        let max_archive_bytes = match env::var("APP_MAX_ARCHIVE_BYTES") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidArchiveLimit)?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            selection: SelectionConfig { quota },
            limits: LimitsConfig { max_archive_bytes },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling how many scholars one run may award.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub quota: usize,
}

/// Ceilings the calling transport may ask the core to enforce.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    pub max_archive_bytes: Option<u64>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidQuota,
    InvalidArchiveLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidQuota => {
                write!(f, "APP_SELECTION_QUOTA must be a non-negative integer")
            }
            ConfigError::InvalidArchiveLimit => {
                write!(f, "APP_MAX_ARCHIVE_BYTES must be a byte count")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
