use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub render: RenderConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// QR bitmap rendering limits, in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_size: u32,
    pub max_size: u32,
}

impl RenderConfig {
    /// ## Summary
    /// Resolves the requested edge length, falling back to the default.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if the size is zero or above `max_size`.
    pub fn resolve_size(&self, requested: Option<u32>) -> CoreResult<u32> {
        let size = requested.unwrap_or(self.default_size);
        if size == 0 || size > self.max_size {
            return Err(CoreError::InvalidInput(format!(
                "render size must be between 1 and {}, got {size}",
                self.max_size
            )));
        }
        Ok(size)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted request body. QR version 40 tops out below 3 KB.
    pub max_payload_bytes: usize,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::environment())
    }

    /// `SECTION__KEY` maps to `section.key`; single underscores stay inside the key name.
    fn environment() -> config::Environment {
        config::Environment::default()
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn load_from(environment: config::Environment) -> Result<Self> {
        Ok(Self::builder()?
            // Env file
            .add_source(environment)
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Returns settings built from defaults alone.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder()?.build()?.try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "info")?
            .set_default("render.default_size", 256)?
            .set_default("render.max_size", 2048)?
            .set_default("limits.max_payload_bytes", 8192)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(server = %settings.server.bind_addr(), "Configuration resolved");
    Ok(settings)
}
