//! Configuration management for navtree.
//!
//! Parses `navtree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.origin`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use navtree::{ResolveOptions, ThemeColor};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navtree.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Site identity configuration.
    pub site: SiteConfig,
    /// Version token configuration.
    pub versions: VersionsConfig,
    /// Theme configuration.
    pub theme: ThemeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site identity configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical documentation origin used for cross-link detection
    /// (e.g. `https://docs.example.com`). Empty disables cross-links.
    pub origin: String,
}

/// Version token configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Product-variant token prefix stripped from location slugs
    /// (matches the prefix followed by optional digits/dots).
    pub variant_prefix: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            variant_prefix: "SiS".to_owned(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme color token (e.g. `red-70`). Unknown tokens degrade to the
    /// transparent theme.
    pub color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color: "unset".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.origin`").
        field: String,
        /// Error message (e.g., "${`DOCS_ORIGIN`} not set").
        message: String,
    },
}

impl NavConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `navtree.toml` in the current directory and parents,
    /// falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing/validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolution options for the core resolver.
    ///
    /// The origin is used with trailing slashes trimmed so that
    /// classification strips cleanly to a `/`-prefixed relative path.
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            site_origin: self.site.origin.trim_end_matches('/').to_owned(),
            variant_prefix: self.versions.variant_prefix.clone(),
            color: ThemeColor::parse(&self.theme.color),
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.site.origin = expand::expand_env(&config.site.origin, "site.origin")?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Empty origin is valid: cross-link detection is simply disabled.
        if !self.site.origin.is_empty() {
            require_http_url(&self.site.origin, "site.origin")?;
        }

        if self.versions.variant_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "versions.variant_prefix cannot be empty".to_owned(),
            ));
        }
        if !self
            .versions
            .variant_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::Validation(
                "versions.variant_prefix must be ASCII alphanumeric".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}
