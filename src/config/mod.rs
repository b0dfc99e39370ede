use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Complete portal configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub home: HomeConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

/// Where the entity collections come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON seed file; the built-in campus data is used when unset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

/// Fixed display locale
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleConfig {
    /// Offset from UTC used for "today" and for formatted dates
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl LocaleConfig {
    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or_else(|| anyhow!("UTC offset out of range: {} minutes", self.utc_offset_minutes))
    }
}

/// Landing page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_featured_count() -> usize {
    2
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
        }
    }
}

impl PortalConfig {
    /// Apply `PORTAL_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("PORTAL_BIND_ADDR") {
            self.server.bind_addr = v;
        }
        if let Some(v) = lookup("PORTAL_SEED_PATH") {
            self.data.seed_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("PORTAL_UTC_OFFSET_MINUTES") {
            if let Ok(n) = v.parse::<i32>() {
                self.locale.utc_offset_minutes = n;
            }
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &Path) -> Result<PortalConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: PortalConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Load from `path` when it exists, otherwise start from defaults
pub fn load_config_or_default(path: &Path) -> Result<PortalConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(PortalConfig::default())
    }
}
