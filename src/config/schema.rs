use crate::approvals::SubmitPolicy;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub approvals: ApprovalsConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ── Service endpoint ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service root; endpoints live under `{base_url}/api/`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

// ── Approval review ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalsConfig {
    /// "require-explicit-change" (default) or "accept-displayed-value"
    #[serde(default)]
    pub submit_policy: SubmitPolicy,
}

// ── Observability ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ObservabilityConfig {
    pub fn level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| anyhow::anyhow!("unknown log level {:?}", self.log_level))
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.service.base_url)
            .with_context(|| format!("invalid service.base_url {:?}", self.service.base_url))?;
        self.observability.level()?;
        Ok(())
    }

    /// `MOUFLOW_CONFIG` if set, else `~/.mouflow/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("MOUFLOW_CONFIG")
            && !path.is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
        }
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Ok(home.join(".mouflow").join("config.toml"))
    }

    pub fn load_or_init() -> Result<Self> {
        let path = Self::default_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, or write a default config there if it does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            config.config_path = path.to_path_buf();
            Ok(config)
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let config = Self {
                config_path: path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // Service root: MOUFLOW_BASE_URL
        if let Ok(url) = std::env::var("MOUFLOW_BASE_URL")
            && !url.is_empty()
        {
            self.service.base_url = url;
        }

        // Submit policy: MOUFLOW_SUBMIT_POLICY (ignored if unrecognised)
        if let Ok(policy) = std::env::var("MOUFLOW_SUBMIT_POLICY")
            && let Ok(policy) = SubmitPolicy::from_str(policy.trim())
        {
            self.approvals.submit_policy = policy;
        }

        // Log level: MOUFLOW_LOG_LEVEL
        if let Ok(level) = std::env::var("MOUFLOW_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
