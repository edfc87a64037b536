// src/core/config_manager.rs
//! Service configuration: optional config.yaml plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::types::CurrentUser;
use crate::views::DEFAULT_MAX_SESSIONS;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_JOB_POST_DELAY_MS: u64 = 2000;
pub const DEFAULT_PROFILE_SAVE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub port: u16,
    pub delays: DelayConfig,
    pub max_sessions: usize,
    pub current_user: CurrentUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    pub job_post: Duration,
    pub profile_save: Duration,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            job_post: Duration::from_millis(DEFAULT_JOB_POST_DELAY_MS),
            profile_save: Duration::from_millis(DEFAULT_PROFILE_SAVE_DELAY_MS),
        }
    }
}

/// One environment section of config.yaml; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EnvironmentSection {
    port: Option<u16>,
    job_post_delay_ms: Option<u64>,
    profile_save_delay_ms: Option<u64>,
    max_sessions: Option<usize>,
    current_user: Option<CurrentUser>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentSection,
    production: EnvironmentSection,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            port: DEFAULT_PORT,
            delays: DelayConfig::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            current_user: CurrentUser::default(),
        }
    }
}

impl ConfigManager {
    /// Load the YAML file at `path` (if present) and apply env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml_str(&content, &environment)?
        } else {
            info!("{} not found, using defaults", path.display());
            Self {
                environment,
                ..Self::default()
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("PARSU_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Pick the section for `environment`; anything but "production" reads `local`
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        let defaults = Self::default();
        Ok(Self {
            environment: environment.to_string(),
            port: section.port.unwrap_or(defaults.port),
            delays: DelayConfig {
                job_post: section
                    .job_post_delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.delays.job_post),
                profile_save: section
                    .profile_save_delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.delays.profile_save),
            },
            max_sessions: section.max_sessions.unwrap_or(defaults.max_sessions),
            current_user: section.current_user.unwrap_or(defaults.current_user),
        })
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(port) = env_number::<u16>("ROCKET_PORT")? {
            self.port = port;
        }
        if let Some(ms) = env_number::<u64>("PARSU_JOB_POST_DELAY_MS")? {
            self.delays.job_post = Duration::from_millis(ms);
        }
        if let Some(ms) = env_number::<u64>("PARSU_PROFILE_SAVE_DELAY_MS")? {
            self.delays.profile_save = Duration::from_millis(ms);
        }
        if let Some(max) = env_number::<usize>("PARSU_MAX_SESSIONS")? {
            self.max_sessions = max;
        }
        Ok(())
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} must be a valid number, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}
