use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::types::PlannerConfig;

/// Environment variable consulted when no config path is passed explicitly.
pub const CONFIG_ENV_VAR: &str = "STORYBOARD_CONFIG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub planner: PlannerConfig,
    /// File the planner settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Load planner settings from `path`, falling back to `STORYBOARD_CONFIG`
    /// and then to the built-in defaults.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(custom) => {
                let resolved = canonicalize_file(&custom)?;
                let planner = load_planner_config(&resolved)?;
                debug!(path = %resolved.display(), "loaded planner config");
                Ok(Self {
                    planner,
                    source: Some(resolved),
                })
            }
            None => Ok(Self {
                planner: PlannerConfig::default(),
                source: None,
            }),
        }
    }
}

fn canonicalize_file(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve config file at {:?}", path))?;
    if canonical.is_file() {
        Ok(canonical)
    } else {
        Err(anyhow!("config path {:?} is not a file", canonical))
    }
}

fn load_planner_config(path: &Path) -> Result<PlannerConfig> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read config {:?}", path))?;
    parse_planner_config(&raw).with_context(|| format!("invalid config {:?}", path))
}

pub fn parse_planner_config(raw: &str) -> Result<PlannerConfig> {
    let config: PlannerConfig =
        serde_json::from_str(raw).context("failed to parse planner config JSON")?;
    config.validate()?;
    Ok(config)
}
