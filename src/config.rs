use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatasetConfig {
    /// Dataset loaded on startup when set and present on disk.
    pub default_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub calendar_name: String,
    /// Fixed exam duration applied to every exported event.
    pub duration_hours: i64,
    pub default_output: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            calendar_name: "Exam Timetable".to_string(),
            duration_hours: 3,
            default_output: "exam_calendar.ics".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config at {}", config_path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("invalid config file at {}", config_path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("failed to write config to {}", config_path.display()))
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "examtable", "examtable")
        .context("could not determine config directory")?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}
