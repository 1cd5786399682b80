//! Player-facing configuration, read from a TOML file.
//!
//! The file is looked up at `$AI_OR_NOT_CONFIG`, or `settings.toml` in the
//! platform config directory (e.g. `~/.config/ai-or-not/settings.toml`).
//! Every key is optional:
//!
//! ```toml
//! questions_path = "questions.csv"
//! layout = "five_field"        # or "three_field"
//! round_size = 10
//! feedback = "manual"          # or "timed"
//! auto_advance_ms = 1500
//! tick_ms = 100
//!
//! [categories]
//! 1 = "Vision"
//! ```

use anyhow::{anyhow, Context, Result};
use directories_next::BaseDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::game::quiz::definition::Layout;
use crate::game::quiz::settings::{FeedbackPolicy, Settings, DEFAULT_AUTO_ADVANCE, DEFAULT_ROUND_SIZE};


const CONFIG_PATH_VAR: &str = "AI_OR_NOT_CONFIG";
const APP_DIRECTORY: &str = "ai-or-not";
const CONFIG_FILE_NAME: &str = "settings.toml";

const DEFAULT_CATEGORY_LABELS: [(i64, &str); 5] = [
    (1, "Vision"),
    (2, "Reasoning"),
    (3, "Hearing"),
    (4, "Reading"),
    (5, "Movement"),
];

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackMode {
    Manual,
    Timed,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub questions_path: PathBuf,
    pub layout: Layout,
    pub round_size: usize,
    pub feedback: FeedbackMode,
    pub auto_advance_ms: u64,
    pub tick_ms: u64,
    pub categories: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            questions_path: PathBuf::from("questions.csv"),
            layout: Layout::FiveField,
            round_size: DEFAULT_ROUND_SIZE,
            feedback: FeedbackMode::Manual,
            auto_advance_ms: DEFAULT_AUTO_ADVANCE.as_millis() as u64,
            tick_ms: 100,
            categories: HashMap::new(),
        }
    }
}

impl Config {
    /// Reads the config file if there is one. A missing default file is not an error.
    pub fn load() -> Result<Config> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Config::open(PathBuf::from(path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Config::open(path),
            _ => {
                info!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn open(path: PathBuf) -> Result<Config> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read config file {:?}", path))?;
        let config = Config::from_toml(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.round_size == 0 {
            return Err(anyhow!("round_size must be at least 1"));
        }
        if self.tick_ms == 0 {
            return Err(anyhow!("tick_ms must be at least 1"));
        }
        self.category_labels()?;
        Ok(())
    }

    pub fn round_settings(&self) -> Settings {
        let feedback = match self.feedback {
            FeedbackMode::Manual => FeedbackPolicy::Manual,
            FeedbackMode::Timed => {
                FeedbackPolicy::Timed(Duration::from_millis(self.auto_advance_ms))
            }
        };
        Settings {
            round_size: self.round_size,
            feedback,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn category_labels(&self) -> Result<HashMap<i64, String>> {
        let mut labels: HashMap<i64, String> = DEFAULT_CATEGORY_LABELS
            .iter()
            .map(|(id, label)| (*id, (*label).to_owned()))
            .collect();
        for (id, label) in &self.categories {
            let id: i64 = id
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid category id {:?}", id))?;
            labels.insert(id, label.clone());
        }
        Ok(labels)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let mut path = BaseDirs::new()?.config_dir().to_path_buf();
    path.push(APP_DIRECTORY);
    path.push(CONFIG_FILE_NAME);
    Some(path)
}
