use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Source dump locations (can override CLI)
    pub title_basics: Option<String>,
    pub title_ratings: Option<String>,
    pub title_principals: Option<String>,
    pub name_basics: Option<String>,

    // Quiz settings
    pub rating_threshold: Option<f64>,
    pub questions: Option<usize>,
    pub difficulty: Option<String>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
