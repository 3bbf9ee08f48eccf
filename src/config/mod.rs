mod file_config;

pub use file_config::FileConfig;

use crate::catalog::CatalogSources;
use crate::quiz::Difficulty;
use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub title_basics: Option<PathBuf>,
    pub title_ratings: Option<PathBuf>,
    pub title_principals: Option<PathBuf>,
    pub name_basics: Option<PathBuf>,
    pub rating_threshold: f64,
    pub questions: Option<usize>,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sources: CatalogSources,
    pub rating_threshold: f64,
    /// Number of questions to play; prompted interactively when absent.
    pub questions: Option<usize>,
    /// Difficulty tier; prompted interactively when absent.
    pub difficulty: Option<Difficulty>,
    /// Seed for the question generator, for reproducible sessions.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let sources = CatalogSources {
            title_basics: resolve_source("title-basics", file.title_basics, &cli.title_basics)?,
            title_ratings: resolve_source("title-ratings", file.title_ratings, &cli.title_ratings)?,
            title_principals: resolve_source(
                "title-principals",
                file.title_principals,
                &cli.title_principals,
            )?,
            name_basics: resolve_source("name-basics", file.name_basics, &cli.name_basics)?,
        };

        let rating_threshold = file.rating_threshold.unwrap_or(cli.rating_threshold);
        if !(0.0..=10.0).contains(&rating_threshold) {
            bail!(
                "rating_threshold must be between 0 and 10, got {}",
                rating_threshold
            );
        }

        let questions = file.questions.or(cli.questions);
        if questions == Some(0) {
            bail!("questions must be a positive number");
        }

        let difficulty = match file.difficulty {
            Some(name) => Some(
                Difficulty::from_str(&name, true)
                    .map_err(|_| anyhow!("Unknown difficulty in config file: {}", name))?,
            ),
            None => cli.difficulty,
        };

        let seed = file.seed.or(cli.seed);

        Ok(Self {
            sources,
            rating_threshold,
            questions,
            difficulty,
            seed,
        })
    }
}

fn resolve_source(
    flag: &str,
    file_value: Option<String>,
    cli_value: &Option<PathBuf>,
) -> Result<PathBuf> {
    file_value
        .map(PathBuf::from)
        .or_else(|| cli_value.clone())
        .ok_or_else(|| anyhow!("{flag} must be specified via --{flag} or in the config file"))
}
