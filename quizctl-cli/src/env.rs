//! `.env` loading
//!
//! Priority order (highest to lowest):
//! 1. Variables already set in the environment
//! 2. Current directory .env
//! 3. ~/.quizctl/.env
//!
//! dotenvy never overwrites variables that are already set. Runs before
//! argument parsing so clap's `env` fallbacks and `RUST_LOG` see the values.

use std::path::PathBuf;

use quizctl_server::config::config_dir;

/// Outcome of loading `.env` files, reported once tracing is up
#[derive(Debug, Default)]
pub struct DotenvReport {
    pub loaded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl DotenvReport {
    pub fn log(&self) {
        for path in &self.loaded {
            tracing::debug!("Loaded .env from {}", path.display());
        }
        for (path, err) in &self.failed {
            tracing::warn!("Failed to load {}: {}", path.display(), err);
        }
    }
}

pub fn load_dotenv() -> DotenvReport {
    let mut report = DotenvReport::default();

    if let Ok(path) = dotenvy::dotenv() {
        report.loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => report.loaded.push(env_file),
                Err(e) => report.failed.push((env_file, e.to_string())),
            }
        }
    }

    report
}
