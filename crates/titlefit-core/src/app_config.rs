use std::path::PathBuf;

use crate::ScoringWeights;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Historical CSV consumed by profile builds.
    pub dataset_path: PathBuf,
    /// JSON profile snapshot written by builds and read by ranking.
    pub profiles_path: PathBuf,
    /// Suggestions returned when a request does not specify a count.
    pub default_num_titles: usize,
    /// Upper bound on parsed generator candidates per request.
    pub max_candidates: usize,
    pub weights: ScoringWeights,
}
