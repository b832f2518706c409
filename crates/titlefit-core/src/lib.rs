//! Shared data model, tokenizer, and configuration for titlefit.

mod app_config;
mod config;
mod error;
pub mod tokenize;
mod types;
mod weights;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use tokenize::{has_digit, tokenize, word_count};
pub use types::{
    Candidate, ChannelProfile, HistoricalRecord, Opener, ProfileSet, ScoredCandidate, Suggestion,
};
pub use weights::ScoringWeights;
