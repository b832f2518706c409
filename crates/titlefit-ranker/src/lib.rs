//! Candidate title ranking for titlefit.
//!
//! Scores generated titles against a [`titlefit_core::ChannelProfile`],
//! min-max normalizes the batch, and keeps the best few. Also hosts the
//! contracts around the external title generator: the prompt composer, the
//! [`TitleGenerator`] trait, and a fail-safe response parser.

pub mod error;
pub mod generator;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod scorer;
pub mod select;

pub use error::{GeneratorError, RankError};
pub use generator::{suggest_titles, SuggestOptions, TitleGenerator};
pub use normalize::normalize_scores;
pub use parse::parse_candidates;
pub use pipeline::{rank_candidates, rank_request, run_pipeline, RankRequest, RankState, STAGES};
pub use prompt::compose_prompt;
pub use scorer::score_title;
pub use select::select_top;
