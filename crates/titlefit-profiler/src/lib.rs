//! Channel profile builder.
//!
//! Loads the historical title dataset, splits each channel into high and low
//! popularity cohorts, and summarizes style statistics plus differential
//! keywords into a [`titlefit_core::ChannelProfile`]. Profiles persist as a
//! JSON snapshot and are served through a reloadable [`ProfileStore`].

pub mod builder;
pub mod dataset;
pub mod error;
pub mod keywords;
pub mod snapshot;

mod stats;

pub use builder::{build_channel_profile, build_profiles};
pub use dataset::{load_records, load_records_from_reader};
pub use error::{DatasetError, ProfileError};
pub use keywords::{differential_keywords, rank_terms, KeywordLists, TermWeight};
pub use snapshot::{load_snapshot, save_snapshot, ProfileStore};

use std::path::Path;

use titlefit_core::ProfileSet;

/// Load the CSV at `dataset` and build profiles for every channel in it.
///
/// # Errors
///
/// Returns [`ProfileError::Dataset`] if the dataset is unreadable or malformed.
pub fn build_profiles_from_csv(dataset: &Path) -> Result<ProfileSet, ProfileError> {
    let records = load_records(dataset)?;
    Ok(build_profiles(&records))
}
