//! JSON snapshot persistence and the reloadable in-memory profile store.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use titlefit_core::{ChannelProfile, ProfileSet};

use crate::error::ProfileError;

/// Write `profiles` as pretty-printed JSON keyed by channel id.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`ProfileError::SnapshotIo`] if the directory or file cannot be written.
pub fn save_snapshot(profiles: &ProfileSet, path: &Path) -> Result<(), ProfileError> {
    let io_err = |source: std::io::Error| ProfileError::SnapshotIo {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(profiles).map_err(|e| ProfileError::SnapshotEncode {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(io_err)?;

    tracing::info!(
        path = %path.display(),
        channels = profiles.len(),
        "saved profile snapshot"
    );
    Ok(())
}

/// Read a snapshot written by [`save_snapshot`].
///
/// # Errors
///
/// Returns [`ProfileError::SnapshotIo`] if the file cannot be read and
/// [`ProfileError::SnapshotParse`] if it is not a valid snapshot.
pub fn load_snapshot(path: &Path) -> Result<ProfileSet, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileError::SnapshotIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let profiles: ProfileSet =
        serde_json::from_str(&content).map_err(|e| ProfileError::SnapshotParse {
            path: path.display().to_string(),
            source: e,
        })?;
    tracing::debug!(path = %path.display(), channels = profiles.len(), "loaded profile snapshot");
    Ok(profiles)
}

/// Owned holder of the current profile snapshot.
///
/// Readers take an `Arc` to an immutable [`ProfileSet`]; a reload swaps the
/// whole set at once, so a reader never sees a partially rebuilt snapshot.
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: RwLock<Arc<ProfileSet>>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(profiles: ProfileSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(profiles)),
        }
    }

    /// Build a store from the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// See [`load_snapshot`].
    pub fn open(path: &Path) -> Result<Self, ProfileError> {
        load_snapshot(path).map(Self::new)
    }

    /// The snapshot in effect right now.
    #[must_use]
    pub fn current(&self) -> Arc<ProfileSet> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Look up one channel in the current snapshot.
    #[must_use]
    pub fn profile(&self, channel_id: &str) -> Option<ChannelProfile> {
        self.current().get(channel_id).cloned()
    }

    /// Swap in `profiles`, returning the previous snapshot.
    pub fn replace(&self, profiles: ProfileSet) -> Arc<ProfileSet> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(profiles))
    }

    /// Reload from `path`. On failure the current snapshot is kept.
    ///
    /// # Errors
    ///
    /// See [`load_snapshot`].
    pub fn reload_from(&self, path: &Path) -> Result<usize, ProfileError> {
        let profiles = load_snapshot(path)?;
        let count = profiles.len();
        self.replace(profiles);
        tracing::info!(path = %path.display(), channels = count, "reloaded profile snapshot");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use titlefit_core::Opener;

    use super::*;

    fn sample_profile(keyword: &str) -> ChannelProfile {
        ChannelProfile {
            num_items: 4,
            mean_metric: 12.5,
            median_metric: 10.0,
            avg_title_words: 5.0,
            avg_title_chars: 31.25,
            number_rate: 0.75,
            question_rate: 0.0,
            exclamation_rate: 0.25,
            colon_rate: 0.5,
            top_openers: vec![Opener {
                word: "how".to_string(),
                rate: 0.5,
            }],
            top_keywords: vec![keyword.to_string()],
            low_keywords: vec!["vlog".to_string()],
            metric_threshold: 15.0,
            high_count: 1,
        }
    }

    fn sample_set(keyword: &str) -> ProfileSet {
        let mut set = ProfileSet::new();
        set.insert("chan".to_string(), sample_profile(keyword));
        set
    }

    #[test]
    fn save_then_load_preserves_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.json");
        let profiles = sample_set("launch");

        save_snapshot(&profiles, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, profiles);
    }

    #[test]
    fn snapshot_is_keyed_by_channel_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        save_snapshot(&sample_set("launch"), &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["chan"]["top_keywords"][0], "launch");
        assert_eq!(raw["chan"]["top_openers"][0]["word"], "how");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_snapshot(Path::new("/no/such/profiles.json")).unwrap_err();
        assert!(matches!(err, ProfileError::SnapshotIo { .. }));
    }

    #[test]
    fn load_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, ProfileError::SnapshotParse { .. }));
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let store = ProfileStore::new(sample_set("launch"));
        let before = store.current();

        let previous = store.replace(sample_set("rocket"));
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before["chan"].top_keywords, vec!["launch"]);
        assert_eq!(
            store.profile("chan").unwrap().top_keywords,
            vec!["rocket"]
        );
    }

    #[test]
    fn failed_reload_keeps_current_snapshot() {
        let store = ProfileStore::new(sample_set("launch"));
        let result = store.reload_from(Path::new("/no/such/profiles.json"));
        assert!(result.is_err());
        assert!(store.profile("chan").is_some());
    }

    #[test]
    fn reload_picks_up_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        save_snapshot(&sample_set("rocket"), &path).unwrap();

        let store = ProfileStore::default();
        assert!(store.profile("chan").is_none());
        assert_eq!(store.reload_from(&path).unwrap(), 1);
        assert_eq!(
            store.profile("chan").unwrap().top_keywords,
            vec!["rocket"]
        );
    }
}
