use thiserror::Error;

/// Problems with the historical dataset. Fatal to a profile build.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: expected {expected} fields, found {found}")]
    ShortRow { row: usize, expected: u64, found: u64 },

    #[error("row {row}: missing value for '{column}'")]
    MissingField { row: usize, column: &'static str },

    #[error("row {row}: invalid views_in_period '{value}': {reason}")]
    InvalidMetric {
        row: usize,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("profile snapshot I/O error for {path}: {source}")]
    SnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode profile snapshot {path}: {source}")]
    SnapshotEncode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("profile snapshot {path} is not valid JSON: {source}")]
    SnapshotParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
