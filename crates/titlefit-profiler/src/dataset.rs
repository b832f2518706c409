//! CSV loading for the historical dataset.
//!
//! Required columns are `channel_id`, `title`, and `views_in_period`; any
//! other columns are ignored. Row numbers in errors are 1-based and count
//! data rows only (the header is row 0).

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use titlefit_core::HistoricalRecord;

use crate::error::DatasetError;

const CHANNEL_COLUMN: &str = "channel_id";
const TITLE_COLUMN: &str = "title";
const METRIC_COLUMN: &str = "views_in_period";

/// Load every record from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened, a required column is
/// absent, or any row has a missing or unparsable required field.
pub fn load_records(path: &Path) -> Result<Vec<HistoricalRecord>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = load_records_from_reader(file)?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "loaded historical dataset"
    );
    Ok(records)
}

/// Load records from any CSV reader with a header row.
///
/// # Errors
///
/// See [`load_records`].
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<HistoricalRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let channel_idx = column_index(&headers, CHANNEL_COLUMN)?;
    let title_idx = column_index(&headers, TITLE_COLUMN)?;
    let metric_idx = column_index(&headers, METRIC_COLUMN)?;

    let mut records = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row_number = i + 1;
        let row = row.map_err(|e| row_error(row_number, e))?;

        let channel_id = row
            .get(channel_idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DatasetError::MissingField {
                row: row_number,
                column: CHANNEL_COLUMN,
            })?;
        let title = row.get(title_idx).ok_or(DatasetError::MissingField {
            row: row_number,
            column: TITLE_COLUMN,
        })?;
        let raw_metric = row
            .get(metric_idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DatasetError::MissingField {
                row: row_number,
                column: METRIC_COLUMN,
            })?;

        records.push(HistoricalRecord::new(
            channel_id,
            title,
            parse_metric(row_number, raw_metric)?,
        ));
    }

    Ok(records)
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DatasetError::MissingColumn(name))
}

fn row_error(row: usize, err: csv::Error) -> DatasetError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => DatasetError::ShortRow {
            row,
            expected: *expected_len,
            found: *len,
        },
        _ => DatasetError::Csv(err),
    }
}

fn parse_metric(row: usize, raw: &str) -> Result<f64, DatasetError> {
    let invalid = |reason: String| DatasetError::InvalidMetric {
        row,
        value: raw.to_string(),
        reason,
    };

    let value = raw.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !value.is_finite() {
        return Err(invalid("must be finite".to_string()));
    }
    if value < 0.0 {
        return Err(invalid("must be non-negative".to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rows_and_ignores_extra_columns() {
        let csv = "video_id,channel_id,title,views_in_period\n\
                   v1,A,First video,10\n\
                   v2,B,\"Quoted, with comma\",2.5\n";
        let records = load_records_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], HistoricalRecord::new("A", "First video", 10.0));
        assert_eq!(records[1].title, "Quoted, with comma");
        assert!((records[1].popularity_metric - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_title_is_allowed() {
        let csv = "channel_id,title,views_in_period\nA,,3\n";
        let records = load_records_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].title, "");
    }

    #[test]
    fn missing_column_is_error() {
        let csv = "channel_id,title\nA,Hello\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("views_in_period")));
    }

    #[test]
    fn empty_channel_is_error_with_row_number() {
        let csv = "channel_id,title,views_in_period\nA,ok,1\n ,bad,2\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DatasetError::MissingField { row: 2, column: "channel_id" }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn empty_metric_is_error() {
        let csv = "channel_id,title,views_in_period\nA,ok,\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingField { row: 1, column: "views_in_period" }
        ));
    }

    #[test]
    fn unparsable_metric_is_error() {
        let csv = "channel_id,title,views_in_period\nA,ok,many\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidMetric { row: 1, .. }));
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn negative_metric_is_error() {
        let csv = "channel_id,title,views_in_period\nA,ok,-4\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn short_row_is_error_with_row_number() {
        let csv = "channel_id,title,views_in_period\nA,ok,1\nA,only-two\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(
                err,
                DatasetError::ShortRow {
                    row: 2,
                    expected: 3,
                    found: 2
                }
            ),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().starts_with("row 2:"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_records(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
