use crate::models::Doctor;
use crate::schema_validation::validate_doctor_record;
use crate::validation::validate_doctor;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Endpoint serving the published doctor feed
pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("doctor feed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("doctor feed must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// A feed element that was left out of the listing
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the feed array
    pub index: usize,
    pub id: Option<String>,
    pub reasons: Vec<String>,
}

/// Outcome of loading a feed: the usable doctors plus what was dropped
#[derive(Debug, Default)]
pub struct LoadReport {
    pub doctors: Vec<Doctor>,
    pub rejected: Vec<RejectedRecord>,
}

/// Parse a doctor feed document.
///
/// The document must be a JSON array; each element is checked against the
/// record schema and deserialized on its own, so one bad record never sinks
/// the rest. Later records reusing an earlier id are rejected.
pub fn load_doctors_from_str(contents: &str) -> Result<LoadReport, LoadError> {
    let document: Value = serde_json::from_str(contents)?;
    let Value::Array(records) = document else {
        return Err(LoadError::NotAnArray(json_kind(&document)));
    };

    let mut report = LoadReport::default();
    let mut seen_ids = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let id = record.get("id").and_then(Value::as_str).map(str::to_string);

        if let Err(reasons) = validate_doctor_record(&record) {
            report.rejected.push(RejectedRecord { index, id, reasons });
            continue;
        }

        let doctor: Doctor = match serde_json::from_value(record) {
            Ok(doctor) => doctor,
            Err(e) => {
                report.rejected.push(RejectedRecord {
                    index,
                    id,
                    reasons: vec![e.to_string()],
                });
                continue;
            }
        };

        if !seen_ids.insert(doctor.id.clone()) {
            report.rejected.push(RejectedRecord {
                index,
                id,
                reasons: vec![format!("duplicate id '{}'", doctor.id)],
            });
            continue;
        }

        for warning in validate_doctor(&doctor) {
            tracing::warn!(index, "{}", warning);
        }
        report.doctors.push(doctor);
    }

    for rejected in &report.rejected {
        tracing::warn!(
            index = rejected.index,
            id = rejected.id.as_deref().unwrap_or("<none>"),
            reasons = %rejected.reasons.join("; "),
            "rejected doctor record"
        );
    }

    Ok(report)
}

/// Load a doctor feed from a local JSON file
pub fn load_doctors_from_path<P: AsRef<Path>>(path: P) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_doctors_from_str(&contents)
}

/// Fetch the doctor feed with a single GET; no retries
pub fn fetch_doctors(url: &str) -> Result<LoadReport, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    tracing::info!(%url, "fetching doctor feed");
    let response = reqwest::blocking::get(url).map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(http_err)?;
    load_doctors_from_str(&body)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn record(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "name_initials": "XX",
            "photo": "null",
            "doctor_introduction": "",
            "specialities": [{"name": "Dentist"}],
            "fees": "₹ 400",
            "experience": "6 Years experience",
            "languages": ["English"],
            "clinic": {"name": "Smile", "address": {"locality": "Adyar", "city": "Chennai", "address_line1": "1 Beach Rd"}},
            "video_consult": false,
            "in_clinic": true
        })
    }

    #[test]
    fn test_load_valid_feed() {
        let feed = json!([record("1", "Dr. A"), record("2", "Dr. B")]).to_string();
        let report = load_doctors_from_str(&feed).unwrap();

        assert_eq!(report.doctors.len(), 2);
        assert!(report.rejected.is_empty());
        assert_eq!(report.doctors[1].display_name(), "Dr. B");
    }

    #[test]
    fn test_bad_records_are_rejected_individually() {
        let feed = json!([
            record("1", "Dr. A"),
            {"name": "No Id", "video_consult": true, "in_clinic": true},
            {"id": "3", "name": "Dr. C", "video_consult": "sometimes", "in_clinic": true},
            record("1", "Dr. A Again"),
            record("4", "Dr. D"),
        ])
        .to_string();
        let report = load_doctors_from_str(&feed).unwrap();

        let ids: Vec<&str> = report.doctors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        let rejected: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2, 3]);
        assert_eq!(report.rejected[1].id.as_deref(), Some("3"));
        assert!(report.rejected[2].reasons[0].contains("duplicate"));
    }

    #[test]
    fn test_non_array_document_fails() {
        let err = load_doctors_from_str(r#"{"doctors": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray("an object")));
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = load_doctors_from_str("[{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_empty_array_is_empty_listing() {
        let report = load_doctors_from_str("[]").unwrap();
        assert!(report.doctors.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!([record("9", "Dr. Nine")])).unwrap();

        let report = load_doctors_from_path(file.path()).unwrap();
        assert_eq!(report.doctors[0].id, "9");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_doctors_from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
    }
}
