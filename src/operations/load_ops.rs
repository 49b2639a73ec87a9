use doclist_core::{fetch_doctors, load_doctors_from_path, LoadError, LoadReport};

use crate::config::DataSource;

/// Load the doctor feed once at startup.
/// Failures are logged and reported as `None`; the caller shows an empty listing.
pub fn load_feed(source: &DataSource) -> Option<LoadReport> {
    let result = match source {
        DataSource::Endpoint(url) => fetch_doctors(url),
        DataSource::File(path) => load_doctors_from_path(path),
    };

    match result {
        Ok(report) => {
            tracing::info!(
                loaded = report.doctors.len(),
                rejected = report.rejected.len(),
                "doctor feed loaded"
            );
            Some(report)
        }
        Err(err) => {
            log_load_failure(&err);
            None
        }
    }
}

fn log_load_failure(err: &LoadError) {
    match err {
        LoadError::Http { .. } | LoadError::Status { .. } => {
            tracing::error!(error = %err, "could not fetch doctor feed; starting with an empty list")
        }
        LoadError::FileRead { .. } => {
            tracing::error!(error = %err, "could not read doctor feed file; starting with an empty list")
        }
        LoadError::Json(_) | LoadError::NotAnArray(_) => {
            tracing::error!(error = %err, "doctor feed is malformed; starting with an empty list")
        }
    }
}
