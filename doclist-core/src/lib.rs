// Public modules
pub mod filtering;
pub mod io;
pub mod models;
pub mod query;
pub mod schema_validation;
pub mod session;
pub mod sorting;
pub mod suggestions;
pub mod validation;

// Re-export commonly used types for convenience
pub use filtering::{
    apply_filters, available_specialties, has_filters, matches_filters, name_matches,
    normalize_for_matching,
};
pub use io::{
    fetch_doctors, load_doctors_from_path, load_doctors_from_str, LoadError, LoadReport,
    RejectedRecord, DEFAULT_ENDPOINT,
};
pub use models::{Address, Clinic, ConsultationType, Doctor, FilterState, SortKey, Specialty};
pub use session::DirectorySession;
pub use sorting::{filter_and_sort, parse_experience, parse_fee, sort_doctors};
pub use suggestions::{suggestions, MAX_SUGGESTIONS};
pub use validation::validate_doctor;

#[cfg(test)]
mod properties;
