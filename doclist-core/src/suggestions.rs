use crate::filtering::name_matches;
use crate::models::Doctor;

/// Upper bound on autocomplete entries shown under the search box
pub const MAX_SUGGESTIONS: usize = 3;

/// Names of doctors matching the query, for the autocomplete dropdown.
///
/// At most [`MAX_SUGGESTIONS`] distinct names in list order. An empty query
/// yields nothing rather than everyone, and doctors without a name are skipped.
pub fn suggestions(doctors: &[Doctor], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);

    for name in doctors.iter().filter_map(|d| d.name.as_deref()) {
        if found.len() == MAX_SUGGESTIONS {
            break;
        }
        if name_matches(name, query) && !found.iter().any(|n| n == name) {
            found.push(name.to_string());
        }
    }

    found
}
