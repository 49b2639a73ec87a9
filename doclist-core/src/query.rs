//! Mapping between [`FilterState`] and the page's query string.
//!
//! Keys: `search`, `consultation` (`video` | `clinic`), `specialties`
//! (comma-joined names) and `sort` (`fees` | `experience`). Fields at their
//! default value are omitted, so the default state maps to an empty string.
//! Values that cannot be understood fall back to the default for that field.
//! `consultation` and `sort` values are read ignoring case and surrounding
//! spaces, so `VIDEO` and `None` are accepted; written values are always the
//! lowercase forms.

use crate::models::{ConsultationType, FilterState, SortKey};
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const SEARCH_KEY: &str = "search";
pub const CONSULTATION_KEY: &str = "consultation";
pub const SPECIALTIES_KEY: &str = "specialties";
pub const SORT_KEY: &str = "sort";

const SPECIALTY_SEPARATOR: char = ',';

/// Split a `specialties` parameter value, dropping empty segments
pub fn parse_specialty_list(value: &str) -> BTreeSet<String> {
    value
        .split(SPECIALTY_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl FilterState {
    /// Read a state from a query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = None;
        let mut consultation = None;
        let mut specialties = None;
        let mut sort = None;

        // First occurrence of a key wins, like URLSearchParams.get
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                SEARCH_KEY if search.is_none() => search = Some(value.into_owned()),
                CONSULTATION_KEY if consultation.is_none() => consultation = Some(value),
                SPECIALTIES_KEY if specialties.is_none() => specialties = Some(value),
                SORT_KEY if sort.is_none() => sort = Some(value),
                _ => {}
            }
        }

        let consultation = consultation
            .map(|raw| {
                raw.parse::<ConsultationType>().unwrap_or_else(|err| {
                    tracing::debug!(%err, "ignoring consultation parameter");
                    ConsultationType::default()
                })
            })
            .unwrap_or_default();

        let sort = sort
            .map(|raw| {
                raw.parse::<SortKey>().unwrap_or_else(|err| {
                    tracing::debug!(%err, "ignoring sort parameter");
                    SortKey::default()
                })
            })
            .unwrap_or_default();

        Self {
            search: search.unwrap_or_default(),
            consultation,
            specialties: specialties
                .map(|raw| parse_specialty_list(&raw))
                .unwrap_or_default(),
            sort,
        }
    }

    /// Write the state as a query string: `""` for the default state,
    /// otherwise `?` followed by the non-default parameters in fixed order
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_KEY, &self.search);
        }
        if self.consultation != ConsultationType::All {
            serializer.append_pair(CONSULTATION_KEY, self.consultation.as_param());
        }
        if !self.specialties.is_empty() {
            let joined = self
                .specialties
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(&SPECIALTY_SEPARATOR.to_string());
            serializer.append_pair(SPECIALTIES_KEY, &joined);
        }
        if self.sort != SortKey::None {
            serializer.append_pair(SORT_KEY, self.sort.as_param());
        }

        let encoded = serializer.finish();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{}", encoded)
        }
    }
}
