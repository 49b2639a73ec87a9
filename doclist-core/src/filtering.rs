use crate::models::{ConsultationType, Doctor, FilterState};
use std::collections::{BTreeSet, HashSet};
use unicode_normalization::UnicodeNormalization;

/// Normalize text for name matching
/// - Unicode normalization (NFC) and lowercase
/// - Punctuation dropped, so "Dr. A" and "dr a" compare equal
/// - Whitespace trimmed and collapsed
pub fn normalize_for_matching(s: &str) -> String {
    let lowered: String = s
        .nfc()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive substring match of `query` within `name`, both sides
/// normalized with [`normalize_for_matching`]. A query that normalizes to
/// nothing (only punctuation or spaces) is compared as plain lowercase text.
pub fn name_matches(name: &str, query: &str) -> bool {
    let needle = normalize_for_matching(query);
    if needle.is_empty() {
        return name.to_lowercase().contains(&query.to_lowercase());
    }
    normalize_for_matching(name).contains(&needle)
}

/// Search filter on the doctor's name, see [`name_matches`].
/// An empty query matches everyone; a doctor without a name never matches
/// a non-empty query.
pub fn matches_search(doctor: &Doctor, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    doctor
        .name
        .as_deref()
        .is_some_and(|name| name_matches(name, query))
}

pub fn matches_consultation(doctor: &Doctor, consultation: ConsultationType) -> bool {
    match consultation {
        ConsultationType::All => true,
        ConsultationType::Video => doctor.video_consult,
        ConsultationType::Clinic => doctor.in_clinic,
    }
}

/// OR within the selected specialties; an empty selection matches everyone
pub fn matches_specialties(doctor: &Doctor, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || doctor.specialty_names().any(|name| selected.contains(name))
}

/// Check if a doctor passes every active filter
/// AND logic between search, consultation type and specialties
pub fn matches_filters(doctor: &Doctor, filters: &FilterState) -> bool {
    matches_search(doctor, &filters.search)
        && matches_consultation(doctor, filters.consultation)
        && matches_specialties(doctor, &filters.specialties)
}

/// Apply filters to a list of doctors, returning the matching ones in list order
pub fn apply_filters<'a>(doctors: &'a [Doctor], filters: &FilterState) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| matches_filters(doctor, filters))
        .collect()
}

/// Check if any filter dimension is active
pub fn has_filters(filters: &FilterState) -> bool {
    !filters.search.is_empty()
        || filters.consultation != ConsultationType::All
        || !filters.specialties.is_empty()
}

/// Distinct specialty names in order of first appearance
pub fn available_specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = HashSet::new();
    doctors
        .iter()
        .flat_map(|doctor| doctor.specialty_names())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Doctor, Specialty};

    pub fn doctor(id: &str, name: Option<&str>, specialties: &[&str]) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.map(str::to_string),
            name_initials: String::new(),
            photo: None,
            doctor_introduction: String::new(),
            specialties: specialties
                .iter()
                .map(|s| Specialty {
                    name: s.to_string(),
                })
                .collect(),
            fees: "₹ 500".to_string(),
            experience: "5 Years experience".to_string(),
            languages: Vec::new(),
            clinic: Default::default(),
            video_consult: true,
            in_clinic: true,
        }
    }

    pub fn with_fees(mut doctor: Doctor, fees: &str, experience: &str) -> Doctor {
        doctor.fees = fees.to_string();
        doctor.experience = experience.to_string();
        doctor
    }

    pub fn with_modes(mut doctor: Doctor, video_consult: bool, in_clinic: bool) -> Doctor {
        doctor.video_consult = video_consult;
        doctor.in_clinic = in_clinic;
        doctor
    }
}
