//! Property checks for the listing pipeline and query-string mapping

use crate::filtering::fixtures::{doctor, with_fees, with_modes};
use crate::models::{ConsultationType, Doctor, FilterState, SortKey};
use crate::sorting::{filter_and_sort, parse_fee};
use crate::suggestions::{suggestions, MAX_SUGGESTIONS};
use crate::filtering::{apply_filters, matches_consultation, matches_search, matches_specialties};
use quickcheck_macros::quickcheck;

const SPECIALTIES: [&str; 4] = ["ENT", "Dentist", "Cardiologist", "General Physician"];

/// Build a deterministic doctor list from generated seeds
fn doctors_from(seeds: &[(u8, u16, bool, bool)]) -> Vec<Doctor> {
    seeds
        .iter()
        .enumerate()
        .map(|(idx, &(spec, fee, video, clinic))| {
            let name = (spec % 5 != 0).then(|| format!("Dr. {} {}", ["Anu", "Bala", "Chitra"][idx % 3], idx));
            let picked = [SPECIALTIES[spec as usize % 4], SPECIALTIES[(spec as usize / 4) % 4]];
            let fees = if fee % 7 == 0 { "n/a".to_string() } else { format!("₹ {}", fee % 50 * 100) };
            let experience = format!("{} Years experience", fee % 30);
            with_modes(
                with_fees(doctor(&idx.to_string(), name.as_deref(), &picked), &fees, &experience),
                video,
                clinic,
            )
        })
        .collect()
}

fn ids(list: &[&Doctor]) -> Vec<String> {
    list.iter().map(|d| d.id.clone()).collect()
}

fn state_from(search: String, consultation: u8, picks: Vec<u8>, sort: u8) -> FilterState {
    FilterState {
        search,
        consultation: ConsultationType::ALL[consultation as usize % 3],
        specialties: picks
            .into_iter()
            .take(3)
            .map(|p| SPECIALTIES[p as usize % 4].to_string())
            .collect(),
        sort: SortKey::ALL[sort as usize % 3],
    }
}

#[quickcheck]
fn output_is_subset_satisfying_every_filter(
    seeds: Vec<(u8, u16, bool, bool)>,
    search: String,
    consultation: u8,
    picks: Vec<u8>,
    sort: u8,
) -> bool {
    let doctors = doctors_from(&seeds);
    let state = state_from(search, consultation, picks, sort);
    let visible = filter_and_sort(&doctors, &state);

    let expected = doctors
        .iter()
        .filter(|d| {
            matches_specialties(d, &state.specialties)
                && matches_consultation(d, state.consultation)
                && matches_search(d, &state.search)
        })
        .count();

    visible.len() == expected
        && visible
            .iter()
            .all(|v| doctors.iter().any(|d| std::ptr::eq(*v, d)))
}

#[quickcheck]
fn filter_order_does_not_change_result(
    seeds: Vec<(u8, u16, bool, bool)>,
    search: String,
    consultation: u8,
    picks: Vec<u8>,
) -> bool {
    let doctors = doctors_from(&seeds);
    let state = state_from(search, consultation, picks, 0);
    let predicates: [&dyn Fn(&Doctor) -> bool; 3] = [
        &|d: &Doctor| matches_search(d, &state.search),
        &|d: &Doctor| matches_consultation(d, state.consultation),
        &|d: &Doctor| matches_specialties(d, &state.specialties),
    ];
    let expected = ids(&apply_filters(&doctors, &state));

    [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]
        .iter()
        .all(|order| {
            let mut remaining: Vec<&Doctor> = doctors.iter().collect();
            for &idx in order {
                remaining.retain(|d| predicates[idx](*d));
            }
            ids(&remaining) == expected
        })
}

#[quickcheck]
fn fee_sort_is_ordered_and_stable(seeds: Vec<(u8, u16, bool, bool)>) -> bool {
    let doctors = doctors_from(&seeds);
    let state = FilterState {
        sort: SortKey::FeeAsc,
        ..FilterState::default()
    };
    let visible = filter_and_sort(&doctors, &state);

    visible.windows(2).all(|pair| {
        let (a, b) = (parse_fee(&pair[0].fees), parse_fee(&pair[1].fees));
        // ids are list positions, so equal keys must keep ascending ids
        a < b || (a == b && pair[0].id.parse::<usize>().ok() < pair[1].id.parse::<usize>().ok())
    })
}

#[quickcheck]
fn query_string_round_trips(search: String, consultation: u8, picks: Vec<u8>, sort: u8) -> bool {
    let state = state_from(search, consultation, picks, sort);
    let written = state.to_query();

    FilterState::from_query(&written) == state && state.to_query() == written
}

#[quickcheck]
fn suggestions_never_exceed_limit(seeds: Vec<(u8, u16, bool, bool)>, query: String) -> bool {
    let doctors = doctors_from(&seeds);
    let found = suggestions(&doctors, &query);

    found.len() <= MAX_SUGGESTIONS && (!query.is_empty() || found.is_empty())
}

#[test]
fn default_state_writes_empty_query() {
    assert_eq!(FilterState::default().to_query(), "");
}
