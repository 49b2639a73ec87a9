use crate::filtering::apply_filters;
use crate::models::{Doctor, FilterState, SortKey};
use regex::Regex;
use std::cmp::Reverse;
use std::sync::LazyLock;

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("leading digits pattern is valid"));

const CURRENCY_SYMBOL: char = '₹';

/// Parse a fee string such as "₹ 1,500" into its integer amount.
/// The currency symbol, whitespace and thousands separators are ignored;
/// returns `None` when no leading digits remain.
pub fn parse_fee(fees: &str) -> Option<u64> {
    let cleaned: String = fees
        .chars()
        .filter(|c| *c != CURRENCY_SYMBOL && *c != ',' && !c.is_whitespace())
        .collect();

    leading_number(&cleaned)
}

/// Parse the leading integer of an experience string such as "13 Years experience"
pub fn parse_experience(experience: &str) -> Option<u64> {
    leading_number(experience)
}

fn leading_number(s: &str) -> Option<u64> {
    LEADING_DIGITS
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sort doctors in place by the given key.
///
/// The sort is stable, so doctors with equal keys keep their relative order.
/// Unparsable fees or experience count as the smallest possible value:
/// they lead a fee-ascending list and trail an experience-descending one.
pub fn sort_doctors(doctors: &mut [&Doctor], sort: SortKey) {
    sort_by_doctor(doctors, sort, |d| *d);
}

/// Stable sort of any handle type that resolves to a doctor (references, list indices)
pub fn sort_by_doctor<'a, T>(items: &mut [T], sort: SortKey, doctor: impl Fn(&T) -> &'a Doctor) {
    match sort {
        SortKey::None => {}
        // `Option` orders `None` below every `Some`, which is the sentinel policy
        SortKey::FeeAsc => items.sort_by_key(|item| parse_fee(&doctor(item).fees)),
        SortKey::ExperienceDesc => {
            items.sort_by_key(|item| Reverse(parse_experience(&doctor(item).experience)))
        }
    }
}

/// Full listing pipeline: filter, then sort
pub fn filter_and_sort<'a>(doctors: &'a [Doctor], filters: &FilterState) -> Vec<&'a Doctor> {
    let mut visible = apply_filters(doctors, filters);
    sort_doctors(&mut visible, filters.sort);
    visible
}
