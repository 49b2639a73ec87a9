use doclist_core::{ConsultationType, SortKey};

use crate::handlers::{Outcome, View};
use crate::state::AppState;
use crate::ui::StatusLevel;

/// Consultation type radio changed
pub fn handle_consultation_change(state: &mut AppState, consultation: ConsultationType) -> Outcome {
    state.session.set_consultation(consultation);
    Outcome::status(
        format!("Consultation type: {}", consultation),
        StatusLevel::Info,
        View::Listing,
    )
}

/// Specialty checkbox toggled
pub fn handle_specialty_toggle(state: &mut AppState, name: &str) -> Outcome {
    // Accept any casing for names the feed offers
    let canonical = state
        .session
        .available_specialties()
        .iter()
        .find(|s| s.eq_ignore_ascii_case(name))
        .cloned();

    let Some(specialty) = canonical else {
        return Outcome::status(
            format!("Unknown specialty '{}'; see /filters for the list", name),
            StatusLevel::Warning,
            View::Nothing,
        );
    };

    let selected = state.session.toggle_specialty(&specialty);
    let verb = if selected { "Selected" } else { "Deselected" };
    Outcome::status(
        format!("{} {}", verb, specialty),
        StatusLevel::Info,
        View::Listing,
    )
}

/// Sort radio changed
pub fn handle_sort_change(state: &mut AppState, sort: SortKey) -> Outcome {
    state.session.set_sort(sort);
    Outcome::status(format!("Sort: {}", sort), StatusLevel::Info, View::Listing)
}

/// Load filters from a shared link or bare query string
pub fn handle_open_link(state: &mut AppState, link: &str) -> Outcome {
    let query = link.find('?').map_or(link, |idx| &link[idx..]);
    state.session.apply_query(query);
    Outcome::status("Filters loaded from link", StatusLevel::Success, View::Listing)
}

/// Clear every filter and the sort
pub fn handle_reset(state: &mut AppState) -> Outcome {
    state.session.reset();
    Outcome::status("Filters cleared", StatusLevel::Info, View::Listing)
}
