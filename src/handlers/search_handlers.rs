use crate::handlers::{Outcome, View};
use crate::state::{AppState, UiState};
use crate::ui::StatusLevel;

/// Text typed into the search box: refresh the suggestion dropdown only
pub fn handle_input_change(state: &AppState, ui: &mut UiState, text: String) -> Outcome {
    let suggestions = state.session.suggestions(&text);
    let count = suggestions.len();
    ui.set_input(text, suggestions);

    if count == 0 {
        Outcome::status("No suggestions", StatusLevel::Info, View::Nothing)
    } else {
        Outcome::status(
            "Use /pick <n> to choose a suggestion or /search to submit",
            StatusLevel::Info,
            View::Suggestions,
        )
    }
}

/// Submit the search box (Enter)
pub fn handle_search_submit(state: &mut AppState, ui: &mut UiState, text: Option<String>) -> Outcome {
    if let Some(text) = text {
        ui.input = text;
    }
    ui.hide_suggestions();
    commit_search(state, ui.input.clone())
}

/// Choose a suggestion from the open dropdown
pub fn handle_suggestion_pick(state: &mut AppState, ui: &mut UiState, position: usize) -> Outcome {
    match ui.take_suggestion(position) {
        Some(name) => commit_search(state, name),
        None => Outcome::status(
            format!("No suggestion #{} is showing", position),
            StatusLevel::Warning,
            View::Nothing,
        ),
    }
}

fn commit_search(state: &mut AppState, query: String) -> Outcome {
    tracing::debug!(%query, "search submitted");
    state.session.set_search(query);

    let message = if state.session.filters().search.is_empty() {
        "Search cleared".to_string()
    } else {
        format!("{} doctors match", state.session.visible_count())
    };
    Outcome::status(message, StatusLevel::Info, View::Listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::test_config;
    use doclist_core::load_doctors_from_str;

    fn state() -> AppState {
        let report = load_doctors_from_str(
            r#"[
                {"id": "1", "name": "Dr. Meena", "video_consult": true, "in_clinic": true},
                {"id": "2", "name": "Dr. Mehta", "video_consult": true, "in_clinic": true},
                {"id": "3", "name": "Dr. Kumar", "video_consult": true, "in_clinic": true}
            ]"#,
        )
        .unwrap();
        AppState::new(test_config(), Some(report), "")
    }

    #[test]
    fn test_typing_does_not_filter() {
        let state = state();
        let mut ui = UiState::new();

        let outcome = handle_input_change(&state, &mut ui, "me".to_string());

        assert_eq!(outcome.view, View::Suggestions);
        assert_eq!(ui.suggestions, vec!["Dr. Meena", "Dr. Mehta"]);
        assert_eq!(state.session.visible_count(), 3);
        assert_eq!(state.session.query_string(), "");
    }

    #[test]
    fn test_submit_commits_typed_text() {
        let mut state = state();
        let mut ui = UiState::new();
        handle_input_change(&state, &mut ui, "kum".to_string());

        let outcome = handle_search_submit(&mut state, &mut ui, None);

        assert_eq!(outcome.view, View::Listing);
        assert!(!ui.show_suggestions);
        assert_eq!(state.session.visible_count(), 1);
        assert_eq!(state.session.query_string(), "?search=kum");
    }

    #[test]
    fn test_pick_commits_full_name() {
        let mut state = state();
        let mut ui = UiState::new();
        handle_input_change(&state, &mut ui, "me".to_string());

        handle_suggestion_pick(&mut state, &mut ui, 2);

        assert_eq!(state.session.filters().search, "Dr. Mehta");
        assert_eq!(state.session.visible_count(), 1);
    }

    #[test]
    fn test_pick_without_dropdown_warns() {
        let mut state = state();
        let mut ui = UiState::new();

        let outcome = handle_suggestion_pick(&mut state, &mut ui, 1);

        assert_eq!(outcome.level, StatusLevel::Warning);
        assert_eq!(state.session.visible_count(), 3);
    }

    #[test]
    fn test_empty_submit_clears_search() {
        let mut state = state();
        let mut ui = UiState::new();
        handle_search_submit(&mut state, &mut ui, Some("meena".to_string()));

        let outcome = handle_search_submit(&mut state, &mut ui, Some(String::new()));

        assert_eq!(outcome.message, "Search cleared");
        assert_eq!(state.session.query_string(), "");
    }
}
