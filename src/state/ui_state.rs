/// Search box flow state
/// Text typed but not yet submitted, and the dropdown shown for it
#[derive(Debug, Default)]
pub struct UiState {
    /// Current contents of the search input
    pub input: String,
    /// Suggestions currently offered under the input
    pub suggestions: Vec<String>,
    pub show_suggestions: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record typed text and the suggestions computed for it
    pub fn set_input(&mut self, input: String, suggestions: Vec<String>) {
        self.input = input;
        self.show_suggestions = !suggestions.is_empty();
        self.suggestions = suggestions;
    }

    /// Take the suggestion at a 1-based position, closing the dropdown
    pub fn take_suggestion(&mut self, position: usize) -> Option<String> {
        if !self.show_suggestions {
            return None;
        }
        let picked = position
            .checked_sub(1)
            .and_then(|idx| self.suggestions.get(idx))
            .cloned()?;

        self.input = picked.clone();
        self.hide_suggestions();
        Some(picked)
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.suggestions.clear();
    }
}
