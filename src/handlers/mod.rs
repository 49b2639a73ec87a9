pub mod commands;
pub mod filter_handlers;
pub mod search_handlers;

pub use commands::{parse_command, Command, HELP_TEXT};

use crate::state::{AppState, UiState};
use crate::ui::StatusLevel;

/// What the screen should show after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Nothing,
    Listing,
    Panel,
    Suggestions,
    Link,
    Help,
}

/// Result of handling one event
#[derive(Debug, Clone)]
pub struct Outcome {
    pub message: String,
    pub level: StatusLevel,
    pub view: View,
    pub exit: bool,
}

impl Outcome {
    pub fn status(message: impl Into<String>, level: StatusLevel, view: View) -> Self {
        Self {
            message: message.into(),
            level,
            view,
            exit: false,
        }
    }

    fn view(view: View) -> Self {
        Self::status(String::new(), StatusLevel::Info, view)
    }
}

/// Route a parsed command to its handler
pub fn dispatch(command: Command, state: &mut AppState, ui: &mut UiState) -> Outcome {
    match command {
        Command::Type { text } => search_handlers::handle_input_change(state, ui, text),
        Command::Search { text } => search_handlers::handle_search_submit(state, ui, text),
        Command::Pick { position } => search_handlers::handle_suggestion_pick(state, ui, position),
        Command::Consultation(consultation) => {
            filter_handlers::handle_consultation_change(state, consultation)
        }
        Command::ToggleSpecialty { name } => filter_handlers::handle_specialty_toggle(state, &name),
        Command::Sort(sort) => filter_handlers::handle_sort_change(state, sort),
        Command::Open { link } => filter_handlers::handle_open_link(state, &link),
        Command::Reset => filter_handlers::handle_reset(state),
        Command::Filters => Outcome::view(View::Panel),
        Command::List => Outcome::view(View::Listing),
        Command::Link => Outcome::view(View::Link),
        Command::Help => Outcome::view(View::Help),
        Command::Exit => Outcome {
            exit: true,
            ..Outcome::view(View::Nothing)
        },
        Command::Invalid { message } => Outcome::status(message, StatusLevel::Error, View::Nothing),
    }
}
