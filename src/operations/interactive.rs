use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

use crate::handlers::{dispatch, parse_command, View, HELP_TEXT};
use crate::state::{AppState, UiState};
use crate::ui::{render_filter_panel, render_listing, render_suggestions, set_status};

const PROMPT: &str = "doctors> ";

/// Run the interactive session until the user quits or closes input
pub fn run_interactive(state: &mut AppState) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut ui = UiState::new();
    let mut out = io::stdout().lock();

    render_listing(&mut out, state)?;
    writeln!(out, "\nType /help for commands.")?;

    loop {
        out.flush()?;
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.trim());

        let outcome = dispatch(parse_command(&line), state, &mut ui);
        if outcome.exit {
            break;
        }

        show_view(&mut out, outcome.view, state, &ui)?;
        if !outcome.message.is_empty() {
            set_status(&mut out, &outcome.message, outcome.level)?;
        }
    }

    tracing::debug!(link = %state.share_link(), "interactive session ended");
    Ok(())
}

fn show_view(out: &mut impl Write, view: View, state: &AppState, ui: &UiState) -> io::Result<()> {
    match view {
        View::Nothing => Ok(()),
        View::Listing => render_listing(out, state),
        View::Panel => render_filter_panel(out, state),
        View::Suggestions => render_suggestions(out, ui),
        View::Link => writeln!(out, "{}", state.share_link()),
        View::Help => writeln!(out, "{}", HELP_TEXT),
    }
}
