use colored::Colorize;
use std::io::{self, Write};

use crate::state::{AppState, UiState};
use crate::ui::formatting::{
    format_active_filters, format_doctor_card, format_filter_panel, format_suggestions,
};

/// Write the listing for the current state: header, active filters, cards, link
pub fn render_listing(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(out, "{}", state.get_title().bold())?;

    let active = format_active_filters(state.session.filters());
    if !active.is_empty() {
        writeln!(out, "{}", active.dimmed())?;
    }
    writeln!(out)?;

    let doctors = state.visible_doctors();
    if doctors.is_empty() {
        writeln!(out, "{}", "No doctors match the selected filters.".italic())?;
    }
    for (idx, doctor) in doctors.iter().enumerate() {
        writeln!(out, "{}\n", format_doctor_card(doctor, idx + 1))?;
    }

    writeln!(out, "Link: {}", state.share_link().underline())
}

/// Write the filter panel with the current selections
pub fn render_filter_panel(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format_filter_panel(state.session.filters(), state.session.available_specialties())
    )
}

/// Write the autocomplete dropdown if it is open
pub fn render_suggestions(out: &mut impl Write, ui: &UiState) -> io::Result<()> {
    if ui.show_suggestions {
        writeln!(out, "{}", format_suggestions(&ui.suggestions))?;
    }
    Ok(())
}
