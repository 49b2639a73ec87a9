use colored::Colorize;
use doclist_core::{ConsultationType, Doctor, FilterState, SortKey};

/// Format one doctor as a card block, numbered by listing position
pub fn format_doctor_card(doctor: &Doctor, position: usize) -> String {
    let mut lines = Vec::new();

    let avatar = match doctor.photo_url() {
        Some(url) => format!("photo: {}", url),
        None if !doctor.name_initials.is_empty() => format!("({})", doctor.name_initials),
        None => String::new(),
    };
    lines.push(format!(
        "{}. {} {}",
        position,
        doctor.display_name().bold(),
        avatar.dimmed()
    ));

    let specialties: Vec<&str> = doctor.specialty_names().collect();
    if !specialties.is_empty() {
        lines.push(format!("   {}", specialties.join(" · ").cyan()));
    }

    lines.push(format!(
        "   Experience: {}   Consultation Fee: {}",
        doctor.experience,
        doctor.fees.green()
    ));

    let mut modes = Vec::new();
    if doctor.video_consult {
        modes.push(ConsultationType::Video.label());
    }
    if doctor.in_clinic {
        modes.push(ConsultationType::Clinic.label());
    }
    if !modes.is_empty() {
        lines.push(format!("   {}", modes.join(" · ")));
    }

    let address = doctor.clinic.address.one_line();
    if !doctor.clinic.name.is_empty() || !address.is_empty() {
        lines.push(format!("   Clinic: {} {}", doctor.clinic.name, address.dimmed()));
    }

    if !doctor.languages.is_empty() {
        lines.push(format!("   Languages Spoken: {}", doctor.languages.join(", ")));
    }

    lines.join("\n")
}

/// Format the filter panel: consultation radios, specialty checkboxes, sort radios
pub fn format_filter_panel(filters: &FilterState, specialties: &[String]) -> String {
    let radio = |on: bool| if on { "(•)" } else { "( )" };
    let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };
    let mut lines = Vec::new();

    lines.push("Consultation Type".bold().to_string());
    let consultation: Vec<String> = ConsultationType::ALL
        .iter()
        .map(|c| format!("{} {}", radio(*c == filters.consultation), c.label()))
        .collect();
    lines.push(format!("  {}", consultation.join("  ")));

    lines.push("Specialties".bold().to_string());
    if specialties.is_empty() {
        lines.push("  (none available)".dimmed().to_string());
    }
    for specialty in specialties {
        lines.push(format!(
            "  {} {}",
            checkbox(filters.specialties.contains(specialty)),
            specialty
        ));
    }

    lines.push("Sort By".bold().to_string());
    let sort: Vec<String> = SortKey::ALL
        .iter()
        .map(|s| format!("{} {}", radio(*s == filters.sort), s.label()))
        .collect();
    lines.push(format!("  {}", sort.join("  ")));

    lines.join("\n")
}

/// Format the autocomplete dropdown, numbered from 1
pub fn format_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("  {}) {}", idx + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of the active filters, empty when none are active
pub fn format_active_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push(format!("Search: \"{}\"", filters.search));
    }
    if filters.consultation != ConsultationType::All {
        parts.push(format!("Consultation: {}", filters.consultation));
    }
    if !filters.specialties.is_empty() {
        let names: Vec<&str> = filters.specialties.iter().map(String::as_str).collect();
        parts.push(format!("Specialties: {}", names.join(" OR ")));
    }
    if filters.sort != SortKey::None {
        parts.push(format!("Sorted by: {}", filters.sort));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclist_core::{Address, Clinic, Specialty};
    use std::collections::BTreeSet;

    fn sample_doctor() -> Doctor {
        Doctor {
            id: "1".to_string(),
            name: Some("Dr. Kavya Iyer".to_string()),
            name_initials: "KI".to_string(),
            photo: Some("null".to_string()),
            doctor_introduction: String::new(),
            specialties: vec![
                Specialty { name: "Dentist".to_string() },
                Specialty { name: "ENT".to_string() },
            ],
            fees: "₹ 600".to_string(),
            experience: "8 Years experience".to_string(),
            languages: vec!["English".to_string(), "Tamil".to_string()],
            clinic: Clinic {
                name: "Smile Studio".to_string(),
                address: Address {
                    locality: "Adyar".to_string(),
                    city: "Chennai".to_string(),
                    address_line1: "4 Canal Rd".to_string(),
                },
            },
            video_consult: false,
            in_clinic: true,
        }
    }

    #[test]
    fn test_card_contents() {
        let card = format_doctor_card(&sample_doctor(), 3);

        assert!(card.starts_with("3. "));
        assert!(card.contains("Dr. Kavya Iyer"));
        assert!(card.contains("(KI)"));
        assert!(card.contains("₹ 600"));
        assert!(card.contains("In-Clinic Consultation"));
        assert!(!card.contains("Video Consultation"));
        assert!(card.contains("4 Canal Rd, Adyar, Chennai"));
        assert!(card.contains("Languages Spoken: English, Tamil"));
    }

    #[test]
    fn test_filter_panel_marks_selection() {
        let filters = FilterState {
            consultation: ConsultationType::Video,
            specialties: BTreeSet::from(["ENT".to_string()]),
            sort: SortKey::FeeAsc,
            ..FilterState::default()
        };
        let panel = format_filter_panel(&filters, &["Dentist".to_string(), "ENT".to_string()]);

        assert!(panel.contains("(•) Video Consultation"));
        assert!(panel.contains("( ) All"));
        assert!(panel.contains("[ ] Dentist"));
        assert!(panel.contains("[x] ENT"));
        assert!(panel.contains("(•) Fees (Low to High)"));
    }

    #[test]
    fn test_suggestions_are_numbered() {
        let text = format_suggestions(&["Dr. A".to_string(), "Dr. B".to_string()]);
        assert_eq!(text, "  1) Dr. A\n  2) Dr. B");
    }

    #[test]
    fn test_active_filters_summary() {
        assert_eq!(format_active_filters(&FilterState::default()), "");

        let filters = FilterState {
            search: "iyer".to_string(),
            sort: SortKey::ExperienceDesc,
            ..FilterState::default()
        };
        assert_eq!(
            format_active_filters(&filters),
            "Search: \"iyer\"; Sorted by: Experience (High to Low)"
        );
    }
}
