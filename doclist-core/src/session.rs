use crate::filtering::{available_specialties, matches_filters};
use crate::models::{ConsultationType, Doctor, FilterState, SortKey};
use crate::sorting::sort_by_doctor;
use crate::suggestions::suggestions;

/// State container for one browsing session.
///
/// Owns the doctor list (fixed once loaded) and the active [`FilterState`].
/// Every setter commits the new state, recomputes the visible listing and
/// then rewrites the query-string mirror, so readers never observe a listing
/// or URL that lags behind the state.
#[derive(Debug, Clone)]
pub struct DirectorySession {
    doctors: Vec<Doctor>,
    specialties: Vec<String>,
    filters: FilterState,
    /// Indices into `doctors`, in display order
    visible: Vec<usize>,
    query_string: String,
}

impl DirectorySession {
    /// Start a session from a loaded doctor list and the query string the page was opened with
    pub fn new(doctors: Vec<Doctor>, initial_query: &str) -> Self {
        let specialties = available_specialties(&doctors);
        let mut session = Self {
            doctors,
            specialties,
            filters: FilterState::from_query(initial_query),
            visible: Vec::new(),
            query_string: String::new(),
        };
        session.refresh();
        session
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Doctors passing the current filters, in display order
    pub fn visible(&self) -> impl Iterator<Item = &Doctor> + '_ {
        self.visible.iter().map(|&idx| &self.doctors[idx])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Current query-string mirror of the filter state (`""` when at defaults)
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Specialty names offered by the filter panel
    pub fn available_specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Autocomplete entries for text typed into the search box
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        suggestions(&self.doctors, input)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filters.search = query.into();
        self.refresh();
    }

    pub fn set_consultation(&mut self, consultation: ConsultationType) {
        self.filters.consultation = consultation;
        self.refresh();
    }

    /// Add the specialty to the selection, or remove it if already selected.
    /// Returns whether it is selected afterwards.
    pub fn toggle_specialty(&mut self, specialty: &str) -> bool {
        let selected = if self.filters.specialties.remove(specialty) {
            false
        } else {
            self.filters.specialties.insert(specialty.to_string());
            true
        };
        self.refresh();
        selected
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filters.sort = sort;
        self.refresh();
    }

    /// Replace the whole state with the one encoded in a query string
    pub fn apply_query(&mut self, query: &str) {
        self.filters = FilterState::from_query(query);
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.filters = FilterState::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        let doctors = &self.doctors;
        let mut visible: Vec<usize> = doctors
            .iter()
            .enumerate()
            .filter(|(_, doctor)| matches_filters(doctor, &self.filters))
            .map(|(idx, _)| idx)
            .collect();
        sort_by_doctor(&mut visible, self.filters.sort, |&idx| &doctors[idx]);

        self.visible = visible;
        self.query_string = self.filters.to_query();

        tracing::debug!(
            visible = self.visible.len(),
            total = self.doctors.len(),
            query = %self.query_string,
            "listing recomputed"
        );
    }
}
