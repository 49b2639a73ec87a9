use doclist_core::{DirectorySession, Doctor, LoadReport};

use crate::config::AppConfig;

/// Application state management - Domain state only
/// Owns the browsing session plus what the loader reported about the feed
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub session: DirectorySession,
    /// Number of feed records left out of the listing
    pub rejected_records: usize,
    /// Whether the feed could be loaded at all
    pub feed_available: bool,
}

impl AppState {
    /// Build the state from a load outcome and the link the session was opened with.
    /// A failed load leaves the session with an empty doctor list.
    pub fn new(config: AppConfig, report: Option<LoadReport>, initial_query: &str) -> Self {
        let feed_available = report.is_some();
        let (doctors, rejected_records) = report
            .map(|r| (r.doctors, r.rejected.len()))
            .unwrap_or_default();

        Self {
            config,
            session: DirectorySession::new(doctors, initial_query),
            rejected_records,
            feed_available,
        }
    }

    /// Shareable link mirroring the current filters
    pub fn share_link(&self) -> String {
        self.config.share_link(self.session.query_string())
    }

    pub fn visible_doctors(&self) -> Vec<&Doctor> {
        self.session.visible().collect()
    }

    /// Header line summarising the listing
    pub fn get_title(&self) -> String {
        let total = self.session.doctors().len();
        let shown = self.session.visible_count();

        if !self.feed_available {
            "Doctor Listing - feed unavailable".to_string()
        } else if shown == total {
            format!("Doctor Listing - {} doctors", total)
        } else {
            format!("Doctor Listing - {} of {} doctors", shown, total)
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        source: crate::config::DataSource::File("doctors.json".into()),
        page_url: crate::config::DEFAULT_PAGE_URL.to_string(),
        color: false,
    }
}
