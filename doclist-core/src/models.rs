use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Literal the upstream feed uses when a doctor has no photo
const PHOTO_ABSENT: &str = "null";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Doctor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_initials: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub doctor_introduction: String,
    #[serde(default, rename = "specialities")]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub clinic: Clinic,
    pub video_consult: bool,
    pub in_clinic: bool,
}

impl Doctor {
    /// Photo URL, treating the feed's `"null"` string as absent
    pub fn photo_url(&self) -> Option<&str> {
        self.photo
            .as_deref()
            .filter(|p| !p.trim().is_empty() && *p != PHOTO_ABSENT)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed doctor")
    }

    /// Specialty names in record order
    pub fn specialty_names(&self) -> impl Iterator<Item = &str> {
        self.specialties.iter().map(|s| s.name.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Specialty {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Clinic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address_line1: String,
}

impl Address {
    /// "line1, locality, city" with blank parts skipped
    pub fn one_line(&self) -> String {
        [&self.address_line1, &self.locality, &self.city]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which consultation mode a doctor must offer to stay visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ConsultationType {
    #[default]
    All,
    Video,
    Clinic,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 3] = [Self::All, Self::Video, Self::Clinic];

    /// Value used in the `consultation` query parameter; empty for the default
    pub fn as_param(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Video => "video",
            Self::Clinic => "clinic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Video => "Video Consultation",
            Self::Clinic => "In-Clinic Consultation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    #[default]
    None,
    FeeAsc,
    ExperienceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::None, Self::FeeAsc, Self::ExperienceDesc];

    /// Value used in the `sort` query parameter; empty for the default
    pub fn as_param(self) -> &'static str {
        match self {
            Self::None => "",
            Self::FeeAsc => "fees",
            Self::ExperienceDesc => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::FeeAsc => "Fees (Low to High)",
            Self::ExperienceDesc => "Experience (High to Low)",
        }
    }
}

/// Error for selector values that match no known parameter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSelector {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for ConsultationType {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "video" => Ok(Self::Video),
            "clinic" => Ok(Self::Clinic),
            other => Err(UnknownSelector {
                kind: "consultation type",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "fees" => Ok(Self::FeeAsc),
            "experience" => Ok(Self::ExperienceDesc),
            other => Err(UnknownSelector {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the listing pipeline reads besides the doctor list itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub consultation: ConsultationType,
    pub specialties: BTreeSet<String>,
    pub sort: SortKey,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
