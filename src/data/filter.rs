use std::fmt;

use serde::Serialize;

use super::model::LaunchRecord;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Selector state
// ---------------------------------------------------------------------------

/// Current value of the launch-site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. Anything but `"ALL"` names a site,
    /// even one that does not exist in the dataset.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(s) => s,
        }
    }

    /// Whether a record's site passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => record.launch_site == *s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

/// Current value of the payload range control, in kilograms.
///
/// Not validated: a range with `low > high` simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filters – always return an owned working copy
// ---------------------------------------------------------------------------

/// Rows whose payload lies within `range`.
pub fn filter_by_payload(records: &[LaunchRecord], range: PayloadRange) -> Vec<LaunchRecord> {
    records
        .iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .cloned()
        .collect()
}

/// Rows launched from the selected site (all rows for `All`).
pub fn filter_by_site(records: &[LaunchRecord], site: &SiteSelection) -> Vec<LaunchRecord> {
    records
        .iter()
        .filter(|rec| site.matches(rec))
        .cloned()
        .collect()
}
