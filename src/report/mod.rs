//! Structured extraction results
//!
//! The report aggregate every pipeline stage feeds into, plus the
//! console renderer. JSON output is plain serde; CSV flattening lives in
//! `utils::csv_handler`.

pub mod text;

use serde::{Deserialize, Serialize};

use crate::extract::{CasualtyFigures, DisasterType, EventDate, Locations};

/// Structured disaster information extracted from one article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterReport {
    /// Source article filename
    pub article: String,
    pub disaster_type: DisasterType,
    pub event_date: EventDate,
    pub locations: Locations,
    pub casualties: CasualtyFigures,
}
