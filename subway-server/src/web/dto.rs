//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::service::LineDetails;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Display name, unique across stations
    pub name: String,
}

/// A station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    /// Line name, unique across lines
    pub name: String,

    /// Display color (free-form, e.g. "bg-green-600")
    pub color: String,

    /// Upstream station of the first section
    pub up_station_id: u64,

    /// Downstream station of the first section
    pub down_station_id: u64,

    /// Length of the first section
    pub distance: u32,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDeleteQuery {
    pub station_id: u64,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

impl From<&LineDetails> for LineResponse {
    fn from(details: &LineDetails) -> Self {
        Self {
            id: details.line.id().0,
            name: details.line.name().to_string(),
            color: details.line.color().to_string(),
            stations: details.stations.iter().map(StationResponse::from).collect(),
        }
    }
}
