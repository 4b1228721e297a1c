use serde::{Deserialize, Serialize};

/// Descriptive text shown in the info panel for a selected body.
/// Pure data; the UI collaborator owns presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyInfo {
    /// Display name ("Earth").
    pub title: String,
    /// Classification ("Terrestrial Planet", "Gas Giant", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub mass: String,
    pub diameter: String,
    /// Absent for the central star.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_period: Option<String>,
    pub surface_temp: String,
    pub description: String,
    pub fun_fact: String,
}

impl BodyInfo {
    /// Serialize for the UI layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
