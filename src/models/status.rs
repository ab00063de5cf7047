use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operating state shared by transmission lines and power plants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum OperatingStatus {
    #[serde(rename = "operando")]
    Operating,
    #[serde(rename = "manutencao")]
    Maintenance,
    #[serde(rename = "alerta")]
    Alert,
}

impl OperatingStatus {
    /// Wire label, also the text the filter engine matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingStatus::Operating => "operando",
            OperatingStatus::Maintenance => "manutencao",
            OperatingStatus::Alert => "alerta",
        }
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
