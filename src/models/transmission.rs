use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{FieldValue, Record};
use crate::models::status::OperatingStatus;

/// High-voltage line of the interconnected grid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransmissionLine {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Voltage class label, e.g. "500 kV" or "800 kV CC"
    #[serde(rename = "tensao")]
    pub voltage: String,
    #[serde(rename = "extensao")]
    pub length_km: u32,
    #[serde(rename = "capacidade")]
    pub capacity_mw: u32,
    pub status: OperatingStatus,
    #[serde(rename = "regiao")]
    pub region: String,
    /// Transmission losses (%)
    #[serde(rename = "perdas")]
    pub losses_percent: f64,
}

impl Record for TransmissionLine {
    type Id = u32;

    const COLUMNS: &'static [&'static str] =
        &["id", "nome", "tensao", "extensao", "capacidade", "status", "regiao", "perdas"];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "nome" => Some(self.name.as_str().into()),
            "tensao" => Some(self.voltage.as_str().into()),
            "extensao" => Some(self.length_km.into()),
            "capacidade" => Some(self.capacity_mw.into()),
            "status" => Some(self.status.as_str().into()),
            "regiao" => Some(self.region.as_str().into()),
            "perdas" => Some(self.losses_percent.into()),
            _ => None,
        }
    }
}

/// Power exchanged between subsystems at one sampled hour (MW).
/// Negative values flow in the reverse direction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Interchange {
    #[serde(rename = "hora")]
    pub hour: String,
    #[serde(rename = "N_NE")]
    pub north_northeast_mw: i32,
    #[serde(rename = "NE_SE")]
    pub northeast_southeast_mw: i32,
    #[serde(rename = "SE_S")]
    pub southeast_south_mw: i32,
    #[serde(rename = "N_SE")]
    pub north_southeast_mw: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct TransmissionSummary {
    pub total: usize,
    #[serde(rename = "operando")]
    pub operating: usize,
    #[serde(rename = "manutencao")]
    pub maintenance: usize,
    #[serde(rename = "alerta")]
    pub alert: usize,
    #[serde(rename = "extensaoTotal")]
    pub total_length_km: u64,
    #[serde(rename = "capacidadeTotal")]
    pub total_capacity_mw: u64,
}
