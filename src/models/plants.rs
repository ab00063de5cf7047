use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{FieldValue, Record};
use crate::models::status::OperatingStatus;

// ─── Solar ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SolarPlant {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Two-letter state code
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "capacidade")]
    pub capacity_mw: u32,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
    /// Daily irradiation (kWh/m²)
    #[serde(rename = "irradiancia")]
    pub irradiance: f64,
    pub status: OperatingStatus,
    #[serde(rename = "fatorCapacidade")]
    pub capacity_factor_percent: f64,
}

impl Record for SolarPlant {
    type Id = u32;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "nome",
        "estado",
        "capacidade",
        "geracao",
        "irradiancia",
        "status",
        "fatorCapacidade",
    ];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "nome" => Some(self.name.as_str().into()),
            "estado" => Some(self.state.as_str().into()),
            "capacidade" => Some(self.capacity_mw.into()),
            "geracao" => Some(self.generation_mw.into()),
            "irradiancia" => Some(self.irradiance.into()),
            "status" => Some(self.status.as_str().into()),
            "fatorCapacidade" => Some(self.capacity_factor_percent.into()),
            _ => None,
        }
    }
}

/// Fleet generation over one day (MW) against irradiance (W/m²).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SolarHourly {
    #[serde(rename = "hora")]
    pub hour: String,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
    #[serde(rename = "irradiancia")]
    pub irradiance_w_m2: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct SolarSummary {
    #[serde(rename = "totalCapacidade")]
    pub total_capacity_mw: u64,
    #[serde(rename = "totalGeracao")]
    pub total_generation_mw: u64,
    #[serde(rename = "totalUsinas")]
    pub total_plants: usize,
    #[serde(rename = "operando")]
    pub operating: usize,
}

// ─── Wind ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WindFarm {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "capacidade")]
    pub capacity_mw: u32,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
    #[serde(rename = "turbinas")]
    pub turbines: u32,
    /// Mean wind speed (m/s)
    #[serde(rename = "velocidadeVento")]
    pub wind_speed_m_s: f64,
    pub status: OperatingStatus,
    #[serde(rename = "fatorCapacidade")]
    pub capacity_factor_percent: f64,
}

impl Record for WindFarm {
    type Id = u32;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "nome",
        "estado",
        "capacidade",
        "geracao",
        "turbinas",
        "velocidadeVento",
        "status",
        "fatorCapacidade",
    ];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "nome" => Some(self.name.as_str().into()),
            "estado" => Some(self.state.as_str().into()),
            "capacidade" => Some(self.capacity_mw.into()),
            "geracao" => Some(self.generation_mw.into()),
            "turbinas" => Some(self.turbines.into()),
            "velocidadeVento" => Some(self.wind_speed_m_s.into()),
            "status" => Some(self.status.as_str().into()),
            "fatorCapacidade" => Some(self.capacity_factor_percent.into()),
            _ => None,
        }
    }
}

/// Fleet generation (MW) against mean wind speed (m/s).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WindHourly {
    #[serde(rename = "hora")]
    pub hour: String,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
    #[serde(rename = "velocidade")]
    pub wind_speed_m_s: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct WindSummary {
    #[serde(rename = "totalCapacidade")]
    pub total_capacity_mw: u64,
    #[serde(rename = "totalGeracao")]
    pub total_generation_mw: u64,
    #[serde(rename = "totalTurbinas")]
    pub total_turbines: u64,
    #[serde(rename = "totalParques")]
    pub total_farms: usize,
    #[serde(rename = "operando")]
    pub operating: usize,
}
