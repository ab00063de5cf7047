use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{FieldValue, Record};

// ─── Hourly generation ───────────────────────────────────────────────────────

/// Generation sampled every two hours, split per source (MW).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerationReading {
    /// Time-of-day label, e.g. "14:00"
    #[serde(rename = "hora")]
    pub hour: String,
    #[serde(rename = "hidro")]
    pub hydro_mw: u32,
    #[serde(rename = "eolica")]
    pub wind_mw: u32,
    #[serde(rename = "solar")]
    pub solar_mw: u32,
    #[serde(rename = "termica")]
    pub thermal_mw: u32,
    #[serde(rename = "biomassa")]
    pub biomass_mw: u32,
}

impl GenerationReading {
    pub fn new(hour: &str, hydro: u32, wind: u32, solar: u32, thermal: u32, biomass: u32) -> Self {
        Self {
            hour: hour.to_string(),
            hydro_mw: hydro,
            wind_mw: wind,
            solar_mw: solar,
            thermal_mw: thermal,
            biomass_mw: biomass,
        }
    }
}

impl Record for GenerationReading {
    type Id = str;

    const COLUMNS: &'static [&'static str] = &["hora", "hidro", "eolica", "solar", "termica", "biomassa"];

    fn id(&self) -> &str {
        &self.hour
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "hora" => Some(self.hour.as_str().into()),
            "hidro" => Some(self.hydro_mw.into()),
            "eolica" => Some(self.wind_mw.into()),
            "solar" => Some(self.solar_mw.into()),
            "termica" => Some(self.thermal_mw.into()),
            "biomassa" => Some(self.biomass_mw.into()),
            _ => None,
        }
    }
}

// ─── Auxiliary series ────────────────────────────────────────────────────────

/// One source of the national energy mix.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EnergySource {
    #[serde(rename = "fonte")]
    pub source: String,
    #[serde(rename = "capacidade")]
    pub capacity_mw: u32,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
    /// Chart colour used by the dashboard
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "percentual")]
    pub share_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WeeklyDemand {
    #[serde(rename = "dia")]
    pub day: String,
    #[serde(rename = "demanda")]
    pub demand_mw: u32,
    #[serde(rename = "geracao")]
    pub generation_mw: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegionalConsumption {
    #[serde(rename = "regiao")]
    pub region: String,
    #[serde(rename = "consumo")]
    pub consumption_mw: u32,
    #[serde(rename = "percentual")]
    pub share_percent: f64,
    #[serde(rename = "cor")]
    pub color: String,
}

// ─── Summary ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct EnergySummary {
    #[serde(rename = "totalGeracao")]
    pub total_generation_mw: u64,
    #[serde(rename = "totalCapacidade")]
    pub total_capacity_mw: u64,
    /// Generation over installed capacity (%), one decimal
    #[serde(rename = "fatorCarga")]
    pub load_factor_percent: f64,
    #[serde(rename = "fontes")]
    pub sources: usize,
}
