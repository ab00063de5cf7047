use tracing::debug;

use crate::models::energy::{
    EnergySource, EnergySummary, GenerationReading, RegionalConsumption, WeeklyDemand,
};
use crate::services::aggregate;
use crate::services::filter::{self, Filters};
use crate::services::repository::Repository;

/// Generation and consumption of the interconnected system.
#[derive(Debug, Clone)]
pub struct EnergyRepository {
    hourly: Vec<GenerationReading>,
    mix: Vec<EnergySource>,
    weekly_demand: Vec<WeeklyDemand>,
    regional: Vec<RegionalConsumption>,
}

impl EnergyRepository {
    pub fn new(
        hourly: Vec<GenerationReading>,
        mix: Vec<EnergySource>,
        weekly_demand: Vec<WeeklyDemand>,
        regional: Vec<RegionalConsumption>,
    ) -> Self {
        Self { hourly, mix, weekly_demand, regional }
    }

    pub fn seeded() -> Self {
        Self::new(seed_hourly(), seed_mix(), seed_weekly_demand(), seed_regional())
    }

    pub fn energy_mix(&self) -> &[EnergySource] {
        &self.mix
    }

    pub fn weekly_demand(&self) -> &[WeeklyDemand] {
        &self.weekly_demand
    }

    pub fn regional_consumption(&self) -> &[RegionalConsumption] {
        &self.regional
    }
}

impl Repository for EnergyRepository {
    type Record = GenerationReading;
    type Summary = EnergySummary;

    fn entity_name(&self) -> &'static str {
        "Energia"
    }

    fn find_all(&self, filters: &Filters) -> Vec<GenerationReading> {
        let result = filter::apply_filters(&self.hourly, filters);
        debug!("{}: {} of {} readings match", self.entity_name(), result.len(), self.hourly.len());
        result
    }

    fn find_by_id(&self, hour: &str) -> Option<GenerationReading> {
        filter::find_by_id(&self.hourly, hour)
    }

    /// Totals over the energy mix, not over the hourly readings.
    fn summary(&self) -> EnergySummary {
        aggregate::energy_summary(&self.mix)
    }
}

// ─── Seed data ───────────────────────────────────────────────────────────────

fn seed_hourly() -> Vec<GenerationReading> {
    vec![
        GenerationReading::new("00:00", 42000, 12000, 0, 8500, 3200),
        GenerationReading::new("02:00", 40000, 13500, 0, 8200, 3100),
        GenerationReading::new("04:00", 38000, 14000, 0, 8800, 3300),
        GenerationReading::new("06:00", 39000, 13000, 2000, 9200, 3400),
        GenerationReading::new("08:00", 41000, 11000, 12000, 7500, 3500),
        GenerationReading::new("10:00", 43000, 9500, 22000, 5500, 3600),
        GenerationReading::new("12:00", 44000, 8500, 28000, 4800, 3700),
        GenerationReading::new("14:00", 45000, 9000, 26000, 5200, 3600),
        GenerationReading::new("16:00", 46000, 10500, 18000, 6800, 3500),
        GenerationReading::new("18:00", 48000, 12000, 5000, 9500, 3400),
        GenerationReading::new("20:00", 47000, 13000, 0, 10200, 3300),
        GenerationReading::new("22:00", 44000, 12500, 0, 9000, 3200),
    ]
}

fn seed_mix() -> Vec<EnergySource> {
    let source = |name: &str, capacity_mw: u32, generation_mw: u32, color: &str, share_percent: f64| EnergySource {
        source: name.to_string(),
        capacity_mw,
        generation_mw,
        color: color.to_string(),
        share_percent,
    };
    vec![
        source("Hidraulica", 109000, 45200, "#3b82f6", 57.6),
        source("Eolica", 30000, 12800, "#00b4d8", 16.3),
        source("Solar", 42000, 22500, "#facc15", 28.7),
        source("Termica", 25000, 8500, "#f97316", 10.8),
        source("Biomassa", 16000, 3600, "#4ade80", 4.6),
        source("Nuclear", 2000, 1900, "#a855f7", 2.4),
    ]
}

fn seed_weekly_demand() -> Vec<WeeklyDemand> {
    [
        ("Seg", 74500, 78200),
        ("Ter", 76200, 79500),
        ("Qua", 75800, 78800),
        ("Qui", 77100, 80200),
        ("Sex", 74900, 77600),
        ("Sab", 62000, 68500),
        ("Dom", 58500, 65200),
    ]
    .into_iter()
    .map(|(day, demand_mw, generation_mw)| WeeklyDemand {
        day: day.to_string(),
        demand_mw,
        generation_mw,
    })
    .collect()
}

fn seed_regional() -> Vec<RegionalConsumption> {
    [
        ("Sudeste", 48500, 54.2, "#00b4d8"),
        ("Sul", 14200, 15.9, "#4ade80"),
        ("Nordeste", 12800, 14.3, "#facc15"),
        ("Norte", 6500, 7.3, "#f97316"),
        ("Centro-Oeste", 5800, 6.5, "#3b82f6"),
    ]
    .into_iter()
    .map(|(region, consumption_mw, share_percent, color)| RegionalConsumption {
        region: region.to_string(),
        consumption_mw,
        share_percent,
        color: color.to_string(),
    })
    .collect()
}
