use tracing::debug;

use crate::models::plants::{SolarHourly, SolarPlant, SolarSummary, WindFarm, WindHourly, WindSummary};
use crate::models::status::OperatingStatus;
use crate::services::aggregate;
use crate::services::filter::{self, Filters};
use crate::services::repository::Repository;

// ─── Solar ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SolarPlantRepository {
    plants: Vec<SolarPlant>,
    daily_generation: Vec<SolarHourly>,
}

impl SolarPlantRepository {
    pub fn new(plants: Vec<SolarPlant>, daily_generation: Vec<SolarHourly>) -> Self {
        Self { plants, daily_generation }
    }

    pub fn seeded() -> Self {
        Self::new(seed_solar_plants(), seed_solar_daily())
    }

    pub fn daily_generation(&self) -> &[SolarHourly] {
        &self.daily_generation
    }
}

impl Repository for SolarPlantRepository {
    type Record = SolarPlant;
    type Summary = SolarSummary;

    fn entity_name(&self) -> &'static str {
        "UsinasSolares"
    }

    fn find_all(&self, filters: &Filters) -> Vec<SolarPlant> {
        let result = filter::apply_filters(&self.plants, filters);
        debug!("{}: {} of {} plants match", self.entity_name(), result.len(), self.plants.len());
        result
    }

    fn find_by_id(&self, id: &u32) -> Option<SolarPlant> {
        filter::find_by_id(&self.plants, id)
    }

    fn summary(&self) -> SolarSummary {
        aggregate::solar_summary(&self.plants)
    }
}

// ─── Wind ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WindFarmRepository {
    farms: Vec<WindFarm>,
    generation_by_wind: Vec<WindHourly>,
}

impl WindFarmRepository {
    pub fn new(farms: Vec<WindFarm>, generation_by_wind: Vec<WindHourly>) -> Self {
        Self { farms, generation_by_wind }
    }

    pub fn seeded() -> Self {
        Self::new(seed_wind_farms(), seed_wind_hourly())
    }

    pub fn generation_by_wind(&self) -> &[WindHourly] {
        &self.generation_by_wind
    }
}

impl Repository for WindFarmRepository {
    type Record = WindFarm;
    type Summary = WindSummary;

    fn entity_name(&self) -> &'static str {
        "UsinasEolicas"
    }

    fn find_all(&self, filters: &Filters) -> Vec<WindFarm> {
        let result = filter::apply_filters(&self.farms, filters);
        debug!("{}: {} of {} farms match", self.entity_name(), result.len(), self.farms.len());
        result
    }

    fn find_by_id(&self, id: &u32) -> Option<WindFarm> {
        filter::find_by_id(&self.farms, id)
    }

    fn summary(&self) -> WindSummary {
        aggregate::wind_summary(&self.farms)
    }
}

// ─── Seed data ───────────────────────────────────────────────────────────────

fn seed_solar_plants() -> Vec<SolarPlant> {
    use OperatingStatus::*;

    [
        (1, "Sao Goncalo", "PI", 608, 485, 5.8, Operating, 79.8),
        (2, "Pirapora", "MG", 399, 312, 5.5, Operating, 78.2),
        (3, "Nova Olinda", "PI", 292, 238, 5.9, Operating, 81.5),
        (4, "Boa Sorte", "BA", 350, 280, 5.7, Operating, 80.0),
        (5, "Janauba Solar", "MG", 156, 120, 5.4, Maintenance, 76.9),
        (6, "Coremas", "PB", 210, 175, 5.6, Operating, 83.3),
    ]
    .into_iter()
    .map(
        |(id, name, state, capacity_mw, generation_mw, irradiance, status, capacity_factor_percent)| SolarPlant {
            id,
            name: name.to_string(),
            state: state.to_string(),
            capacity_mw,
            generation_mw,
            irradiance,
            status,
            capacity_factor_percent,
        },
    )
    .collect()
}

fn seed_solar_daily() -> Vec<SolarHourly> {
    [
        ("05:00", 0, 0),
        ("06:00", 120, 150),
        ("07:00", 580, 380),
        ("08:00", 1200, 620),
        ("09:00", 2100, 780),
        ("10:00", 3200, 890),
        ("11:00", 3800, 950),
        ("12:00", 4100, 980),
        ("13:00", 3900, 960),
        ("14:00", 3400, 880),
        ("15:00", 2600, 720),
        ("16:00", 1600, 520),
        ("17:00", 680, 280),
        ("18:00", 120, 80),
        ("19:00", 0, 0),
    ]
    .into_iter()
    .map(|(hour, generation_mw, irradiance_w_m2)| SolarHourly {
        hour: hour.to_string(),
        generation_mw,
        irradiance_w_m2,
    })
    .collect()
}

fn seed_wind_farms() -> Vec<WindFarm> {
    use OperatingStatus::*;

    [
        (1, "Complexo Alto Sertao", "BA", 842, 650, 184, 8.2, Operating, 77.2),
        (2, "Complexo Lagoa dos Ventos", "PI", 716, 580, 162, 9.1, Operating, 81.0),
        (3, "Parque Tucano", "BA", 524, 410, 120, 7.8, Operating, 78.2),
        (4, "Complexo Chafariz", "PB", 472, 385, 108, 8.5, Operating, 81.6),
        (5, "Parque Ventos do Araripe", "PE", 358, 265, 82, 7.2, Maintenance, 74.0),
        (6, "Complexo Caetite", "BA", 292, 230, 68, 7.6, Operating, 78.8),
    ]
    .into_iter()
    .map(
        |(id, name, state, capacity_mw, generation_mw, turbines, wind_speed_m_s, status, capacity_factor_percent)| {
            WindFarm {
                id,
                name: name.to_string(),
                state: state.to_string(),
                capacity_mw,
                generation_mw,
                turbines,
                wind_speed_m_s,
                status,
                capacity_factor_percent,
            }
        },
    )
    .collect()
}

fn seed_wind_hourly() -> Vec<WindHourly> {
    [
        ("00:00", 8500, 7.2),
        ("02:00", 9200, 7.8),
        ("04:00", 9800, 8.1),
        ("06:00", 9500, 7.9),
        ("08:00", 8200, 7.0),
        ("10:00", 7500, 6.5),
        ("12:00", 7000, 6.2),
        ("14:00", 7800, 6.8),
        ("16:00", 8500, 7.3),
        ("18:00", 9500, 8.0),
        ("20:00", 10200, 8.5),
        ("22:00", 9800, 8.2),
    ]
    .into_iter()
    .map(|(hour, generation_mw, wind_speed_m_s)| WindHourly {
        hour: hour.to_string(),
        generation_mw,
        wind_speed_m_s,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_summary() {
        let summary = SolarPlantRepository::seeded().summary();
        assert_eq!(summary.total_capacity_mw, 2015);
        assert_eq!(summary.total_generation_mw, 1610);
        assert_eq!(summary.total_plants, 6);
        assert_eq!(summary.operating, 5);
    }

    #[test]
    fn test_wind_summary() {
        let summary = WindFarmRepository::seeded().summary();
        assert_eq!(summary.total_capacity_mw, 3204);
        assert_eq!(summary.total_generation_mw, 2520);
        assert_eq!(summary.total_turbines, 724);
        assert_eq!(summary.total_farms, 6);
        assert_eq!(summary.operating, 5);
    }

    #[test]
    fn test_filter_plants_by_state_and_status() {
        let repo = WindFarmRepository::seeded();
        let bahia = repo.find_all(&Filters::new().with("estado", "ba").with("status", "operando"));
        let ids: Vec<_> = bahia.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3, 6]);

        let solar = SolarPlantRepository::seeded();
        let maintenance = solar.find_all(&Filters::new().with("status", "MAN"));
        assert_eq!(maintenance.len(), 1);
        assert_eq!(maintenance[0].name, "Janauba Solar");
    }

    #[test]
    fn test_series_lengths() {
        assert_eq!(SolarPlantRepository::seeded().daily_generation().len(), 15);
        assert_eq!(WindFarmRepository::seeded().generation_by_wind().len(), 12);
    }
}
