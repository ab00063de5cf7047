use serde::Serialize;

use crate::models::export::Dataset;
use crate::models::record::Record;
use crate::services::energy_repository::EnergyRepository;
use crate::services::filter::Filters;
use crate::services::plant_repository::{SolarPlantRepository, WindFarmRepository};
use crate::services::report_repository::ReportRepository;
use crate::services::transmission_repository::TransmissionRepository;

/// Uniform read access over one entity collection.
pub trait Repository: Send + Sync {
    type Record: Record;
    type Summary: Serialize;

    /// Name used in log lines and error messages.
    fn entity_name(&self) -> &'static str;

    /// Records matching `filters`, in collection order.
    fn find_all(&self, filters: &Filters) -> Vec<Self::Record>;

    fn find_by_id(&self, id: &<Self::Record as Record>::Id) -> Option<Self::Record>;

    /// Aggregate over the whole collection, regardless of any filter.
    fn summary(&self) -> Self::Summary;
}

/// Every repository of the application, built once at start-up and shared
/// through the router state.
#[derive(Debug)]
pub struct Repositories {
    pub energy: EnergyRepository,
    pub transmission: TransmissionRepository,
    pub solar: SolarPlantRepository,
    pub wind: WindFarmRepository,
    pub reports: ReportRepository,
}

impl Repositories {
    /// Repositories over the built-in dashboard data.
    pub fn seeded() -> Self {
        Self {
            energy: EnergyRepository::seeded(),
            transmission: TransmissionRepository::seeded(),
            solar: SolarPlantRepository::seeded(),
            wind: WindFarmRepository::seeded(),
            reports: ReportRepository::seeded(),
        }
    }

    /// Size of the collection behind an export dataset.
    pub fn record_count(&self, dataset: Dataset) -> usize {
        let all = Filters::new();
        match dataset {
            Dataset::Energia => self.energy.find_all(&all).len(),
            Dataset::Transmissao => self.transmission.find_all(&all).len(),
            Dataset::Solar => self.solar.find_all(&all).len(),
            Dataset::Eolica => self.wind.find_all(&all).len(),
            Dataset::Relatorios => self.reports.find_all(&all).len(),
        }
    }
}
