//! Summary statistics per entity.
//!
//! Repositories call these over their full collections; they take plain
//! slices so a caller holding a filtered view can derive the same figures.

use crate::models::energy::{EnergySource, EnergySummary};
use crate::models::plants::{SolarPlant, SolarSummary, WindFarm, WindSummary};
use crate::models::reports::{Report, ReportType, ReportTypeCounts, ReportsSummary};
use crate::models::status::OperatingStatus;
use crate::models::transmission::{TransmissionLine, TransmissionSummary};

/// Rounds to one decimal place the way the dashboard's `toFixed(1)` does:
/// to the tenth nearest the exact binary value, exact halves away from zero.
pub fn round1(value: f64) -> f64 {
    // exact halves are the odd multiples of 0.25
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// `part / whole` as a percentage with one decimal; 0 when `whole` is 0.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round1(part / whole * 100.0)
}

fn sum_u32<T>(items: &[T], value: impl Fn(&T) -> u32) -> u64 {
    items.iter().map(|item| u64::from(value(item))).sum()
}

pub fn energy_summary(mix: &[EnergySource]) -> EnergySummary {
    let total_generation_mw = sum_u32(mix, |s| s.generation_mw);
    let total_capacity_mw = sum_u32(mix, |s| s.capacity_mw);
    EnergySummary {
        total_generation_mw,
        total_capacity_mw,
        load_factor_percent: percent(total_generation_mw as f64, total_capacity_mw as f64),
        sources: mix.len(),
    }
}

pub fn transmission_summary(lines: &[TransmissionLine]) -> TransmissionSummary {
    let count = |status: OperatingStatus| lines.iter().filter(|l| l.status == status).count();
    TransmissionSummary {
        total: lines.len(),
        operating: count(OperatingStatus::Operating),
        maintenance: count(OperatingStatus::Maintenance),
        alert: count(OperatingStatus::Alert),
        total_length_km: sum_u32(lines, |l| l.length_km),
        total_capacity_mw: sum_u32(lines, |l| l.capacity_mw),
    }
}

pub fn solar_summary(plants: &[SolarPlant]) -> SolarSummary {
    SolarSummary {
        total_capacity_mw: sum_u32(plants, |p| p.capacity_mw),
        total_generation_mw: sum_u32(plants, |p| p.generation_mw),
        total_plants: plants.len(),
        operating: plants
            .iter()
            .filter(|p| p.status == OperatingStatus::Operating)
            .count(),
    }
}

pub fn wind_summary(farms: &[WindFarm]) -> WindSummary {
    WindSummary {
        total_capacity_mw: sum_u32(farms, |f| f.capacity_mw),
        total_generation_mw: sum_u32(farms, |f| f.generation_mw),
        total_turbines: sum_u32(farms, |f| f.turbines),
        total_farms: farms.len(),
        operating: farms
            .iter()
            .filter(|f| f.status == OperatingStatus::Operating)
            .count(),
    }
}

pub fn reports_summary(reports: &[Report], annotations: usize) -> ReportsSummary {
    let mut by_type = ReportTypeCounts::default();
    for report in reports {
        match report.kind {
            ReportType::Daily => by_type.daily += 1,
            ReportType::Weekly => by_type.weekly += 1,
            ReportType::Monthly => by_type.monthly += 1,
            ReportType::Special => by_type.special += 1,
        }
    }
    ReportsSummary {
        total_reports: reports.len(),
        by_type,
        total_annotations: annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::filter::{apply_filters, Filters};
    use crate::services::transmission_repository::seed_lines;

    #[test]
    fn test_round1_halves_away_from_zero() {
        assert_eq!(round1(34.25), 34.3);
        assert_eq!(round1(0.05), 0.1);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(57.64), 57.6);
        assert_eq!(round1(42.1875), 42.2);
    }

    #[test]
    fn test_round1_uses_exact_binary_value() {
        // 0.15 is stored as 0.1499999..., 0.35 as 0.3499999...
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(-0.15), -0.1);
        // 0.45 is stored as 0.4500000...01
        assert_eq!(round1(0.45), 0.5);
        assert_eq!(round1(2.75), 2.8);
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent(10.0, 0.0), 0.0);
        assert_eq!(percent(1.0, 3.0), 33.3);
    }

    #[test]
    fn test_transmission_summary_counts_statuses() {
        let summary = transmission_summary(&seed_lines());
        assert_eq!(summary.total, 8);
        assert_eq!(summary.operating, 6);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.alert, 1);
        assert_eq!(summary.total_length_km, 10_227);
        assert_eq!(summary.total_capacity_mw, 25_500);
    }

    #[test]
    fn test_summary_over_filtered_view() {
        let north = apply_filters(&seed_lines(), &Filters::new().with("regiao", "Norte"));
        let summary = transmission_summary(&north);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.total_capacity_mw, 10_000);
    }

    #[test]
    fn test_empty_collections() {
        let summary = energy_summary(&[]);
        assert_eq!(summary.load_factor_percent, 0.0);
        assert_eq!(summary.sources, 0);
        assert_eq!(reports_summary(&[], 2).total_annotations, 2);
    }
}
