use tracing::debug;

use crate::models::status::OperatingStatus;
use crate::models::transmission::{Interchange, TransmissionLine, TransmissionSummary};
use crate::services::aggregate;
use crate::services::filter::{self, Filters};
use crate::services::repository::Repository;

#[derive(Debug, Clone)]
pub struct TransmissionRepository {
    lines: Vec<TransmissionLine>,
    interchanges: Vec<Interchange>,
}

impl TransmissionRepository {
    pub fn new(lines: Vec<TransmissionLine>, interchanges: Vec<Interchange>) -> Self {
        Self { lines, interchanges }
    }

    pub fn seeded() -> Self {
        Self::new(seed_lines(), seed_interchanges())
    }

    pub fn interchanges(&self) -> &[Interchange] {
        &self.interchanges
    }
}

impl Repository for TransmissionRepository {
    type Record = TransmissionLine;
    type Summary = TransmissionSummary;

    fn entity_name(&self) -> &'static str {
        "Transmissao"
    }

    fn find_all(&self, filters: &Filters) -> Vec<TransmissionLine> {
        let result = filter::apply_filters(&self.lines, filters);
        debug!("{}: {} of {} lines match", self.entity_name(), result.len(), self.lines.len());
        result
    }

    fn find_by_id(&self, id: &u32) -> Option<TransmissionLine> {
        filter::find_by_id(&self.lines, id)
    }

    fn summary(&self) -> TransmissionSummary {
        aggregate::transmission_summary(&self.lines)
    }
}

// ─── Seed data ───────────────────────────────────────────────────────────────

pub(crate) fn seed_lines() -> Vec<TransmissionLine> {
    use OperatingStatus::*;

    [
        (1, "Tucurui - Macapa", "500 kV", 1800, 3200, Operating, "Norte", 2.1),
        (2, "Itaipu - SE Foz", "765 kV", 890, 6300, Operating, "Sul", 1.2),
        (3, "Belo Monte - Estreito", "800 kV CC", 2092, 4000, Operating, "Norte", 3.5),
        (4, "Xingu - Terminal Rio", "800 kV CC", 2543, 4000, Operating, "Sudeste", 3.8),
        (5, "SE Miracema - SE Sapeacu", "500 kV", 1452, 2800, Maintenance, "Norte", 2.5),
        (6, "Furnas - Adrianopolis", "345 kV", 420, 1200, Operating, "Sudeste", 0.8),
        (7, "Paulo Afonso - Recife", "500 kV", 680, 2500, Operating, "Nordeste", 1.5),
        (8, "SE Presidente Medici - Pelotas", "525 kV", 350, 1500, Alert, "Sul", 0.9),
    ]
    .into_iter()
    .map(
        |(id, name, voltage, length_km, capacity_mw, status, region, losses_percent)| TransmissionLine {
            id,
            name: name.to_string(),
            voltage: voltage.to_string(),
            length_km,
            capacity_mw,
            status,
            region: region.to_string(),
            losses_percent,
        },
    )
    .collect()
}

fn seed_interchanges() -> Vec<Interchange> {
    [
        ("00:00", 1200, 3500, -800, 4200),
        ("02:00", 1100, 3200, -600, 4000),
        ("04:00", 1000, 2800, -500, 3800),
        ("06:00", 1300, 3000, -400, 3900),
        ("08:00", 1500, 3800, -1200, 4500),
        ("10:00", 1800, 4200, -1500, 5000),
        ("12:00", 2000, 4500, -1800, 5200),
        ("14:00", 1900, 4300, -1600, 5100),
        ("16:00", 1700, 4000, -1300, 4800),
        ("18:00", 2200, 4800, -2000, 5500),
        ("20:00", 2100, 4600, -1800, 5300),
        ("22:00", 1600, 3800, -1000, 4400),
    ]
    .into_iter()
    .map(|(hour, n_ne, ne_se, se_s, n_se)| Interchange {
        hour: hour.to_string(),
        north_northeast_mw: n_ne,
        northeast_southeast_mw: ne_se,
        southeast_south_mw: se_s,
        north_southeast_mw: n_se,
    })
    .collect()
}
