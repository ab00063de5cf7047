use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info};

use crate::models::reports::{
    Annotation, Kpi, NewAnnotation, Report, ReportType, ReportsSummary, Trend,
};
use crate::services::aggregate;
use crate::services::filter::{self, Filters};
use crate::services::repository::Repository;

/// Report catalog, KPI cards and the in-memory annotation log.
#[derive(Debug)]
pub struct ReportRepository {
    reports: Vec<Report>,
    kpis: Vec<Kpi>,
    /// Append-only; the write lock covers id assignment and push together.
    annotations: RwLock<Vec<Annotation>>,
}

impl ReportRepository {
    pub fn new(reports: Vec<Report>, kpis: Vec<Kpi>) -> Self {
        Self {
            reports,
            kpis,
            annotations: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_reports(), seed_kpis())
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.kpis
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.annotations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Appends an annotation with `id = count + 1`.
    ///
    /// `created_at` never goes backwards relative to the previous entry, even
    /// if the wall clock does.
    pub fn add_annotation(&self, new: NewAnnotation) -> Annotation {
        let mut annotations = self
            .annotations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now();
        let created_at = match annotations.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };
        let annotation = Annotation {
            id: annotations.len() as u32 + 1,
            title: new.title,
            content: new.content,
            created_at,
        };
        annotations.push(annotation.clone());

        info!("Annotation {} added: {}", annotation.id, annotation.title);
        annotation
    }

    fn annotation_count(&self) -> usize {
        self.annotations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Repository for ReportRepository {
    type Record = Report;
    type Summary = ReportsSummary;

    fn entity_name(&self) -> &'static str {
        "Relatorios"
    }

    fn find_all(&self, filters: &Filters) -> Vec<Report> {
        let result = filter::apply_filters(&self.reports, filters);
        debug!("{}: {} of {} reports match", self.entity_name(), result.len(), self.reports.len());
        result
    }

    fn find_by_id(&self, id: &u32) -> Option<Report> {
        filter::find_by_id(&self.reports, id)
    }

    fn summary(&self) -> ReportsSummary {
        aggregate::reports_summary(&self.reports, self.annotation_count())
    }
}

// ─── Seed data ───────────────────────────────────────────────────────────────

fn seed_reports() -> Vec<Report> {
    use ReportType::*;

    [
        (1, "Relatorio Mensal do SIN - Janeiro 2026", Monthly, "05/02/2026", "4.2 MB", "Operacao"),
        (2, "Boletim Diario de Operacao", Daily, "06/02/2026", "1.8 MB", "Operacao"),
        (3, "Analise de Contingencia - Regiao Sudeste", Special, "04/02/2026", "2.5 MB", "Seguranca"),
        (4, "Balanco Energetico Semanal", Weekly, "03/02/2026", "3.1 MB", "Energia"),
        (5, "Previsao de Carga - Fevereiro 2026", Monthly, "01/02/2026", "2.8 MB", "Planejamento"),
        (6, "Relatorio de Geracao Renovavel", Monthly, "02/02/2026", "5.4 MB", "Renovavel"),
        (7, "Situacao dos Reservatorios", Weekly, "06/02/2026", "1.2 MB", "Hidro"),
        (8, "Indicadores de Desempenho do SIN", Monthly, "01/02/2026", "3.8 MB", "Operacao"),
    ]
    .into_iter()
    .map(|(id, title, kind, date, size, category)| Report {
        id,
        title: title.to_string(),
        kind,
        date: date.to_string(),
        size: size.to_string(),
        category: category.to_string(),
    })
    .collect()
}

fn seed_kpis() -> Vec<Kpi> {
    [
        ("Geracao Total 2025", "716 TWh", Trend::Up, "+4.2%"),
        ("Pico de Demanda", "102.2 GW", Trend::Up, "+2.8%"),
        ("Participacao Renovavel", "88.4%", Trend::Up, "+3.1%"),
        ("Nivel dos Reservatorios", "62.5%", Trend::Down, "-5.4%"),
    ]
    .into_iter()
    .map(|(label, value, trend, change)| Kpi {
        label: label.to_string(),
        value: value.to_string(),
        trend,
        change: change.to_string(),
    })
    .collect()
}
