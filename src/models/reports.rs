use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{FieldValue, Record};

// ─── Report catalog ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum ReportType {
    #[serde(rename = "diario")]
    Daily,
    #[serde(rename = "semanal")]
    Weekly,
    #[serde(rename = "mensal")]
    Monthly,
    #[serde(rename = "especial")]
    Special,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Daily => "diario",
            ReportType::Weekly => "semanal",
            ReportType::Monthly => "mensal",
            ReportType::Special => "especial",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Report {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReportType,
    /// Publication date, dd/mm/yyyy
    pub date: String,
    /// Human-readable file size, e.g. "4.2 MB"
    pub size: String,
    pub category: String,
}

impl Record for Report {
    type Id = u32;

    const COLUMNS: &'static [&'static str] = &["id", "title", "type", "date", "size", "category"];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.as_str().into()),
            "type" => Some(self.kind.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            "size" => Some(self.size.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            _ => None,
        }
    }
}

// ─── KPI cards ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Kpi {
    pub label: String,
    /// Pre-formatted value with unit, e.g. "102.2 GW"
    pub value: String,
    pub trend: Trend,
    pub change: String,
}

// ─── Annotations ─────────────────────────────────────────────────────────────

/// Free-text note created from the dashboard. Lives in memory only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Annotation {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAnnotation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

// ─── Summary ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, ToSchema, PartialEq, Eq)]
pub struct ReportTypeCounts {
    #[serde(rename = "diario")]
    pub daily: usize,
    #[serde(rename = "semanal")]
    pub weekly: usize,
    #[serde(rename = "mensal")]
    pub monthly: usize,
    #[serde(rename = "especial")]
    pub special: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct ReportsSummary {
    #[serde(rename = "totalRelatorios")]
    pub total_reports: usize,
    #[serde(rename = "porTipo")]
    pub by_type: ReportTypeCounts,
    #[serde(rename = "totalAnotacoes")]
    pub total_annotations: usize,
}
