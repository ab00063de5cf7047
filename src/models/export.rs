use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown dataset: {0}. Use: energia, transmissao, solar, eolica, relatorios")]
    UnknownDataset(String),

    #[error("Unknown format: {0}. Use: csv, json, md")]
    UnknownFormat(String),

    #[error("Nothing to export for dataset {0}")]
    NothingToExport(Dataset),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ─── Dataset selector ────────────────────────────────────────────────────────

/// Exportable collection, keyed the way the dashboard's download menu names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Energia,
    Transmissao,
    Solar,
    Eolica,
    Relatorios,
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Energia,
        Dataset::Transmissao,
        Dataset::Solar,
        Dataset::Eolica,
        Dataset::Relatorios,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dataset::Energia => "energia",
            Dataset::Transmissao => "transmissao",
            Dataset::Solar => "solar",
            Dataset::Eolica => "eolica",
            Dataset::Relatorios => "relatorios",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Energia => "Geracao de Energia Eletrica",
            Dataset::Transmissao => "Linhas de Transmissao",
            Dataset::Solar => "Usinas Solares",
            Dataset::Eolica => "Usinas Eolicas",
            Dataset::Relatorios => "Relatorios do SIN",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dataset {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.key() == s)
            .ok_or_else(|| ExportError::UnknownDataset(s.to_string()))
    }
}

// ─── Output format ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "md" => Ok(ExportFormat::Markdown),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// Rendered file, ready to be attached to a download response.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub content_type: &'static str,
    pub filename: String,
    pub body: Vec<u8>,
}

impl ExportPayload {
    /// `Content-Disposition` value for the suggested filename.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Envelope wrapped around JSON exports.
#[derive(Debug, Serialize)]
pub struct JsonExport<'a, R: Serialize> {
    pub title: &'a str,
    #[serde(rename = "exportedAt")]
    pub exported_at: String,
    pub data: &'a [R],
}
