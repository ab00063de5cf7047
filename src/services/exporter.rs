//! Dataset downloads in CSV, JSON and Markdown.
//!
//! CSV values are written verbatim: a `;` or newline inside a value is not
//! quoted and shifts the columns of that row.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::models::export::{Dataset, ExportError, ExportFormat, ExportPayload, JsonExport};
use crate::models::record::Record;
use crate::services::filter::Filters;
use crate::services::repository::{Repositories, Repository};

const CSV_DELIMITER: &str = ";";

#[derive(Debug, Clone)]
pub struct Exporter {
    filename_prefix: String,
}

impl Exporter {
    pub fn new(filename_prefix: impl Into<String>) -> Self {
        Self {
            filename_prefix: filename_prefix.into(),
        }
    }

    pub fn export(
        &self,
        repositories: &Repositories,
        format: &str,
        dataset: &str,
    ) -> Result<ExportPayload, ExportError> {
        self.export_at(repositories, format, dataset, Utc::now())
    }

    /// Same as [`Exporter::export`] with an explicit export time.
    pub fn export_at(
        &self,
        repositories: &Repositories,
        format: &str,
        dataset: &str,
        now: DateTime<Utc>,
    ) -> Result<ExportPayload, ExportError> {
        let dataset: Dataset = dataset.parse()?;
        let all = Filters::new();
        match dataset {
            Dataset::Energia => self.render(dataset, &repositories.energy.find_all(&all), format, now),
            Dataset::Transmissao => {
                self.render(dataset, &repositories.transmission.find_all(&all), format, now)
            }
            Dataset::Solar => self.render(dataset, &repositories.solar.find_all(&all), format, now),
            Dataset::Eolica => self.render(dataset, &repositories.wind.find_all(&all), format, now),
            Dataset::Relatorios => {
                self.render(dataset, &repositories.reports.find_all(&all), format, now)
            }
        }
    }

    fn render<R: Record>(
        &self,
        dataset: Dataset,
        records: &[R],
        format: &str,
        now: DateTime<Utc>,
    ) -> Result<ExportPayload, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NothingToExport(dataset));
        }
        let format: ExportFormat = format.parse()?;

        let body = match format {
            ExportFormat::Csv => to_csv(records),
            ExportFormat::Json => to_json(dataset.title(), records, now)?,
            ExportFormat::Markdown => to_markdown(dataset.title(), records, now),
        };
        debug!("Exported {} {} records as {}", records.len(), dataset, format.extension());

        Ok(ExportPayload {
            content_type: format.content_type(),
            filename: format!(
                "{}_{}_{}.{}",
                self.filename_prefix,
                dataset.key(),
                now.timestamp_millis(),
                format.extension()
            ),
            body: body.into_bytes(),
        })
    }
}

pub fn to_csv<R: Record>(records: &[R]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(R::COLUMNS.join(CSV_DELIMITER));
    lines.extend(records.iter().map(|record| record.row().join(CSV_DELIMITER)));
    lines.join("\n")
}

pub fn to_json<R: Record>(title: &str, records: &[R], now: DateTime<Utc>) -> Result<String, ExportError> {
    let envelope = JsonExport {
        title,
        exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        data: records,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn to_markdown<R: Record>(title: &str, records: &[R], now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("# {title}"),
        String::new(),
        format!("> Exportado em: {}", now.format("%d/%m/%Y %H:%M:%S")),
        String::new(),
        format!("| {} |", R::COLUMNS.join(" | ")),
        format!("| {} |", vec!["---"; R::COLUMNS.len()].join(" | ")),
    ];
    lines.extend(records.iter().map(|record| format!("| {} |", record.row().join(" | "))));
    lines.push(String::new());
    lines.push(format!("*Total de registros: {}*", records.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::plants::WindFarm;
    use crate::models::reports::{NewAnnotation, Report, ReportType};
    use crate::services::report_repository::ReportRepository;
    use crate::services::transmission_repository::TransmissionRepository;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 6, 14, 30, 5).unwrap()
    }

    fn export(format: &str, dataset: &str) -> Result<ExportPayload, ExportError> {
        Exporter::new("ons").export_at(&Repositories::seeded(), format, dataset, fixed_time())
    }

    fn body(payload: &ExportPayload) -> &str {
        std::str::from_utf8(&payload.body).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let payload = export("csv", "transmissao").unwrap();
        let text = body(&payload);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "id;nome;tensao;extensao;capacidade;status;regiao;perdas");
        assert_eq!(lines[1], "1;Tucurui - Macapa;500 kV;1800;3200;operando;Norte;2.1");
        assert_eq!(lines[8], "8;SE Presidente Medici - Pelotas;525 kV;350;1500;alerta;Sul;0.9");
        assert!(!text.ends_with('\n'));

        assert_eq!(payload.content_type, "text/csv; charset=utf-8");
        assert_eq!(payload.filename, format!("ons_transmissao_{}.csv", fixed_time().timestamp_millis()));
    }

    #[test]
    fn test_csv_header_matches_first_record_keys() {
        let payload = export("csv", "eolica").unwrap();
        let header: Vec<_> = body(&payload).lines().next().unwrap().split(';').collect();
        assert_eq!(header, WindFarm::COLUMNS);

        // same keys, in the order the record serializes them
        let first = serde_json::to_string(&Repositories::seeded().wind.find_all(&Filters::new())[0]).unwrap();
        let positions: Vec<_> = header
            .iter()
            .map(|key| first.find(&format!("\"{key}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(value.as_object().unwrap().len(), header.len());
    }

    #[test]
    fn test_csv_does_not_escape_delimiters() {
        let reports = ReportRepository::new(
            vec![Report {
                id: 1,
                title: "Carga; Sudeste".to_string(),
                kind: ReportType::Daily,
                date: "06/02/2026".to_string(),
                size: "1 MB".to_string(),
                category: "Operacao".to_string(),
            }],
            Vec::new(),
        );
        let csv = to_csv(&reports.find_all(&Filters::new()));
        assert_eq!(csv.lines().nth(1), Some("1;Carga; Sudeste;diario;06/02/2026;1 MB;Operacao"));
    }

    #[test]
    fn test_json_envelope() {
        let payload = export("json", "energia").unwrap();
        let value: serde_json::Value = serde_json::from_str(body(&payload)).unwrap();

        assert_eq!(value["title"], "Geracao de Energia Eletrica");
        assert_eq!(value["data"].as_array().unwrap().len(), 12);
        assert_eq!(value["data"][0]["hora"], "00:00");
        assert_eq!(value["data"][0]["hidro"], 42000);

        let exported_at = value["exportedAt"].as_str().unwrap();
        assert_eq!(exported_at, "2026-02-06T14:30:05.000Z");
        assert!(DateTime::parse_from_rfc3339(exported_at).is_ok());

        assert_eq!(payload.content_type, "application/json; charset=utf-8");
        assert!(payload.filename.ends_with(".json"));
        // pretty-printed with two-space indentation
        assert!(body(&payload).contains("\n  \"title\""));
    }

    #[test]
    fn test_markdown_layout() {
        let payload = export("md", "relatorios").unwrap();
        let text = body(&payload);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "# Relatorios do SIN");
        assert_eq!(lines[2], "> Exportado em: 06/02/2026 14:30:05");
        assert_eq!(lines[4], "| id | title | type | date | size | category |");
        assert_eq!(lines[5], "| --- | --- | --- | --- | --- | --- |");
        assert_eq!(
            lines[6],
            "| 1 | Relatorio Mensal do SIN - Janeiro 2026 | mensal | 05/02/2026 | 4.2 MB | Operacao |"
        );
        assert_eq!(lines.last(), Some(&"*Total de registros: 8*"));

        let non_empty = lines.iter().filter(|l| !l.is_empty()).count();
        assert_eq!(non_empty, 8 + 2 + 3);
        assert_eq!(payload.content_type, "text/markdown; charset=utf-8");
    }

    #[test]
    fn test_repeat_export_is_identical() {
        let repos = Repositories::seeded();
        let exporter = Exporter::new("ons");
        for format in ["csv", "json", "md"] {
            for dataset in Dataset::ALL {
                let a = exporter.export_at(&repos, format, dataset.key(), fixed_time()).unwrap();
                let b = exporter.export_at(&repos, format, dataset.key(), fixed_time()).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_annotations_do_not_change_report_export() {
        let repos = Repositories::seeded();
        let exporter = Exporter::new("ons");
        let before = exporter.export_at(&repos, "csv", "relatorios", fixed_time()).unwrap();
        repos.reports.add_annotation(NewAnnotation::default());
        let after = exporter.export_at(&repos, "csv", "relatorios", fixed_time()).unwrap();
        assert_eq!(before.body, after.body);
    }

    #[test]
    fn test_unknown_dataset_is_client_error() {
        let err = export("csv", "doesnotexist").unwrap_err();
        assert!(matches!(err, ExportError::UnknownDataset(ref key) if key == "doesnotexist"));
    }

    #[test]
    fn test_unknown_format_is_client_error() {
        let err = export("xml", "solar").unwrap_err();
        assert!(matches!(err, ExportError::UnknownFormat(ref f) if f == "xml"));
    }

    #[test]
    fn test_empty_dataset_is_nothing_to_export() {
        let repos = Repositories {
            transmission: TransmissionRepository::new(Vec::new(), Vec::new()),
            ..Repositories::seeded()
        };
        let err = Exporter::new("ons")
            .export_at(&repos, "csv", "transmissao", fixed_time())
            .unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport(Dataset::Transmissao)));

        // emptiness is reported before the format is looked at
        let err = Exporter::new("ons")
            .export_at(&repos, "xml", "transmissao", fixed_time())
            .unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport(_)));
    }

    #[test]
    fn test_filename_prefix_is_configurable() {
        let repos = Repositories::seeded();
        let payload = Exporter::new("grid").export_at(&repos, "md", "energia", fixed_time()).unwrap();
        assert_eq!(payload.filename, format!("grid_energia_{}.md", fixed_time().timestamp_millis()));
        assert_eq!(
            payload.content_disposition(),
            format!("attachment; filename=\"{}\"", payload.filename)
        );
    }
}
