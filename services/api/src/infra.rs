use chrono::NaiveDate;
use hsse_audit::error::AppError;
use hsse_audit::workflows::audit::{
    ChecklistTemplate, ChecklistTemplateImporter, FindingType, ResponseSet, Severity,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_finding_type(raw: &str) -> Result<FindingType, String> {
    Ok(FindingType::from_label(raw))
}

pub(crate) fn parse_severity(raw: &str) -> Result<Severity, String> {
    Ok(Severity::from_label(raw))
}

/// Load a template from a CSV export (by extension) or a JSON document.
pub(crate) fn load_template(path: &Path) -> Result<ChecklistTemplate, AppError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        return Ok(ChecklistTemplateImporter::from_path(path)?);
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn load_responses(path: Option<&Path>) -> Result<ResponseSet, AppError> {
    match path {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        }
        None => Ok(ResponseSet::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-06-02 ").expect("parses"),
            NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid")
        );
        assert!(parse_date("02/06/2025").is_err());
    }

    #[test]
    fn finding_labels_never_fail_to_parse() {
        assert_eq!(parse_finding_type("minor-nc"), Ok(FindingType::MinorNc));
        assert_eq!(parse_severity("whatever"), Ok(Severity::Unrecognized));
    }

    #[test]
    fn missing_template_file_is_an_error() {
        assert!(matches!(
            load_template(Path::new("./no-such-template.csv")),
            Err(AppError::Import(_))
        ));
        assert!(matches!(
            load_template(Path::new("./no-such-template.json")),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn absent_responses_file_means_all_compliant() {
        let responses = load_responses(None).expect("defaults");
        assert!(responses.is_empty());
    }
}
