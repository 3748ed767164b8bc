use common::{ReportDescriptor, ReportKind, get_descriptor};
use tracing::debug;

use super::source::{ReportSource, source_for};
use crate::error::{ReportError, Result};

/// A validated report path: the catalog entry, its source and the typed
/// positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub descriptor: &'static ReportDescriptor,
    pub source: ReportSource,
    pub parameters: Vec<i32>,
}

impl ReportRequest {
    /// Parses `report-id[/value...]`. Leading and trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.split('/');
        let id = segments.next().unwrap_or_default();
        let values: Vec<&str> = segments.collect();

        let descriptor =
            get_descriptor(id).ok_or_else(|| ReportError::NotFound(id.to_string()))?;
        let source =
            source_for(descriptor.id).ok_or_else(|| ReportError::NotFound(id.to_string()))?;

        // Only procedures have anything below their id
        if descriptor.kind != ReportKind::Procedure && !values.is_empty() {
            return Err(ReportError::NotFound(trimmed.to_string()));
        }

        if values.len() != descriptor.parameters.len() {
            return Err(ReportError::InvalidParameters(format!(
                "{} expects {} parameter(s) ({}), got {}",
                descriptor.id,
                descriptor.parameters.len(),
                descriptor.path_template(),
                values.len()
            )));
        }

        let parameters = descriptor
            .parameters
            .iter()
            .zip(values)
            .map(|(parameter, raw)| {
                let value: i32 = raw.parse().map_err(|_| {
                    ReportError::InvalidParameters(format!(
                        "{} must be an integer, got '{}'",
                        parameter.name, raw
                    ))
                })?;
                if !parameter.accepts(value) {
                    return Err(ReportError::InvalidParameters(format!(
                        "{} must be between {} and {}, got {}",
                        parameter.name, parameter.min, parameter.max, value
                    )));
                }
                Ok(value)
            })
            .collect::<Result<Vec<i32>>>()?;

        debug!("Parsed report path {} as {} {:?}", path, descriptor.id, parameters);
        Ok(Self {
            descriptor,
            source,
            parameters,
        })
    }

    pub fn report_id(&self) -> &'static str {
        self.descriptor.id
    }

    pub fn kind(&self) -> ReportKind {
        self.descriptor.kind
    }

    /// Canonical path, e.g. `monthly-attendance/2025/12`.
    pub fn path(&self) -> String {
        self.descriptor.path_with(&self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_report() {
        let request = ReportRequest::parse("project-expenses").unwrap();
        assert_eq!(request.report_id(), "project-expenses");
        assert_eq!(request.kind(), ReportKind::Query);
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn test_procedure_parameters_are_typed() {
        let request = ReportRequest::parse("/monthly-attendance/2025/12/").unwrap();
        assert_eq!(request.parameters, vec![2025, 12]);
        assert_eq!(request.path(), "monthly-attendance/2025/12");
    }

    #[test]
    fn test_unknown_report() {
        assert_eq!(
            ReportRequest::parse("salaries-of-everyone"),
            Err(ReportError::NotFound("salaries-of-everyone".to_string()))
        );
        assert!(matches!(ReportRequest::parse(""), Err(ReportError::NotFound(_))));
    }

    #[test]
    fn test_extra_segments_on_query_report_are_not_found() {
        assert!(matches!(
            ReportRequest::parse("project-expenses/2025"),
            Err(ReportError::NotFound(_))
        ));
        assert!(matches!(
            ReportRequest::parse("project-cost-analysis/1"),
            Err(ReportError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_procedure_parameters() {
        for path in [
            "monthly-attendance",
            "monthly-attendance/2025",
            "monthly-attendance/2025/12/1",
            "monthly-attendance/2025/december",
            "monthly-attendance/2025/13",
            "monthly-attendance/1999/1",
            "monthly-attendance/2025/1;DROP TABLE expenses",
            "monthly-attendance/2025//",
            "budget-alerts/1",
        ] {
            assert!(
                matches!(ReportRequest::parse(path), Err(ReportError::InvalidParameters(_))),
                "{} should be rejected",
                path
            );
        }
    }
}
