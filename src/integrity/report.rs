//! Batch validation reports
//!
//! Validating a package of resources accumulates per-resource violations
//! instead of aborting on the first failing resource.

use serde::Serialize;

use super::errors::ValidationError;

/// Violations found for one named resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceReport {
    /// Resource name
    pub name: String,
    /// Violations in check order; empty means the resource is valid
    pub errors: Vec<ValidationError>,
}

impl ResourceReport {
    /// Create a report for one resource.
    pub fn new(name: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self {
            name: name.into(),
            errors,
        }
    }

    /// Whether the resource passed every declared check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Accumulated results of a batch validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    resources: Vec<ResourceReport>,
}

impl ValidationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resource's outcome.
    pub fn push(&mut self, report: ResourceReport) {
        self.resources.push(report);
    }

    /// Per-resource outcomes, in validation order.
    pub fn resources(&self) -> &[ResourceReport] {
        &self.resources
    }

    /// Whether every resource passed.
    pub fn is_valid(&self) -> bool {
        self.resources.iter().all(ResourceReport::is_valid)
    }

    /// Total violations across all resources.
    pub fn error_count(&self) -> usize {
        self.resources.iter().map(|r| r.errors.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        assert!(ValidationReport::new().is_valid());
    }

    #[test]
    fn test_report_accumulates_across_resources() {
        let mut report = ValidationReport::new();
        report.push(ResourceReport::new("good.csv", vec![]));
        report.push(ResourceReport::new(
            "bad.csv",
            vec![ValidationError::Bytes {
                bytes: 10,
                actual_bytes: 9,
            }],
        ));
        report.push(ResourceReport::new(
            "worse.csv",
            vec![
                ValidationError::Bytes {
                    bytes: 1,
                    actual_bytes: 2,
                },
                ValidationError::Hash {
                    hash: "a".into(),
                    actual_hash: "b".into(),
                },
            ],
        ));

        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.resources().len(), 3);
        assert!(report.resources()[0].is_valid());
    }
}
