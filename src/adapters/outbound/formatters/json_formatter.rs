use crate::cleanup::domain::Classification;
use crate::ports::outbound::ClassificationFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    packages: Vec<PackageRecord<'a>>,
    orphans: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct PackageRecord<'a> {
    name: &'a str,
    version: &'a str,
    category: &'static str,
    protected: bool,
}

/// ClassificationJsonFormatter renders the classification as pretty JSON
pub struct ClassificationJsonFormatter;

impl ClassificationJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassificationJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationFormatter for ClassificationJsonFormatter {
    fn format(&self, classification: &Classification) -> Result<String> {
        let report = Report {
            packages: classification
                .entries()
                .iter()
                .map(|e| PackageRecord {
                    name: e.name(),
                    version: e.version(),
                    category: e.category().as_key(),
                    protected: e.is_protected(),
                })
                .collect(),
            orphans: classification.orphans().iter().map(|e| e.name()).collect(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        Ok(json)
    }
}
