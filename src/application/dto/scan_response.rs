use crate::cleanup::domain::Classification;
use std::collections::BTreeSet;

/// ScanResponse - Result of the environment scan
#[derive(Debug, Clone)]
pub struct ScanResponse {
    pub classification: Classification,
    /// Every name some package depends on, installed or not
    pub required: BTreeSet<String>,
}

impl ScanResponse {
    pub fn new(classification: Classification, required: BTreeSet<String>) -> Self {
        Self {
            classification,
            required,
        }
    }
}
