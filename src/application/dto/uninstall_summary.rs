/// UninstallSummary - What an interactive session did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallSummary {
    /// Confirmed packages, in the order they were attempted
    pub attempted: Vec<String>,
    pub uninstalled: Vec<String>,
    pub failed: Vec<String>,
    /// Confirmed but skipped because of dry-run mode
    pub skipped: Vec<String>,
}

impl UninstallSummary {
    pub fn is_empty(&self) -> bool {
        self.attempted.is_empty()
    }

    /// One-line summary, `None` when nothing was attempted
    pub fn describe(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        if !self.skipped.is_empty() {
            return Some(format!(
                "[dry-run] {} package(s) would have been uninstalled",
                self.skipped.len()
            ));
        }
        let mut line = format!("✅ Uninstalled {} package(s)", self.uninstalled.len());
        if !self.failed.is_empty() {
            line.push_str(&format!(
                ", {} failed: {}",
                self.failed.len(),
                self.failed.join(", ")
            ));
        }
        Some(line)
    }
}
