use crate::cleanup::domain::ProtectionPolicy;

/// ScanRequest - Input of the environment scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Protection rules; also decides whether install locations are queried
    pub policy: ProtectionPolicy,
    /// Whether to install the dependency-tree tool when it is missing
    pub auto_install_tool: bool,
}

impl ScanRequest {
    pub fn new(policy: ProtectionPolicy, auto_install_tool: bool) -> Self {
        Self {
            policy,
            auto_install_tool,
        }
    }

    pub fn include_location(&self) -> bool {
        self.policy.include_location()
    }
}
