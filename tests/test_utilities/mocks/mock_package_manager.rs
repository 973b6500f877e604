use pyprune::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PackageManager backed by an in-memory package list
///
/// Uninstalls remove the package from the list so a second scan
/// sees the new state.
#[derive(Default, Clone)]
pub struct MockPackageManager {
    packages: Arc<Mutex<Vec<(String, String, Option<String>)>>>,
    failing: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(self, name: &str, version: &str, location: &str) -> Self {
        self.packages.lock().unwrap().push((
            name.to_string(),
            version.to_string(),
            Some(location.to_string()),
        ));
        self
    }

    pub fn failing_uninstall(self, name: &str) -> Self {
        self.failing.lock().unwrap().push(name.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn installed_names(&self) -> Vec<String> {
        self.packages
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect()
    }
}

impl PackageManager for MockPackageManager {
    fn list_installed(&self, include_location: bool) -> Result<InstalledPackages> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("list(include_location={})", include_location));
        self.packages
            .lock()
            .unwrap()
            .iter()
            .map(|(name, version, location)| {
                let location = if include_location {
                    location.clone()
                } else {
                    None
                };
                InstalledPackage::new(name.clone(), version.clone(), location)
            })
            .collect()
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("uninstall {}", name));
        if self.failing.lock().unwrap().iter().any(|f| f == name) {
            anyhow::bail!("Mock uninstall failure for {}", name);
        }
        self.packages.lock().unwrap().retain(|(n, _, _)| n != name);
        Ok(())
    }

    fn install(&self, name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(format!("install {}", name));
        Ok(())
    }
}
