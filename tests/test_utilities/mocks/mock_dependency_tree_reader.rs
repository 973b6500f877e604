use pyprune::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DependencyTreeReader returning a fixed tree
#[derive(Clone)]
pub struct MockDependencyTreeReader {
    tree: Vec<(String, Vec<String>)>,
    available: bool,
    should_fail: bool,
    pub reads: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockDependencyTreeReader {
    pub fn new() -> Self {
        Self {
            tree: Vec::new(),
            available: true,
            should_fail: false,
            reads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_entry(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.tree.push((
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl DependencyTreeReader for MockDependencyTreeReader {
    fn tool_package(&self) -> &str {
        "pipdeptree"
    }

    fn is_available(&self) -> Result<bool> {
        Ok(self.available)
    }

    fn read_tree(&self) -> Result<DependencyTree> {
        *self.reads.lock().unwrap() += 1;
        if self.should_fail {
            anyhow::bail!("Mock pipdeptree failure");
        }
        Ok(self
            .tree
            .iter()
            .map(|(name, deps)| DependencyTreeEntry::new(Some(name.clone()), deps.clone()))
            .collect())
    }
}
