/// Category assigned to each installed package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Protected by name or install location, never offered for removal
    System,
    /// Some other installed package depends on it
    RequiredByOther,
    /// Nothing depends on it: an orphan, safe to uninstall
    Application,
}

impl Category {
    /// Human-readable label used in the package table
    pub fn label(&self) -> &'static str {
        match self {
            Category::System => "system (do not remove)",
            Category::RequiredByOther => "required by another package",
            Category::Application => "application",
        }
    }

    /// Stable identifier used in machine-readable output
    pub fn as_key(&self) -> &'static str {
        match self {
            Category::System => "system",
            Category::RequiredByOther => "required",
            Category::Application => "application",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationEntry {
    name: String,
    version: String,
    category: Category,
}

impl ClassificationEntry {
    pub fn new(name: String, version: String, category: Category) -> Self {
        Self {
            name,
            version,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_protected(&self) -> bool {
        self.category == Category::System
    }
}

/// Classification of every installed package, in installed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    entries: Vec<ClassificationEntry>,
}

impl Classification {
    pub fn new(entries: Vec<ClassificationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ClassificationEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&ClassificationEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Application packages in display order
    pub fn orphans(&self) -> Vec<&ClassificationEntry> {
        self.entries
            .iter()
            .filter(|e| e.category() == Category::Application)
            .collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
