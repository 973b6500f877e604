use crate::cleanup::domain::{Category, Classification};
use crate::ports::outbound::ClassificationFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const NAME_WIDTH: usize = 20;
const VERSION_WIDTH: usize = 10;
const RULE_WIDTH: usize = 50;

/// ClassificationTableFormatter renders the fixed-width package table
pub struct ClassificationTableFormatter {
    colored: bool,
}

impl ClassificationTableFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn render_label(&self, category: Category) -> String {
        let label = category.label();
        if !self.colored {
            return label.to_string();
        }
        match category {
            Category::System => label.red().to_string(),
            Category::RequiredByOther => label.yellow().to_string(),
            Category::Application => label.green().to_string(),
        }
    }
}

impl Default for ClassificationTableFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ClassificationFormatter for ClassificationTableFormatter {
    fn format(&self, classification: &Classification) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<nw$} {:<vw$} {}\n",
            "Package",
            "Version",
            "Used By",
            nw = NAME_WIDTH,
            vw = VERSION_WIDTH
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for entry in classification.entries() {
            output.push_str(&format!(
                "{:<nw$} {:<vw$} {}\n",
                entry.name(),
                entry.version(),
                self.render_label(entry.category()),
                nw = NAME_WIDTH,
                vw = VERSION_WIDTH
            ));
        }

        Ok(output)
    }
}
