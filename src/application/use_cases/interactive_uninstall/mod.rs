use crate::application::dto::UninstallSummary;
use crate::cleanup::domain::{Classification, ClassificationEntry};
use crate::ports::outbound::{Console, PackageManager, ProgressReporter};
use crate::shared::Result;

const ASK_ANY_PROMPT: &str = "\nDo you want to uninstall any of these packages? (y/n): ";
const MODE_PROMPT: &str = "Enter 1 or 2: ";
const NAMES_PROMPT: &str =
    "Enter package name(s) to uninstall (comma separated), or 'q' to quit: ";
const MORE_PROMPT: &str = "\nDo you want to uninstall more packages? (y/n): ";

/// States of the interactive session; `Done` ends it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Display,
    AskUninstallAny,
    AskMode,
    UninstallAll,
    UninstallSpecific,
    Done,
}

/// InteractiveUninstallUseCase - Offers orphaned packages for removal
///
/// Every uninstall is confirmed individually and is best-effort: a failure
/// is reported and the session moves on. Invalid input never ends in an
/// error, only in a corrective message, a re-prompt or the end of the
/// session. The classification is not updated as packages are removed.
///
/// # Type Parameters
/// * `PM` - PackageManager implementation
/// * `C` - Console implementation
/// * `PR` - ProgressReporter implementation
pub struct InteractiveUninstallUseCase<PM, C, PR> {
    package_manager: PM,
    console: C,
    progress_reporter: PR,
    dry_run: bool,
}

impl<PM, C, PR> InteractiveUninstallUseCase<PM, C, PR>
where
    PM: PackageManager,
    C: Console,
    PR: ProgressReporter,
{
    /// Creates a new InteractiveUninstallUseCase with injected dependencies
    ///
    /// # Arguments
    /// * `dry_run` - Confirmations are asked as usual but nothing is uninstalled
    pub fn new(package_manager: PM, console: C, progress_reporter: PR, dry_run: bool) -> Self {
        Self {
            package_manager,
            console,
            progress_reporter,
            dry_run,
        }
    }

    /// Runs the session until the user is done
    ///
    /// # Errors
    /// Returns an error only if reading from the console fails
    pub fn execute(&self, classification: &Classification) -> Result<UninstallSummary> {
        let orphans = classification.orphans();
        let mut summary = UninstallSummary::default();
        let mut state = SessionState::Display;

        while state != SessionState::Done {
            state = match state {
                SessionState::Display => self.display(&orphans),
                SessionState::AskUninstallAny => self.ask_uninstall_any()?,
                SessionState::AskMode => self.ask_mode()?,
                SessionState::UninstallAll => self.uninstall_all(&orphans, &mut summary)?,
                SessionState::UninstallSpecific => {
                    self.uninstall_specific(&orphans, &mut summary)?
                }
                SessionState::Done => SessionState::Done,
            };
        }

        Ok(summary)
    }

    fn display(&self, orphans: &[&ClassificationEntry]) -> SessionState {
        if orphans.is_empty() {
            self.console
                .print_line("\nNo orphaned packages safe to uninstall.");
            return SessionState::Done;
        }

        self.console.print_line("\nOrphaned packages safe to uninstall:");
        for entry in orphans {
            self.console
                .print_line(&format!(" - {} ({})", entry.name(), entry.version()));
        }
        SessionState::AskUninstallAny
    }

    fn ask_uninstall_any(&self) -> Result<SessionState> {
        if self.confirm(ASK_ANY_PROMPT)? {
            Ok(SessionState::AskMode)
        } else {
            self.console.print_line("No packages were uninstalled.");
            Ok(SessionState::Done)
        }
    }

    fn ask_mode(&self) -> Result<SessionState> {
        self.console.print_line("\nChoose an option:");
        self.console.print_line("1. Uninstall all orphaned packages");
        self.console.print_line("2. Uninstall specific package(s)");

        let option = self.ask(MODE_PROMPT)?;
        Ok(match option.as_str() {
            "1" => SessionState::UninstallAll,
            "2" => SessionState::UninstallSpecific,
            _ => {
                self.console.print_line("Invalid option. Exiting.");
                SessionState::Done
            }
        })
    }

    fn uninstall_all(
        &self,
        orphans: &[&ClassificationEntry],
        summary: &mut UninstallSummary,
    ) -> Result<SessionState> {
        for entry in orphans {
            self.confirm_and_uninstall(entry, summary)?;
        }
        self.console
            .print_line("\nFinished uninstalling selected orphaned packages.");
        Ok(SessionState::Done)
    }

    fn uninstall_specific(
        &self,
        orphans: &[&ClassificationEntry],
        summary: &mut UninstallSummary,
    ) -> Result<SessionState> {
        loop {
            let Some(input) = self.console.prompt(NAMES_PROMPT)? else {
                break;
            };
            let input = input.trim();
            if input.eq_ignore_ascii_case("q") {
                break;
            }

            let selected = select_orphans(input, orphans);
            if selected.is_empty() {
                self.console.print_line("No valid packages selected. Try again.");
                continue;
            }

            for entry in selected {
                self.confirm_and_uninstall(entry, summary)?;
            }

            if !self.confirm(MORE_PROMPT)? {
                break;
            }
        }
        Ok(SessionState::Done)
    }

    fn confirm_and_uninstall(
        &self,
        entry: &ClassificationEntry,
        summary: &mut UninstallSummary,
    ) -> Result<()> {
        let prompt = format!(
            "Do you want to uninstall {} ({})? (y/n): ",
            entry.name(),
            entry.version()
        );
        if self.confirm(&prompt)? {
            self.uninstall(entry.name(), summary);
        }
        Ok(())
    }

    fn uninstall(&self, name: &str, summary: &mut UninstallSummary) {
        summary.attempted.push(name.to_string());

        if self.dry_run {
            self.console
                .print_line(&format!("[dry-run] Would uninstall {}", name));
            summary.skipped.push(name.to_string());
            return;
        }

        self.console.print_line(&format!("\nUninstalling {}...", name));
        match self.package_manager.uninstall(name) {
            Ok(()) => summary.uninstalled.push(name.to_string()),
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Failed to uninstall {}: {:#}", name, e));
                summary.failed.push(name.to_string());
            }
        }
    }

    /// Trimmed answer; end of input reads as an empty answer
    fn ask(&self, message: &str) -> Result<String> {
        Ok(self
            .console
            .prompt(message)?
            .map(|answer| answer.trim().to_string())
            .unwrap_or_default())
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(message)?))
    }
}

/// Whether an answer is the affirmative token `y`
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Picks the orphans named in a comma-separated list
///
/// Tokens are trimmed; names that are not orphans are dropped without
/// notice. Order and repeats follow the input.
pub fn select_orphans<'a>(
    input: &str,
    orphans: &[&'a ClassificationEntry],
) -> Vec<&'a ClassificationEntry> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|token| orphans.iter().find(|e| e.name() == token).copied())
        .collect()
}
