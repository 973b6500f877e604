mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, Settings};
use pyprune::adapters::outbound::console::{StderrProgressReporter, TerminalConsole};
use pyprune::adapters::outbound::process::{PipPackageManager, PipdeptreeReader};
use pyprune::application::dto::ScanRequest;
use pyprune::application::factories::FormatterFactory;
use pyprune::application::use_cases::{InteractiveUninstallUseCase, ScanEnvironmentUseCase};
use pyprune::shared::error::ExitCode;
use pyprune::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file: explicit path wins over auto-discovery
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let scan = ScanEnvironmentUseCase::new(
        PipPackageManager::new(settings.python.clone()),
        PipdeptreeReader::new(settings.python.clone()),
        StderrProgressReporter::new(),
    );

    // Execute the scan
    let request = ScanRequest::new(settings.policy.clone(), settings.auto_install);
    let response = scan.execute(&request)?;

    // Render the classification
    let formatter = FormatterFactory::create(settings.format, settings.colored);
    println!("{}", formatter.format(&response.classification)?);

    if settings.list_only {
        return Ok(());
    }

    // Interactive cleanup
    let uninstaller = InteractiveUninstallUseCase::new(
        PipPackageManager::new(settings.python.clone()),
        TerminalConsole::stdio(),
        StderrProgressReporter::new(),
        settings.dry_run,
    );
    let summary = uninstaller.execute(&response.classification)?;

    if let Some(line) = summary.describe() {
        eprintln!("{}", line);
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path)).map(Some),
        None => discover_config(Path::new(".")),
    }
}
