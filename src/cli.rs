use clap::Parser;
use pyprune::application::dto::OutputFormat;

/// Find and remove orphaned packages from a Python environment
#[derive(Parser, Debug)]
#[command(name = "pyprune")]
#[command(version)]
#[command(about = "Find and remove orphaned packages from a Python environment", long_about = None)]
pub struct Args {
    /// Python interpreter used to run pip and pipdeptree [default: python3]
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Skip the install-location query and location-based protection
    #[arg(long)]
    pub no_location: bool,

    /// Additional install-location prefix treated as a system location
    /// Can be specified multiple times: --system-dir /opt/homebrew/ --system-dir /usr/lib/
    #[arg(long = "system-dir", value_name = "PREFIX")]
    pub system_dirs: Vec<String>,

    /// Additional package that must never be offered for removal
    /// Can be specified multiple times: --protect certifi --protect packaging
    #[arg(long = "protect", value_name = "NAME")]
    pub protect: Vec<String>,

    /// Print the classification and exit without prompting
    #[arg(long)]
    pub list: bool,

    /// Output format: text or json (json implies --list)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Ask the usual questions but do not uninstall anything
    #[arg(long)]
    pub dry_run: bool,

    /// Never install pipdeptree automatically
    #[arg(long)]
    pub no_install: bool,

    /// Disable colored output in the table
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./pyprune.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
