//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::adapters::DEFAULT_CREDENTIAL_PATH;
use crate::app::api::{self, SweepOptions};
use crate::domain::DEFAULT_MIN_AGE_DAYS;

#[derive(Parser, Debug)]
#[command(name = "gist-sweep")]
#[command(version)]
#[command(
    about = "Remove old gists from a GitHub account",
    long_about = None,
    override_usage = "gist-sweep [OPTIONS] [PATTERN]"
)]
struct Cli {
    /// Username to sweep gists on
    #[arg(short = 'u', value_name = "USERNAME")]
    username: Option<String>,
    /// Days to keep
    #[arg(short = 'd', value_name = "DAYS", default_value_t = DEFAULT_MIN_AGE_DAYS)]
    days: u32,
    /// Include public gists
    #[arg(short = 'p')]
    public: bool,
    /// Print verbose messages
    #[arg(short = 'v', short_alias = 's')]
    verbose: bool,
    /// Read config from a different file
    #[arg(short = 'c', value_name = "PATH", default_value = DEFAULT_CREDENTIAL_PATH)]
    config_file: String,
    /// Only remove gists whose description matches this regular expression
    pattern: Option<String>,
}

impl Cli {
    fn into_options(self) -> SweepOptions {
        SweepOptions {
            username: self.username,
            days: self.days,
            include_public: self.public,
            verbose: self.verbose,
            credential_path: self.config_file,
            pattern: self.pattern,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "warn,gist_sweep=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match api::sweep(cli.into_options()) {
        Ok(outcome) => {
            let exit_code = outcome.exit_code();
            tracing::debug!(deleted = outcome.deleted(), exit_code, "sweep finished");
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
