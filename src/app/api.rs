//! API Facade for the application.
//!
//! Glues together configuration, credential bootstrap, adapter construction,
//! and command execution.

use chrono::Utc;

use crate::adapters::{DEFAULT_CREDENTIAL_PATH, HttpGistClient, JsonCredentialFile, TerminalConsole};
use crate::app::AppContext;
use crate::app::commands::{credential, sweep};
use crate::domain::{Criteria, DEFAULT_MIN_AGE_DAYS, GistApiConfig};

pub use crate::domain::{AppError, SweepOutcome};

/// Options for a sweep run, as collected from the command line.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Account whose gists are swept.
    pub username: Option<String>,
    /// Gists updated within this many days are kept.
    pub days: u32,
    /// Whether public gists may be removed.
    pub include_public: bool,
    /// Report each step of the sweep.
    pub verbose: bool,
    /// Credential cache location; a leading `~` refers to `$HOME`.
    pub credential_path: String,
    /// Regular expression the description must match.
    pub pattern: Option<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            username: None,
            days: DEFAULT_MIN_AGE_DAYS,
            include_public: false,
            verbose: false,
            credential_path: DEFAULT_CREDENTIAL_PATH.to_string(),
            pattern: None,
        }
    }
}

/// Sweep gists on GitHub using the terminal for prompts and output.
///
/// Configuration problems (missing username, invalid pattern, unusable
/// credential cache) are reported before any request is sent.
pub fn sweep(options: SweepOptions) -> Result<SweepOutcome, AppError> {
    let username = options
        .username
        .filter(|name| !name.trim().is_empty())
        .ok_or(AppError::MissingUsername)?;
    let criteria = Criteria::new(
        Utc::now(),
        options.days,
        options.include_public,
        options.pattern.as_deref(),
    )?;
    let config = GistApiConfig::from_env()?;
    let store = JsonCredentialFile::from_user_path(&options.credential_path)?;

    let mut console = TerminalConsole::stdio();
    let token = credential::resolve_token(&store, &mut console)?;
    let client = HttpGistClient::new(token, &config)?;

    tracing::debug!(
        %username,
        cutoff = %criteria.cutoff(),
        api_url = %config.api_url,
        "starting sweep"
    );
    let mut ctx = AppContext::new(client, console);
    sweep::execute(&mut ctx, &username, &criteria, options.verbose)
}
