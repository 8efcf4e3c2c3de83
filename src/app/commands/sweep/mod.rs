//! Fetch, select, confirm, and delete.

mod confirm;

pub use confirm::{AFFIRMATIVE, confirm_removal};

use crate::app::AppContext;
use crate::domain::{AppError, Criteria, SweepOutcome, select};
use crate::ports::{Console, GistClient};

/// Execute one sweep of `username`'s gists.
///
/// Listing failures abort the run. Delete failures are reported as they happen
/// and the rest of the batch still runs; nothing is retried or rolled back.
pub fn execute<G, C>(
    ctx: &mut AppContext<G, C>,
    username: &str,
    criteria: &Criteria,
    verbose: bool,
) -> Result<SweepOutcome, AppError>
where
    G: GistClient,
    C: Console,
{
    if username.trim().is_empty() {
        return Err(AppError::MissingUsername);
    }

    let (client, console) = ctx.parts();

    if verbose {
        let cutoff = criteria.cutoff().to_rfc3339();
        console.write_line(&format!("Removing gists older than {}", cutoff))?;
    }

    let gists = client.list_gists(username)?;
    let selection = select(&gists, criteria);
    tracing::debug!(listed = gists.len(), selected = selection.len(), "selected gists");

    if selection.is_empty() {
        console.write_line("No gists to remove")?;
        return Ok(SweepOutcome::Empty);
    }

    if !confirm_removal(console, &selection)? {
        return Ok(SweepOutcome::Declined);
    }

    let mut deleted = 0;
    let mut failed = Vec::new();
    for gist in &selection {
        if verbose {
            console.write_line(&format!("Deleting gist {}", gist.id))?;
        }
        match client.delete_gist(&gist.id) {
            Ok(()) => deleted += 1,
            Err(err) => {
                console.write_line(&format!("Failed to delete gist {}: {}", gist.id, err))?;
                failed.push(gist.id.clone());
            }
        }
    }

    if failed.is_empty() {
        console.write_line("Swept gists.")?;
        Ok(SweepOutcome::Swept { deleted })
    } else {
        console.write_line(&format!(
            "Failed to remove {} of {} gists.",
            failed.len(),
            selection.len()
        ))?;
        Ok(SweepOutcome::Incomplete { deleted, failed })
    }
}
