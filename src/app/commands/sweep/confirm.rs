use crate::domain::{AppError, Gist};
use crate::ports::Console;

/// The only answer accepted as consent.
pub const AFFIRMATIVE: &str = "y";

/// List the selection and ask the operator once whether to remove it.
///
/// Anything other than `y` after trimming, including end of input, declines.
pub fn confirm_removal<C: Console>(console: &mut C, selection: &[&Gist]) -> Result<bool, AppError> {
    for gist in selection {
        console.write_line(&format!("{} -- {}", gist.id, gist.description_text()))?;
    }

    let answer = console.prompt_line(&format!("Remove {} gists? (y/n) ", selection.len()))?;
    Ok(answer.is_some_and(|line| line.trim() == AFFIRMATIVE))
}
