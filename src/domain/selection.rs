//! Eligibility rules deciding which gists a sweep removes.

use crate::domain::{Criteria, Gist};

/// Whether a single gist is eligible for removal under `criteria`.
///
/// Visibility, age, and pattern checks are independent; all three must pass.
pub fn is_eligible(gist: &Gist, criteria: &Criteria) -> bool {
    let visible_ok = !gist.public || criteria.include_public();
    let age_ok = gist.updated_at < criteria.cutoff();
    let pattern_ok =
        criteria.pattern().is_none_or(|pattern| pattern.is_match(gist.description_text()));

    visible_ok && age_ok && pattern_ok
}

/// Select the gists eligible for removal, preserving input order.
pub fn select<'a>(gists: &'a [Gist], criteria: &Criteria) -> Vec<&'a Gist> {
    gists.iter().filter(|gist| is_eligible(gist, criteria)).collect()
}
