/// Terminal state of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Nothing matched the criteria.
    Empty,
    /// The operator declined the confirmation prompt.
    Declined,
    /// Every selected gist was deleted.
    Swept { deleted: usize },
    /// Some deletions failed; the rest of the batch still ran.
    Incomplete { deleted: usize, failed: Vec<String> },
}

impl SweepOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepOutcome::Incomplete { .. } => 1,
            SweepOutcome::Empty | SweepOutcome::Declined | SweepOutcome::Swept { .. } => 0,
        }
    }

    /// Number of gists actually removed.
    pub fn deleted(&self) -> usize {
        match self {
            SweepOutcome::Swept { deleted } | SweepOutcome::Incomplete { deleted, .. } => *deleted,
            SweepOutcome::Empty | SweepOutcome::Declined => 0,
        }
    }
}
