//! What the result view shows for a given set of status flags.

/// Display state of the result view, driven entirely by the caller's flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayStatus {
    /// A search is in flight.
    Loading,
    /// The search failed; the message is shown verbatim.
    Failed(String),
    /// The search succeeded with nothing to show.
    Empty,
    /// Render the filter row and the table.
    Ready,
}

impl DisplayStatus {
    pub fn from_flags(awaiting_results: bool, success: bool, msg: &str, result_count: usize) -> Self {
        if awaiting_results {
            DisplayStatus::Loading
        } else if !success {
            DisplayStatus::Failed(msg.to_string())
        } else if result_count == 0 {
            DisplayStatus::Empty
        } else {
            DisplayStatus::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DisplayStatus::Ready)
    }
}
