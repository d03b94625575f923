#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Notification was stored as the newest one
    Stored { id: String },

    /// Notification matched already stored one and was skipped
    Duplicate,

    /// Storage failed, nothing was changed
    Abandoned,
}
