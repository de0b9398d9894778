use thiserror::Error;

/// Failures surfaced while loading quest data, sprite catalogs or layout
/// configuration. Interactive operations on an open dialog never fail.
#[derive(Debug, Error)]
pub enum QuestLogError {
    /// Input JSON was malformed or missing required fields.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Quest data or configuration could not be read.
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    /// Layout configuration that cannot produce a usable dialog.
    #[error("invalid quest log config: {0}")]
    Config(String),
}
