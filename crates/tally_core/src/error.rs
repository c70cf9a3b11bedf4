use thiserror::Error;

/// Errors surfaced by the tally pipeline.
///
/// Any parse-stage error is fatal for the whole run: processing halts at the
/// offending line and no standings are emitted.
#[derive(Error, Debug)]
pub enum TallyError {
    /// A non-blank, non-comment line did not split into exactly three
    /// `;`-separated fields.
    #[error("malformed record: {line}")]
    MalformedRecord { line: String },

    /// The outcome field held something other than `win`, `draw` or `loss`.
    #[error("invalid outcome: {token:?}")]
    InvalidOutcome { token: String },

    /// Serialization of a standings snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
