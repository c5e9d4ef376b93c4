//! Engine error taxonomy
//!
//! Every error here is a caller-contract violation: deterministic,
//! reproducible from the same input, and raised instead of producing a
//! silently-wrong score. The engine never retries and never formats
//! user-facing text; the surrounding layer translates these.

use crate::models::Dimension;
use thiserror::Error;

/// Errors raised by the scoring engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Issue code not present in the static catalog. An unrecognized code
    /// must never contribute invisibly to a score.
    #[error("unknown issue code '{0}': not in the issue catalog")]
    UnknownIssueCode(String),

    /// Audit input omitted a required dimension. A partial audit must
    /// never be reported as if it were complete.
    #[error("audit input is missing required dimension '{0}'")]
    MissingDimension(Dimension),

    /// Estimated impact must be a finite, non-negative dollar amount.
    /// Negative or non-finite magnitudes indicate a caller bug and surface
    /// immediately instead of being clamped.
    #[error("invalid estimated impact {0}: must be a finite, non-negative dollar amount")]
    InvalidImpact(f64),
}
