//! Error types.

use crate::division::Level;
use thiserror::Error;

/// Dataset-integrity failure, raised only while building a
/// [`DivisionIndex`](crate::DivisionIndex) or parsing dataset records.
///
/// Unmatched divisions during resolution are not errors; they surface as
/// absent fields on [`ResolvedAddress`](crate::ResolvedAddress).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Two records at the same level share a code.
    #[error("duplicate {level} code {code}")]
    DuplicateCode { level: Level, code: u32 },

    /// A child record references a parent that is not in the dataset.
    #[error("{level} {code} references unknown parent {parent_code}")]
    UnknownParent {
        level: Level,
        code: u32,
        parent_code: u32,
    },

    /// A CSV record could not be parsed.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}
