use std::num::ParseIntError;

use thiserror::Error;

/// Errors from building a [`Tree`][crate::Tree] out of external input.
///
/// The tree operations themselves are total; only bulk construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// There was no value to use as the root.
    #[error("a tree needs at least one value for its root")]
    Empty,

    /// A token could not be read as an integer.
    #[error("invalid tree value {token:?}")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// Why it did not parse.
        #[source]
        source: ParseIntError,
    },
}
