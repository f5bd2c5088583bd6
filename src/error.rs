//! Defines [`GeometryError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::datatypes::{Dimension, GeometryType};

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// Malformed WKT input.
    #[error("WKT syntax error at position {position} near {token:?}: {message}")]
    Syntax {
        /// Byte offset of the offending token in the input.
        position: usize,
        /// The offending token, or an empty string at end of input.
        token: String,
        /// What the parser expected.
        message: String,
    },

    /// Malformed WKB input: truncated buffer, unknown type code or byte order flag.
    #[error("WKB decode error: {0}")]
    Decode(String),

    /// A geometry was not of the type required by its container or caller.
    #[error("Type mismatch{}: expected {expected}, got {actual}", member_suffix(.index))]
    TypeMismatch {
        /// Index of the offending collection member, if any.
        index: Option<usize>,
        /// Required geometry type.
        expected: GeometryType,
        /// Actual geometry type.
        actual: GeometryType,
    },

    /// A member's coordinate dimensionality disagrees with its container's.
    #[error("Dimension mismatch at member {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending member.
        index: usize,
        /// The container's dimensionality.
        expected: Dimension,
        /// The member's dimensionality.
        actual: Dimension,
    },

    /// A member's SRID disagrees with its container's.
    #[error("SRID mismatch at member {index}: expected {expected}, got {actual}")]
    SridMismatch {
        /// Index of the offending member.
        index: usize,
        /// The container's SRID.
        expected: i32,
        /// The member's SRID.
        actual: i32,
    },

    /// A 1-based accessor was called with an index outside `1..=len`.
    #[error("Index {index} out of range, expected 1..={len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of available items.
        len: usize,
    },

    /// Structurally invalid geometry.
    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

fn member_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at member {i}"),
        None => String::new(),
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
