//! Errors raised by container access and conversion.
use crate::{Bucket, CellKind};
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong accessing or converting poly data and meshes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point was set past the end of the point array.
    #[error("point id {id} is out of range, there are {len} points")]
    PointOutOfRange { id: usize, len: usize },

    /// A point attribute was set past the end of the point data array.
    #[error("point data id {id} is out of range, there are {len} values")]
    PointDataOutOfRange { id: usize, len: usize },

    /// A cell attribute was set past the end of the cell data array.
    #[error("cell data id {id} is out of range, there are {len} values")]
    CellDataOutOfRange { id: usize, len: usize },

    /// A run claims more point ids than remain in the stream.
    #[error(
        "malformed {bucket} stream: run at offset {offset} declares {count} ids \
         but only {remaining} remain"
    )]
    MalformedStream {
        bucket: Bucket,
        offset: usize,
        count: usize,
        remaining: usize,
    },

    /// A run has a point count the bucket cannot decode.
    #[error("{bucket} run at offset {offset} has {count} ids, expected {expected}")]
    InvalidRunLength {
        bucket: Bucket,
        offset: usize,
        count: usize,
        expected: &'static str,
    },

    /// A cells array record carries an unrecognised type code.
    #[error("unknown cell type code {0}")]
    UnknownCellType(u32),

    /// A cells array record ends before its declared point ids.
    #[error("cells array is truncated at offset {offset}")]
    TruncatedCellsArray { offset: usize },

    /// A fixed-size cell was given the wrong number of point ids.
    #[error("{kind} cell requires {expected} point ids, found {found}")]
    CellArity {
        kind: CellKind,
        expected: &'static str,
        found: usize,
    },
}
