use employee_buffers::BufferError;
use thiserror::Error;

/// Error type for employee record encoding/decoding.
///
/// Decoding stops at the first failure; no partially populated record is
/// ever returned alongside an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected a cbor map")]
    NotAMap,
    #[error("key not found: {0}")]
    KeyNotFound(&'static str),
    #[error("unexpected value type for {0}")]
    TypeMismatch(&'static str),
    #[error("text of {len} bytes exceeds capacity of {capacity}")]
    BufferTooSmall { len: usize, capacity: usize },
    #[error("encoding needs {needed} bytes, destination holds {available}")]
    EncodeOverflow { needed: usize, available: usize },
    #[error("malformed cbor payload")]
    Malformed,
}

impl From<BufferError> for RecordError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => RecordError::Malformed,
            BufferError::Overflow { needed, available } => {
                RecordError::EncodeOverflow { needed, available }
            }
        }
    }
}
