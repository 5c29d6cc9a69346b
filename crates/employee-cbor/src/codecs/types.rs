//! Common codec trait and error.

use crate::{Employee, JsonFieldError, RecordError};

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("CBOR codec error: {0}")]
    Cbor(#[from] RecordError),
    #[error("JSON codec error: {0}")]
    Json(#[from] JsonFieldError),
}

/// Trait for codecs that encode/decode an [`Employee`].
pub trait EmployeeCodec {
    fn id(&self) -> &'static str;
    /// MIME type of the encoded form.
    fn content_type(&self) -> &'static str;
    fn encode(&mut self, employee: &Employee) -> Result<Vec<u8>, CodecError>;
    fn decode(&mut self, bytes: &[u8]) -> Result<Employee, CodecError>;
}
