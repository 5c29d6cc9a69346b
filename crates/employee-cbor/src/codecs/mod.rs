//! Employee codecs for both request variants behind a common trait.

mod cbor;
mod json;
mod registry;
mod types;

pub use cbor::CborEmployeeCodec;
pub use json::JsonEmployeeCodec;
pub use registry::EmployeeCodecs;
pub use types::{CodecError, EmployeeCodec};
