//! Bounded binary buffer utilities for the employee record codec.
//!
//! Every read and write is checked against the underlying slice: running off
//! the end is reported as a [`BufferError`] instead of panicking, and nothing
//! here ever allocates.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`SliceWriter`] - Writes binary data into a caller-owned, fixed-size slice
//! - [`decode_f16`] - Decodes IEEE 754 half-precision floats
//!
//! # Example
//!
//! ```
//! use employee_buffers::{Reader, SliceWriter};
//!
//! let mut scratch = [0u8; 16];
//! let mut writer = SliceWriter::new(&mut scratch);
//! writer.u8(0x01).unwrap();
//! writer.u16(0x0203).unwrap();
//! writer.buf(b"hello").unwrap();
//! let len = writer.len();
//!
//! let mut reader = Reader::new(&scratch[..len]);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert_eq!(reader.buf(5).unwrap(), b"hello");
//! ```

mod f16;
mod reader;
mod writer;

pub use f16::decode_f16;
pub use reader::Reader;
pub use writer::SliceWriter;

/// Error type for buffer operations.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer")]
    EndOfBuffer,
    /// Buffer overflow during write.
    #[error("buffer overflow: {needed} bytes needed, {available} available")]
    Overflow { needed: usize, available: usize },
}
