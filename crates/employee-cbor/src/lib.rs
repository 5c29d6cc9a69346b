//! Schema-constrained CBOR codec for employee records.
//!
//! An employee record is a fixed-shape CBOR map:
//!
//! ```text
//! {"name": text, "salary": float64, "birthdate": {"day": int, "month": int, "year": int}}
//! ```
//!
//! Decoding is all-or-nothing: every field is mandatory, fields are found by
//! key, and the first failure aborts the whole call. Encoding writes into a
//! caller-owned slice and never grows it.
//!
//! # Example
//!
//! ```
//! use employee_cbor::{decode, encode, Date, Employee};
//!
//! let employee = Employee::try_new("John Doe", 1200.0, Date::new(1, 1, 2000)).unwrap();
//! let mut scratch = [0u8; 256];
//! let len = encode(&employee, &mut scratch).unwrap();
//! assert_eq!(decode(&scratch[..len]).unwrap(), employee);
//! ```

pub mod codecs;
pub mod constants;
mod decoder;
mod encoder;
mod error;
mod item;
mod json;
mod record;
mod validate;

pub use decoder::{EmployeeDecoder, EmployeeIter};
pub use encoder::{encoded_size, EmployeeEncoder};
pub use error::RecordError;
pub use json::{employee_to_value, parse_json_employee, JsonFieldError};
pub use record::{Date, Employee, Name, NAME_CAPACITY};
pub use validate::DateError;

/// Decode the employee record at the start of `blob`.
pub fn decode(blob: &[u8]) -> Result<Employee, RecordError> {
    EmployeeDecoder::new().decode(blob)
}

/// Decode the employee record at the start of `blob` and report the number of
/// bytes it occupied.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(Employee, usize), RecordError> {
    EmployeeDecoder::new().decode_with_consumed(blob)
}

/// Encode `employee` into `dst`, returning the number of bytes written.
///
/// Fails with [`RecordError::EncodeOverflow`] carrying the full record size
/// when `dst` is too small; `dst` is left untouched in that case.
pub fn encode(employee: &Employee, dst: &mut [u8]) -> Result<usize, RecordError> {
    EmployeeEncoder::new(dst).encode(employee)
}

/// Encode `employee` into an exactly sized vector.
pub fn encode_to_vec(employee: &Employee) -> Result<Vec<u8>, RecordError> {
    let mut out = vec![0u8; encoded_size(employee)];
    let len = encode(employee, &mut out)?;
    out.truncate(len);
    Ok(out)
}
