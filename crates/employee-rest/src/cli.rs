//! Stream conversions behind the `employee-pack` and `employee-unpack` tools.

use std::io::{self, Read, Write};

use employee_cbor::{
    encode_to_vec, parse_json_employee, EmployeeDecoder, JsonFieldError, RecordError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid employee JSON: {0}")]
    Json(#[from] JsonFieldError),
    #[error("invalid employee CBOR: {0}")]
    Record(#[from] RecordError),
}

/// Reads one JSON employee from `input` and writes its CBOR encoding to
/// `output`. Returns the number of bytes written.
pub fn pack(mut input: impl Read, mut output: impl Write) -> Result<usize, CliError> {
    let mut body = Vec::new();
    input.read_to_end(&mut body)?;
    let employee = parse_json_employee(&body)?;
    let bytes = encode_to_vec(&employee)?;
    tracing::info!(bytes = bytes.len(), "packed {}", employee);
    output.write_all(&bytes)?;
    output.flush()?;
    Ok(bytes.len())
}

/// Reads concatenated CBOR employee records from `input` and writes one JSON
/// line per record to `output`. Returns the number of records written.
///
/// Lines for records before a malformed one are written before the error is
/// returned.
pub fn unpack(mut input: impl Read, mut output: impl Write) -> Result<usize, CliError> {
    let mut blob = Vec::new();
    input.read_to_end(&mut blob)?;
    let mut records = EmployeeDecoder::new().iter(&blob);
    let mut count = 0;
    for employee in records.by_ref() {
        match employee {
            Ok(employee) => writeln!(output, "{employee}")?,
            Err(err) => {
                output.flush()?;
                return Err(err.into());
            }
        }
        count += 1;
    }
    output.flush()?;
    tracing::debug!(records = count, consumed = records.consumed(), "unpacked input");
    Ok(count)
}
