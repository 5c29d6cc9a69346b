//! `EmployeeEncoder` — writes employee records into a caller-owned buffer.
//!
//! Heads use the shortest argument width, the salary is always an 8-byte
//! float and both maps have a definite length of 3. Output depends only on the
//! record, so encoding the same record twice yields identical bytes.

use employee_buffers::SliceWriter;

use crate::constants::*;
use crate::error::RecordError;
use crate::record::{Date, Employee};

/// CBOR encoder over a fixed-size destination slice.
///
/// [`EmployeeEncoder::encode`] checks the whole record against the remaining
/// space up front and fails with [`RecordError::EncodeOverflow`] before
/// writing anything. The lower-level `write_*` methods check each write on
/// its own; bytes from earlier writes stay in the slice.
pub struct EmployeeEncoder<'a> {
    pub writer: SliceWriter<'a>,
}

impl<'a> EmployeeEncoder<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self {
            writer: SliceWriter::new(dst),
        }
    }

    /// Encode `employee` at the current position and return the total number
    /// of bytes written into the destination.
    ///
    /// On overflow `needed` is the cursor position plus the full record size.
    pub fn encode(&mut self, employee: &Employee) -> Result<usize, RecordError> {
        self.writer.ensure_capacity(encoded_size(employee))?;
        self.write_employee(employee)?;
        tracing::debug!(bytes = self.writer.len(), "employee encoded");
        Ok(self.writer.len())
    }

    pub fn write_employee(&mut self, employee: &Employee) -> Result<(), RecordError> {
        self.write_obj_hdr(RECORD_FIELDS)?;
        self.write_str(KEY_NAME)?;
        self.write_str(employee.name().as_str())?;
        self.write_str(KEY_SALARY)?;
        self.write_float(employee.salary())?;
        self.write_str(KEY_BIRTHDATE)?;
        self.write_date(&employee.birthdate())
    }

    pub fn write_date(&mut self, date: &Date) -> Result<(), RecordError> {
        self.write_obj_hdr(RECORD_FIELDS)?;
        self.write_str(KEY_DAY)?;
        self.write_integer(date.day as i64)?;
        self.write_str(KEY_MONTH)?;
        self.write_integer(date.month as i64)?;
        self.write_str(KEY_YEAR)?;
        self.write_integer(date.year as i64)
    }

    pub fn write_integer(&mut self, int: i64) -> Result<(), RecordError> {
        if int >= 0 {
            self.write_u_integer(int as u64)
        } else {
            self.write_head(OVERLAY_NIN, (-1i64).wrapping_sub(int) as u64)
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) -> Result<(), RecordError> {
        self.write_head(OVERLAY_UIN, uint)
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), RecordError> {
        Ok(self.writer.u8f64(FLOAT64, float)?)
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), RecordError> {
        self.writer.ensure_capacity(head_len(s.len() as u64) + s.len())?;
        self.write_head(OVERLAY_STR, s.len() as u64)?;
        Ok(self.writer.buf(s.as_bytes())?)
    }

    pub fn write_obj_hdr(&mut self, length: u64) -> Result<(), RecordError> {
        self.write_head(OVERLAY_MAP, length)
    }

    fn write_head(&mut self, overlay: u8, arg: u64) -> Result<(), RecordError> {
        let w = &mut self.writer;
        w.ensure_capacity(head_len(arg))?;
        if arg <= 23 {
            w.u8(overlay | arg as u8)?;
        } else if arg <= 0xff {
            w.u8(overlay | MINOR_U8)?;
            w.u8(arg as u8)?;
        } else if arg <= 0xffff {
            w.u8(overlay | MINOR_U16)?;
            w.u16(arg as u16)?;
        } else if arg <= 0xffff_ffff {
            w.u8(overlay | MINOR_U32)?;
            w.u32(arg as u32)?;
        } else {
            w.u8(overlay | MINOR_U64)?;
            w.u64(arg)?;
        }
        Ok(())
    }
}

/// Size of a head carrying `arg`.
fn head_len(arg: u64) -> usize {
    match arg {
        0..=23 => 1,
        24..=0xff => 2,
        0x100..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

fn str_len(s: &str) -> usize {
    head_len(s.len() as u64) + s.len()
}

fn int_len(int: i32) -> usize {
    if int >= 0 {
        head_len(int as u64)
    } else {
        head_len((-1i64 - int as i64) as u64)
    }
}

/// Exact number of bytes [`EmployeeEncoder::encode`] writes for `employee`.
pub fn encoded_size(employee: &Employee) -> usize {
    let date = employee.birthdate();
    let date_len = head_len(RECORD_FIELDS)
        + str_len(KEY_DAY)
        + int_len(date.day)
        + str_len(KEY_MONTH)
        + int_len(date.month)
        + str_len(KEY_YEAR)
        + int_len(date.year);
    head_len(RECORD_FIELDS)
        + str_len(KEY_NAME)
        + str_len(employee.name().as_str())
        + str_len(KEY_SALARY)
        + 9
        + str_len(KEY_BIRTHDATE)
        + date_len
}
