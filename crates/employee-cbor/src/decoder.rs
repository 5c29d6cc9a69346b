//! `EmployeeDecoder` — validating decoder for CBOR employee records.

use employee_buffers::Reader;

use crate::constants::*;
use crate::error::RecordError;
use crate::item::{read_f64, read_i32, read_text, MapItem};
use crate::record::{Date, Employee, Name, NAME_CAPACITY};

/// Decodes `{name, salary, birthdate: {day, month, year}}` maps.
///
/// Fields are located by key, in the fixed order name, salary, birthdate
/// (then day, month, year), so the first failure reported is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeDecoder;

impl EmployeeDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode the record at the start of `blob`. Trailing bytes are ignored.
    pub fn decode(&self, blob: &[u8]) -> Result<Employee, RecordError> {
        self.decode_with_consumed(blob).map(|(employee, _)| employee)
    }

    /// Decode the record at the start of `blob`, also returning how many bytes
    /// the record occupied.
    pub fn decode_with_consumed(&self, blob: &[u8]) -> Result<(Employee, usize), RecordError> {
        let mut reader = Reader::new(blob);
        let employee = self.decode_from(&mut reader)?;
        Ok((employee, reader.x))
    }

    /// Decode the record at the reader's cursor.
    ///
    /// On success the cursor is moved past the whole map; on failure it is
    /// left untouched.
    pub fn decode_from(&self, reader: &mut Reader<'_>) -> Result<Employee, RecordError> {
        let mut r = reader.clone();
        let map = MapItem::open(&mut r)?;

        let name = read_name(&mut map.require(KEY_NAME)?)?;
        let salary = read_f64(&mut map.require(KEY_SALARY)?, KEY_SALARY)?;
        let birthdate = read_birthdate(&mut map.require(KEY_BIRTHDATE)?)?;

        reader.x = map.end()?;
        tracing::trace!(consumed = reader.x, "employee decoded");
        Ok(Employee::new(name, salary, birthdate))
    }

    /// Iterate over a CBOR sequence of concatenated records.
    pub fn iter<'a>(&self, blob: &'a [u8]) -> EmployeeIter<'a> {
        EmployeeIter {
            decoder: *self,
            reader: Reader::new(blob),
            failed: false,
        }
    }
}

fn read_name(r: &mut Reader<'_>) -> Result<Name, RecordError> {
    let mut buf = [0u8; NAME_CAPACITY];
    let mut len = 0;
    read_text(r, KEY_NAME, |chunk| {
        let end = len + chunk.len();
        if end > NAME_CAPACITY {
            return Err(RecordError::BufferTooSmall {
                len: end,
                capacity: NAME_CAPACITY,
            });
        }
        buf[len..end].copy_from_slice(chunk);
        len = end;
        Ok(())
    })?;
    let text = std::str::from_utf8(&buf[..len]).map_err(|_| RecordError::Malformed)?;
    Name::new(text)
}

fn read_birthdate(r: &mut Reader<'_>) -> Result<Date, RecordError> {
    let map = MapItem::open(r)?;
    let day = read_i32(&mut map.require(KEY_DAY)?, KEY_DAY)?;
    let month = read_i32(&mut map.require(KEY_MONTH)?, KEY_MONTH)?;
    let year = read_i32(&mut map.require(KEY_YEAR)?, KEY_YEAR)?;
    Ok(Date { day, month, year })
}

/// Iterator returned by [`EmployeeDecoder::iter`].
///
/// Yields one item per record and stops after the first error.
pub struct EmployeeIter<'a> {
    decoder: EmployeeDecoder,
    reader: Reader<'a>,
    failed: bool,
}

impl EmployeeIter<'_> {
    /// Bytes consumed by the records yielded so far.
    pub fn consumed(&self) -> usize {
        self.reader.x
    }
}

impl Iterator for EmployeeIter<'_> {
    type Item = Result<Employee, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let item = self.decoder.decode_from(&mut self.reader);
        self.failed = item.is_err();
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"name": "Ann", "salary": 1.5, "birthdate": {"day": 2, "month": 3, "year": 1990}}
    const ANN: &[u8] = &[
        0xa3, 0x64, b'n', b'a', b'm', b'e', 0x63, b'A', b'n', b'n', 0x66, b's', b'a', b'l', b'a',
        b'r', b'y', 0xf9, 0x3e, 0x00, 0x69, b'b', b'i', b'r', b't', b'h', b'd', b'a', b't', b'e',
        0xa3, 0x63, b'd', b'a', b'y', 0x02, 0x65, b'm', b'o', b'n', b't', b'h', 0x03, 0x64, b'y',
        b'e', b'a', b'r', 0x19, 0x07, 0xc6,
    ];

    #[test]
    fn decodes_hand_written_record() {
        let (employee, consumed) = EmployeeDecoder::new().decode_with_consumed(ANN).unwrap();
        assert_eq!(consumed, ANN.len());
        assert_eq!(employee.name().as_str(), "Ann");
        assert_eq!(employee.salary(), 1.5);
        assert_eq!(employee.birthdate(), Date::new(2, 3, 1990));
    }

    #[test]
    fn failed_decode_leaves_cursor() {
        let truncated = &ANN[..ANN.len() - 1];
        let mut reader = Reader::new(truncated);
        assert_eq!(
            EmployeeDecoder::new().decode_from(&mut reader),
            Err(RecordError::Malformed)
        );
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn empty_input_is_malformed() {
        assert_eq!(EmployeeDecoder::new().decode(&[]), Err(RecordError::Malformed));
    }

    #[test]
    fn chunked_name_is_reassembled() {
        // {"name": (_ "Jo", "hn"), ...} reusing the tail of ANN
        let mut blob = vec![0xa3, 0x64, b'n', b'a', b'm', b'e'];
        blob.extend_from_slice(&[0x7f, 0x62, b'J', b'o', 0x62, b'h', b'n', 0xff]);
        blob.extend_from_slice(&ANN[10..]);
        let employee = EmployeeDecoder::new().decode(&blob).unwrap();
        assert_eq!(employee.name().as_str(), "John");
    }

    #[test]
    fn chunked_name_over_capacity_is_rejected() {
        let mut blob = vec![0xa3, 0x64, b'n', b'a', b'm', b'e', 0x7f];
        for _ in 0..2 {
            blob.extend_from_slice(&[0x78, 200]);
            blob.extend(std::iter::repeat(b'x').take(200));
        }
        blob.push(0xff);
        blob.extend_from_slice(&ANN[10..]);
        assert_eq!(
            EmployeeDecoder::new().decode(&blob),
            Err(RecordError::BufferTooSmall {
                len: 400,
                capacity: NAME_CAPACITY
            })
        );
    }

    #[test]
    fn invalid_utf8_name_is_malformed() {
        let mut blob = vec![0xa3, 0x64, b'n', b'a', b'm', b'e', 0x62, 0xc3, 0x28];
        blob.extend_from_slice(&ANN[10..]);
        assert_eq!(EmployeeDecoder::new().decode(&blob), Err(RecordError::Malformed));
    }
}
