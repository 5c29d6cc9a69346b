//! Employee record value types.

use std::fmt;

use crate::error::RecordError;

/// Maximum byte length of an employee name (a 256-byte field with room for
/// the terminator).
pub const NAME_CAPACITY: usize = 255;

/// A birthdate as stored on the wire. The codec passes values through as-is;
/// see [`Date::validate`] for calendar checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

/// Fixed-capacity UTF-8 employee name.
///
/// Holds at most [`NAME_CAPACITY`] bytes inline. Longer text is rejected,
/// never truncated. Interior NUL bytes are rejected as well, since the name
/// travels as a NUL-terminated string on the device side.
#[derive(Clone, Copy)]
pub struct Name {
    buf: [u8; NAME_CAPACITY],
    len: u8,
}

impl Name {
    pub fn new(text: &str) -> Result<Self, RecordError> {
        Self::from_utf8(text.as_bytes())
    }

    /// Builds a name in a const context, where text over [`NAME_CAPACITY`]
    /// or containing NUL fails evaluation at compile time.
    ///
    /// ```
    /// use employee_cbor::Name;
    ///
    /// const BOSS: Name = Name::from_static("Jane Roe");
    /// assert_eq!(BOSS.as_str(), "Jane Roe");
    /// ```
    pub const fn from_static(text: &'static str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() <= NAME_CAPACITY, "name exceeds NAME_CAPACITY");
        let mut buf = [0u8; NAME_CAPACITY];
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i] != 0, "name contains NUL");
            buf[i] = bytes[i];
            i += 1;
        }
        Self {
            buf,
            len: bytes.len() as u8,
        }
    }

    /// Copies already-validated UTF-8 bytes into a new name.
    pub(crate) fn from_utf8(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() > NAME_CAPACITY {
            return Err(RecordError::BufferTooSmall {
                len: bytes.len(),
                capacity: NAME_CAPACITY,
            });
        }
        if bytes.contains(&0) {
            return Err(RecordError::TypeMismatch(crate::constants::KEY_NAME));
        }
        let mut buf = [0u8; NAME_CAPACITY];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len() as u8,
        })
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Name {}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Name {
    type Error = RecordError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

/// An employee record: name, salary and birthdate, all mandatory.
///
/// Built either by the decoder or by application code and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Employee {
    name: Name,
    salary: f64,
    birthdate: Date,
}

impl Employee {
    pub const fn new(name: Name, salary: f64, birthdate: Date) -> Self {
        Self {
            name,
            salary,
            birthdate,
        }
    }

    /// Convenience constructor validating `name` against [`NAME_CAPACITY`].
    pub fn try_new(name: &str, salary: f64, birthdate: Date) -> Result<Self, RecordError> {
        Ok(Self::new(Name::new(name)?, salary, birthdate))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn birthdate(&self) -> Date {
        self.birthdate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_capacity_is_accepted() {
        let text = "x".repeat(NAME_CAPACITY);
        let name = Name::new(&text).unwrap();
        assert_eq!(name.len(), NAME_CAPACITY);
        assert_eq!(name.as_str(), text);
    }

    #[test]
    fn name_over_capacity_is_rejected() {
        let text = "x".repeat(NAME_CAPACITY + 1);
        assert_eq!(
            Name::new(&text),
            Err(RecordError::BufferTooSmall {
                len: 256,
                capacity: NAME_CAPACITY
            })
        );
    }

    #[test]
    fn name_with_nul_is_rejected() {
        assert_eq!(
            Name::new("John\0Doe"),
            Err(RecordError::TypeMismatch("name"))
        );
    }

    #[test]
    fn multibyte_name_counts_bytes() {
        // 2 bytes per char
        let text = "é".repeat(128);
        assert!(Name::new(&text).is_err());
        let text = "é".repeat(127);
        assert_eq!(Name::new(&text).unwrap().as_str(), text);
    }

    #[test]
    fn static_name_matches_checked_name() {
        const NAME: Name = Name::from_static("John Doe");
        assert_eq!(NAME, Name::new("John Doe").unwrap());
        assert_eq!(NAME.len(), 8);
    }

    #[test]
    fn names_compare_by_content() {
        let a = Name::new("John Doe").unwrap();
        let b = Name::try_from("John Doe").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Name::new("John").unwrap());
        assert_eq!(format!("{a:?}"), "\"John Doe\"");
    }
}
