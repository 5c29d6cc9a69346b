//! Binary writer over a caller-owned, fixed-capacity slice.

use crate::BufferError;

/// Writes binary data into a borrowed slice without ever growing it.
///
/// A write that does not fit fails with [`BufferError::Overflow`] and writes
/// nothing. Bytes from earlier successful writes stay in the slice.
pub struct SliceWriter<'a> {
    /// The destination slice.
    pub uint8: &'a mut [u8],
    /// Current write position.
    pub x: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(uint8: &'a mut [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.x
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Fails unless `size` more bytes fit.
    #[inline]
    pub fn ensure_capacity(&self, size: usize) -> Result<(), BufferError> {
        if size > self.remaining() {
            return Err(BufferError::Overflow {
                needed: self.x.saturating_add(size),
                available: self.uint8.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.buf(&[val])
    }

    #[inline]
    pub fn u16(&mut self, val: u16) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    #[inline]
    pub fn u32(&mut self, val: u32) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    #[inline]
    pub fn u64(&mut self, val: u64) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Writes a marker byte followed by a big-endian `f64`.
    #[inline]
    pub fn u8f64(&mut self, marker: u8, val: f64) -> Result<(), BufferError> {
        self.ensure_capacity(9)?;
        let x = self.x;
        self.uint8[x] = marker;
        self.uint8[x + 1..x + 9].copy_from_slice(&val.to_be_bytes());
        self.x = x + 9;
        Ok(())
    }

    /// Copies `bytes` verbatim.
    pub fn buf(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.ensure_capacity(bytes.len())?;
        let x = self.x;
        self.uint8[x..x + bytes.len()].copy_from_slice(bytes);
        self.x = x + bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_within_capacity() {
        let mut scratch = [0u8; 4];
        let mut writer = SliceWriter::new(&mut scratch);
        writer.u8(0xaa).unwrap();
        writer.u16(0x0102).unwrap();
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.remaining(), 1);
        assert_eq!(scratch[..3], [0xaa, 0x01, 0x02]);
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let mut scratch = [0u8; 4];
        let mut writer = SliceWriter::new(&mut scratch);
        writer.u8(0x01).unwrap();
        let err = writer.u32(0xdeadbeef).unwrap_err();
        assert_eq!(
            err,
            BufferError::Overflow {
                needed: 5,
                available: 4
            }
        );
        assert_eq!(writer.len(), 1);
        assert_eq!(scratch, [0x01, 0, 0, 0]);
    }

    #[test]
    fn test_u8f64() {
        let mut scratch = [0u8; 9];
        let mut writer = SliceWriter::new(&mut scratch);
        writer.u8f64(0xfb, 1.5).unwrap();
        assert!(writer.u8(0).is_err());
        assert_eq!(scratch[0], 0xfb);
        assert_eq!(&scratch[1..], &1.5f64.to_be_bytes());
    }

    #[test]
    fn test_zero_capacity() {
        let mut scratch: [u8; 0] = [];
        let mut writer = SliceWriter::new(&mut scratch);
        assert!(writer.is_empty());
        assert!(writer.buf(&[]).is_ok());
        assert!(writer.u8(1).is_err());
    }
}
