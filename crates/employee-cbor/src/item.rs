//! Item-level CBOR reading: heads, typed scalars, skipping and map lookup.
//!
//! Everything here works on a borrowed [`Reader`] and allocates nothing.

use employee_buffers::{decode_f16, Reader};

use crate::constants::*;
use crate::error::RecordError;

/// Argument carried by an item head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arg {
    Value(u64),
    Indefinite,
}

/// Decoded initial byte plus its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Head {
    pub major: u8,
    pub minor: u8,
    pub arg: Arg,
}

impl Head {
    fn is_break(&self) -> bool {
        self.major == MAJOR_TKN && self.minor == MINOR_INDEFINITE
    }
}

pub(crate) fn read_head(r: &mut Reader<'_>) -> Result<Head, RecordError> {
    let octet = r.u8()?;
    let major = octet >> 5;
    let minor = octet & MINOR_MASK;
    let arg = match minor {
        0..=23 => Arg::Value(minor as u64),
        MINOR_U8 => Arg::Value(r.u8()? as u64),
        MINOR_U16 => Arg::Value(r.u16()? as u64),
        MINOR_U32 => Arg::Value(r.u32()? as u64),
        MINOR_U64 => Arg::Value(r.u64()?),
        MINOR_INDEFINITE => match major {
            MAJOR_BIN | MAJOR_STR | MAJOR_ARR | MAJOR_MAP | MAJOR_TKN => Arg::Indefinite,
            _ => return Err(RecordError::Malformed),
        },
        _ => return Err(RecordError::Malformed),
    };
    Ok(Head { major, minor, arg })
}

fn length(n: u64) -> Result<usize, RecordError> {
    usize::try_from(n).map_err(|_| RecordError::Malformed)
}

/// Returns `true` and consumes the break code if it is next.
fn at_break(r: &mut Reader<'_>) -> Result<bool, RecordError> {
    if r.peek()? == CBOR_END {
        r.skip(1)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Advances `r` past one complete item, whatever its type.
pub(crate) fn skip_item(r: &mut Reader<'_>) -> Result<(), RecordError> {
    skip_nested(r, 0)
}

fn skip_nested(r: &mut Reader<'_>, depth: usize) -> Result<(), RecordError> {
    if depth > MAX_DEPTH {
        return Err(RecordError::Malformed);
    }
    let head = read_head(r)?;
    if head.is_break() {
        return Err(RecordError::Malformed);
    }
    match (head.major, head.arg) {
        (MAJOR_BIN | MAJOR_STR, Arg::Value(n)) => r.skip(length(n)?)?,
        (MAJOR_BIN | MAJOR_STR, Arg::Indefinite) => {
            while !at_break(r)? {
                let chunk = read_head(r)?;
                match chunk.arg {
                    Arg::Value(n) if chunk.major == head.major => r.skip(length(n)?)?,
                    _ => return Err(RecordError::Malformed),
                }
            }
        }
        (MAJOR_ARR | MAJOR_MAP, Arg::Value(n)) => {
            let per_entry = if head.major == MAJOR_MAP { 2 } else { 1 };
            for _ in 0..n {
                for _ in 0..per_entry {
                    skip_nested(r, depth + 1)?;
                }
            }
        }
        (MAJOR_ARR | MAJOR_MAP, Arg::Indefinite) => {
            let per_entry = if head.major == MAJOR_MAP { 2 } else { 1 };
            while !at_break(r)? {
                for _ in 0..per_entry {
                    skip_nested(r, depth + 1)?;
                }
            }
        }
        (MAJOR_TAG, _) => skip_nested(r, depth + 1)?,
        // Integers, simple values and floats are fully consumed by their head.
        _ => {}
    }
    Ok(())
}

/// Calls `sink` with each byte run of a text string, definite or chunked.
///
/// A value that is not text fails with `TypeMismatch(field)`.
pub(crate) fn read_text<'a>(
    r: &mut Reader<'a>,
    field: &'static str,
    mut sink: impl FnMut(&'a [u8]) -> Result<(), RecordError>,
) -> Result<(), RecordError> {
    let head = read_head(r)?;
    if head.is_break() {
        return Err(RecordError::Malformed);
    }
    if head.major != MAJOR_STR {
        return Err(RecordError::TypeMismatch(field));
    }
    match head.arg {
        Arg::Value(n) => sink(r.buf(length(n)?)?),
        Arg::Indefinite => {
            while !at_break(r)? {
                let chunk = read_head(r)?;
                match chunk.arg {
                    Arg::Value(n) if chunk.major == MAJOR_STR => sink(r.buf(length(n)?)?)?,
                    _ => return Err(RecordError::Malformed),
                }
            }
            Ok(())
        }
    }
}

/// Reads any numeric item as `f64`: half, single and double floats, or an
/// integer widened to `f64`.
pub(crate) fn read_f64(r: &mut Reader<'_>, field: &'static str) -> Result<f64, RecordError> {
    let head = read_head(r)?;
    match (head.major, head.minor, head.arg) {
        (MAJOR_TKN, MINOR_INDEFINITE, _) => Err(RecordError::Malformed),
        (MAJOR_TKN, MINOR_F16, Arg::Value(bits)) => Ok(decode_f16(bits as u16)),
        (MAJOR_TKN, MINOR_F32, Arg::Value(bits)) => Ok(f32::from_bits(bits as u32) as f64),
        (MAJOR_TKN, MINOR_F64, Arg::Value(bits)) => Ok(f64::from_bits(bits)),
        (MAJOR_UIN, _, Arg::Value(n)) => Ok(n as f64),
        (MAJOR_NIN, _, Arg::Value(n)) => Ok(-1.0 - n as f64),
        _ => Err(RecordError::TypeMismatch(field)),
    }
}

/// Reads an integer item that fits `i32`.
pub(crate) fn read_i32(r: &mut Reader<'_>, field: &'static str) -> Result<i32, RecordError> {
    let head = read_head(r)?;
    if head.is_break() {
        return Err(RecordError::Malformed);
    }
    let value = match (head.major, head.arg) {
        (MAJOR_UIN, Arg::Value(n)) => i64::try_from(n).ok(),
        (MAJOR_NIN, Arg::Value(n)) => i64::try_from(n).ok().map(|n| -1 - n),
        _ => None,
    };
    value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(RecordError::TypeMismatch(field))
}

/// A CBOR map whose entries can be looked up by text key.
#[derive(Debug, Clone)]
pub(crate) struct MapItem<'a> {
    /// Positioned at the first key.
    entries: Reader<'a>,
    len: Arg,
}

impl<'a> MapItem<'a> {
    /// Reads a map head from `r`, leaving `r` at the first key.
    pub fn open(r: &mut Reader<'a>) -> Result<Self, RecordError> {
        let head = read_head(r)?;
        if head.is_break() {
            return Err(RecordError::Malformed);
        }
        if head.major != MAJOR_MAP {
            return Err(RecordError::NotAMap);
        }
        Ok(Self {
            entries: r.clone(),
            len: head.arg,
        })
    }

    /// Returns a reader positioned at the value of the first entry whose key
    /// is the text `key`. Non-text keys are skipped.
    pub fn find(&self, key: &'static str) -> Result<Option<Reader<'a>>, RecordError> {
        let mut r = self.entries.clone();
        let mut remaining = self.len;
        loop {
            match remaining {
                Arg::Value(0) => return Ok(None),
                Arg::Value(n) => remaining = Arg::Value(n - 1),
                Arg::Indefinite => {
                    if at_break(&mut r)? {
                        return Ok(None);
                    }
                }
            }
            if key_matches(&mut r, key)? {
                return Ok(Some(r));
            }
            skip_item(&mut r)?;
        }
    }

    /// Like [`MapItem::find`], failing with `KeyNotFound` when absent.
    pub fn require(&self, key: &'static str) -> Result<Reader<'a>, RecordError> {
        self.find(key)?.ok_or(RecordError::KeyNotFound(key))
    }

    /// Position just past the end of the map.
    pub fn end(&self) -> Result<usize, RecordError> {
        let mut r = self.entries.clone();
        match self.len {
            Arg::Value(n) => {
                for _ in 0..n {
                    skip_item(&mut r)?;
                    skip_item(&mut r)?;
                }
            }
            Arg::Indefinite => {
                while !at_break(&mut r)? {
                    skip_item(&mut r)?;
                    skip_item(&mut r)?;
                }
            }
        }
        Ok(r.x)
    }
}

/// Consumes one key item, reporting whether it is the text `key`.
fn key_matches(r: &mut Reader<'_>, key: &str) -> Result<bool, RecordError> {
    let head = {
        let mut probe = r.clone();
        read_head(&mut probe)?
    };
    if head.major != MAJOR_STR {
        skip_item(r)?;
        return Ok(false);
    }
    let expected = key.as_bytes();
    let mut offset = 0;
    let mut matches = true;
    read_text(r, "key", |chunk| {
        let end = offset + chunk.len();
        if matches && (end > expected.len() || &expected[offset..end] != chunk) {
            matches = false;
        }
        offset = end;
        Ok(())
    })?;
    Ok(matches && offset == expected.len())
}
