//! CBOR wire constants.

// MAJOR type values (bits 7-5 of the initial byte)
pub const MAJOR_UIN: u8 = 0b000;
pub const MAJOR_NIN: u8 = 0b001;
pub const MAJOR_BIN: u8 = 0b010;
pub const MAJOR_STR: u8 = 0b011;
pub const MAJOR_ARR: u8 = 0b100;
pub const MAJOR_MAP: u8 = 0b101;
pub const MAJOR_TAG: u8 = 0b110;
pub const MAJOR_TKN: u8 = 0b111;

// MAJOR type overlays (major shifted to bits 7-5)
pub const OVERLAY_UIN: u8 = MAJOR_UIN << 5;
pub const OVERLAY_NIN: u8 = MAJOR_NIN << 5;
pub const OVERLAY_STR: u8 = MAJOR_STR << 5;
pub const OVERLAY_MAP: u8 = MAJOR_MAP << 5;

pub const MINOR_MASK: u8 = 0b11111;

// Additional-information values
pub const MINOR_U8: u8 = 24;
pub const MINOR_U16: u8 = 25;
pub const MINOR_U32: u8 = 26;
pub const MINOR_U64: u8 = 27;
pub const MINOR_INDEFINITE: u8 = 31;

// Major 7 float widths share the integer minors
pub const MINOR_F16: u8 = MINOR_U16;
pub const MINOR_F32: u8 = MINOR_U32;
pub const MINOR_F64: u8 = MINOR_U64;

/// Initial byte of a 64-bit float.
pub const FLOAT64: u8 = (MAJOR_TKN << 5) | MINOR_F64;

/// CBOR "break" stop code.
pub const CBOR_END: u8 = 0xff;

/// Nesting limit when skipping over values the record does not use.
pub const MAX_DEPTH: usize = 64;

// Record field keys
pub const KEY_NAME: &str = "name";
pub const KEY_SALARY: &str = "salary";
pub const KEY_BIRTHDATE: &str = "birthdate";
pub const KEY_DAY: &str = "day";
pub const KEY_MONTH: &str = "month";
pub const KEY_YEAR: &str = "year";

/// Entries in both the employee map and the birthdate map.
pub const RECORD_FIELDS: u64 = 3;
