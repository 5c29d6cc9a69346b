//! Aggregate codec holder.

use super::{CborEmployeeCodec, EmployeeCodec, JsonEmployeeCodec};

#[derive(Debug, Default)]
pub struct EmployeeCodecs {
    pub cbor: CborEmployeeCodec,
    pub json: JsonEmployeeCodec,
}

impl EmployeeCodecs {
    pub fn new() -> Self {
        Self {
            cbor: CborEmployeeCodec::new(),
            json: JsonEmployeeCodec::new(),
        }
    }

    /// Pick the codec whose content type matches `content_type`, ignoring any
    /// `; charset=…` style parameters.
    pub fn by_content_type(&mut self, content_type: &str) -> Option<&mut dyn EmployeeCodec> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(self.cbor.content_type()) {
            Some(&mut self.cbor)
        } else if essence.eq_ignore_ascii_case(self.json.content_type()) {
            Some(&mut self.json)
        } else {
            None
        }
    }
}
