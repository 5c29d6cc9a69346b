//! CBOR codec wrapper.

use crate::{encode_to_vec, Employee, EmployeeDecoder};

use super::types::{CodecError, EmployeeCodec};

#[derive(Debug, Default)]
pub struct CborEmployeeCodec {
    pub decoder: EmployeeDecoder,
}

impl CborEmployeeCodec {
    pub fn new() -> Self {
        Self {
            decoder: EmployeeDecoder::new(),
        }
    }
}

impl EmployeeCodec for CborEmployeeCodec {
    fn id(&self) -> &'static str {
        "cbor"
    }

    fn content_type(&self) -> &'static str {
        "application/cbor"
    }

    fn encode(&mut self, employee: &Employee) -> Result<Vec<u8>, CodecError> {
        Ok(encode_to_vec(employee)?)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<Employee, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}
