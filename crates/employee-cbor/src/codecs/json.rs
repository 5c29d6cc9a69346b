//! JSON codec wrapper.

use crate::json::{employee_to_value, parse_json_employee};
use crate::{Employee, JsonFieldError};

use super::types::{CodecError, EmployeeCodec};

#[derive(Debug, Default)]
pub struct JsonEmployeeCodec;

impl JsonEmployeeCodec {
    pub fn new() -> Self {
        Self
    }
}

impl EmployeeCodec for JsonEmployeeCodec {
    fn id(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    /// JSON has no literal for infinite or NaN numbers, so such a salary
    /// fails with [`JsonFieldError::Salary`].
    fn encode(&mut self, employee: &Employee) -> Result<Vec<u8>, CodecError> {
        if !employee.salary().is_finite() {
            return Err(JsonFieldError::Salary.into());
        }
        Ok(employee_to_value(employee).to_string().into_bytes())
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<Employee, CodecError> {
        Ok(parse_json_employee(bytes)?)
    }
}
