//! JSON views of an employee record.
//!
//! Two independent paths live here: the fixed-shape textual projection used
//! for logging, and the parser for the human-readable request variant.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::*;
use crate::record::{Date, Employee, Name};

impl Employee {
    /// Render `{"name":"…","salary":…,"birthdate":{"day":…,"month":…,"year":…}}`
    /// with the salary fixed to two decimals.
    ///
    /// The projection is one-way: reparsing it does not restore the salary's
    /// full precision.
    pub fn to_json(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Value::String(self.name().as_str().to_owned());
        let Date { day, month, year } = self.birthdate();
        write!(
            f,
            "{{\"name\":{name},\"salary\":{},\"birthdate\":{{\"day\":{day},\"month\":{month},\"year\":{year}}}}}",
            Salary(self.salary())
        )
    }
}

/// Two-decimal salary in C `%.2f` style: infinities print as `inf`/`-inf`
/// and NaN as `nan`.
struct Salary(f64);

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// Field-level failure of the JSON request variant.
///
/// The display text is the message sent back to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JsonFieldError {
    #[error("Wrong format")]
    InvalidDocument,
    #[error("Wrong format")]
    Name,
    #[error("Wrong format")]
    Salary,
    #[error("Wrong birthdate format")]
    Birthdate,
    #[error("Wrong day format")]
    Day,
    #[error("Wrong month format")]
    Month,
    #[error("Wrong year format")]
    Year,
}

/// Parse the human-readable variant: a JSON object with the same fields as
/// the CBOR record.
///
/// Checks run in the order name, salary, birthdate, day, month, year and the
/// first failing field is reported.
pub fn parse_json_employee(body: &[u8]) -> Result<Employee, JsonFieldError> {
    let root: Value = serde_json::from_slice(body).map_err(|_| JsonFieldError::InvalidDocument)?;
    let root = root.as_object().ok_or(JsonFieldError::InvalidDocument)?;

    let name = root
        .get(KEY_NAME)
        .and_then(Value::as_str)
        .and_then(|s| Name::new(s).ok())
        .ok_or(JsonFieldError::Name)?;
    let salary = root
        .get(KEY_SALARY)
        .and_then(Value::as_f64)
        .ok_or(JsonFieldError::Salary)?;
    let birthdate = root
        .get(KEY_BIRTHDATE)
        .and_then(Value::as_object)
        .ok_or(JsonFieldError::Birthdate)?;
    let birthdate = Date {
        day: json_i32(birthdate, KEY_DAY).ok_or(JsonFieldError::Day)?,
        month: json_i32(birthdate, KEY_MONTH).ok_or(JsonFieldError::Month)?,
        year: json_i32(birthdate, KEY_YEAR).ok_or(JsonFieldError::Year)?,
    };
    Ok(Employee::new(name, salary, birthdate))
}

fn json_i32(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    obj.get(key)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
}

/// Build the structured JSON value for `employee`, keeping the salary at full
/// precision. Used by the JSON codec; the logging projection is
/// [`Employee::to_json`].
pub fn employee_to_value(employee: &Employee) -> Value {
    let date = employee.birthdate();
    serde_json::json!({
        KEY_NAME: employee.name().as_str(),
        KEY_SALARY: employee.salary(),
        KEY_BIRTHDATE: {
            KEY_DAY: date.day,
            KEY_MONTH: date.month,
            KEY_YEAR: date.year,
        },
    })
}
