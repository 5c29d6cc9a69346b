//! Employee endpoint handlers.

use employee_cbor::{decode, encode, parse_json_employee, Employee};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::RestError;
use crate::http::{Request, Response, Status, CONTENT_TYPE_CBOR};

pub const ADD_EMPLOYEE_JSON_URI: &str = "/api/v1/employee/add";
pub const ADD_EMPLOYEE_CBOR_URI: &str = "/api/v2/employee/add";
pub const EXAMPLE_EMPLOYEE_URI: &str = "/api/v2/employee/example";

const ACCEPTED: &str = "Request to add employee received";

/// Refuse bodies that would not fit the scratch buffer.
fn check_content_len(config: &ServerConfig, req: &Request) -> Result<(), RestError> {
    if req.body.len() >= config.scratch_size {
        return Err(RestError::ContentTooLong {
            len: req.body.len(),
            limit: config.scratch_size,
        });
    }
    Ok(())
}

fn accept(config: &ServerConfig, employee: &Employee) -> Result<Response, RestError> {
    if config.strict_dates {
        employee.birthdate().validate()?;
    }
    info!("Received employee: {}", employee);
    Ok(Response::text(Status::Ok, ACCEPTED))
}

/// `POST /api/v1/employee/add` with a JSON body.
pub fn add_employee_json(config: &ServerConfig, req: &Request) -> Result<Response, RestError> {
    check_content_len(config, req)?;
    let employee = parse_json_employee(&req.body)?;
    accept(config, &employee)
}

/// `POST /api/v2/employee/add` with a CBOR body.
pub fn add_employee_cbor(config: &ServerConfig, req: &Request) -> Result<Response, RestError> {
    check_content_len(config, req)?;
    let employee = decode(&req.body).map_err(|err| {
        warn!(error = %err, len = req.body.len(), "rejecting cbor employee");
        RestError::Decode(err)
    })?;
    accept(config, &employee)
}

/// `GET /api/v2/employee/example`: the configured example record as CBOR.
pub fn example_employee_cbor(config: &ServerConfig, _req: &Request) -> Result<Response, RestError> {
    let mut scratch = vec![0u8; config.scratch_size];
    let len = encode(&config.example, &mut scratch).map_err(RestError::Encode)?;
    scratch.truncate(len);
    Ok(Response::binary(CONTENT_TYPE_CBOR, scratch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_cbor::{encode_to_vec, Date, JsonFieldError, RecordError};

    #[test]
    fn content_limit_is_exclusive() {
        let config = ServerConfig::new().with_scratch_size(4);
        let ok = Request::post(ADD_EMPLOYEE_CBOR_URI, vec![0u8; 3]);
        let too_long = Request::post(ADD_EMPLOYEE_CBOR_URI, vec![0u8; 4]);
        assert!(check_content_len(&config, &ok).is_ok());
        assert_eq!(
            check_content_len(&config, &too_long),
            Err(RestError::ContentTooLong { len: 4, limit: 4 })
        );
    }

    #[test]
    fn strict_dates_reject_impossible_birthdate() {
        let employee = Employee::try_new("A", 1.0, Date::new(31, 2, 2001)).unwrap();
        let body = encode_to_vec(&employee).unwrap();
        let req = Request::post(ADD_EMPLOYEE_CBOR_URI, body);

        let lenient = ServerConfig::new();
        assert!(add_employee_cbor(&lenient, &req).is_ok());

        let strict = ServerConfig::new().with_strict_dates(true);
        let err = add_employee_cbor(&strict, &req).unwrap_err();
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.message(), "Wrong birthdate format");
    }

    #[test]
    fn json_errors_keep_field_message() {
        let req = Request::post(ADD_EMPLOYEE_JSON_URI, r#"{"name":"A","salary":1,"birthdate":{"day":"x"}}"#);
        assert_eq!(
            add_employee_json(&ServerConfig::new(), &req),
            Err(RestError::Json(JsonFieldError::Day))
        );
    }

    #[test]
    fn example_needs_room_in_scratch() {
        let config = ServerConfig::new().with_scratch_size(16);
        let err = example_employee_cbor(&config, &Request::get(EXAMPLE_EMPLOYEE_URI)).unwrap_err();
        assert!(matches!(
            err,
            RestError::Encode(RecordError::EncodeOverflow { available: 16, .. })
        ));
    }
}
