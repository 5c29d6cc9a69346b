use employee_cbor::{DateError, JsonFieldError, RecordError};
use thiserror::Error;

use crate::http::{Response, Status};

/// Failure while handling an employee request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RestError {
    #[error("content too long: {len} bytes, limit {limit}")]
    ContentTooLong { len: usize, limit: usize },
    #[error(transparent)]
    Json(#[from] JsonFieldError),
    #[error("failed to decode employee: {0}")]
    Decode(RecordError),
    #[error("failed to encode employee: {0}")]
    Encode(RecordError),
    #[error("invalid birthdate: {0}")]
    Date(#[from] DateError),
    #[error("no handler for uri")]
    NotFound,
}

impl RestError {
    pub fn status(&self) -> Status {
        match self {
            RestError::Json(_) | RestError::Date(_) => Status::BadRequest,
            RestError::NotFound => Status::NotFound,
            RestError::ContentTooLong { .. } | RestError::Decode(_) | RestError::Encode(_) => {
                Status::InternalServerError
            }
        }
    }

    /// Text sent to the client. Codec details stay in the log.
    pub fn message(&self) -> String {
        match self {
            RestError::ContentTooLong { .. } => "content too long".to_owned(),
            RestError::Json(err) => err.to_string(),
            RestError::Decode(_) => "Failed to decode employee".to_owned(),
            RestError::Encode(_) => "Failed to encode employee".to_owned(),
            RestError::Date(_) => "Wrong birthdate format".to_owned(),
            RestError::NotFound => "Not found".to_owned(),
        }
    }

    pub fn into_response(self) -> Response {
        Response::text(self.status(), self.message())
    }
}
