//! Request handling for the employee record endpoints.
//!
//! This crate sits between an HTTP server and [`employee_cbor`]: it enforces
//! the payload bound, picks the JSON or CBOR variant by route and maps codec
//! failures onto response statuses. It performs no socket I/O itself. The
//! [`cli`] module holds the stream conversions used by the command line tools.
//!
//! | route | variant |
//! |-------|---------|
//! | `POST /api/v1/employee/add` | JSON body |
//! | `POST /api/v2/employee/add` | CBOR body |
//! | `GET /api/v2/employee/example` | CBOR response |

pub mod cli;
mod config;
mod error;
pub mod handlers;
pub mod http;
mod router;

pub use config::{ServerConfig, DEFAULT_SCRATCH_SIZE, EXAMPLE_EMPLOYEE};
pub use error::RestError;
pub use http::{Method, Request, Response, Status};
pub use router::{Handler, Router};
