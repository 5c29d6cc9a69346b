//! URI dispatch for the employee endpoints.

use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::error::RestError;
use crate::handlers::{
    add_employee_cbor, add_employee_json, example_employee_cbor, ADD_EMPLOYEE_CBOR_URI,
    ADD_EMPLOYEE_JSON_URI, EXAMPLE_EMPLOYEE_URI,
};
use crate::http::{Method, Request, Response};

pub type Handler = fn(&ServerConfig, &Request) -> Result<Response, RestError>;

struct Route {
    method: Method,
    uri: &'static str,
    handler: Handler,
}

/// Maps `(method, path)` to a handler and turns handler errors into
/// responses.
pub struct Router {
    config: ServerConfig,
    routes: Vec<Route>,
}

impl Router {
    /// A router with the employee endpoints registered.
    pub fn new(config: ServerConfig) -> Self {
        let mut router = Self {
            config,
            routes: Vec::new(),
        };
        router.register(Method::Get, EXAMPLE_EMPLOYEE_URI, example_employee_cbor);
        router.register(Method::Post, ADD_EMPLOYEE_JSON_URI, add_employee_json);
        router.register(Method::Post, ADD_EMPLOYEE_CBOR_URI, add_employee_cbor);
        router
    }

    /// Add a route. A later registration for the same method and URI wins.
    pub fn register(&mut self, method: Method, uri: &'static str, handler: Handler) {
        self.routes.retain(|r| !(r.method == method && r.uri == uri));
        self.routes.push(Route {
            method,
            uri,
            handler,
        });
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn handle(&self, req: &Request) -> Response {
        let path = req.path();
        let result = self
            .routes
            .iter()
            .find(|r| r.method == req.method && r.uri == path)
            .ok_or(RestError::NotFound)
            .and_then(|r| (r.handler)(&self.config, req));
        match result {
            Ok(response) => {
                debug!(uri = %req.uri, status = %response.status, "request handled");
                response
            }
            Err(err) => {
                warn!(uri = %req.uri, error = %err, "request failed");
                err.into_response()
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
