//! Mock server answering employee requests from an in-memory store.
//!
//! `MockServer` matches each [`Request`] against its [`RouteTable`],
//! runs the operation on its [`EmployeeStore`] and encodes the outcome
//! as a [`Response`].

use crate::config::error::ConfigError;
use crate::config::MockConfig;
use crate::mocks::routes::{RouteMatch, RouteTable};
use crate::store::{EmployeeStore, MemoryStore, StoreError};
use crate::types::employee::{Employee, EmployeePatch, NewEmployee};
use crate::types::exchange::{
    Request, Response, STATUS_BAD_REQUEST, STATUS_CONFLICT, STATUS_CREATED,
    STATUS_INTERNAL_ERROR, STATUS_METHOD_NOT_ALLOWED, STATUS_NOT_FOUND, STATUS_OK,
};
use crate::types::route::Endpoint;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

/// Body of the list response: `{ "employees": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
}

pub struct MockServer {
    routes: RouteTable,
    store: Box<dyn EmployeeStore>,
    latency: Duration,
}

impl MockServer {
    /// Server on the default namespace with the built-in seed rows
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(crate::config::DEFAULT_NAMESPACE)
                .expect("default namespace compiles"),
            store: Box::new(MemoryStore::seeded()),
            latency: Duration::ZERO,
        }
    }

    /// Build a server from configuration, loading fixture files if configured
    pub fn from_config(config: &MockConfig) -> Result<Self, ConfigError> {
        let rows = config.seed_rows()?;
        let store = MemoryStore::with_rows(rows).map_err(|e| match e {
            StoreError::Conflict { id } => ConfigError::DuplicateId(id),
            other => ConfigError::Seed(other),
        })?;
        debug!(
            namespace = %config.namespace,
            rows = store.len(),
            "mock server initialized"
        );
        let server = Self::with_store(&config.namespace, store)?;
        Ok(server.with_latency(config.latency()))
    }

    /// Server over any store implementation
    pub fn with_store(
        namespace: &str,
        store: impl EmployeeStore + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            routes: RouteTable::new(namespace)?,
            store: Box::new(store),
            latency: Duration::ZERO,
        })
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulated delay transports should apply before delivering a response
    pub fn response_delay(&self) -> Duration {
        self.latency
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Handle one request.
    ///
    /// Unknown URLs answer 404, known URLs with the wrong method 405.
    pub fn handle(&mut self, request: &Request) -> Response {
        let (endpoint, params) = match self.routes.find(request) {
            RouteMatch::Found { endpoint, params } => (endpoint, params),
            RouteMatch::MethodNotAllowed => {
                warn!(method = %request.method, url = %request.url, "method not allowed");
                return Response::error(
                    STATUS_METHOD_NOT_ALLOWED,
                    format!("Method not allowed: {} {}", request.method, request.url),
                );
            }
            RouteMatch::NotFound => {
                warn!(method = %request.method, url = %request.url, "no route matched");
                return Response::error(
                    STATUS_NOT_FOUND,
                    format!("Route not found: {} {}", request.method, request.url),
                );
            }
        };

        let response = self.dispatch(endpoint, &params, request);
        debug!(route = endpoint.id(), status = response.status, "handled request");
        response
    }

    fn dispatch(
        &mut self,
        endpoint: Endpoint,
        params: &HashMap<String, String>,
        request: &Request,
    ) -> Response {
        let id = params.get("id").map(String::as_str).unwrap_or_default();

        match endpoint {
            Endpoint::ListEmployees => Response::json(
                STATUS_OK,
                &EmployeeList {
                    employees: self.store.list(),
                },
            ),
            Endpoint::GetEmployee => match self.store.get(id) {
                Some(employee) => Response::json(STATUS_OK, &employee),
                None => store_error(StoreError::NotFound { id: id.to_string() }),
            },
            Endpoint::CreateEmployee => {
                let payload: NewEmployee = match parse_payload(request) {
                    Ok(payload) => payload,
                    Err(response) => return response,
                };
                match self.store.create(payload) {
                    Ok(employee) => Response::json(STATUS_CREATED, &employee),
                    Err(e) => store_error(e),
                }
            }
            Endpoint::UpdateEmployee => {
                let patch: EmployeePatch = match parse_payload(request) {
                    Ok(patch) => patch,
                    Err(response) => return response,
                };
                match self.store.update(id, &patch) {
                    Ok(employee) => Response::json(STATUS_OK, &employee),
                    Err(e) => store_error(e),
                }
            }
            Endpoint::DeleteEmployee => match self.store.delete(id) {
                Ok(()) => Response::no_content(),
                Err(e) => store_error(e),
            },
        }
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockServer")
            .field("routes", &self.routes)
            .field("employees", &self.store.len())
            .field("latency", &self.latency)
            .finish()
    }
}

fn parse_payload<T: DeserializeOwned>(request: &Request) -> Result<T, Response> {
    let Some(payload) = request.payload.clone() else {
        return Err(Response::error(
            STATUS_BAD_REQUEST,
            "Invalid request body: missing payload",
        ));
    };
    serde_json::from_value(payload).map_err(|e| {
        warn!(url = %request.url, error = %e, "rejected request body");
        Response::error(STATUS_BAD_REQUEST, format!("Invalid request body: {e}"))
    })
}

fn store_error(error: StoreError) -> Response {
    warn!(id = error.id(), error = %error, "store rejected request");
    match error {
        StoreError::NotFound { .. } => Response::error(STATUS_NOT_FOUND, NOT_FOUND_MESSAGE),
        StoreError::Conflict { .. } => Response::error(STATUS_CONFLICT, error.to_string()),
        StoreError::BlankId { .. } => {
            Response::error(STATUS_BAD_REQUEST, format!("Invalid request body: {error}"))
        }
        StoreError::IdsExhausted => Response::error(STATUS_INTERNAL_ERROR, error.to_string()),
    }
}
