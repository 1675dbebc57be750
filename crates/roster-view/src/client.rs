//! Typed client for the `/employees` resource.

use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;
use roster_core::config::DEFAULT_NAMESPACE;
use roster_core::types::exchange::{STATUS_CONFLICT, STATUS_NOT_FOUND};
use roster_core::types::route::mount;
use roster_core::{Employee, EmployeeList, EmployeePatch, NewEmployee, Request, Response};
use serde::de::DeserializeOwned;

/// Employee API client over any [`Transport`]
#[derive(Debug, Clone)]
pub struct EmployeeClient<T> {
    transport: T,
    collection_url: String,
}

impl<T: Transport> EmployeeClient<T> {
    /// Client for routes under the default `/api` namespace
    pub fn new(transport: T) -> Self {
        Self::with_namespace(transport, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(transport: T, namespace: &str) -> Self {
        Self {
            transport,
            collection_url: mount(namespace, "/employees"),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, urlencoding::encode(id))
    }

    /// GET /employees
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        let response = self.send(Request::get(&self.collection_url)).await?;
        let list: EmployeeList = decode_body(&response)?;
        Ok(list.employees)
    }

    /// GET /employees/{id}
    pub async fn get(&self, id: &str) -> ClientResult<Employee> {
        let response = self.send(Request::get(self.item_url(id))).await?;
        decode_body(&response)
    }

    /// POST /employees
    pub async fn create(&self, employee: &NewEmployee) -> ClientResult<Employee> {
        let request = Request::post(&self.collection_url, employee)?;
        let response = self.send(request).await?;
        decode_body(&response)
    }

    /// PATCH /employees/{id}
    pub async fn update(&self, id: &str, patch: &EmployeePatch) -> ClientResult<Employee> {
        let request = Request::patch(self.item_url(id), patch)?;
        let response = self.send(request).await?;
        decode_body(&response)
    }

    /// DELETE /employees/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.send(Request::delete(self.item_url(id))).await?;
        Ok(())
    }

    /// Send a request and turn non-2xx responses into errors
    async fn send(&self, request: Request) -> ClientResult<Response> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .error_message()
            .unwrap_or_else(|| format!("status {}", response.status));
        Err(match response.status {
            STATUS_NOT_FOUND => ClientError::NotFound(message),
            STATUS_CONFLICT => ClientError::Conflict(message),
            status => ClientError::Status { status, message },
        })
    }
}

fn decode_body<R: DeserializeOwned>(response: &Response) -> ClientResult<R> {
    if response.body.is_none() {
        return Err(ClientError::InvalidResponse(format!(
            "status {} without a body",
            response.status
        )));
    }
    Ok(response.decode()?)
}
