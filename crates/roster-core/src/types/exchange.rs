//! HTTP-style request and response values exchanged with the mock server.

use crate::types::route::HttpMethod;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const STATUS_CONFLICT: u16 = 409;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// HTTP request for route matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: HttpMethod,
    /// Request URL (path + query string)
    pub url: String,
    /// Request body/payload
    pub payload: Option<Value>,
}

impl Request {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            payload: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    pub fn post<B: Serialize>(url: impl Into<String>, body: &B) -> serde_json::Result<Self> {
        Ok(Self::new(HttpMethod::Post, url).with_payload(serde_json::to_value(body)?))
    }

    pub fn patch<B: Serialize>(url: impl Into<String>, body: &B) -> serde_json::Result<Self> {
        Ok(Self::new(HttpMethod::Patch, url).with_payload(serde_json::to_value(body)?))
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Mock server response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    /// JSON body, `None` for empty responses (204)
    pub body: Option<Value>,
}

impl Response {
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: Some(value),
            },
            Err(e) => Self::error(STATUS_INTERNAL_ERROR, format!("Failed to encode response: {e}")),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: None,
        }
    }

    /// Error response with an [`ErrorBody`]
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, &ErrorBody::new(message))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body, treating a missing body as JSON `null`.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.body.clone().unwrap_or(Value::Null))
    }

    /// Message from an [`ErrorBody`], if the body has that shape
    pub fn error_message(&self) -> Option<String> {
        self.decode::<ErrorBody>().ok().map(|b| b.error)
    }
}
