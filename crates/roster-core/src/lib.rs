//! In-memory mock of the `/api/employees` REST resource.
//!
//! The [`MockServer`] answers HTTP-style [`Request`]s from an
//! [`EmployeeStore`], seeded with ten fixed employees or with fixture
//! files named in a [`MockConfig`].

pub mod config;
pub mod matching;
pub mod mocks;
pub mod store;
pub mod types;

pub use config::error::ConfigError;
pub use config::MockConfig;
pub use mocks::{EmployeeList, MockServer, NOT_FOUND_MESSAGE};
pub use store::{EmployeeStore, MemoryStore, StoreError};
pub use types::employee::{Employee, EmployeeDraft, EmployeeField, EmployeePatch, NewEmployee};
pub use types::exchange::{ErrorBody, Request, Response};
pub use types::route::{Endpoint, HttpMethod};
