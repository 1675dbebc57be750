//! Mock employee service.
//!
//! - [`RouteTable`]: the employee routes mounted under a namespace
//! - [`MockServer`]: matches requests to routes and answers them from an [`EmployeeStore`](crate::store::EmployeeStore)

pub mod routes;
pub mod server;

pub use routes::{Route, RouteMatch, RouteTable};
pub use server::{EmployeeList, MockServer, NOT_FOUND_MESSAGE};
