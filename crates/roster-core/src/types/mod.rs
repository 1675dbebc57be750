//! Core domain types for employees, routes, and request/response exchange.

pub mod employee;
pub mod exchange;
pub mod route;
