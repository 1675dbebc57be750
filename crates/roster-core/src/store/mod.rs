//! Employee storage.
//!
//! - [`EmployeeStore`]: the list/get/create/update/delete seam the mock server depends on
//! - [`MemoryStore`]: in-memory implementation preserving insertion order
//! - [`seed`]: the built-in fixture rows

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

use crate::types::employee::{Employee, EmployeePatch, NewEmployee};
use thiserror::Error;

/// Errors returned by store mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No employee with this id
    #[error("Employee not found")]
    NotFound { id: String },
    /// Create reused an id that is already stored
    #[error("Employee already exists: {id}")]
    Conflict { id: String },
    /// Supplied id is empty or only whitespace
    #[error("Employee id must not be blank")]
    BlankId { id: String },
    /// The numeric id counter has no values left
    #[error("No employee ids left to assign")]
    IdsExhausted,
}

impl StoreError {
    pub fn id(&self) -> &str {
        match self {
            StoreError::NotFound { id }
            | StoreError::Conflict { id }
            | StoreError::BlankId { id } => id,
            StoreError::IdsExhausted => "",
        }
    }
}

/// Narrow interface over employee persistence.
///
/// A failed mutation leaves the store unchanged.
pub trait EmployeeStore: Send {
    /// All employees in insertion order
    fn list(&self) -> Vec<Employee>;

    fn get(&self, id: &str) -> Option<Employee>;

    /// Insert a record, assigning an id when the payload has none
    fn create(&mut self, employee: NewEmployee) -> Result<Employee, StoreError>;

    /// Merge the given fields into an existing record
    fn update(&mut self, id: &str, patch: &EmployeePatch) -> Result<Employee, StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
