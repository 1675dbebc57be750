//! In-memory employee store.

use crate::store::seed::seed_employees;
use crate::store::{EmployeeStore, StoreError};
use crate::types::employee::{Employee, EmployeePatch, NewEmployee};
use std::collections::HashMap;

/// Employee store held entirely in memory.
///
/// Records are kept in a `Vec` to preserve insertion order, with an
/// id -> position index for lookups. Store-assigned ids come from a
/// counter that starts above the largest numeric id ever inserted.
/// The counter only moves forward; once it reaches `u64::MAX` creates
/// without an id fail instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
    next_id: u64,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the ten built-in seed rows
    pub fn seeded() -> Self {
        Self::with_rows(seed_employees()).unwrap_or_default()
    }

    /// Store holding the given rows in order. Fails on a repeated or blank id.
    pub fn with_rows(rows: Vec<Employee>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for row in rows {
            store.insert(row)?;
        }
        Ok(store)
    }

    fn insert(&mut self, employee: Employee) -> Result<Employee, StoreError> {
        if employee.id.trim().is_empty() {
            return Err(StoreError::BlankId { id: employee.id });
        }
        if self.index.contains_key(&employee.id) {
            return Err(StoreError::Conflict { id: employee.id });
        }
        // u64::MAX itself leaves the counter alone
        if let Some(next) = employee.id.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
            self.next_id = self.next_id.max(next);
        }
        self.index.insert(employee.id.clone(), self.employees.len());
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn allocate_id(&mut self) -> Result<String, StoreError> {
        loop {
            let candidate = self.next_id.max(1);
            self.next_id = candidate.checked_add(1).ok_or(StoreError::IdsExhausted)?;
            let id = candidate.to_string();
            if !self.index.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .employees
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
    }
}

impl EmployeeStore for MemoryStore {
    fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    fn get(&self, id: &str) -> Option<Employee> {
        self.index.get(id).map(|&i| self.employees[i].clone())
    }

    fn create(&mut self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let id = match employee.id {
            Some(id) => id,
            None => self.allocate_id()?,
        };
        self.insert(Employee::from_draft(id, employee.fields))
    }

    fn update(&mut self, id: &str, patch: &EmployeePatch) -> Result<Employee, StoreError> {
        let &i = self.index.get(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        let employee = &mut self.employees[i];
        employee.apply(patch);
        Ok(employee.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let i = self.index.remove(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        self.employees.remove(i);
        self.reindex();
        Ok(())
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}
