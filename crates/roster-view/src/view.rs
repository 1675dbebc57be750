//! Employee management view-model.
//!
//! `EmployeeView` holds the last-fetched employee list and one shared form.
//! The form is in [`FormMode::Creating`] (bound to the create draft) unless
//! an employee has been picked with [`EmployeeView::begin_edit`], in which
//! case it is bound to a copy of that employee until the update succeeds or
//! the edit is cancelled.
//!
//! Failures are logged and never surfaced to the user; operations report
//! only whether they took effect.

use crate::client::EmployeeClient;
use crate::transport::Transport;
use roster_core::{Employee, EmployeeDraft, EmployeeField, EmployeePatch, NewEmployee};
use tracing::{debug, error, warn};

/// Which record the shared form is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing,
}

pub struct EmployeeView<T> {
    client: EmployeeClient<T>,
    employees: Vec<Employee>,
    draft: EmployeeDraft,
    editing: Option<Employee>,
}

impl<T: Transport> EmployeeView<T> {
    /// View with an empty list; call [`load`](Self::load) before display
    pub fn new(client: EmployeeClient<T>) -> Self {
        Self {
            client,
            employees: Vec::new(),
            draft: EmployeeDraft::default(),
            editing: None,
        }
    }

    /// Create the view and perform the initial fetch
    pub async fn load(client: EmployeeClient<T>) -> Self {
        let mut view = Self::new(client);
        view.refresh().await;
        view
    }

    pub fn client(&self) -> &EmployeeClient<T> {
        &self.client
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&Employee> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Editing
        } else {
            FormMode::Creating
        }
    }

    /// Current value of a form field, read from the active record
    pub fn form_value(&self, field: EmployeeField) -> &str {
        match &self.editing {
            Some(employee) => employee.field(field),
            None => self.draft.field(field),
        }
    }

    /// Replace the list with the service's current contents.
    ///
    /// On failure the previous list is kept.
    pub async fn refresh(&mut self) -> bool {
        match self.client.list().await {
            Ok(employees) => {
                debug!(count = employees.len(), "fetched employees");
                self.employees = employees;
                true
            }
            Err(e) => {
                error!(error = %e, "error fetching employees");
                false
            }
        }
    }

    /// Submit the form: create in [`FormMode::Creating`], update in [`FormMode::Editing`].
    ///
    /// The list is refreshed afterwards whether or not the request succeeded.
    /// Returns the record the service stored, or `None` on failure.
    pub async fn submit(&mut self) -> Option<Employee> {
        let saved = match self.editing.clone() {
            None => self.create().await,
            Some(employee) => self.update(employee).await,
        };
        self.refresh().await;
        saved
    }

    async fn create(&mut self) -> Option<Employee> {
        let payload = NewEmployee::new(self.draft.clone());
        match self.client.create(&payload).await {
            Ok(created) => {
                debug!(id = %created.id, "created employee");
                self.employees.push(created.clone());
                self.draft = EmployeeDraft::default();
                Some(created)
            }
            Err(e) => {
                error!(error = %e, "error creating employee");
                None
            }
        }
    }

    async fn update(&mut self, employee: Employee) -> Option<Employee> {
        match self
            .client
            .update(&employee.id, &EmployeePatch::from(&employee))
            .await
        {
            Ok(updated) => {
                debug!(id = %updated.id, "updated employee");
                if let Some(slot) = self.employees.iter_mut().find(|e| e.id == updated.id) {
                    *slot = updated.clone();
                }
                self.editing = None;
                Some(updated)
            }
            Err(e) => {
                error!(id = %employee.id, error = %e, "error updating employee");
                None
            }
        }
    }

    /// Bind the form to a copy of the listed employee with this id.
    ///
    /// The create draft is kept untouched for when editing ends.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.employees.iter().find(|e| e.id == id) {
            Some(employee) => {
                self.editing = Some(employee.clone());
                true
            }
            None => {
                warn!(id, "cannot edit employee missing from the list");
                false
            }
        }
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Set one field of the active record
    pub fn change_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        match &mut self.editing {
            Some(employee) => employee.set_field(field, value),
            None => self.draft.set_field(field, value),
        }
    }

    /// Set a field identified by its form name (`name`, `position`, `department`).
    ///
    /// Unknown names are logged and ignored.
    pub fn change_named_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<EmployeeField>() {
            Ok(field) => {
                self.change_field(field, value);
                true
            }
            Err(e) => {
                warn!(error = %e, "ignoring form change");
                false
            }
        }
    }

    /// Delete an employee and drop it from the list.
    ///
    /// Unlike submit, no refresh follows.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.client.delete(id).await {
            Ok(()) => {
                debug!(id, "deleted employee");
                self.employees.retain(|e| e.id != id);
                true
            }
            Err(e) => {
                error!(id, error = %e, "error deleting employee");
                false
            }
        }
    }
}
