//! Employee record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stored employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, immutable after creation
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
}

impl Employee {
    /// Build a record from an id and draft fields
    pub fn from_draft(id: impl Into<String>, draft: EmployeeDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            position: draft.position,
            department: draft.department,
        }
    }

    /// Editable fields of this record, without the id
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
        }
    }

    /// Merge a partial update; absent fields keep their current value.
    pub fn apply(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(position) = &patch.position {
            self.position.clone_from(position);
        }
        if let Some(department) = &patch.department {
            self.department.clone_from(department);
        }
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Position => &self.position,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        match field {
            EmployeeField::Name => self.name = value.into(),
            EmployeeField::Position => self.position = value.into(),
            EmployeeField::Department => self.department = value.into(),
        }
    }
}

/// Employee fields without an identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
        }
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Position => &self.position,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        match field {
            EmployeeField::Name => self.name = value.into(),
            EmployeeField::Position => self.position = value.into(),
            EmployeeField::Department => self.department = value.into(),
        }
    }
}

/// Create payload.
///
/// When `id` is `None` the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: EmployeeDraft,
}

impl NewEmployee {
    /// Payload with a store-assigned id
    pub fn new(fields: EmployeeDraft) -> Self {
        Self { id: None, fields }
    }

    /// Payload with a caller-chosen id
    pub fn with_id(id: impl Into<String>, fields: EmployeeDraft) -> Self {
        Self {
            id: Some(id.into()),
            fields,
        }
    }
}

impl From<Employee> for NewEmployee {
    fn from(employee: Employee) -> Self {
        let fields = employee.draft();
        Self {
            id: Some(employee.id),
            fields,
        }
    }
}

/// Partial update payload.
///
/// Unknown keys (including `id`) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.department.is_none()
    }
}

impl From<&Employee> for EmployeePatch {
    fn from(employee: &Employee) -> Self {
        Self {
            name: Some(employee.name.clone()),
            position: Some(employee.position.clone()),
            department: Some(employee.department.clone()),
        }
    }
}

/// Editable employee field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeField {
    Name,
    Position,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 3] = [
        EmployeeField::Name,
        EmployeeField::Position,
        EmployeeField::Department,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Position => "position",
            EmployeeField::Department => "department",
        }
    }

    /// Column / form label
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::Name => "Name",
            EmployeeField::Position => "Position",
            EmployeeField::Department => "Department",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name is not one of `name`, `position`, `department`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown employee field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for EmployeeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(EmployeeField::Name),
            "position" => Ok(EmployeeField::Position),
            "department" => Ok(EmployeeField::Department),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn alice() -> Employee {
        Employee {
            id: "3".to_string(),
            name: "Alice Johnson".to_string(),
            position: "UX Designer".to_string(),
            department: "Design".to_string(),
        }
    }

    #[rstest]
    fn test_employee_json_shape() {
        let value = serde_json::to_value(alice()).expect("Should serialize");
        assert_eq!(
            value,
            json!({
                "id": "3",
                "name": "Alice Johnson",
                "position": "UX Designer",
                "department": "Design"
            })
        );
    }

    #[rstest]
    fn test_apply_partial_patch_keeps_other_fields() {
        let mut employee = alice();
        let patch = EmployeePatch {
            department: Some("Design Systems".to_string()),
            ..Default::default()
        };
        employee.apply(&patch);

        assert_eq!(employee.name, "Alice Johnson");
        assert_eq!(employee.position, "UX Designer");
        assert_eq!(employee.department, "Design Systems");
        assert_eq!(employee.id, "3");
    }

    #[rstest]
    fn test_patch_ignores_id_key() {
        let patch: EmployeePatch =
            serde_json::from_value(json!({"id": "42", "name": "Renamed"})).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
        assert_eq!(patch.position, None);
        assert!(!patch.is_empty());
    }

    #[rstest]
    fn test_patch_omits_absent_fields() {
        let patch = EmployeePatch {
            position: Some("Lead".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"position": "Lead"}));
    }

    #[rstest]
    #[case(json!({"name": "A", "position": "B", "department": "C"}), None)]
    #[case(json!({"id": "999", "name": "A", "position": "B", "department": "C"}), Some("999"))]
    fn test_new_employee_optional_id(#[case] body: serde_json::Value, #[case] id: Option<&str>) {
        let payload: NewEmployee = serde_json::from_value(body).expect("Should deserialize");
        assert_eq!(payload.id.as_deref(), id);
        assert_eq!(payload.fields, EmployeeDraft::new("A", "B", "C"));
    }

    #[rstest]
    fn test_new_employee_missing_fields_default_to_empty() {
        let payload: NewEmployee = serde_json::from_value(json!({"name": "Only"})).unwrap();
        assert_eq!(payload.fields.position, "");
        assert_eq!(payload.fields.department, "");
    }

    #[rstest]
    #[case("name", Some(EmployeeField::Name))]
    #[case("position", Some(EmployeeField::Position))]
    #[case("department", Some(EmployeeField::Department))]
    #[case("id", None)]
    #[case("Name", None)]
    #[case("", None)]
    fn test_field_from_str(#[case] input: &str, #[case] expected: Option<EmployeeField>) {
        assert_eq!(input.parse::<EmployeeField>().ok(), expected);
    }

    #[rstest]
    #[case(EmployeeField::Name, "Alice Johnson")]
    #[case(EmployeeField::Position, "UX Designer")]
    #[case(EmployeeField::Department, "Design")]
    fn test_field_access(#[case] field: EmployeeField, #[case] expected: &str) {
        let employee = alice();
        assert_eq!(employee.field(field), expected);
        assert_eq!(employee.draft().field(field), expected);
    }

    #[rstest]
    fn test_set_field_touches_one_field() {
        let mut draft = EmployeeDraft::new("A", "B", "C");
        draft.set_field(EmployeeField::Position, "Z");
        assert_eq!(draft, EmployeeDraft::new("A", "Z", "C"));
    }
}
