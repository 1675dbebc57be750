//! Plain-text rendering of the form and the employee table.

use crate::transport::Transport;
use crate::view::{EmployeeView, FormMode};
use roster_core::{Employee, EmployeeField};
use std::fmt::Write;

pub fn form_title(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Creating => "Add New Employee",
        FormMode::Editing => "Edit Employee",
    }
}

pub fn submit_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Creating => "Add Employee",
        FormMode::Editing => "Update Employee",
    }
}

/// Form header, one `Label: value` line per field, then the submit button
pub fn render_form<T: Transport>(view: &EmployeeView<T>) -> String {
    let mode = view.mode();
    let mut out = String::new();
    let _ = writeln!(out, "{}", form_title(mode));
    for field in EmployeeField::ALL {
        let _ = writeln!(out, "{}: {}", field.label(), view.form_value(field));
    }
    let _ = writeln!(out, "[{}]", submit_label(mode));
    out
}

/// Employee table with Name, Position and Department columns, in list order
pub fn render_table(employees: &[Employee]) -> String {
    let mut widths = EmployeeField::ALL.map(|f| f.label().chars().count());
    for employee in employees {
        for (width, field) in widths.iter_mut().zip(EmployeeField::ALL) {
            *width = (*width).max(employee.field(field).chars().count());
        }
    }

    let mut out = String::new();
    let header = EmployeeField::ALL.map(|f| f.label());
    push_row(&mut out, &header, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_row(&mut out, &rule.each_ref().map(String::as_str), &widths);
    for employee in employees {
        let cells = EmployeeField::ALL.map(|f| employee.field(f));
        push_row(&mut out, &cells, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
