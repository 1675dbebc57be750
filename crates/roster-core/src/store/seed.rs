//! Built-in seed rows.

use crate::types::employee::Employee;

const SEED_ROWS: [(&str, &str, &str, &str); 10] = [
    ("1", "John Doe", "Software Engineer", "IT"),
    ("2", "Jane Smith", "Product Manager", "Product"),
    ("3", "Alice Johnson", "UX Designer", "Design"),
    ("4", "Robert Brown", "QA Engineer", "Quality"),
    ("5", "Emily Davis", "Data Scientist", "Data"),
    ("6", "Michael Wilson", "HR Manager", "HR"),
    ("7", "Sarah Taylor", "Marketing Specialist", "Marketing"),
    ("8", "Chris Evans", "DevOps Engineer", "Operations"),
    ("9", "Sophia Moore", "Frontend Developer", "Development"),
    ("10", "Daniel Clark", "Backend Developer", "Development"),
];

/// The ten fixed employees every fresh store starts with, in seed order.
pub fn seed_employees() -> Vec<Employee> {
    SEED_ROWS
        .iter()
        .map(|&(id, name, position, department)| Employee {
            id: id.to_owned(),
            name: name.to_owned(),
            position: position.to_owned(),
            department: department.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn test_seed_ids_are_one_to_ten_in_order() {
        let ids: Vec<String> = seed_employees().into_iter().map(|e| e.id).collect();
        let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn test_seed_ids_unique() {
        let rows = seed_employees();
        let ids: HashSet<&str> = rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[rstest]
    #[case(0, "John Doe", "Software Engineer", "IT")]
    #[case(2, "Alice Johnson", "UX Designer", "Design")]
    #[case(9, "Daniel Clark", "Backend Developer", "Development")]
    fn test_seed_values(
        #[case] index: usize,
        #[case] name: &str,
        #[case] position: &str,
        #[case] department: &str,
    ) {
        let row = &seed_employees()[index];
        assert_eq!(row.name, name);
        assert_eq!(row.position, position);
        assert_eq!(row.department, department);
    }
}
