//! Employee listing and name lookup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::ParsedRoster;

/// Result of looking up a typed employee name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "employee", rename_all = "snake_case")]
pub enum EmployeeMatch {
    /// The name matches an employee, ignoring case.
    Exact(String),
    /// The name is part of an employee's name.
    Suggested(String),
    /// Nothing matches.
    NotFound,
}

/// Distinct employee names across every list of the roster, sorted.
///
/// Names differing only in case are listed once, with the first spelling
/// encountered.
pub fn list_employees(roster: &ParsedRoster) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut employees: Vec<String> = roster
        .all_records()
        .filter(|record| seen.insert(record.employee().to_lowercase()))
        .map(|record| record.employee().to_string())
        .collect();
    employees.sort();
    employees
}

/// Resolves a typed name against the employee list.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::{EmployeeMatch, resolve_employee};
///
/// let employees = vec!["A.Papadopoulos".to_string(), "B.Georgiou".to_string()];
/// assert_eq!(
///     resolve_employee("a.papadopoulos", &employees),
///     EmployeeMatch::Exact("A.Papadopoulos".to_string())
/// );
/// assert_eq!(
///     resolve_employee("georg", &employees),
///     EmployeeMatch::Suggested("B.Georgiou".to_string())
/// );
/// assert_eq!(resolve_employee("Lee", &employees), EmployeeMatch::NotFound);
/// ```
pub fn resolve_employee(query: &str, employees: &[String]) -> EmployeeMatch {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return EmployeeMatch::NotFound;
    }
    if let Some(exact) = employees.iter().find(|e| e.to_lowercase() == query) {
        return EmployeeMatch::Exact(exact.clone());
    }
    employees
        .iter()
        .find(|e| e.to_lowercase().contains(&query))
        .map_or(EmployeeMatch::NotFound, |e| EmployeeMatch::Suggested(e.clone()))
}
