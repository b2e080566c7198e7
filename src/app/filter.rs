//! Client-side employee search.
//!
//! Matching is a case-insensitive substring test over four fields: the full
//! name (`"first last"`), department, title and email. A record matches when
//! any one of them contains the query. The filter is stable and never
//! reorders.

use crate::domain::Employee;

/// Returns the employees matching `query`, in their original order.
///
/// A query that is empty after trimming returns the whole input unchanged.
/// Missing company, department or title fields count as empty strings; the
/// remaining fields are still checked.
///
/// # Examples
///
/// ```
/// use employee_directory::app::filter_employees;
/// use employee_directory::domain::{Company, Employee};
///
/// let employees = vec![
///     Employee::new(1, "Ada", "Lovelace", "ada@x.com")
///         .with_company(Company::new("Analytical", "Engineer", "R&D")),
///     Employee::new(2, "Grace", "Hopper", "grace@navy.mil"),
/// ];
///
/// assert_eq!(filter_employees(&employees, "  ENGINEER ").len(), 1);
/// assert_eq!(filter_employees(&employees, "").len(), 2);
/// assert!(filter_employees(&employees, "zzz").is_empty());
/// ```
#[must_use]
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }

    let filtered: Vec<Employee> = employees
        .iter()
        .filter(|employee| matches_query(employee, &needle))
        .cloned()
        .collect();

    tracing::trace!(
        total = employees.len(),
        filtered = filtered.len(),
        query_len = needle.len(),
        "employee filter applied"
    );

    filtered
}

/// Tests one employee against an already trimmed and lower-cased needle.
#[must_use]
pub fn matches_query(employee: &Employee, needle: &str) -> bool {
    let full_name = employee.full_name().to_lowercase();
    let department = employee.department().unwrap_or_default().to_lowercase();
    let title = employee.title().unwrap_or_default().to_lowercase();
    let email = employee.email.to_lowercase();

    [full_name, department, title, email]
        .iter()
        .any(|field| field.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Company;
    use rstest::{fixture, rstest};

    #[fixture]
    fn staff() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ada", "Lovelace", "ada@x.com")
                .with_company(Company::new("Analytical", "Engineer", "R&D")),
            Employee::new(2, "Grace", "Hopper", "grace@navy.mil").with_company(Company {
                name: "Navy".to_string(),
                title: None,
                department: Some("Research".to_string()),
            }),
            Employee::new(3, "Alan", "Turing", "alan@bletchley.uk"),
            Employee::new(4, "Katherine", "Johnson", "kj@nasa.gov")
                .with_company(Company::new("NASA", "Research Mathematician", "Flight")),
        ]
    }

    fn ids(employees: &[Employee]) -> Vec<u64> {
        employees.iter().map(|e| e.id).collect()
    }

    #[rstest]
    fn blank_query_is_identity(staff: Vec<Employee>) {
        assert_eq!(filter_employees(&staff, ""), staff);
        assert_eq!(filter_employees(&staff, "   \t "), staff);
    }

    #[rstest]
    #[case::title("engineer", vec![1])]
    #[case::department_and_title("research", vec![2, 4])]
    #[case::full_name_across_space("ada lovelace", vec![1])]
    #[case::email("nasa.gov", vec![4])]
    #[case::partial_name("an", vec![3, 4])]
    #[case::no_match("zzz", vec![])]
    fn matches_any_field(staff: Vec<Employee>, #[case] query: &str, #[case] expected: Vec<u64>) {
        assert_eq!(ids(&filter_employees(&staff, query)), expected);
    }

    #[rstest]
    fn surrounding_whitespace_is_ignored(staff: Vec<Employee>) {
        for query in ["engineer", "RESEARCH", "an", "zzz", "@"] {
            assert_eq!(
                filter_employees(&staff, query),
                filter_employees(&staff, &format!("  {query}  ")),
                "padding changed the result for {query:?}"
            );
        }
    }

    #[rstest]
    fn result_is_an_ordered_subsequence(staff: Vec<Employee>) {
        for query in ["a", "r", "o", ".", "x"] {
            let result = filter_employees(&staff, query);
            let mut input = staff.iter();
            for kept in &result {
                assert!(
                    input.any(|candidate| candidate == kept),
                    "{query:?} produced an out-of-order or foreign element"
                );
            }
        }
    }

    #[test]
    fn missing_company_does_not_block_other_fields() {
        let employees = vec![Employee::new(9, "Linus", "Torvalds", "linus@kernel.org")];
        assert_eq!(filter_employees(&employees, "kernel").len(), 1);
        assert!(filter_employees(&employees, "engineer").is_empty());
    }
}
