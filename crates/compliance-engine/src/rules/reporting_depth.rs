// Reporting line length validation
use crate::hierarchy::Hierarchy;
use crate::policy::Policy;
use shared_types::{EmployeeId, Finding, FindingCategory};
use std::collections::HashSet;

/// Counts manager links followed from `employee_id` up to the top of its chain
///
/// The walk stops at an employee with no manager, at a manager id missing
/// from the roster (that last hop still counts), or at an id already visited
/// on this walk. The visited set bounds every walk to the roster size even
/// when the input contains a reporting cycle.
pub fn count_managers_to_root(hierarchy: &Hierarchy, employee_id: EmployeeId) -> usize {
    let mut visited = HashSet::new();
    let mut current = employee_id;
    let mut count = 0;

    while let Some(employee) = hierarchy.get(current) {
        if !visited.insert(current) {
            tracing::debug!(
                employee_id,
                cycle_at = current,
                "Reporting cycle detected; stopping walk"
            );
            break;
        }

        match employee.manager_id {
            Some(manager_id) => {
                count += 1;
                current = manager_id;
            }
            None => break,
        }
    }

    count
}

/// Flags employees with more than `max_reporting_depth` managers above them
pub fn check_reporting_depth(hierarchy: &Hierarchy, policy: &Policy) -> Vec<Finding> {
    let limit = policy.max_reporting_depth;

    hierarchy
        .employees()
        .filter_map(|employee| {
            let count = count_managers_to_root(hierarchy, employee.id);
            if count <= limit {
                return None;
            }
            Some(Finding {
                category: FindingCategory::ReportingLineTooLong,
                employee_id: employee.id,
                message: format!(
                    "Employee {} {} (ID: {}) has {} managers to CEO, exceeding limit by {}",
                    employee.first_name,
                    employee.last_name,
                    employee.id,
                    count,
                    count - limit
                ),
            })
        })
        .collect()
}
