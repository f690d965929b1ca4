// Manager pay band validation against direct reports' average salary
use crate::error::ComplianceError;
use crate::hierarchy::Hierarchy;
use crate::policy::Policy;
use shared_types::{Employee, Finding, FindingCategory};

/// Mean salary of a set of direct reports (0.0 when there are none)
pub fn average_salary(reports: &[Employee]) -> f64 {
    if reports.is_empty() {
        return 0.0;
    }
    reports.iter().map(|e| e.salary).sum::<f64>() / reports.len() as f64
}

/// Flags managers paid outside `[avg * min_factor, avg * max_factor]`
///
/// Managers are visited in the order they first appear as someone's manager.
/// A manager id with direct reports but no roster entry is an error.
pub fn check_salary_bands(
    hierarchy: &Hierarchy,
    policy: &Policy,
) -> Result<Vec<Finding>, ComplianceError> {
    let mut findings = Vec::new();

    for (manager_id, reports) in hierarchy.managers() {
        let manager = hierarchy
            .get(manager_id)
            .ok_or(ComplianceError::UnknownManager { manager_id })?;

        let average = average_salary(reports);
        let min_salary = average * policy.min_salary_factor;
        let max_salary = average * policy.max_salary_factor;

        if manager.salary < min_salary {
            findings.push(Finding {
                category: FindingCategory::SalaryBelowBand,
                employee_id: manager.id,
                message: format!(
                    "Manager {} {} (ID: {}) earns less than minimum ({:.2} < {:.2}) by {:.2}",
                    manager.first_name,
                    manager.last_name,
                    manager.id,
                    manager.salary,
                    min_salary,
                    min_salary - manager.salary
                ),
            });
        } else if manager.salary > max_salary {
            findings.push(Finding {
                category: FindingCategory::SalaryAboveBand,
                employee_id: manager.id,
                message: format!(
                    "Manager {} {} (ID: {}) earns more than maximum ({:.2} > {:.2}) by {:.2}",
                    manager.first_name,
                    manager.last_name,
                    manager.id,
                    manager.salary,
                    max_salary,
                    manager.salary - max_salary
                ),
            });
        }
    }

    Ok(findings)
}
