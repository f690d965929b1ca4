//! Management hierarchy reconstruction
//!
//! Turns flat roster rows into a [`Hierarchy`]: a registry of employees keyed
//! by id plus an index from each manager id to its direct reports. A build
//! either returns a complete hierarchy or an error; nothing partial escapes.

use crate::error::LoadError;
use crate::policy::Policy;
use shared_types::{Employee, EmployeeId};
use std::collections::HashMap;

const ID_FIELD: usize = 0;
const FIRST_NAME_FIELD: usize = 1;
const LAST_NAME_FIELD: usize = 2;
const SALARY_FIELD: usize = 3;
const MANAGER_FIELD: usize = 4;

/// Immutable employee registry and subordinate index from one roster load
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    employees: HashMap<EmployeeId, Employee>,
    /// Registry order: first-seen order of each id
    order: Vec<EmployeeId>,
    subordinates: HashMap<EmployeeId, Vec<Employee>>,
    /// First-seen order of each manager id
    manager_order: Vec<EmployeeId>,
}

impl Hierarchy {
    /// Build a hierarchy from raw rows under the given policy's row limit
    pub fn from_rows<R, S>(rows: &[R], policy: &Policy) -> Result<Self, LoadError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        HierarchyBuilder::new(policy.max_rows).build(rows)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    /// Employees in registry order
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.order.iter().filter_map(|id| self.employees.get(id))
    }

    /// Manager ids with their direct reports, in first-seen order of the manager
    ///
    /// A manager whose only reports were replaced by later duplicate rows has
    /// an empty list and is skipped.
    pub fn managers(&self) -> impl Iterator<Item = (EmployeeId, &[Employee])> {
        self.manager_order.iter().filter_map(|id| {
            self.subordinates
                .get(id)
                .filter(|reports| !reports.is_empty())
                .map(|reports| (*id, reports.as_slice()))
        })
    }

    pub fn direct_reports(&self, manager_id: EmployeeId) -> &[Employee] {
        self.subordinates
            .get(&manager_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Employees without a manager
    pub fn roots(&self) -> impl Iterator<Item = &Employee> {
        self.employees().filter(|e| e.is_root())
    }

    fn insert(&mut self, employee: Employee, row: usize) {
        let id = employee.id;

        match self.employees.insert(id, employee.clone()) {
            Some(previous) => {
                tracing::warn!(
                    row,
                    id,
                    "Duplicate employee id; later row replaces the earlier record"
                );
                if let Some(old_manager) = previous.manager_id {
                    self.detach(old_manager, id);
                }
            }
            None => self.order.push(id),
        }

        if let Some(manager_id) = employee.manager_id {
            // emptied lists stay in the index so a manager keeps its first-seen slot
            if !self.subordinates.contains_key(&manager_id) {
                self.manager_order.push(manager_id);
            }
            self.subordinates
                .entry(manager_id)
                .or_default()
                .push(employee);
        }
    }

    /// Remove a replaced record from its old manager's report list
    fn detach(&mut self, manager_id: EmployeeId, id: EmployeeId) {
        if let Some(reports) = self.subordinates.get_mut(&manager_id) {
            reports.retain(|e| e.id != id);
        }
    }
}

/// Validates roster rows and assembles a [`Hierarchy`]
#[derive(Debug, Clone, Copy)]
pub struct HierarchyBuilder {
    max_rows: usize,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new(crate::policy::MAX_ALLOWED_ROWS)
    }
}

impl HierarchyBuilder {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Build a hierarchy from `[id, first_name, last_name, salary, manager_id?]` rows
    ///
    /// # Errors
    ///
    /// - [`LoadError::RowLimitExceeded`] when there are more rows than allowed,
    ///   checked before any row is parsed
    /// - [`LoadError::MissingField`] for rows with fewer than four fields
    /// - [`LoadError::MalformedId`], [`LoadError::MalformedSalary`] or
    ///   [`LoadError::MalformedManagerId`] for unparseable numbers
    /// - [`LoadError::SelfManagementViolation`] when a row manages itself
    pub fn build<R, S>(&self, rows: &[R]) -> Result<Hierarchy, LoadError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() > self.max_rows {
            return Err(LoadError::RowLimitExceeded {
                rows: rows.len(),
                limit: self.max_rows,
            });
        }

        let mut hierarchy = Hierarchy::default();

        for (index, fields) in rows.iter().enumerate() {
            let row = index + 1;
            let employee = parse_row(row, fields.as_ref())?;

            if employee.manager_id == Some(employee.id) {
                return Err(LoadError::SelfManagementViolation {
                    row,
                    id: employee.id,
                });
            }

            hierarchy.insert(employee, row);
        }

        tracing::info!(
            rows = rows.len(),
            employees = hierarchy.len(),
            managers = hierarchy.managers().count(),
            "Hierarchy built"
        );

        Ok(hierarchy)
    }
}

fn field<'a, S: AsRef<str>>(
    fields: &'a [S],
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<&'a str, LoadError> {
    fields
        .get(index)
        .map(|s| s.as_ref())
        .ok_or(LoadError::MissingField { row, field: name })
}

fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<Employee, LoadError> {
    let raw_id = field(fields, row, ID_FIELD, "id")?;
    let id: EmployeeId = raw_id.parse().map_err(|_| LoadError::MalformedId {
        row,
        value: raw_id.to_string(),
    })?;

    let first_name = field(fields, row, FIRST_NAME_FIELD, "first name")?.to_string();
    let last_name = field(fields, row, LAST_NAME_FIELD, "last name")?.to_string();

    let raw_salary = field(fields, row, SALARY_FIELD, "salary")?;
    let salary = raw_salary
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| LoadError::MalformedSalary {
            row,
            value: raw_salary.to_string(),
        })?;

    let manager_id: Option<EmployeeId> = match fields.get(MANAGER_FIELD).map(|s| s.as_ref()) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse().map_err(|_| LoadError::MalformedManagerId {
            row,
            value: raw.to_string(),
        })?),
    };

    Ok(Employee {
        id,
        first_name,
        last_name,
        salary,
        manager_id,
    })
}
