use shared_types::EmployeeId;
use thiserror::Error;

/// Reasons a roster load is abandoned. No hierarchy survives any of them.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read roster {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Roster has {rows} rows, max records limit is {limit}")]
    RowLimitExceeded { rows: usize, limit: usize },

    #[error("Row {row}: missing {field} field")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: malformed employee id {value:?}")]
    MalformedId { row: usize, value: String },

    #[error("Row {row}: malformed salary {value:?}")]
    MalformedSalary { row: usize, value: String },

    #[error("Row {row}: malformed manager id {value:?}")]
    MalformedManagerId { row: usize, value: String },

    #[error("Row {row}: employee id {id} same as manager id")]
    SelfManagementViolation { row: usize, id: EmployeeId },
}

#[derive(Error, Debug, PartialEq)]
pub enum ComplianceError {
    #[error("Manager {manager_id} has direct reports but is not on the roster")]
    UnknownManager { manager_id: EmployeeId },
}
