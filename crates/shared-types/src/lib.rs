pub mod types;

pub use types::{
    ComplianceReport, Employee, EmployeeId, Finding, FindingCategory, REPORTING_LINE_HEADER,
    SALARY_HEADER,
};
