//! Organisation roster compliance checks
//!
//! Rebuilds the management hierarchy from flat roster rows and reports two
//! kinds of policy violations:
//!
//! - managers paid outside the band derived from their direct reports'
//!   average salary
//! - employees with too many managers between them and the CEO
//!
//! # Example
//!
//! ```
//! use compliance_engine::{ComplianceEngine, Hierarchy, Policy};
//!
//! # fn example() -> anyhow::Result<()> {
//! let rows = vec![
//!     vec!["100", "CEO", "NO1", "90000", ""],
//!     vec!["200", "Manager1", "Manage", "60000", "100"],
//!     vec!["300", "Worker1", "Work", "45000", "200"],
//! ];
//! let policy = Policy::default();
//! let hierarchy = Hierarchy::from_rows(&rows, &policy)?;
//!
//! let lines = ComplianceEngine::new(policy).check_compliance(&hierarchy)?;
//! assert_eq!(lines, vec!["Salary Analysis:", "Reporting Line Analysis:"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod hierarchy;
pub mod policy;
pub mod roster;
pub mod rules;

pub use error::{ComplianceError, LoadError};
pub use hierarchy::{Hierarchy, HierarchyBuilder};
pub use policy::Policy;

use shared_types::ComplianceReport;

/// ComplianceEngine entry point
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    policy: Policy,
}

impl ComplianceEngine {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Run both checks over a built hierarchy
    pub fn check(&self, hierarchy: &Hierarchy) -> Result<ComplianceReport, ComplianceError> {
        let salary_findings = rules::salary_band::check_salary_bands(hierarchy, &self.policy)?;
        let reporting_line_findings =
            rules::reporting_depth::check_reporting_depth(hierarchy, &self.policy);

        tracing::info!(
            employees = hierarchy.len(),
            salary_violations = salary_findings.len(),
            reporting_line_violations = reporting_line_findings.len(),
            "Compliance check complete"
        );

        Ok(ComplianceReport {
            salary_findings,
            reporting_line_findings,
            checked_at: chrono::Utc::now().timestamp() as u64,
        })
    }

    /// Report lines: salary header, salary findings, reporting header, reporting findings
    pub fn check_compliance(&self, hierarchy: &Hierarchy) -> Result<Vec<String>, ComplianceError> {
        Ok(self.check(hierarchy)?.lines())
    }
}
