/// Employee ids are plain integers taken straight from the roster
pub type EmployeeId = i64;

/// Header line that opens the salary section of a report
pub const SALARY_HEADER: &str = "Salary Analysis:";

/// Header line that opens the reporting line section of a report
pub const REPORTING_LINE_HEADER: &str = "Reporting Line Analysis:";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub manager_id: Option<EmployeeId>, // None for the CEO
}

impl Employee {
    /// An employee with no manager sits at the top of a reporting chain
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    SalaryBelowBand,
    SalaryAboveBand,
    ReportingLineTooLong,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub employee_id: EmployeeId,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComplianceReport {
    pub salary_findings: Vec<Finding>,
    pub reporting_line_findings: Vec<Finding>,
    pub checked_at: u64,
}

impl ComplianceReport {
    /// Flatten the report into printable lines, each section led by its header
    pub fn lines(&self) -> Vec<String> {
        let mut lines =
            Vec::with_capacity(2 + self.salary_findings.len() + self.reporting_line_findings.len());

        lines.push(SALARY_HEADER.to_string());
        lines.extend(self.salary_findings.iter().map(|f| f.message.clone()));

        lines.push(REPORTING_LINE_HEADER.to_string());
        lines.extend(self.reporting_line_findings.iter().map(|f| f.message.clone()));

        lines
    }

    pub fn violation_count(&self) -> usize {
        self.salary_findings.len() + self.reporting_line_findings.len()
    }

    pub fn is_compliant(&self) -> bool {
        self.violation_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finding(category: FindingCategory, id: EmployeeId, message: &str) -> Finding {
        Finding {
            category,
            employee_id: id,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_report_has_both_headers() {
        let report = ComplianceReport {
            salary_findings: vec![],
            reporting_line_findings: vec![],
            checked_at: 0,
        };

        assert_eq!(report.lines(), vec![SALARY_HEADER, REPORTING_LINE_HEADER]);
        assert!(report.is_compliant());
    }

    #[test]
    fn test_findings_follow_their_section_header() {
        let report = ComplianceReport {
            salary_findings: vec![finding(FindingCategory::SalaryBelowBand, 2, "low")],
            reporting_line_findings: vec![
                finding(FindingCategory::ReportingLineTooLong, 7, "deep"),
                finding(FindingCategory::ReportingLineTooLong, 8, "deeper"),
            ],
            checked_at: 0,
        };

        assert_eq!(
            report.lines(),
            vec![SALARY_HEADER, "low", REPORTING_LINE_HEADER, "deep", "deeper"]
        );
        assert_eq!(report.violation_count(), 3);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&FindingCategory::ReportingLineTooLong).unwrap();
        assert_eq!(json, "\"reporting_line_too_long\"");
    }

    #[test]
    fn test_root_has_no_manager() {
        let ceo = Employee {
            id: 100,
            first_name: "CEO".to_string(),
            last_name: "NO1".to_string(),
            salary: 90000.0,
            manager_id: None,
        };
        assert!(ceo.is_root());
    }
}
