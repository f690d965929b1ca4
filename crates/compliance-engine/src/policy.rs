//! Compliance policy thresholds
//!
//! The defaults reproduce the HR policy the scanner was written for. A TOML
//! file can override any subset of them:
//!
//! ```toml
//! max_rows = 5000
//! min_salary_factor = 1.10
//! max_salary_factor = 1.60
//! max_reporting_depth = 5
//! ```

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest roster accepted in one load
pub const MAX_ALLOWED_ROWS: usize = 1000;
/// A manager must earn at least this multiple of the direct reports' average
pub const MIN_SALARY_FACTOR: f64 = 1.20;
/// A manager must earn at most this multiple of the direct reports' average
pub const MAX_SALARY_FACTOR: f64 = 1.50;
/// Most managers allowed between an employee and the CEO
pub const MAX_REPORTING_LINE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    #[serde(default = "default_min_salary_factor")]
    pub min_salary_factor: f64,
    #[serde(default = "default_max_salary_factor")]
    pub max_salary_factor: f64,
    #[serde(default = "default_max_reporting_depth")]
    pub max_reporting_depth: usize,
}

fn default_max_rows() -> usize {
    MAX_ALLOWED_ROWS
}

fn default_min_salary_factor() -> f64 {
    MIN_SALARY_FACTOR
}

fn default_max_salary_factor() -> f64 {
    MAX_SALARY_FACTOR
}

fn default_max_reporting_depth() -> usize {
    MAX_REPORTING_LINE
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_rows: MAX_ALLOWED_ROWS,
            min_salary_factor: MIN_SALARY_FACTOR,
            max_salary_factor: MAX_SALARY_FACTOR,
            max_reporting_depth: MAX_REPORTING_LINE,
        }
    }
}

impl Policy {
    /// Load a policy from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// the resulting thresholds fail [`Policy::validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid policy file: {}", path.display()))
    }

    /// Parse a policy from a TOML string. Missing keys keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let policy: Policy = toml::from_str(s).context("Failed to parse TOML policy")?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_rows == 0 {
            bail!("max_rows must be at least 1");
        }
        for (name, factor) in [
            ("min_salary_factor", self.min_salary_factor),
            ("max_salary_factor", self.max_salary_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                bail!("{} must be a positive number (got {})", name, factor);
            }
        }
        if self.min_salary_factor > self.max_salary_factor {
            bail!(
                "min_salary_factor ({}) exceeds max_salary_factor ({})",
                self.min_salary_factor,
                self.max_salary_factor
            );
        }
        Ok(())
    }
}
