//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::error::CheckError;
use crate::core::models::ConstraintSpec;
use crate::core::services::Outcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every constraint held
    pub passed: bool,
    /// Entry point used (`strict` or `legacy`)
    pub mode: String,
    /// When the check ran (RFC 3339)
    pub checked_at: String,
    /// Per-constraint results, in evaluation order
    pub constraints: Vec<ConstraintReport>,
}

/// Result for one constraint
#[derive(Debug, Serialize)]
pub struct ConstraintReport {
    /// Constraint name
    pub name: String,
    /// Whether it held
    pub passed: bool,
    /// Resources that passed every rule
    pub checked: Vec<String>,
    /// Missing targets that were skipped
    pub skipped: Vec<String>,
    /// Failure message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConstraintReport {
    /// Build a report entry from an evaluation result
    #[must_use]
    pub fn from_result(name: &str, result: &Result<Outcome, CheckError>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(name, outcome),
            Err(err) => Self::from_error(name, err),
        }
    }

    /// Build a report entry from a completed evaluation
    #[must_use]
    pub fn from_outcome(name: &str, outcome: &Outcome) -> Self {
        Self {
            name: name.to_string(),
            passed: outcome.passed(),
            checked: outcome.checked.clone(),
            skipped: outcome.skipped.iter().map(ToString::to_string).collect(),
            error: outcome.violation.as_ref().map(ToString::to_string),
        }
    }

    /// Build a report entry for a failed constraint
    #[must_use]
    pub fn from_error(name: &str, err: &CheckError) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            checked: Vec::new(),
            skipped: Vec::new(),
            error: Some(err.to_string()),
        }
    }
}

impl CheckReport {
    /// Create a report stamped with the current time
    #[must_use]
    pub fn new(mode: &str, constraints: Vec<ConstraintReport>) -> Self {
        Self {
            passed: constraints.iter().all(|c| c.passed),
            mode: mode.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            constraints,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.constraints.is_empty() {
            println!("No constraints declared.");
            return;
        }

        println!("Checking {} constraint(s) ({} mode)...\n", self.constraints.len(), self.mode);

        for c in &self.constraints {
            let status = if c.passed { "PASS".green().bold() } else { "FAIL".red().bold() };
            println!("  [{status}] {}", c.name);
            if !c.checked.is_empty() {
                println!("          checked: {}", c.checked.join(", "));
            }
            for skipped in &c.skipped {
                println!("          {} {skipped} (not in catalog)", "skipped:".yellow());
            }
            if let Some(error) = &c.error {
                println!("          {error}");
            }
        }

        let failed = self.constraints.iter().filter(|c| !c.passed).count();
        if failed == 0 {
            println!("\n{}", "All constraints hold.".green());
        } else {
            println!("\n{}", format!("FAILED: {failed} constraint(s) violated").red().bold());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of validating declarations without a catalog
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Number of declaration files read
    pub files: usize,
    /// Normalized specs
    pub constraints: Vec<SpecSummary>,
}

/// Normalized view of one spec
#[derive(Debug, Serialize)]
pub struct SpecSummary {
    /// Constraint name
    pub name: String,
    /// Target references
    pub targets: Vec<String>,
    /// Rule mode
    pub mode: String,
    /// Weak missing-target policy
    pub weak: bool,
    /// Rules, one line each
    pub rules: Vec<String>,
}

impl From<&ConstraintSpec> for SpecSummary {
    fn from(spec: &ConstraintSpec) -> Self {
        Self {
            name: spec.name().to_string(),
            targets: spec.targets().iter().map(ToString::to_string).collect(),
            mode: spec.mode().to_string(),
            weak: spec.is_weak(),
            rules: spec
                .rules()
                .rules()
                .iter()
                .map(|(property, restriction)| format!("{property} {restriction}"))
                .collect(),
        }
    }
}

impl ValidationReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.constraints.is_empty() {
            println!("No constraints declared.");
            return;
        }

        println!("{} constraint(s) in {} file(s):\n", self.constraints.len(), self.files);
        for s in &self.constraints {
            let weak = if s.weak { " (weak)" } else { "" };
            println!("  {}{weak}", s.name.bold());
            println!("    targets: {}", s.targets.join(", "));
            println!("    {}:", s.mode);
            for rule in &s.rules {
                println!("      {rule}");
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
