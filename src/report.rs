//! Verification report types and rendering.
//!
//! A run produces one ordered [`VerificationReport`]; each outcome carries
//! enough identity (component, field, expected, actual) to trace a failure
//! back to exactly one expected relationship.

use serde::{Deserialize, Serialize};

/// Result of a single expected-vs-actual check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// The live value matched the expectation
    Pass,
    /// The live value did not match; both sides are recorded
    Fail { expected: String, actual: String },
}

/// One check's outcome, identified by component and field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub component: String,
    pub field: String,
    pub status: CheckStatus,
}

impl CheckOutcome {
    pub fn pass(component: &str, field: &str) -> Self {
        Self {
            component: component.to_string(),
            field: field.to_string(),
            status: CheckStatus::Pass,
        }
    }

    pub fn fail(component: &str, field: &str, expected: &str, actual: &str) -> Self {
        Self {
            component: component.to_string(),
            field: field.to_string(),
            status: CheckStatus::Fail {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// The complete ordered set of outcomes from one verification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VerificationReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl VerificationReport {
    /// Record one outcome, preserving declaration order
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// True if every check passed
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_pass)
    }

    /// All failed outcomes, in report order
    pub fn failures(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.is_pass()).collect()
    }

    /// Render a human-readable summary, one line per verified component
    /// with failure annotations underneath.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current_component: Option<&str> = None;

        for outcome in &self.outcomes {
            if current_component != Some(outcome.component.as_str()) {
                lines.push(format!("Verifying {}...", outcome.component));
                current_component = Some(outcome.component.as_str());
            }
            if let CheckStatus::Fail { expected, actual } = &outcome.status {
                lines.push(format!(
                    "  FAIL {}.{}: expected {}, got {}",
                    outcome.component, outcome.field, expected, actual
                ));
            }
        }

        let failures = self.failures().len();
        if failures == 0 {
            lines.push(format!("All {} check(s) passed", self.outcomes.len()));
        } else {
            lines.push(format!(
                "{} of {} check(s) failed",
                failures,
                self.outcomes.len()
            ));
        }

        lines.join("\n")
    }
}
