//! Parameter sweep definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};

/// One parameter's name plus its start/end/step sweep definition.
///
/// `step` is always stored positive; sweep direction is derived from
/// comparing `start` and `end`. A list of specs defines nesting depth and
/// filename token order: the first spec is the outermost loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, start: f64, end: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            step,
        }
    }

    /// Per-step delta with direction applied: `-step` when `start > end`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        if self.start > self.end {
            -self.step
        } else {
            self.step
        }
    }

    /// Preflight check of the start/end/step triple.
    ///
    /// Runs before any model mutation; no partial sweep is ever started on
    /// invalid input.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidSpec`] naming the first violated rule:
    /// empty name, `start == end`, `step <= 0`, or `step > |end - start|`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.rejected("a parameter name must be specified"));
        }
        if self.start == self.end {
            return Err(self.rejected("the start value must be different than the end value"));
        }
        if self.step <= 0.0 {
            return Err(self.rejected("the step value must be greater than zero"));
        }
        if self.step > (self.end - self.start).abs() {
            return Err(self.rejected("the step value must not exceed the value range"));
        }
        Ok(())
    }

    fn rejected(&self, reason: &str) -> SweepError {
        SweepError::InvalidSpec {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
