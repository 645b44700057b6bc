//! An in-memory modeling host.
//!
//! Stands in for a real CAD integration: parameters are a plain expression
//! map and "exports" write a small text artifact recording the format and
//! the bound expressions. Useful for dry runs, the CLI, and tests. Real
//! hosts implement [`ModelingHost`] against their own API.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use parasweep_model::{HostError, OperationKind};

use crate::host::ModelingHost;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryDesign {
    pub document_name: String,
    /// Parameter name -> expression text.
    pub parameters: BTreeMap<String, String>,
    /// Solid body names of the root assembly.
    #[serde(default)]
    pub bodies: Vec<String>,
    #[serde(skip)]
    recomputes: u64,
    #[serde(skip)]
    viewport_refreshes: u64,
    #[serde(skip)]
    events_processed: u64,
}

impl MemoryDesign {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            parameters: BTreeMap::new(),
            bodies: Vec::new(),
            recomputes: 0,
            viewport_refreshes: 0,
            events_processed: 0,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), expression.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, name: impl Into<String>) -> Self {
        self.bodies.push(name.into());
        self
    }

    /// Recomputes forced since construction (one per bound value).
    #[must_use]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    #[must_use]
    pub fn viewport_refreshes(&self) -> u64 {
        self.viewport_refreshes
    }

    #[must_use]
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    fn artifact_body(&self, kind: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "format: {kind}");
        let _ = writeln!(out, "document: {}", self.document_name);
        for (name, expression) in &self.parameters {
            let _ = writeln!(out, "{name} = {expression}");
        }
        out
    }
}

impl ModelingHost for MemoryDesign {
    fn document_name(&self) -> String {
        self.document_name.clone()
    }

    fn parameter_expression(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }

    fn set_parameter_expression(
        &mut self,
        name: &str,
        expression: &str,
    ) -> Result<(), HostError> {
        if expression.trim().is_empty() {
            return Err(HostError::InvalidExpression {
                name: name.to_string(),
                expression: expression.to_string(),
            });
        }
        match self.parameters.get_mut(name) {
            Some(slot) => {
                *slot = expression.to_string();
                Ok(())
            }
            None => Err(HostError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }

    fn recompute(&mut self) -> Result<(), HostError> {
        self.recomputes += 1;
        Ok(())
    }

    fn refresh_viewport(&mut self) {
        self.viewport_refreshes += 1;
    }

    fn process_events(&mut self) {
        self.events_processed += 1;
    }

    fn body_names(&self) -> Vec<String> {
        self.bodies.clone()
    }

    fn export_document(
        &mut self,
        operation: OperationKind,
        path: &Path,
    ) -> Result<(), HostError> {
        std::fs::write(path, self.artifact_body(&operation.to_string()))?;
        Ok(())
    }

    fn export_body(&mut self, body_name: &str, path: &Path) -> Result<(), HostError> {
        if !self.bodies.iter().any(|body| body == body_name) {
            return Err(HostError::Export {
                message: format!("no body named '{body_name}'"),
            });
        }
        std::fs::write(path, self.artifact_body(&format!("ExportSTL body {body_name}")))?;
        Ok(())
    }
}
