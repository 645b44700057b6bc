//! The seam between the sweep engine and a modeling host.

use std::path::Path;

use parasweep_model::{HostError, OperationKind};

/// Operations the engine consumes from a modeling host.
///
/// The engine is the only mutator of the host for the duration of a sweep;
/// implementations may assume calls arrive strictly in order from a single
/// thread and must not be shared across overlapping sweeps.
pub trait ModelingHost {
    /// Name of the active document, used as the leading artifact name token.
    fn document_name(&self) -> String;

    /// Current textual expression of a named parameter, `None` when the
    /// parameter does not exist.
    fn parameter_expression(&self, name: &str) -> Option<String>;

    /// Set a parameter's expression slot. Setting only a numeric value is
    /// insufficient for real hosts, which react to expression changes only.
    fn set_parameter_expression(&mut self, name: &str, expression: &str)
    -> Result<(), HostError>;

    /// Recompute the model after an expression change.
    fn recompute(&mut self) -> Result<(), HostError>;

    /// Refresh any live viewport so the swept state is visible.
    fn refresh_viewport(&mut self);

    /// Cooperative yield point: let the host's UI thread process pending
    /// redraw and input events.
    fn process_events(&mut self);

    /// Names of the solid bodies in the root assembly, in host order.
    fn body_names(&self) -> Vec<String>;

    /// Export the whole document to `path`. Never called with
    /// [`OperationKind::LoopOnly`].
    fn export_document(&mut self, operation: OperationKind, path: &Path)
    -> Result<(), HostError>;

    /// Export a single solid body as STL to `path`.
    fn export_body(&mut self, body_name: &str, path: &Path) -> Result<(), HostError>;
}
