//! Parametric sweep engine.
//!
//! Drives one or more named numeric parameters of a model across ranges,
//! asking a [`ModelingHost`] to recompute geometry at each combination and
//! optionally exporting an artifact per combination under a deterministic,
//! collision-resistant filename.
//!
//! The engine is single-threaded and cooperative: the recursion is
//! synchronous, the host is the single shared mutable resource, and sweeps
//! must not overlap on the same model.

pub mod binder;
pub mod export;
pub mod filename;
pub mod host;
pub mod memory;
pub mod range;
pub mod snapshot;
pub mod sweep;

pub use export::ExportRequest;
pub use host::ModelingHost;
pub use memory::MemoryDesign;
pub use range::ValueRange;
pub use snapshot::OriginalValueSnapshot;
pub use sweep::{SweepOutcome, run_sweep};
