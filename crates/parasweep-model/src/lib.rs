pub mod error;
pub mod operation;
pub mod options;
pub mod spec;
pub mod trail;

pub use error::{HostError, Result, SweepError};
pub use operation::OperationKind;
pub use options::SweepOptions;
pub use spec::ParameterSpec;
pub use trail::ValueTrail;
