pub mod csv_source;
pub mod error;

pub use csv_source::read_parameter_specs;
pub use error::SourceError;
