//! The closed set of operations a sweep can perform at each leaf.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do at each parameter combination.
///
/// `LoopOnly` drives geometry recomputation without producing artifacts,
/// which is useful for validation sweeps. Every other kind exports one
/// artifact per combination (STL optionally fans out per body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationKind {
    #[default]
    LoopOnly,
    ExportFusionArchive,
    ExportIges,
    ExportSat,
    ExportSmt,
    ExportStep,
    ExportStl,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::LoopOnly,
        OperationKind::ExportFusionArchive,
        OperationKind::ExportIges,
        OperationKind::ExportSat,
        OperationKind::ExportSmt,
        OperationKind::ExportStep,
        OperationKind::ExportStl,
    ];

    /// File extension for the artifact this operation produces, without the
    /// leading dot. `None` for `LoopOnly`.
    #[must_use]
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OperationKind::LoopOnly => None,
            OperationKind::ExportFusionArchive => Some("f3d"),
            OperationKind::ExportIges => Some("igs"),
            OperationKind::ExportSat => Some("sat"),
            OperationKind::ExportSmt => Some("smt"),
            OperationKind::ExportStep => Some("step"),
            OperationKind::ExportStl => Some("stl"),
        }
    }

    /// Whether this operation writes artifacts to disk.
    #[must_use]
    pub fn is_export(self) -> bool {
        !matches!(self, OperationKind::LoopOnly)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::LoopOnly => "LoopOnly",
            OperationKind::ExportFusionArchive => "ExportFusionArchive",
            OperationKind::ExportIges => "ExportIGES",
            OperationKind::ExportSat => "ExportSAT",
            OperationKind::ExportSmt => "ExportSMT",
            OperationKind::ExportStep => "ExportSTEP",
            OperationKind::ExportStl => "ExportSTL",
        };
        f.write_str(name)
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "LoopOnly" => Ok(OperationKind::LoopOnly),
            "ExportFusionArchive" => Ok(OperationKind::ExportFusionArchive),
            "ExportIGES" => Ok(OperationKind::ExportIges),
            "ExportSAT" => Ok(OperationKind::ExportSat),
            "ExportSMT" => Ok(OperationKind::ExportSmt),
            "ExportSTEP" => Ok(OperationKind::ExportStep),
            "ExportSTL" => Ok(OperationKind::ExportStl),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}
