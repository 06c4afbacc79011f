pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::ExportClient, storage::LocalStorage};
pub use config::TomlConfig;
pub use crate::core::{
    combine, export::ExportService, resolve, weighting::WeightingEngine, CombinedWeighting,
    FractionTable, Leerjaar, Mode, ResolvedFraction, WeightCode,
};
pub use utils::error::{PtaError, Result};
