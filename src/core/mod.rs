pub mod combiner;
pub mod export;
pub mod resolver;
pub mod weighting;

pub use crate::domain::model::{
    CombinedWeighting, ExportDocument, ExportRequest, FractionTable, Leerjaar, Mode,
    ResolvedFraction, WeightCode,
};
pub use crate::domain::ports::{ExportSource, FractionSource, Storage};
pub use crate::utils::error::Result;
pub use combiner::combine;
pub use resolver::resolve;
