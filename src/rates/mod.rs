//! Rate-area indexing and SLCSP resolution.
//!
//! Two read-only indexes are built from the reference CSVs (ZIP → rate areas,
//! rate area → distinct silver rates), then each query ZIP is resolved against
//! them in input order. Absence of an answer is a normal outcome; only
//! malformed source data is an error.

pub mod resolver;
pub mod silver_index;
pub mod source;
pub mod types;
pub mod zip_index;

pub use resolver::resolve_all;
pub use silver_index::{RateTableError, SilverRateIndex};
pub use types::{PlanRow, RateArea, SlcspResult, ZipAreaRow};
pub use zip_index::ZipRateAreaIndex;
