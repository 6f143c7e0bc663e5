//! SLCSP resolution over the two read-only indexes

use rust_decimal::Decimal;

use super::silver_index::SilverRateIndex;
use super::types::SlcspResult;
use super::zip_index::ZipRateAreaIndex;

/// Resolve each query ZIP against the indexes, preserving input order and
/// multiplicity. A ZIP appearing twice is resolved twice, with the same
/// outcome both times since the indexes are immutable.
pub fn resolve_all(
    zip_index: &ZipRateAreaIndex,
    silver_index: &SilverRateIndex,
    queries: impl IntoIterator<Item = String>,
) -> Vec<SlcspResult> {
    queries
        .into_iter()
        .map(|zipcode| {
            let rate = resolve_one(zip_index, silver_index, &zipcode);
            SlcspResult { zipcode, rate }
        })
        .collect()
}

/// Second-lowest distinct silver rate for one ZIP, when defined.
///
/// The SLCSP is defined only for a ZIP mapping to exactly one rate area
/// (a deliberate domain rule). Absent when the ZIP is unknown, spans more
/// than one rate area, has no silver plans in its area, or the area offers
/// fewer than two distinct rates.
fn resolve_one(
    zip_index: &ZipRateAreaIndex,
    silver_index: &SilverRateIndex,
    zipcode: &str,
) -> Option<Decimal> {
    let areas = zip_index.rate_areas(zipcode)?;
    if areas.len() != 1 {
        return None;
    }
    let area = areas.iter().next()?;

    let rates = silver_index.rates(area)?;

    // Second distinct value in ascending order, not the second row seen
    rates.iter().nth(1).copied()
}
