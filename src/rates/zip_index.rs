//! ZIP code to rate area index

use std::collections::{HashMap, HashSet};

use super::types::{RateArea, ZipAreaRow};

/// Index of the distinct rate areas observed for each ZIP code.
///
/// Built once from the reference table and read-only afterwards. Set
/// semantics collapse rows that repeat the same (state, rate area) pair for a
/// ZIP (e.g. several counties of one state sharing an area).
#[derive(Debug, Default)]
pub struct ZipRateAreaIndex {
    areas_by_zip: HashMap<String, HashSet<RateArea>>,
}

impl ZipRateAreaIndex {
    /// Build the index from reference rows. Never fails: every row
    /// contributes its (state, rate area) pair to the set for its ZIP.
    pub fn from_rows(rows: impl IntoIterator<Item = ZipAreaRow>) -> Self {
        let mut areas_by_zip: HashMap<String, HashSet<RateArea>> = HashMap::new();

        for row in rows {
            areas_by_zip
                .entry(row.zipcode)
                .or_default()
                .insert(RateArea::new(row.state, row.rate_area));
        }

        Self { areas_by_zip }
    }

    /// Rate areas observed for a ZIP, if the reference data mentioned it
    pub fn rate_areas(&self, zipcode: &str) -> Option<&HashSet<RateArea>> {
        self.areas_by_zip.get(zipcode)
    }

    /// Number of distinct ZIP codes indexed
    pub fn len(&self) -> usize {
        self.areas_by_zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas_by_zip.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(zipcode: &str, state: &str, rate_area: &str) -> ZipAreaRow {
        ZipAreaRow {
            zipcode: zipcode.to_string(),
            state: state.to_string(),
            rate_area: rate_area.to_string(),
        }
    }

    #[test]
    fn test_builds_one_area_per_zip() {
        let index = ZipRateAreaIndex::from_rows(vec![
            row("36749", "AL", "11"),
            row("36703", "AL", "11"),
        ]);

        assert_eq!(index.len(), 2);
        let areas = index.rate_areas("36749").unwrap();
        assert_eq!(areas.len(), 1);
        assert!(areas.contains(&RateArea::new("AL", "11")));
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        // Two counties of the same state sharing an area yield one entry
        let index = ZipRateAreaIndex::from_rows(vec![
            row("64148", "MO", "3"),
            row("64148", "MO", "3"),
        ]);

        assert_eq!(index.rate_areas("64148").unwrap().len(), 1);
    }

    #[test]
    fn test_zip_spanning_multiple_areas_keeps_all() {
        let index = ZipRateAreaIndex::from_rows(vec![
            row("46706", "IN", "3"),
            row("46706", "IN", "4"),
        ]);

        let areas = index.rate_areas("46706").unwrap();
        assert_eq!(areas.len(), 2);
        assert!(areas.contains(&RateArea::new("IN", "3")));
        assert!(areas.contains(&RateArea::new("IN", "4")));
    }

    #[test]
    fn test_unknown_zip_is_none() {
        let index = ZipRateAreaIndex::from_rows(vec![row("36749", "AL", "11")]);

        assert!(index.rate_areas("99999").is_none());
    }
}
