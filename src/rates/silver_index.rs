//! Rate area to silver plan rate index

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{PlanRow, RateArea};

#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("unparseable rate '{value}' for silver plan in rate area {state} {rate_area}")]
    InvalidRate {
        value: String,
        state: String,
        rate_area: String,
    },
}

/// Index of the distinct silver-plan rates offered in each rate area.
///
/// Only rows whose metal level is "silver" (case-insensitive) contribute.
/// Rates are stored as exact decimals in an ordered set, so duplicate rates
/// collapse and iteration yields ascending numeric order: multiple plans
/// priced identically count as one candidate when ranking the second-lowest
/// distinct rate, and "198.0" equals "198.00".
#[derive(Debug, Default)]
pub struct SilverRateIndex {
    rates_by_area: HashMap<RateArea, BTreeSet<Decimal>>,
}

impl SilverRateIndex {
    /// Build the index from plan rows.
    ///
    /// Non-silver rows are skipped entirely (not stored, not counted). A
    /// silver row whose rate does not parse as a decimal aborts the build;
    /// malformed numeric data must stay distinguishable from "no silver
    /// plans in area".
    pub fn from_rows(rows: impl IntoIterator<Item = PlanRow>) -> Result<Self, RateTableError> {
        let mut rates_by_area: HashMap<RateArea, BTreeSet<Decimal>> = HashMap::new();

        for row in rows {
            if !row.metal_level.eq_ignore_ascii_case("silver") {
                continue;
            }

            let rate = match Decimal::from_str(row.rate.trim()) {
                Ok(rate) => rate,
                Err(_) => {
                    return Err(RateTableError::InvalidRate {
                        value: row.rate,
                        state: row.state,
                        rate_area: row.rate_area,
                    })
                }
            };

            rates_by_area
                .entry(RateArea::new(row.state, row.rate_area))
                .or_default()
                .insert(rate);
        }

        Ok(Self { rates_by_area })
    }

    /// Distinct silver rates for a rate area, ascending, if any silver plan
    /// was observed there
    pub fn rates(&self, area: &RateArea) -> Option<&BTreeSet<Decimal>> {
        self.rates_by_area.get(area)
    }

    /// Number of rate areas with at least one silver plan
    pub fn len(&self) -> usize {
        self.rates_by_area.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates_by_area.is_empty()
    }
}
