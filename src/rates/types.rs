//! Core type definitions for SLCSP resolution
//!
//! This module contains strongly-typed structures shared by the indexes and
//! the resolver, replacing ad-hoc tuple keys in public APIs.

use rust_decimal::Decimal;

/// A geographic pricing region used by the insurance rate tables.
///
/// Identified by a state code and a numeric area code, finer-grained than a
/// state and coarser than a ZIP in general (a ZIP may span multiple rate
/// areas). Used as a composite key; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateArea {
    pub state: String,
    pub number: String,
}

impl RateArea {
    pub fn new(state: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            number: number.into(),
        }
    }
}

/// One row of the ZIP-to-rate-area reference table (fields actually consumed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipAreaRow {
    pub zipcode: String,
    pub state: String,
    pub rate_area: String,
}

/// One row of the plan rate table (fields actually consumed).
///
/// The rate stays a raw string here; parsing to a decimal happens during
/// index construction so that unparseable rates surface as a build error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub state: String,
    pub metal_level: String,
    pub rate: String,
    pub rate_area: String,
}

/// Resolution outcome for a single query ZIP, in input order.
///
/// An absent rate means the SLCSP is undefined for the ZIP (unknown ZIP,
/// ambiguous rate area, no silver plans, or fewer than two distinct rates),
/// never a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlcspResult {
    pub zipcode: String,
    pub rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_area_structural_equality() {
        assert_eq!(RateArea::new("AL", "11"), RateArea::new("AL", "11"));
        assert_ne!(RateArea::new("AL", "11"), RateArea::new("AL", "12"));
        assert_ne!(RateArea::new("AL", "11"), RateArea::new("GA", "11"));
    }
}
