//! Output rendering for resolved SLCSP results

use std::io::{self, Write};

use crate::rates::SlcspResult;

/// Header line preceding all result lines
pub const OUTPUT_HEADER: &str = "zipcode,rate";

/// Write the report: the `zipcode,rate` header, then one line per result in
/// input order. A present rate renders with exactly two decimal places; an
/// absent rate renders as an empty string. This is the only place an absent
/// rate becomes "" — the resolver itself never sees sentinels.
pub fn write_results(mut out: impl Write, results: &[SlcspResult]) -> io::Result<()> {
    writeln!(out, "{}", OUTPUT_HEADER)?;

    for result in results {
        match result.rate {
            Some(rate) => writeln!(out, "{},{:.2}", result.zipcode, rate)?,
            None => writeln!(out, "{},", result.zipcode)?,
        }
    }

    Ok(())
}
