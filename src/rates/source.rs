//! CSV readers for the three reference datasets.
//!
//! Fields are read by position per the published column contracts; the first
//! row of each file is a column-name header and is skipped. Extra columns are
//! tolerated, rows shorter than the contract are an input-format error.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};

use super::types::{PlanRow, ZipAreaRow};

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

fn field<'r>(record: &'r StringRecord, index: usize, path: &Path) -> Result<&'r str> {
    record.get(index).ok_or_else(|| {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        anyhow!(
            "{}:{}: expected at least {} columns, found {}",
            path.display(),
            line,
            index + 1,
            record.len()
        )
    })
}

/// Read the ZIP-to-rate-area reference table.
///
/// Expected columns: zipcode, state, county_code, name, rate_area.
/// Only fields 0, 1 and 4 are consumed.
pub fn load_zip_rows(path: impl AsRef<Path>) -> Result<Vec<ZipAreaRow>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        rows.push(ZipAreaRow {
            zipcode: field(&record, 0, path)?.to_string(),
            state: field(&record, 1, path)?.to_string(),
            rate_area: field(&record, 4, path)?.to_string(),
        });
    }

    Ok(rows)
}

/// Read the plan rate table.
///
/// Expected columns: plan_id, state, metal_level, rate, rate_area.
/// Only fields 1 through 4 are consumed.
pub fn load_plan_rows(path: impl AsRef<Path>) -> Result<Vec<PlanRow>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        rows.push(PlanRow {
            state: field(&record, 1, path)?.to_string(),
            metal_level: field(&record, 2, path)?.to_string(),
            rate: field(&record, 3, path)?.to_string(),
            rate_area: field(&record, 4, path)?.to_string(),
        });
    }

    Ok(rows)
}

/// Read the query ZIP list: field 0 of each data row, order and duplicates
/// preserved exactly as they appear in the file.
pub fn load_query_zips(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let mut zips = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        zips.push(field(&record, 0, path)?.to_string());
    }

    Ok(zips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_zip_rows_skips_header_and_reads_by_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "zips.csv",
            "zipcode,state,county_code,name,rate_area\n\
             36749,AL,01001,Autauga,11\n\
             64148,MO,29095,Jackson,3\n",
        );

        let rows = load_zip_rows(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].zipcode, "36749");
        assert_eq!(rows[0].state, "AL");
        assert_eq!(rows[0].rate_area, "11");
        assert_eq!(rows[1].zipcode, "64148");
    }

    #[test]
    fn test_load_zip_rows_tolerates_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "zips.csv",
            "zipcode,state,county_code,name,rate_area,extra\n\
             36749,AL,01001,Autauga,11,ignored\n",
        );

        let rows = load_zip_rows(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rate_area, "11");
    }

    #[test]
    fn test_load_zip_rows_rejects_short_rows_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "zips.csv",
            "zipcode,state,county_code,name,rate_area\n\
             36749,AL\n",
        );

        let err = load_zip_rows(&path).unwrap_err();

        assert!(err.to_string().contains(":2:"));
        assert!(err.to_string().contains("expected at least 5 columns"));
    }

    #[test]
    fn test_load_plan_rows_reads_fields_one_through_four() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "plans.csv",
            "plan_id,state,metal_level,rate,rate_area\n\
             74449NR9870320,GA,Silver,298.62,7\n\
             09846ZA5423901,GA,Gold,320.20,7\n",
        );

        let rows = load_plan_rows(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "GA");
        assert_eq!(rows[0].metal_level, "Silver");
        assert_eq!(rows[0].rate, "298.62");
        assert_eq!(rows[0].rate_area, "7");
        assert_eq!(rows[1].metal_level, "Gold");
    }

    #[test]
    fn test_load_query_zips_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "slcsp.csv",
            "zipcode,rate\n64148,\n36749,\n64148,\n",
        );

        let zips = load_query_zips(&path).unwrap();

        assert_eq!(zips, vec!["64148", "36749", "64148"]);
    }

    #[test]
    fn test_missing_file_error_names_the_file() {
        let err = load_query_zips("/nonexistent/slcsp.csv").unwrap_err();

        assert!(err.to_string().contains("/nonexistent/slcsp.csv"));
    }
}
