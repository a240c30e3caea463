// CSV input loading
//
// The input is a fixed-schema table: exactly 7 fields per row, header row
// first. Field positions are positional, not named, so the header content
// is discarded; its field count is still validated like any other row.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;

/// Fields per row in the input schema.
const FIELD_COUNT: usize = 7;

/// One data row, with the unused column (position 1) already dropped.
#[derive(Debug, Clone)]
pub struct Row {
    pub bank_name: String,
    pub bank_kana: String,
    pub branch_name: String,
    pub branch_kana: String,
    pub bank_code: String,
    pub branch_code: String,
}

/// Load all data rows from a CSV file, skipping the header.
///
/// Fails if the file cannot be opened or if any row (header included)
/// does not have exactly 7 fields. No partial results: a malformed row
/// anywhere aborts the whole load.
pub fn load_rows(csv_path: &Path) -> Result<Vec<Row>> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open input file: {}", csv_path.display()))?;

    // has_headers(false) so the header row comes through the same record
    // iterator and gets the same field-count check as data rows.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 1, csv_path.display())
        })?;

        if record.len() != FIELD_COUNT {
            bail!(
                "Malformed row at line {}: expected {} fields, found {}",
                line_num + 1,
                FIELD_COUNT,
                record.len()
            );
        }

        if line_num == 0 {
            continue; // header
        }

        // Positions: 0 bank name, 1 unused, 2 bank half-width kana,
        // 3 branch name, 4 branch half-width kana, 5 bank code, 6 branch code
        rows.push(Row {
            bank_name: record.get(0).unwrap_or("").to_string(),
            bank_kana: record.get(2).unwrap_or("").to_string(),
            branch_name: record.get(3).unwrap_or("").to_string(),
            branch_kana: record.get(4).unwrap_or("").to_string(),
            bank_code: record.get(5).unwrap_or("").to_string(),
            branch_code: record.get(6).unwrap_or("").to_string(),
        });
    }

    Ok(rows)
}
