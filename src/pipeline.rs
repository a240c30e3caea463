// End-to-end pipeline: read → group → write
//
// One straight line, no state between runs. Any failure aborts the run
// before the output file is touched (the writer serializes in memory
// first), so a failed run never leaves a partial document.

use crate::{aggregate, reader, writer};
use anyhow::Result;
use std::path::Path;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub banks: usize,
    pub branches: usize,
}

/// Run the whole transformation from an input CSV to an output JSON file.
pub fn run(input: &Path, output: &Path) -> Result<Summary> {
    let rows = reader::load_rows(input)?;
    let banks = aggregate::group_banks(&rows);

    let summary = Summary {
        rows: rows.len(),
        banks: banks.len(),
        branches: banks.iter().map(|b| b.branches.len()).sum(),
    };

    writer::write_json(output, &banks)?;

    Ok(summary)
}
