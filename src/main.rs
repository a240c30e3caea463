use anyhow::Result;
use std::path::Path;

use bankcode_etl::pipeline;

// Fixed relative paths, no CLI surface. The output directory is not
// created on the fly; a missing ./out is a write failure.
const IN_FILE: &str = "./data/bankCodeIn.csv";
const OUT_FILE: &str = "./out/bankCodeOut.json";

fn main() -> Result<()> {
    let input = Path::new(IN_FILE);
    let output = Path::new(OUT_FILE);

    println!("Loading {}...", input.display());
    let summary = pipeline::run(input, output)?;

    println!("✓ Read {} rows", summary.rows);
    println!(
        "✓ Wrote {} banks / {} branches to {}",
        summary.banks,
        summary.branches,
        output.display()
    );

    Ok(())
}
