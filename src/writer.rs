// JSON output
//
// The whole document is serialized in memory first and written with a
// single call, so a serialization failure never leaves a file behind.

use crate::model::Bank;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize the sorted bank sequence as pretty-printed JSON (2-space
/// indentation) and write it to `out_path`, overwriting any existing file.
pub fn write_json(out_path: &Path, banks: &[Bank]) -> Result<()> {
    let document = serde_json::to_string_pretty(banks)
        .context("Failed to serialize banks to JSON")?;

    fs::write(out_path, document)
        .with_context(|| format!("Failed to write output file: {}", out_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{BankCode, BranchCode};
    use crate::kana::Readings;
    use crate::model::Branch;

    #[test]
    fn test_write_json_produces_two_space_indented_document() {
        let mut bank = Bank::new(
            BankCode::from_field("1"),
            "みずほ銀行",
            Readings::from_half_width("ﾐｽﾞﾎ"),
        );
        bank.branches.push(Branch::new(
            BranchCode::from_field("1"),
            "東京営業部",
            Readings::from_half_width("ﾄｳｷｮｳ"),
        ));

        let path = std::env::temp_dir().join("bankcode_etl_writer_ok.json");
        write_json(&path, &[bank]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n"));
        assert!(written.contains("\"code\": \"0001\""));
        assert!(written.contains("\"halfWidthKana\": \"ﾄｳｷｮｳ\""));

        // and it round-trips as valid JSON
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["branches"][0]["code"], "001");
    }

    #[test]
    fn test_write_json_empty_input_writes_empty_array() {
        let path = std::env::temp_dir().join("bankcode_etl_writer_empty.json");
        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_overwrites_existing_file() {
        let path = std::env::temp_dir().join("bankcode_etl_writer_overwrite.json");
        fs::write(&path, "stale contents").unwrap();

        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_missing_directory_fails() {
        let path = Path::new("no_such_dir/out.json");
        let err = write_json(path, &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to write output file"));
    }
}
