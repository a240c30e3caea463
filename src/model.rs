// Output data model
//
// Field names and order are pinned by the downstream JSON consumers:
// name, code, hiragana, halfWidthKana, fullWidthKana, branches. serde
// emits struct fields in declaration order, so the declarations below are
// part of the output contract.

use crate::codes::{BankCode, BranchCode};
use crate::kana::Readings;
use serde::Serialize;

/// One bank with all of its branches nested under it. Built once during
/// aggregation; the name and readings come from the first row seen for
/// the bank's code.
#[derive(Debug, Clone, Serialize)]
pub struct Bank {
    pub name: String,
    pub code: BankCode,
    pub hiragana: String,
    #[serde(rename = "halfWidthKana")]
    pub half_width_kana: String,
    #[serde(rename = "fullWidthKana")]
    pub full_width_kana: String,
    pub branches: Vec<Branch>,
}

impl Bank {
    pub fn new(code: BankCode, name: &str, readings: Readings) -> Self {
        Bank {
            name: name.to_string(),
            code,
            hiragana: readings.hiragana,
            half_width_kana: readings.half_width,
            full_width_kana: readings.full_width,
            branches: Vec::new(),
        }
    }
}

/// One branch row. Same shape as `Bank` minus the nesting.
#[derive(Debug, Clone, Serialize)]
pub struct Branch {
    pub name: String,
    pub code: BranchCode,
    pub hiragana: String,
    #[serde(rename = "halfWidthKana")]
    pub half_width_kana: String,
    #[serde(rename = "fullWidthKana")]
    pub full_width_kana: String,
}

impl Branch {
    pub fn new(code: BranchCode, name: &str, readings: Readings) -> Self {
        Branch {
            name: name.to_string(),
            code,
            hiragana: readings.hiragana,
            half_width_kana: readings.half_width,
            full_width_kana: readings.full_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_serializes_with_exact_field_names() {
        let bank = Bank::new(
            BankCode::from_field("1"),
            "みずほ銀行",
            Readings::from_half_width("ﾐｽﾞﾎ"),
        );

        let json = serde_json::to_value(&bank).unwrap();
        assert_eq!(json["name"], "みずほ銀行");
        assert_eq!(json["code"], "0001");
        assert_eq!(json["hiragana"], "みずほ");
        assert_eq!(json["halfWidthKana"], "ﾐｽﾞﾎ");
        assert_eq!(json["fullWidthKana"], "ミズホ");
        assert!(json["branches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_branch_has_no_branches_field() {
        let branch = Branch::new(
            BranchCode::from_field("1"),
            "東京営業部",
            Readings::from_half_width("ﾄｳｷｮｳ"),
        );

        let json = serde_json::to_value(&branch).unwrap();
        assert_eq!(json["code"], "001");
        assert!(json.get("branches").is_none());
    }

    #[test]
    fn test_serialized_field_order_matches_consumer_contract() {
        let bank = Bank::new(
            BankCode::from_field("1"),
            "テスト銀行",
            Readings::from_half_width("ﾃｽﾄ"),
        );

        let json = serde_json::to_string(&bank).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let code_pos = json.find("\"code\"").unwrap();
        let hiragana_pos = json.find("\"hiragana\"").unwrap();
        let branches_pos = json.find("\"branches\"").unwrap();
        assert!(name_pos < code_pos);
        assert!(code_pos < hiragana_pos);
        assert!(hiragana_pos < branches_pos);
    }
}
