// Bank and branch code newtypes
//
// Both codes are zero-padded decimal strings (4 digits for banks, 3 for
// branches) parsed out of free-form CSV fields. Non-numeric input coerces
// to zero; downstream consumers rely on that legacy behavior, so it is
// preserved rather than surfaced as an error.

use serde::Serialize;
use std::fmt;

/// 4-digit zero-padded bank identifier, e.g. "0001".
///
/// Lexicographic order on the padded string equals numeric order, so this
/// type's derived `Ord` is what the output sort runs on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BankCode(String);

impl BankCode {
    /// Parse a raw CSV field into a bank code.
    ///
    /// `"1"` → `"0001"`, `"0001"` → `"0001"`, `"abc"` → `"0000"`.
    pub fn from_field(field: &str) -> Self {
        BankCode(format!("{:04}", parse_or_zero(field)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 3-digit zero-padded branch identifier, unique within its parent bank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchCode(String);

impl BranchCode {
    /// Parse a raw CSV field into a branch code. Same coercion rules as
    /// `BankCode::from_field`, 3 digits wide.
    pub fn from_field(field: &str) -> Self {
        BranchCode(format!("{:03}", parse_or_zero(field)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_or_zero(field: &str) -> u32 {
    field.trim().parse::<u32>().unwrap_or(0)
}
