// Bank Code ETL - Core Library
// CSV of bank/branch records → nested, sorted JSON with kana readings

pub mod aggregate;
pub mod codes;
pub mod kana;
pub mod model;
pub mod pipeline;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use aggregate::group_banks;
pub use codes::{BankCode, BranchCode};
pub use kana::{half_to_full, katakana_to_hiragana, Readings};
pub use model::{Bank, Branch};
pub use pipeline::{run, Summary};
pub use reader::{load_rows, Row};
pub use writer::write_json;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
