// Row grouping
//
// One pass over the rows in input order. A BTreeMap keyed by BankCode
// creates each bank the first time its code appears and keeps the keys
// ordered, so the final extraction is already the sorted output sequence
// and no separate sort step is needed.

use crate::codes::{BankCode, BranchCode};
use crate::kana::Readings;
use crate::model::{Bank, Branch};
use crate::reader::Row;
use std::collections::BTreeMap;

/// Group rows into banks, branches nested in input order, banks sorted
/// ascending by code.
///
/// The bank's name and readings are taken from the first row seen for its
/// code; later rows for the same code only contribute branches. Duplicate
/// branch codes within a bank are not detected, both rows are kept.
pub fn group_banks(rows: &[Row]) -> Vec<Bank> {
    let mut banks: BTreeMap<BankCode, Bank> = BTreeMap::new();

    for row in rows {
        let bank_code = BankCode::from_field(&row.bank_code);

        let bank = banks.entry(bank_code.clone()).or_insert_with(|| {
            Bank::new(bank_code, &row.bank_name, Readings::from_half_width(&row.bank_kana))
        });

        bank.branches.push(Branch::new(
            BranchCode::from_field(&row.branch_code),
            &row.branch_name,
            Readings::from_half_width(&row.branch_kana),
        ));
    }

    banks.into_values().collect()
}
