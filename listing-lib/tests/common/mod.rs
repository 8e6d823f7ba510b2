use listing_lib::{RuleSet, Table, normalize_table};

// Re-export shared test utilities from src/test_utils.rs
// These are the core functions used by most tests
pub use listing_lib::test_utils::{
    JOB_LISTING_CSV, create_job_listing_table, create_test_table, row,
};

/// Load comma-separated text the way the CLI does
#[allow(dead_code)]
pub fn load_csv(text: &str) -> Table {
    Table::from_reader(text.as_bytes(), b',').unwrap()
}

/// Run the extended rule set and return only the table
#[allow(dead_code)]
pub fn normalize_extended(table: Table) -> Table {
    normalize_table(table, RuleSet::Extended).unwrap().0
}

/// Value of one cell as a plain string slice, panicking on missing column or absent value
#[allow(dead_code)]
pub fn text<'a>(table: &'a Table, row: usize, column: &str) -> &'a str {
    table
        .cell(row, column)
        .unwrap_or_else(|| panic!("column '{column}' missing"))
        .as_deref()
        .unwrap_or_else(|| panic!("cell ({row}, '{column}') is absent"))
}
