// Test utilities available to both unit and integration tests
// Only compiled when testing

use crate::table::{Cell, Table};

/// Build one row of cells from optional string slices
#[allow(dead_code)]
pub fn row(values: &[Option<&str>]) -> Vec<Cell> {
    values.iter().map(|value| value.map(str::to_string)).collect()
}

/// Build a table from literal headers and rows
#[allow(dead_code)]
pub fn create_test_table(headers: &[&str], rows: &[&[Option<&str>]]) -> Table {
    Table::new(
        headers.iter().map(|header| header.to_string()).collect(),
        rows.iter().map(|values| row(values)).collect(),
    )
}

/// Headers of a raw job-listing export, before canonicalization
#[allow(dead_code)]
pub const JOB_LISTING_HEADERS: [&str; 8] = [
    "Job Title",
    "Company Name",
    "Location",
    "Posting Date",
    "Employment Type",
    "Required Skills",
    "Key_Skills (copy the main ones from Required)",
    "Job Description",
];

/// Three listings covering valid values, placeholders, absent cells and the
/// skills fallback
#[allow(dead_code)]
pub fn create_job_listing_table() -> Table {
    create_test_table(
        &JOB_LISTING_HEADERS,
        &[
            &[
                Some("  senior software engineer "),
                Some("ACME corp"),
                Some(" Berlin "),
                Some("25/12/2023"),
                Some("Full-time"),
                Some("SQL, Python"),
                Some("N/A"),
                Some("Build power bi reports"),
            ],
            &[
                Some("data analyst"),
                Some("globex"),
                None,
                Some("31/02/2023"),
                Some("-"),
                Some("SQL"),
                Some("Excel"),
                Some(""),
            ],
            &[
                None,
                Some("initech"),
                Some("Remote"),
                None,
                Some(""),
                Some("power bi, DAX"),
                Some("-"),
                Some("Uses PowerBI daily"),
            ],
        ],
    )
}

/// The job-listing export as comma-separated text
#[allow(dead_code)]
pub const JOB_LISTING_CSV: &str = "\
Job Title,Company Name,Location,Posting Date,Employment Type,Required Skills,Key_Skills (copy the main ones from Required),Job Description
  senior software engineer ,ACME corp, Berlin ,25/12/2023,Full-time,\"SQL, Python\",N/A,Build power bi reports
data analyst,globex,,31/02/2023,-,SQL,Excel,
,initech,Remote,,,\"power bi, DAX\",-,Uses PowerBI daily
";
