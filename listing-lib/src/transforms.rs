//! Per-field value transforms.
//!
//! Every function here is pure and row-local: it maps one cell to one
//! normalized string and never fails. Anything that cannot be normalized
//! becomes [`SENTINEL`].

use std::sync::LazyLock;

use regex::Regex;

use crate::SENTINEL;
use crate::table::Cell;
use crate::utils::{reformat_day_month_year, title_case};

/// "power", optional whitespace, "bi" as a whole word, any case.
static POWER_BI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpower\s*bi\b").unwrap());

const POWER_BI: &str = "PowerBI";

fn sentinel() -> String {
    SENTINEL.to_string()
}

/// `DD/MM/YYYY` → `YYYY-MM-DD`; absent, `N/A` and anything unparseable → `N/A`.
pub fn format_posting_date(cell: &Cell) -> String {
    match cell.as_deref() {
        None | Some(SENTINEL) => sentinel(),
        Some(value) => reformat_day_month_year(value).unwrap_or_else(sentinel),
    }
}

/// Trim, then title-case. Used for job titles and company names.
pub fn title_case_field(cell: &Cell) -> String {
    match cell.as_deref() {
        None => sentinel(),
        Some(value) => title_case(value.trim()),
    }
}

/// Trim only. Used for locations.
pub fn trim_field(cell: &Cell) -> String {
    match cell.as_deref() {
        None => sentinel(),
        Some(value) => value.trim().to_string(),
    }
}

/// Spell every "power bi" variant as `PowerBI`.
pub fn normalize_powerbi(cell: &Cell) -> String {
    match cell.as_deref() {
        None => sentinel(),
        Some(value) => POWER_BI_RE.replace_all(value, POWER_BI).into_owned(),
    }
}

/// Absent, `-` and the empty string are placeholders for `N/A`.
pub fn is_placeholder(cell: &Cell) -> bool {
    matches!(cell.as_deref(), None | Some("-") | Some(""))
}

/// Placeholder → `N/A`, anything else unchanged.
pub fn replace_placeholder(cell: &Cell) -> String {
    match cell.as_deref() {
        Some(value) if !is_placeholder(cell) => value.to_string(),
        _ => sentinel(),
    }
}

/// Whether a cell carries no usable value yet: absent or already `N/A`.
pub fn is_unset(cell: &Cell) -> bool {
    matches!(cell.as_deref(), None | Some(SENTINEL))
}
