mod datetime;
mod filesystem;
mod string;

pub use datetime::{get_utc_iso_datetime, reformat_day_month_year};
pub use filesystem::{temporary_sibling_path, write_error_to_log};
pub use string::{title_case, underscore_whitespace};
