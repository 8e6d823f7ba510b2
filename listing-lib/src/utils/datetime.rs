use chrono::NaiveDate;

pub fn get_utc_iso_datetime() -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    return timestamp;
}

/// Strict `DD/MM/YYYY` → `YYYY-MM-DD`.
///
/// The shape is checked by hand before handing the digits to chrono, since
/// chrono's `%d`/`%m` also accept single digits. Invalid calendar dates
/// (`31/02/2023`) return `None`.
pub fn reformat_day_month_year(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }
    let all_digits = bytes
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != 2 && *index != 5)
        .all(|(_, b)| b.is_ascii_digit());
    if !all_digits {
        return None;
    }

    let day: u32 = value[0..2].parse().ok()?;
    let month: u32 = value[3..5].parse().ok()?;
    let year: i32 = value[6..10].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
