use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{NormalizeError, Result};
use crate::table::Table;
use crate::utils::underscore_whitespace;

/// Verbose skills column as it looks after lower-casing and underscoring.
const VERBOSE_KEY_SKILLS: &str = "key_skills_(copy_the_main_ones_from_required)";
pub(crate) const KEY_SKILLS: &str = "key_skills";

/// One header that changed name during canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

/// Lower-case, whitespace runs to `_`, then the fixed skills rename.
pub fn canonical_column_name(name: &str) -> String {
    let canonical = underscore_whitespace(&name.to_lowercase());
    if canonical == VERBOSE_KEY_SKILLS {
        return KEY_SKILLS.to_string();
    }
    canonical
}

/// Rename every column of `table` to its canonical name.
///
/// Two source columns landing on the same canonical name is fatal: the table
/// is left untouched and the collision is reported.
pub fn canonicalize_columns(table: &mut Table) -> Result<Vec<ColumnRename>> {
    let canonical: Vec<String> = table
        .headers()
        .iter()
        .map(|header| canonical_column_name(header))
        .collect();

    let mut sources: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (original, renamed) in table.headers().iter().zip(&canonical) {
        sources
            .entry(renamed.as_str())
            .or_default()
            .push(original.as_str());
    }
    if let Some((name, columns)) = sources.into_iter().find(|(_, columns)| columns.len() > 1) {
        return Err(NormalizeError::ColumnCollision {
            name: name.to_string(),
            columns: columns.into_iter().map(str::to_string).collect(),
        });
    }

    let renames = table
        .headers()
        .iter()
        .zip(&canonical)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| ColumnRename {
            from: from.clone(),
            to: to.clone(),
        })
        .collect();

    table.set_headers(canonical);
    Ok(renames)
}
