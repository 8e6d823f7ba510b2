use crate::columns::KEY_SKILLS;
use crate::table::Table;
use crate::transforms::is_unset;

const REQUIRED_SKILLS: &str = "required_skills";

/// Fill `key_skills` from `required_skills` wherever the former is absent or `N/A`.
///
/// The copied value is taken verbatim and `required_skills` is never modified.
/// Returns the number of filled rows, or `None` unless both columns exist.
pub fn reconcile_skills(table: &mut Table) -> Option<usize> {
    table.fill_column_from(KEY_SKILLS, REQUIRED_SKILLS, is_unset)
}
