use chrono::NaiveDate;

use crate::store::RecordStore;

/// Build an identifier like `JP_20250602` from the client's initials and the
/// registration date, adding `_1`, `_2`, ... while the store already holds
/// a record under the candidate.
///
/// Path separators in the initials are replaced with `_` so the identifier
/// always names a file directly inside the store.
pub fn generate_unique_id(
    store: &RecordStore,
    given_name: &str,
    family_name: &str,
    date: NaiveDate,
) -> String {
    let initials: String = given_name
        .chars()
        .next()
        .into_iter()
        .chain(family_name.chars().next())
        .flat_map(char::to_uppercase)
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    let base_id = format!("{}_{}", initials, date.format("%Y%m%d"));

    let mut unique_id = base_id.clone();
    let mut suffix = 1;
    while store.exists(&unique_id) {
        unique_id = format!("{base_id}_{suffix}");
        suffix += 1;
    }
    unique_id
}

/// Format a customer number: `C` plus at least three digits.
pub fn format_client_number(seq: u32) -> String {
    format!("C{seq:03}")
}
