use convert_case::{Case, Casing};
use pluralizer::pluralize;

/// Derives a table name from a Rust type name: last path segment,
/// snake_cased, pluralized. `Name` becomes `names`, `UserProfile` becomes
/// `user_profiles`.
pub(crate) fn derive_table_name(type_name: &str) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let base = base.rsplit("::").next().unwrap_or(base);
    pluralize(&base.to_case(Case::Snake), 2, false)
}
