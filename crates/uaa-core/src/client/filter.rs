//! SCIM filter expressions sent to `/Users`.
//!
//! Values are interpolated verbatim. Quotes or SCIM operators inside a value change the meaning
//! of the expression, so callers must only pass trusted identifiers.

/// `Id eq "<id>"` clauses for every id, joined with ` or `.
///
/// An empty list produces an empty filter.
pub fn user_ids_filter<S: AsRef<str>>(user_ids: &[S]) -> String {
    user_ids
        .iter()
        .map(|id| format!("Id eq \"{}\"", id.as_ref()))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// `userName eq '<name>'`.
pub fn user_name_filter(user_name: &str) -> String {
    format!("userName eq '{user_name}'")
}
