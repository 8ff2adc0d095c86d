//! Name transforms between schema and target naming conventions.

/// Converts a schema type name into its declaration name.
///
/// Only the first character is uppercased; the rest is kept as written so
/// that names like `iPhone` and `IPhone` stay distinguishable by their tail.
#[must_use]
pub fn declaration_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the implicit execution context parameter.
pub const CONTEXT_PARAMETER: &str = "context";
