pub mod dashboard;
pub mod installation;
pub mod part;
pub mod report;
pub mod warranty;

/// Placeholder rendered wherever an optional field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the value when it carries text, `N/A` otherwise.
pub fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
