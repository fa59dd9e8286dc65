//! Display identifiers for installations, e.g. `ERC-0004`.

/// Prefix used when the part name has no words.
pub const FALLBACK_PREFIX: &str = "P";

/// Uppercase initials of each whitespace-separated word of the part name.
pub fn uid_prefix(part_name: Option<&str>) -> String {
    let prefix: String = part_name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if prefix.is_empty() {
        FALLBACK_PREFIX.to_string()
    } else {
        prefix
    }
}

/// `<PREFIX>-<SEQ>` with the sequence zero-padded to four digits.
///
/// The sequence is the installation id, a single counter shared by every part type, so the
/// numeric part does not restart for a new prefix.
pub fn allocate_uid(part_name: Option<&str>, sequence: u64) -> String {
    format!("{}-{:04}", uid_prefix(part_name), sequence)
}
