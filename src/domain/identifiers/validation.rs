/// Validates a bundle file stem before it is joined onto an output directory.
///
/// Checks:
/// - Non-empty
/// - Does not start with '.' (hidden files)
/// - No path separators or null bytes
/// - Characters are alphanumeric, '-', or '_' only
pub fn validate_file_stem(stem: &str) -> bool {
    if stem.is_empty() || stem.starts_with('.') {
        return false;
    }
    if stem.contains('/') || stem.contains('\\') || stem.contains('\0') {
        return false;
    }
    stem.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
