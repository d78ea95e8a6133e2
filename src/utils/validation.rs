//! Input validation utilities

/// Reduce a client-supplied upload name to its final path component.
///
/// Browsers on some platforms send the full local path; both separators are
/// stripped, along with control characters. Returns `None` when nothing
/// usable remains.
pub fn client_file_name(raw: &str) -> Option<String> {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Check that a name cannot escape the directory it is joined onto
pub fn is_single_path_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
