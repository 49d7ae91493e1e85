//! Project name normalization (PEP 503)

/// Normalize a project name for use as its index directory.
///
/// Every run of `-`, `_` and `.` collapses to a single hyphen and the
/// result is lowercased, so `Foo_Bar`, `foo-bar` and `FOO..BAR` all map
/// to `foo-bar`.
pub fn normalize_project_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' {
            if !in_separator {
                result.push('-');
                in_separator = true;
            }
        } else {
            result.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    result
}

/// Compute the dist-info directory name from the name and version as they
/// appear in the wheel filename.
///
/// The name is used verbatim; wheels whose internal directory is spelled
/// differently from their filename will not resolve.
pub fn dist_info_name(project: &str, version: &str) -> String {
    format!("{}-{}.dist-info", project, version)
}
