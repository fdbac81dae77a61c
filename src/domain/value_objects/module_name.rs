//! Path to dotted module name mapping
//!
//! Pure string transform used by the Python adapters: strip the project
//! root, strip the extension, turn separators into dots. Both `/` and `\`
//! are accepted regardless of the host platform.

/// Convert `file_name` (inside `base_path`) into an importable dotted name.
///
/// ```
/// use tddmon::file_name_to_module;
///
/// assert_eq!(file_name_to_module("", "pytddmon.pyw"), "pytddmon");
/// assert_eq!(file_name_to_module("", "tests/pytddmon.py"), "tests.pytddmon");
/// assert_eq!(file_name_to_module("", "./tests/pytddmon.py"), "tests.pytddmon");
/// assert_eq!(file_name_to_module("", ".\\tests\\pytddmon.py"), "tests.pytddmon");
/// ```
pub fn file_name_to_module(base_path: &str, file_name: &str) -> String {
    let root = components(base_path);
    let mut parts = components(file_name);

    if !root.is_empty() && parts.starts_with(&root) {
        parts.drain(..root.len());
    }

    if let Some(last) = parts.last_mut() {
        if let Some(dot) = last.rfind('.') {
            if dot > 0 {
                last.truncate(dot);
            }
        }
    }

    parts
        .iter()
        .flat_map(|part| part.split('.'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

fn components(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|c| !c.is_empty() && *c != ".")
        .map(str::to_string)
        .collect()
}
