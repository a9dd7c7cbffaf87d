use std::path::Path;

/// Returns the file name of `path` when it ends with `suffix` and the entry
/// is not a directory (symlinks followed).
///
/// Anything else with a matching name is a candidate, including entries that
/// cannot be stat'ed, so their failure surfaces when they are read. Names
/// that are not valid UTF-8 never match.
pub fn candidate_name(path: &Path, suffix: &str) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    (name.ends_with(suffix) && !path.is_dir()).then(|| name.to_string())
}
