/// Strip one trailing `source_suffix` from `name` and append `target_suffix`.
pub fn output_name(name: &str, source_suffix: &str, target_suffix: &str) -> String {
    let stem = name.strip_suffix(source_suffix).unwrap_or(name);
    format!("{stem}{target_suffix}")
}
