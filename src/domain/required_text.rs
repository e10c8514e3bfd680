/// Accepts `value` unless it is absent or blank. The raw text is returned untouched.
pub(crate) fn require(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("The contact {} is required", field)),
    }
}
