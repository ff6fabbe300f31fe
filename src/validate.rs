//! Pure syntax checks for request input, run before any network call.

/// True iff `code` is a World Bank style country code: exactly 3 characters,
/// all uppercase ASCII letters (e.g., `USA`, `DEU`).
pub fn is_valid_country_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

/// True iff `code` looks like a World Bank indicator id such as
/// `NY.GDP.MKTP.CD`: non-empty, at least one `.` separator, and only
/// ASCII alphanumerics and dots.
pub fn is_valid_indicator_code(code: &str) -> bool {
    !code.is_empty()
        && code.contains('.')
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '.')
}
