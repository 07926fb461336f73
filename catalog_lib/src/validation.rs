use url::Url;

use crate::error::CatalogError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PRODUCT_ID_LENGTH: usize = 100;
pub const MAX_LIMIT: u32 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CatalogError> {
    if input.len() > max_len {
        return Err(CatalogError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized = strip_controls(input);
    if sanitized.is_empty() {
        return Err(CatalogError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Clean raw search-box text without rejecting it: control characters are
/// dropped, whitespace trimmed, and anything past [`MAX_SEARCH_LENGTH`] bytes
/// cut at a char boundary. Empty output is valid (it means "clear").
pub fn normalize_search_input(input: &str) -> String {
    let mut cleaned = strip_controls(input);
    if cleaned.len() > MAX_SEARCH_LENGTH {
        let mut end = MAX_SEARCH_LENGTH;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
        cleaned = cleaned.trim_end().to_string();
    }
    cleaned
}

fn strip_controls(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a product identifier taken from navigation or the command line.
pub fn validate_product_id(input: &str) -> Result<String, CatalogError> {
    sanitize_text(input, MAX_PRODUCT_ID_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: u32) -> Result<u32, CatalogError> {
    if page < 1 {
        return Err(CatalogError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_limit(limit: u32) -> Result<u32, CatalogError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(CatalogError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate an API base URL: must parse and use http or https.
pub fn validate_base_url(input: &str) -> Result<String, CatalogError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| {
        CatalogError::InvalidInput(format!("invalid base URL '{}': {}", input, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(CatalogError::InvalidInput(format!(
            "unsupported URL scheme '{}', expected http or https",
            other
        ))),
    }
}
