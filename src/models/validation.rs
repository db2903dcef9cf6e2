use crate::{
    error::SyncError,
    models::page::{MAX_PAGE_SIZE, PageRequest},
};

const MAX_TEMPLATE_NAME_LENGTH: usize = 512;

pub fn validate_template_name(name: &str) -> Result<(), SyncError> {
    if name.is_empty() {
        return Err(SyncError::InvalidRequest(
            "Template name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_TEMPLATE_NAME_LENGTH {
        return Err(SyncError::InvalidRequest(format!(
            "Template name too long (maximum {} characters)",
            MAX_TEMPLATE_NAME_LENGTH
        )));
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !valid_chars {
        return Err(SyncError::InvalidRequest(
            "Template name may only contain lowercase letters, digits and underscores".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_lookup_name(name: &str) -> Result<(), SyncError> {
    if name.trim().is_empty() {
        return Err(SyncError::InvalidRequest(
            "Template name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_page_request(request: &PageRequest) -> Result<(), SyncError> {
    if request.size == 0 {
        return Err(SyncError::InvalidRequest(
            "Page size must be greater than zero".to_string(),
        ));
    }

    if request.size > MAX_PAGE_SIZE {
        return Err(SyncError::InvalidRequest(format!(
            "Page size too large (maximum {})",
            MAX_PAGE_SIZE
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_template_name("order_confirmation").is_ok());
        assert!(validate_template_name("otp_2fa").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_template_name("").is_err());
        assert!(validate_template_name("Order Confirmation").is_err());
        assert!(validate_template_name("order-confirmation").is_err());
        assert!(validate_template_name(&"a".repeat(513)).is_err());
    }

    #[test]
    fn test_lookup_only_requires_non_empty() {
        assert!(validate_lookup_name("Legacy Template").is_ok());
        assert!(validate_lookup_name("  ").is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(validate_page_request(&PageRequest::new(0, 0)).is_err());
        assert!(validate_page_request(&PageRequest::new(0, 101)).is_err());
        assert!(validate_page_request(&PageRequest::new(7, 100)).is_ok());
    }
}
