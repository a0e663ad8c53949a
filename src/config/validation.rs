use crate::error::AppError;

/// Validates configuration field values.
///
/// The default level is already typed, so only the free-form fields need
/// checking: a custom log file path, when present, must be a non-empty,
/// non-whitespace string.
pub fn validate_config(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(path) = log_file_path
        && path.trim().is_empty()
    {
        return Err(AppError::config_error(
            "log_file_path must not be empty; remove the field to use the default location",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_log_path_is_valid() {
        assert!(validate_config(&None).is_ok());
    }

    #[test]
    fn test_non_empty_log_path_is_valid() {
        assert!(validate_config(&Some("/tmp/quiz.log".to_string())).is_ok());
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        assert!(validate_config(&Some(String::new())).is_err());
        assert!(validate_config(&Some("   ".to_string())).is_err());
    }
}
