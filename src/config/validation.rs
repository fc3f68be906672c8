use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_domains() {
        for domain in [
            "https://ergast.com",
            "http://127.0.0.1:8080",
            "ergast.com",
            "localhost:3000",
        ] {
            assert!(
                validate_config(domain, &None, 30).is_ok(),
                "'{domain}' should be accepted"
            );
        }
    }

    #[test]
    fn test_invalid_domain() {
        let result = validate_config("ergast", &None, 30);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("a").join("b").join("f1.log");

        let result = validate_config(
            "https://ergast.com",
            &Some(log_path.to_string_lossy().to_string()),
            30,
        );
        assert!(result.is_ok());
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
