use crate::utils::error::{PtaError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PtaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PtaError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PtaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("export.endpoint", "https://example.com/api/export").is_ok());
        assert!(validate_url("export.endpoint", "http://localhost:8000/api/export").is_ok());
        assert!(validate_url("export.endpoint", "").is_err());
        assert!(validate_url("export.endpoint", "invalid-url").is_err());
        assert!(validate_url("export.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("export.timeout_seconds", 300u64, 1, 3600).is_ok());
        assert!(validate_range("export.timeout_seconds", 0u64, 1, 3600).is_err());
        assert!(validate_range("export.timeout_seconds", 7200u64, 1, 3600).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let token: Option<String> = None;
        let err = validate_required_field("export.token", &token).unwrap_err();
        assert!(matches!(err, PtaError::MissingConfigError { ref field } if field == "export.token"));

        let token = Some("abc".to_string());
        assert_eq!(validate_required_field("export.token", &token).unwrap(), "abc");
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("export.token", "abc").is_ok());
        assert!(validate_non_empty_string("export.token", "   ").is_err());
    }
}
