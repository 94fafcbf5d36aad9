use crate::utils::error::{MdError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(MdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.output_dir", "./docs").is_ok());
        assert!(validate_path("output.output_dir", "").is_err());
        assert!(validate_path("output.output_dir", "a\0b").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("defaults.license", "MIT").is_ok());
        assert!(validate_non_empty_string("defaults.license", "  ").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let allowed = ["Standard", "Modern"];
        assert!(validate_one_of("defaults.template", "Modern", &allowed).is_ok());
        let err = validate_one_of("defaults.template", "Fancy", &allowed).unwrap_err();
        assert!(err.to_string().contains("Standard, Modern"));
    }
}
