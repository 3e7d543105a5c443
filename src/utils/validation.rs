use crate::domain::model::Selectors;
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(ScrapeError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "file" => Ok(()),
            scheme => Err(ScrapeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A file name must not smuggle in directories; those belong in the output path.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;
    if name.contains('/') || name.contains('\\') {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot contain path separators".to_string(),
        });
    }
    Ok(())
}

/// Empty or whitespace-only values count as missing.
pub fn validate_required_value(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScrapeError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Rejects `${VAR}` placeholders that survived environment substitution.
pub fn validate_no_placeholder(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"\$\{([^}]+)\}").expect("static placeholder pattern");
    if let Some(caps) = re.captures(value) {
        return Err(ScrapeError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("environment variable {} is not set", &caps[1]),
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
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_selectors(prefix: &str, selectors: &Selectors) -> Result<()> {
    for (name, value) in selectors.named() {
        let field = format!("{}.{}", prefix, name);
        validate_required_value(&field, value)?;
        validate_no_placeholder(&field, value)?;
    }
    Ok(())
}
