use crate::utils::error::{Result, ToolError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

// Extensions are stored bare and matched verbatim against file suffixes.
pub fn validate_extension_list(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ToolError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one file extension is required".to_string(),
        });
    }

    for extension in extensions {
        if extension.is_empty() {
            return Err(ToolError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: extension.clone(),
                reason: "Extension cannot be empty".to_string(),
            });
        }

        if extension.contains('.') || extension.contains('/') {
            return Err(ToolError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: extension.clone(),
                reason: "Extension must be bare, without dot or path separator".to_string(),
            });
        }
    }

    Ok(())
}
