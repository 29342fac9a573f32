use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for field '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    /// Message shown to the user on stderr, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError(e) => format!("File operation failed: {}", e),
            ToolError::JsonError(e) => format!("JSON could not be parsed: {}", e),
            ToolError::ImageError(e) => format!("Icon image could not be written: {}", e),
            ToolError::ConfigValidationError { .. } | ToolError::InvalidConfigValueError { .. } => {
                self.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::IoError(_) => {
                "Check that the path exists and the tool has permission to read and write it"
            }
            ToolError::JsonError(_) => {
                "Fix the JSON syntax; a trailing comma or an unquoted key is the usual culprit"
            }
            ToolError::ImageError(_) => "Re-run with --verbose to see which icon failed to encode",
            ToolError::ConfigValidationError { .. } => {
                "Review the layout TOML file against the documented schema"
            }
            ToolError::InvalidConfigValueError { .. } => {
                "Correct the offending field in the layout TOML file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
