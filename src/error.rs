use thiserror::Error;

/// Main error type for the banner compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while validating inputs or laying out the banner
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("Invalid font size: {size}")]
    InvalidFontSize { size: u32 },

    #[error("Degenerate dimensions for {element}: {width}x{height}")]
    DegenerateDimensions {
        element: String,
        width: u32,
        height: u32,
    },

    #[error("Banner would be {width}x{height}, over the {limit} pixel limit")]
    TooLarge { width: u32, height: u64, limit: u64 },
}

/// Raster decode and encode errors
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to decode {field}: {reason}")]
    DecodeFailed { field: String, reason: String },

    #[error("PNG encoding failed: {reason}")]
    EncodingFailed { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether the caller supplied bad input, as opposed to a server-side failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Compose(ComposeError::MissingInput { .. })
                | Self::Compose(ComposeError::InvalidFontSize { .. })
                | Self::Compose(ComposeError::DegenerateDimensions { .. })
                | Self::Compose(ComposeError::TooLarge { .. })
                | Self::Image(ImageError::DecodeFailed { .. })
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Compose(ComposeError::MissingInput { .. }) => {
                "Please provide all inputs.".to_string()
            }
            Self::Image(ImageError::DecodeFailed { field, .. }) => {
                format!("Could not read the uploaded '{}'. Please upload a PNG or JPEG image.", field)
            }
            Self::Compose(ComposeError::DegenerateDimensions { element, .. }) => {
                format!("The {} is too thin to be resized to the banner width.", element)
            }
            Self::Compose(ComposeError::TooLarge { .. }) => {
                "The banner would be too large. Please use a less elongated image or a smaller font size.".to_string()
            }
            Self::Compose(ComposeError::InvalidFontSize { size }) => {
                format!("Font size {} is out of range.", size)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_client_error() {
        let err: CompositorError = ComposeError::MissingInput { field: "logo".into() }.into();
        assert!(err.is_client_error());
        assert_eq!(err.user_message(), "Please provide all inputs.");
    }

    #[test]
    fn test_encoding_failure_is_server_error() {
        let err: CompositorError = ImageError::EncodingFailed { reason: "disk".into() }.into();
        assert!(!err.is_client_error());
        assert!(err.user_message().contains("PNG encoding failed"));
    }

    #[test]
    fn test_oversized_banner_is_client_error() {
        let err: CompositorError = ComposeError::TooLarge {
            width: 1200,
            height: 120_000,
            limit: 32_000_000,
        }
        .into();
        assert!(err.is_client_error());
        assert!(err.user_message().contains("too large"));
    }

    #[test]
    fn test_decode_failure_names_field() {
        let err: CompositorError = ImageError::DecodeFailed {
            field: "main_image".into(),
            reason: "bad magic".into(),
        }
        .into();
        assert!(err.user_message().contains("main_image"));
    }
}
