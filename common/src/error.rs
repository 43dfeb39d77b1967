//! Error types for the device probe page.

use thiserror::Error;

/// Errors that can occur while listing devices, showing streams or recording
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    /// A platform media or DOM call failed
    #[error("Platform error: {0}")]
    Platform(String),

    /// Building or attaching a panel failed
    #[error("Render error: {0}")]
    Render(String),

    /// Averager constructed with a zero-length window
    #[error("Averager window must hold at least one sample")]
    EmptyWindow,

    /// Error handed to the error reporter and re-raised by it
    #[error("{function_name}: {message}")]
    Reported {
        function_name: String,
        message: String,
    },
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_display_carries_function_name() {
        let err = PageError::Reported {
            function_name: "list_devices".to_string(),
            message: "NotAllowedError".to_string(),
        };
        assert_eq!(err.to_string(), "list_devices: NotAllowedError");
    }
}
