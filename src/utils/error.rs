use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Browser protocol error: {0}")]
    BrowserError(#[from] chromiumoxide::error::CdpError),

    #[error("Browser launch failed: {message}")]
    BrowserLaunchError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Extraction error: {message}")]
    ExtractionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Browser,
    Extraction,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BrowserError(_) | Self::BrowserLaunchError { .. } => ErrorCategory::Browser,
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::ExtractionError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Extraction
            }
            Self::CsvError(_) | Self::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // page hiccups are worth a rerun
            Self::BrowserError(_) | Self::ExtractionError { .. } => ErrorSeverity::Medium,
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_) => ErrorSeverity::High,
            Self::BrowserLaunchError { .. } | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::BrowserError(_) => {
                "The page did not respond as expected; check the URL and try again"
            }
            Self::BrowserLaunchError { .. } => {
                "Install Chrome/Chromium or point --chrome-path (CHROME_PATH) at the executable"
            }
            Self::MissingConfigError { .. } => {
                "Set the value in the environment, in .env, or pass it as a flag"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Fix the configuration value and run again"
            }
            Self::ExtractionError { .. } | Self::SerializationError(_) => {
                "Check that the selectors still match the page layout"
            }
            Self::CsvError(_) | Self::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Browser => format!("Browser problem: {}", self),
            ErrorCategory::Extraction => format!("Could not read the facility listing: {}", self),
            ErrorCategory::Output => format!("Could not save the results: {}", self),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
