/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The supplied error code has no entry in the catalog.
    UnknownErrorCode(String),
    /// A stage string contains a `<` with no closing `>`.
    MalformedMarkup(String),
    /// A required page element or browser object is missing.
    DomError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::UnknownErrorCode(code) => write!(f, "Unknown error code: {}", code),
            AppError::MalformedMarkup(msg) => write!(f, "Malformed markup: {}", msg),
            AppError::DomError(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type CatalogResult<T> = Result<T, AppError>;
pub type RenderResult<T> = Result<T, AppError>;
