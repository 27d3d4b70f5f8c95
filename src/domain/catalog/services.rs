use super::entities::{ErrorEntry, ErrorPageText};
use super::value_objects::{ErrorCode, Referrer};
use crate::domain::errors::{AppError, CatalogResult};
use crate::domain::logging::LogComponent;
use crate::log_warn;

/// Shared links line for the plain HTTP errors.
const BACK_OR_HOME_LINKS: &str =
    r#"You could try <a href="{referrer}">going back</a> or <a href="/">going home</a>"#;

const FORBIDDEN: ErrorEntry = ErrorEntry {
    description: "You are not allowed to view this page",
    links: BACK_OR_HOME_LINKS,
};

const NOT_FOUND: ErrorEntry = ErrorEntry {
    description: "The page you are looking for might have been removed, \
                  had its name changed or is temporarily unavailable",
    links: BACK_OR_HOME_LINKS,
};

const BIG_BRAIN: ErrorEntry = ErrorEntry {
    description: "Steve's \"big brain\" that he keeps talking about couldn't be found \
                  (probably because it doesn't exist)",
    links: r#"You might find his "big brain" <a href="https://www.youtube.com/watch?v=dQw4w9WgXcQ">here</a>"#,
};

/// Domain service for the static error page catalog.
pub struct ErrorCatalog;

impl ErrorCatalog {
    /// Static entry for a known code.
    pub fn entry(code: ErrorCode) -> &'static ErrorEntry {
        match code {
            ErrorCode::Forbidden => &FORBIDDEN,
            ErrorCode::NotFound => &NOT_FOUND,
            ErrorCode::BigBrain => &BIG_BRAIN,
        }
    }

    /// Render-ready page text for a known code.
    pub fn resolve_code(code: ErrorCode, referrer: &Referrer) -> ErrorPageText {
        let entry = Self::entry(code);
        ErrorPageText {
            title_html: format!(
                r#"Error <span class="errorcode">{}</span>"#,
                code.display_code()
            ),
            description_html: entry.description.to_string(),
            links_html: entry.links_for(referrer),
        }
    }

    /// Parse and resolve a code supplied by the hosting page.
    pub fn resolve(code: &str, referrer: &Referrer) -> CatalogResult<ErrorPageText> {
        let parsed = code
            .parse::<ErrorCode>()
            .map_err(|_| AppError::UnknownErrorCode(code.to_string()))?;
        Ok(Self::resolve_code(parsed, referrer))
    }

    /// Resolve with the not-found page as fallback instead of failing the visit.
    pub fn resolve_or_fallback(code: &str, referrer: &Referrer) -> ErrorPageText {
        match Self::resolve(code, referrer) {
            Ok(text) => text,
            Err(err) => {
                log_warn!(
                    LogComponent::Domain("Catalog"),
                    "⚠️ {err}, serving the 404 page instead"
                );
                Self::resolve_code(ErrorCode::NotFound, referrer)
            }
        }
    }
}
