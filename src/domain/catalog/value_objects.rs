use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - error code with a shipped page
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ErrorCode {
    #[strum(serialize = "403")]
    #[serde(rename = "403")]
    Forbidden,
    #[strum(serialize = "404")]
    #[serde(rename = "404")]
    NotFound,
    /// Easter egg served under `404brain` but titled like a plain 404.
    #[strum(serialize = "404brain")]
    #[serde(rename = "404brain")]
    BigBrain,
}

impl ErrorCode {
    /// Code text as supplied by the hosting page.
    pub fn as_code(&self) -> &str {
        self.as_ref()
    }

    /// Code text shown inside the title. `BigBrain` masquerades as a 404.
    pub fn display_code(&self) -> &'static str {
        match self {
            ErrorCode::Forbidden => "403",
            ErrorCode::NotFound | ErrorCode::BigBrain => "404",
        }
    }
}

/// Value Object - address of the page the visitor came from.
/// Empty when the visit had no referrer; the value is interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display, From, Into, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Referrer(String);

impl Referrer {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Referrer {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
