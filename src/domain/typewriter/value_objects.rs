use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Glyph appended to every in-progress frame and dropped on commit.
pub const CURSOR_GLYPH: char = '_';

/// Value Object - animated page region, in reveal order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Stage {
    #[strum(serialize = "title")]
    #[serde(rename = "title")]
    Title,
    #[strum(serialize = "description")]
    #[serde(rename = "description")]
    Description,
    #[strum(serialize = "links")]
    #[serde(rename = "links")]
    Links,
}

impl Stage {
    /// Next region in reveal order, `None` after the links line.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Title => Some(Stage::Description),
            Stage::Description => Some(Stage::Links),
            Stage::Links => None,
        }
    }

    /// Id of the page element this region animates into.
    pub fn element_id(&self) -> &'static str {
        match self {
            Stage::Title => "error-title",
            Stage::Description => "description-line",
            Stage::Links => "link-line",
        }
    }
}

/// Value Object - reveal progress within one stage's string.
/// The cursor is a byte offset and always sits on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Constructor, Serialize, Deserialize)]
pub struct RenderState {
    cursor: usize,
}

impl RenderState {
    pub fn value(&self) -> usize {
        self.cursor
    }
}

/// Value Object - animation cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between reveal steps while a stage is typing.
    pub type_interval: Duration,
    /// Pause between cursor toggles once the page is fully revealed.
    pub blink_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(50),
            blink_interval: Duration::from_millis(500),
        }
    }
}

impl Timing {
    /// Zero-delay cadence, lets tests run the reveal without waiting.
    pub fn instant() -> Self {
        Self {
            type_interval: Duration::ZERO,
            blink_interval: Duration::ZERO,
        }
    }
}
