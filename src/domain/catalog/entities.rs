use super::value_objects::Referrer;
use crate::domain::typewriter::Stage;
use serde::Serialize;

/// Static page texts for one error code. The links line is a template:
/// `{referrer}` stands for the address the visitor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorEntry {
    pub description: &'static str,
    pub links: &'static str,
}

impl ErrorEntry {
    /// Links line with the referring address substituted in.
    pub fn links_for(&self, referrer: &Referrer) -> String {
        self.links.replace("{referrer}", referrer.value())
    }
}

/// Render-ready texts for one page visit, one string per stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPageText {
    pub title_html: String,
    pub description_html: String,
    pub links_html: String,
}

impl ErrorPageText {
    /// The string a given stage reveals.
    pub fn stage_text(&self, stage: Stage) -> &str {
        match stage {
            Stage::Title => &self.title_html,
            Stage::Description => &self.description_html,
            Stage::Links => &self.links_html,
        }
    }
}
