use web_sys::Element;

use crate::application::animation::ErrorPagePresenter;
use crate::domain::errors::{AppError, RenderResult};
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::typewriter::Stage;

/// Presenter that writes straight into the DOM of a statically hosted
/// error page. The page ships the three region elements already, with the
/// `hidden` class on each of them.
pub struct DomErrorPage {
    title: Element,
    description: Element,
    links: Element,
}

impl DomErrorPage {
    /// Look up the three page regions. Fails when the hosting page does
    /// not carry the expected skeleton.
    pub fn attach() -> RenderResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::DomError("Window not available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::DomError("Document not available".to_string()))?;

        let region = |stage: Stage| {
            let id = stage.element_id();
            document
                .get_element_by_id(id)
                .ok_or_else(|| AppError::DomError(format!("Page element '{id}' not found")))
        };

        Ok(Self {
            title: region(Stage::Title)?,
            description: region(Stage::Description)?,
            links: region(Stage::Links)?,
        })
    }

    fn element(&self, stage: Stage) -> &Element {
        match stage {
            Stage::Title => &self.title,
            Stage::Description => &self.description,
            Stage::Links => &self.links,
        }
    }
}

impl ErrorPagePresenter for DomErrorPage {
    fn set_region_html(&self, stage: Stage, html: &str) {
        self.element(stage).set_inner_html(html);
    }

    fn show_region(&self, stage: Stage) {
        if let Err(e) = self.element(stage).class_list().remove_1("hidden") {
            get_logger().warn(
                LogComponent::Infrastructure("Dom"),
                &format!("Failed to unhide region '{stage}': {e:?}"),
            );
        }
    }

    fn set_cursor_blink(&self, on: bool) {
        let class_list = self.element(Stage::Links).class_list();
        let result = if on {
            class_list.add_1("blink-cursor")
        } else {
            class_list.remove_1("blink-cursor")
        };
        if let Err(e) = result {
            get_logger().warn(
                LogComponent::Infrastructure("Dom"),
                &format!("Failed to toggle cursor blink: {e:?}"),
            );
        }
    }
}
