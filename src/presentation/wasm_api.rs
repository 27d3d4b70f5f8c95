use js_sys::{Array, Promise};
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::future_to_promise;

use crate::application::animation::PageAnimation;
use crate::domain::catalog::{ErrorCatalog, ErrorCode, Referrer};
use crate::infrastructure::dom::DomErrorPage;

/// WASM API for hosts that drive the error page from JavaScript instead
/// of mounting the Leptos view. Only a thin bridge to the application
/// layer - the page skeleton with the three region elements must already
/// be in the document.
#[wasm_bindgen]
pub struct ErrorPageApi {
    code: String,
    referrer: Option<String>,
}

#[wasm_bindgen]
impl ErrorPageApi {
    /// New API instance for one error code.
    #[wasm_bindgen(constructor)]
    pub fn new(code: String) -> Self {
        Self {
            code,
            referrer: None,
        }
    }

    /// Override the referring address. Defaults to `document.referrer`.
    #[wasm_bindgen(js_name = withReferrer)]
    pub fn with_referrer(&mut self, referrer: String) {
        self.referrer = Some(referrer);
    }

    /// Start the typewriter reveal against the static page regions.
    /// The returned promise only settles on failure - the idle cursor
    /// keeps blinking for the life of the page.
    #[wasm_bindgen(js_name = start)]
    pub fn start(&self) -> Promise {
        let code = self.code.clone();
        let referrer = self.resolve_referrer();

        future_to_promise(async move {
            let page = DomErrorPage::attach().map_err(|e| JsValue::from_str(&e.to_string()))?;
            let animation = PageAnimation::for_code(&code, &referrer);
            animation
                .run(page)
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Resolved page texts as JSON, for host-side inspection.
    #[wasm_bindgen(js_name = pageTextJson)]
    pub fn page_text_json(&self) -> Result<String, JsValue> {
        let text = ErrorCatalog::resolve(&self.code, &self.resolve_referrer())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&text).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Every code the catalog ships a page for.
    #[wasm_bindgen(js_name = knownCodes)]
    pub fn known_codes() -> Array {
        ErrorCode::iter()
            .map(|code| JsValue::from_str(code.as_code()))
            .collect()
    }

    fn resolve_referrer(&self) -> Referrer {
        match &self.referrer {
            Some(referrer) => Referrer::from(referrer.as_str()),
            None => web_sys::window()
                .and_then(|w| w.document())
                .map(|d| Referrer::from(d.referrer()))
                .unwrap_or_default(),
        }
    }
}
