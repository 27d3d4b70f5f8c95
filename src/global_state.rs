use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive state of the error page view: one markup signal and one
/// visibility signal per region, plus the idle cursor flag.
pub struct Globals {
    pub title_html: RwSignal<String>,
    pub description_html: RwSignal<String>,
    pub links_html: RwSignal<String>,
    pub title_visible: RwSignal<bool>,
    pub description_visible: RwSignal<bool>,
    pub links_visible: RwSignal<bool>,
    pub cursor_blink: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        title_html: create_rw_signal(String::new()),
        description_html: create_rw_signal(String::new()),
        links_html: create_rw_signal(String::new()),
        title_visible: create_rw_signal(false),
        description_visible: create_rw_signal(false),
        links_visible: create_rw_signal(false),
        cursor_blink: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub title_html => title_html: String,
    pub description_html => description_html: String,
    pub links_html => links_html: String,
    pub title_visible => title_visible: bool,
    pub description_visible => description_visible: bool,
    pub links_visible => links_visible: bool,
    pub cursor_blink => cursor_blink: bool,
}
