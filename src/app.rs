use gloo::utils::{document, window};
use leptos::*;

use crate::{
    application::animation::{ErrorPagePresenter, PageAnimation},
    domain::{
        catalog::Referrer,
        logging::{get_logger, LogComponent},
        typewriter::Stage,
    },
    global_state::{
        cursor_blink, description_html, description_visible, links_html, links_visible,
        title_html, title_visible,
    },
};

/// 🌉 Bridge presenter: writes the reveal into the global view signals
#[derive(Clone, Copy)]
pub struct SignalPresenter;

impl ErrorPagePresenter for SignalPresenter {
    fn set_region_html(&self, stage: Stage, html: &str) {
        match stage {
            Stage::Title => title_html().set(html.to_string()),
            Stage::Description => description_html().set(html.to_string()),
            Stage::Links => links_html().set(html.to_string()),
        }
    }

    fn show_region(&self, stage: Stage) {
        match stage {
            Stage::Title => title_visible().set(true),
            Stage::Description => description_visible().set(true),
            Stage::Links => links_visible().set(true),
        }
    }

    fn set_cursor_blink(&self, on: bool) {
        cursor_blink().set(on);
    }
}

/// Error code requested by the hosting page (`?code=404brain`),
/// defaulting to the 404 page when the query carries none.
pub fn error_code_from_query(search: &str) -> String {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("code="))
        .filter(|code| !code.is_empty())
        .unwrap_or("404")
        .to_string()
}

/// 🖥️ Error page application root
#[component]
pub fn ErrorPageApp() -> impl IntoView {
    // Start the animation once the view is wired up
    create_effect(move |_| {
        spawn_local(async move {
            let search = window().location().search().unwrap_or_default();
            let code = error_code_from_query(&search);
            let referrer = Referrer::from(document().referrer());

            let animation = PageAnimation::for_code(&code, &referrer);
            if let Err(e) = animation.run(SignalPresenter).await {
                get_logger().error(
                    LogComponent::Presentation("ErrorPageApp"),
                    &format!("❌ Animation aborted: {e}"),
                );
            }
        });
    });

    view! {
        <style>
            {r#"
            .error-page {
                font-family: 'Courier New', monospace;
                background: #10171e;
                color: #e0e0e0;
                min-height: 100vh;
                padding: 18vh 24px 0;
                text-align: center;
            }

            .error-title {
                font-size: 42px;
                margin: 0 0 30px;
            }

            .errorcode {
                color: #72c685;
                text-shadow: 0 0 10px rgba(114, 198, 133, 0.3);
            }

            .description-line,
            .link-line {
                font-size: 16px;
                line-height: 1.5;
                margin: 8px 0;
            }

            .error-page a {
                color: #72c685;
            }

            .hidden {
                visibility: hidden;
            }

            .blink-cursor::after {
                content: "_";
            }
            "#}
        </style>
        <div class="error-page">
            <ErrorTitle />
            <DescriptionLine />
            <LinkLine />
        </div>
    }
}

/// Title region - revealed first
#[component]
fn ErrorTitle() -> impl IntoView {
    view! {
        <h1
            id="error-title"
            class="error-title"
            class:hidden=move || !title_visible().get()
            inner_html=move || title_html().get()
        ></h1>
    }
}

/// Description region - revealed after the title commits
#[component]
fn DescriptionLine() -> impl IntoView {
    view! {
        <p
            id="description-line"
            class="description-line"
            class:hidden=move || !description_visible().get()
            inner_html=move || description_html().get()
        ></p>
    }
}

/// Links region - revealed last; carries the idle cursor once the page
/// is fully typed out
#[component]
fn LinkLine() -> impl IntoView {
    view! {
        <p
            id="link-line"
            class="link-line"
            class:hidden=move || !links_visible().get()
            class=("blink-cursor", move || cursor_blink().get())
            inner_html=move || links_html().get()
        ></p>
    }
}
