use gloo_timers::future::sleep;

use crate::domain::catalog::{ErrorCatalog, ErrorPageText, Referrer};
use crate::domain::errors::RenderResult;
use crate::domain::logging::LogComponent;
use crate::domain::typewriter::{RenderState, Stage, StepOutcome, Timing, Typewriter};
use crate::{log_debug, log_error, log_info};

/// Seam between the animation and the page it draws on.
///
/// Implementations write the three page regions: `app::SignalPresenter`
/// through Leptos signals, `infrastructure::dom::DomErrorPage` straight
/// into the DOM of a statically hosted page.
pub trait ErrorPagePresenter {
    /// Replace a region's markup with the given frame.
    fn set_region_html(&self, stage: Stage, html: &str);
    /// Reveal a region that starts out hidden.
    fn show_region(&self, stage: Stage);
    /// Turn the idle cursor on or off at the end of the links line.
    fn set_cursor_blink(&self, on: bool);
}

/// Where the animation currently is: typing one of the stages, or done
/// and blinking the cursor forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing { stage: Stage, state: RenderState },
    Idle { blink_on: bool },
}

/// Use Case: staged reveal of one error page visit.
///
/// Each instance owns its entire progress, so two pages animating side by
/// side never share state.
pub struct PageAnimation {
    text: ErrorPageText,
    timing: Timing,
    phase: Phase,
    started: bool,
}

impl PageAnimation {
    pub fn new(text: ErrorPageText) -> Self {
        Self::with_timing(text, Timing::default())
    }

    pub fn with_timing(text: ErrorPageText, timing: Timing) -> Self {
        Self {
            text,
            timing,
            phase: Phase::Typing {
                stage: Stage::Title,
                state: RenderState::default(),
            },
            started: false,
        }
    }

    /// Animation for a raw code from the hosting page. Unknown codes get
    /// the 404 page rather than a broken visit.
    pub fn for_code(code: &str, referrer: &Referrer) -> Self {
        log_info!(
            LogComponent::Application("PageAnimation"),
            "🚀 Animating error page for code '{code}'"
        );
        Self::new(ErrorCatalog::resolve_or_fallback(code, referrer))
    }

    pub fn text(&self) -> &ErrorPageText {
        &self.text
    }

    /// True once every stage is committed and only the cursor blinks.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle { .. })
    }

    /// One step of the animation.
    ///
    /// Returns `true` while stages are still typing and `false` from the
    /// moment the page is fully revealed; from then on each call only
    /// toggles the idle cursor.
    pub fn tick(&mut self, presenter: &impl ErrorPagePresenter) -> RenderResult<bool> {
        if !self.started {
            presenter.show_region(Stage::Title);
            self.started = true;
        }

        match self.phase {
            Phase::Typing { stage, state } => {
                let text = self.text.stage_text(stage);
                match Typewriter::advance(state, text) {
                    Ok(StepOutcome::Frame { html, next }) => {
                        presenter.set_region_html(stage, &html);
                        self.phase = Phase::Typing { stage, state: next };
                        Ok(true)
                    }
                    Ok(StepOutcome::Done { html }) => {
                        presenter.set_region_html(stage, &html);
                        match stage.next() {
                            Some(next_stage) => {
                                log_debug!(
                                    LogComponent::Application("PageAnimation"),
                                    "✅ Stage '{stage}' committed, revealing '{next_stage}'"
                                );
                                presenter.show_region(next_stage);
                                self.phase = Phase::Typing {
                                    stage: next_stage,
                                    state: RenderState::default(),
                                };
                                Ok(true)
                            }
                            None => {
                                log_info!(
                                    LogComponent::Application("PageAnimation"),
                                    "✅ Page fully revealed, cursor goes idle"
                                );
                                self.phase = Phase::Idle { blink_on: false };
                                Ok(false)
                            }
                        }
                    }
                    Err(err) => {
                        log_error!(
                            LogComponent::Application("PageAnimation"),
                            "❌ Reveal aborted in stage '{stage}': {err}"
                        );
                        Err(err)
                    }
                }
            }
            Phase::Idle { blink_on } => {
                let now = !blink_on;
                presenter.set_cursor_blink(now);
                self.phase = Phase::Idle { blink_on: now };
                Ok(false)
            }
        }
    }

    /// Drive the animation at its cadence: one step per `type_interval`
    /// while typing, then a cursor toggle per `blink_interval` forever.
    pub async fn run(mut self, presenter: impl ErrorPagePresenter) -> RenderResult<()> {
        while self.tick(&presenter)? {
            sleep(self.timing.type_interval).await;
        }
        loop {
            sleep(self.timing.blink_interval).await;
            self.tick(&presenter)?;
        }
    }
}
