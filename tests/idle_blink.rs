use std::cell::RefCell;

use error_page_wasm::application::animation::{ErrorPagePresenter, PageAnimation};
use error_page_wasm::domain::catalog::ErrorPageText;
use error_page_wasm::domain::typewriter::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Html(Stage, String),
    Show(Stage),
    Blink(bool),
}

#[derive(Default)]
struct RecordingPresenter {
    events: RefCell<Vec<Event>>,
}

impl ErrorPagePresenter for RecordingPresenter {
    fn set_region_html(&self, stage: Stage, html: &str) {
        self.events
            .borrow_mut()
            .push(Event::Html(stage, html.to_string()));
    }

    fn show_region(&self, stage: Stage) {
        self.events.borrow_mut().push(Event::Show(stage));
    }

    fn set_cursor_blink(&self, on: bool) {
        self.events.borrow_mut().push(Event::Blink(on));
    }
}

fn tiny_page() -> ErrorPageText {
    ErrorPageText {
        title_html: "T".to_string(),
        description_html: "D".to_string(),
        links_html: "L".to_string(),
    }
}

#[test]
fn idle_ticks_only_toggle_the_cursor() {
    let mut animation = PageAnimation::new(tiny_page());
    let presenter = RecordingPresenter::default();
    while animation.tick(&presenter).unwrap() {}
    assert!(animation.is_idle());

    let typed_events = presenter.events.borrow().len();
    for _ in 0..4 {
        let still_typing = animation.tick(&presenter).unwrap();
        assert!(!still_typing);
    }

    let events = presenter.events.borrow();
    let idle_events = &events[typed_events..];
    assert_eq!(
        idle_events,
        &[
            Event::Blink(true),
            Event::Blink(false),
            Event::Blink(true),
            Event::Blink(false),
        ]
    );
}

#[test]
fn committed_regions_never_change_after_idle() {
    let mut animation = PageAnimation::new(tiny_page());
    let presenter = RecordingPresenter::default();
    while animation.tick(&presenter).unwrap() {}

    let html_writes_before = presenter
        .events
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Html(..)))
        .count();

    for _ in 0..10 {
        animation.tick(&presenter).unwrap();
    }

    let html_writes_after = presenter
        .events
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Html(..)))
        .count();
    assert_eq!(html_writes_before, html_writes_after);
}

#[test]
fn single_character_stages_commit_in_two_ticks() {
    let mut animation = PageAnimation::new(tiny_page());
    let presenter = RecordingPresenter::default();
    while animation.tick(&presenter).unwrap() {}

    let events = presenter.events.borrow();
    let title_frames: Vec<&Event> = events
        .iter()
        .filter(|event| matches!(event, Event::Html(Stage::Title, _)))
        .collect();
    assert_eq!(
        title_frames,
        vec![
            &Event::Html(Stage::Title, "T_".to_string()),
            &Event::Html(Stage::Title, "T".to_string()),
        ]
    );
}
