use error_page_wasm::domain::errors::AppError;
use error_page_wasm::domain::typewriter::{RenderState, StepOutcome, Typewriter};

#[test]
fn whole_tag_appears_in_one_step() {
    let text = r#"go <a href="/">home</a>"#;
    let frames = Typewriter::reveal_sequence(text).unwrap();
    assert_eq!(frames[0], "g_");
    assert_eq!(frames[1], "go_");
    assert_eq!(frames[2], "go _");
    // the whole opening tag lands in a single frame
    assert_eq!(frames[3], r#"go <a href="/">_"#);
    assert_eq!(frames[4], r#"go <a href="/">h_"#);
}

#[test]
fn cursor_jumps_past_the_closing_angle() {
    let text = "<b>x";
    let state = RenderState::default();
    match Typewriter::advance(state, text).unwrap() {
        StepOutcome::Frame { next, .. } => assert_eq!(next.value(), 3),
        other => panic!("expected a frame, got {other:?}"),
    }
}

#[test]
fn adjacent_tags_take_one_step_each() {
    let frames = Typewriter::reveal_sequence("<b></b>").unwrap();
    assert_eq!(frames, vec!["<b>_", "<b></b>_", "<b></b>"]);
}

#[test]
fn unclosed_tag_fails_the_reveal() {
    let err = Typewriter::reveal_sequence("bad <a href=\"/\" oops").unwrap_err();
    match err {
        AppError::MalformedMarkup(detail) => {
            assert!(detail.contains("byte 4"), "unexpected detail: {detail}");
        }
        other => panic!("expected MalformedMarkup, got {other:?}"),
    }
}

#[test]
fn malformed_markup_reports_through_display() {
    let err = Typewriter::reveal_sequence("<broken").unwrap_err();
    assert!(err.to_string().starts_with("Malformed markup:"));
}

#[test]
fn lone_closing_angle_is_plain_text() {
    let frames = Typewriter::reveal_sequence("5 > 3").unwrap();
    assert_eq!(frames[2], "5 >_");
    assert_eq!(frames.last().unwrap(), "5 > 3");
}
