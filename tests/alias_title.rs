use error_page_wasm::domain::catalog::{ErrorCatalog, ErrorCode, Referrer};

#[test]
fn big_brain_page_is_titled_like_a_plain_404() {
    let text = ErrorCatalog::resolve("404brain", &Referrer::default()).unwrap();
    assert_eq!(
        text.title_html,
        r#"Error <span class="errorcode">404</span>"#
    );
    assert!(!text.title_html.contains("brain"));
}

#[test]
fn big_brain_page_keeps_its_own_texts() {
    let text = ErrorCatalog::resolve("404brain", &Referrer::default()).unwrap();
    assert_eq!(
        text.description_html,
        "Steve's \"big brain\" that he keeps talking about couldn't be found \
         (probably because it doesn't exist)"
    );
    assert!(text
        .links_html
        .contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    // the easter egg ignores the referrer entirely
    let with_referrer =
        ErrorCatalog::resolve("404brain", &Referrer::from("https://example.com/")).unwrap();
    assert_eq!(with_referrer.links_html, text.links_html);
}

#[test]
fn display_code_only_masks_the_big_brain_variant() {
    assert_eq!(ErrorCode::Forbidden.display_code(), "403");
    assert_eq!(ErrorCode::NotFound.display_code(), "404");
    assert_eq!(ErrorCode::BigBrain.display_code(), "404");
    assert_eq!(ErrorCode::BigBrain.as_code(), "404brain");
}
