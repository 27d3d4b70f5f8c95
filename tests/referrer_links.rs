use error_page_wasm::domain::catalog::{ErrorCatalog, ErrorCode, Referrer};

#[test]
fn referrer_lands_inside_the_back_link() {
    let referrer = Referrer::from("https://news.example.org/article?id=7");
    let text = ErrorCatalog::resolve_code(ErrorCode::NotFound, &referrer);
    assert_eq!(
        text.links_html,
        "You could try <a href=\"https://news.example.org/article?id=7\">going back</a> \
         or <a href=\"/\">going home</a>"
    );
}

#[test]
fn empty_referrer_is_kept_verbatim() {
    // direct visits produce an empty href, same as the shipped page
    let text = ErrorCatalog::resolve_code(ErrorCode::Forbidden, &Referrer::default());
    assert!(text.links_html.contains(r#"<a href="">going back</a>"#));
}

#[test]
fn home_link_always_points_at_the_root() {
    for code in ["403", "404"] {
        let text = ErrorCatalog::resolve(code, &Referrer::from("https://example.com/")).unwrap();
        assert!(
            text.links_html.contains(r#"<a href="/">going home</a>"#),
            "missing home link for {code}"
        );
    }
}

#[test]
fn referrer_value_round_trips() {
    let referrer = Referrer::from("https://example.com/prev");
    assert_eq!(referrer.value(), "https://example.com/prev");
    assert_eq!(referrer.to_string(), "https://example.com/prev");
    assert!(Referrer::default().is_empty());
}
