use error_page_wasm::app::error_code_from_query;

#[test]
fn reads_the_code_parameter() {
    assert_eq!(error_code_from_query("?code=403"), "403");
    assert_eq!(error_code_from_query("?code=404brain"), "404brain");
}

#[test]
fn finds_the_code_among_other_parameters() {
    assert_eq!(error_code_from_query("?utm=x&code=403&lang=en"), "403");
}

#[test]
fn defaults_to_not_found() {
    assert_eq!(error_code_from_query(""), "404");
    assert_eq!(error_code_from_query("?"), "404");
    assert_eq!(error_code_from_query("?lang=en"), "404");
    // present but empty still falls back
    assert_eq!(error_code_from_query("?code="), "404");
}

#[test]
fn unknown_codes_pass_through_for_the_catalog_to_judge() {
    assert_eq!(error_code_from_query("?code=500"), "500");
}
