use error_page_wasm::domain::typewriter::Typewriter;
use insta::assert_json_snapshot;

#[test]
fn reveal_frames_snapshot() {
    let frames = Typewriter::reveal_sequence("Hi <b>ok</b>").unwrap();
    assert_json_snapshot!(frames, @r#"
    [
      "H_",
      "Hi_",
      "Hi _",
      "Hi <b>_",
      "Hi <b>o_",
      "Hi <b>ok_",
      "Hi <b>ok</b>_",
      "Hi <b>ok</b>"
    ]
    "#);
}

#[test]
fn title_reveal_snapshot() {
    let frames = Typewriter::reveal_sequence(r#"Error <span class="errorcode">403</span>"#).unwrap();
    assert_json_snapshot!(frames, @r#"
    [
      "E_",
      "Er_",
      "Err_",
      "Erro_",
      "Error_",
      "Error _",
      "Error <span class=\"errorcode\">_",
      "Error <span class=\"errorcode\">4_",
      "Error <span class=\"errorcode\">40_",
      "Error <span class=\"errorcode\">403_",
      "Error <span class=\"errorcode\">403</span>_",
      "Error <span class=\"errorcode\">403</span>"
    ]
    "#);
}
