use std::process::Command;

fn main() {
    // Browser builds need the wasm target; native test builds don't, so a
    // missing target is only worth a warning here.
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        return;
    };
    let installed = String::from_utf8_lossy(&output.stdout);
    let has_wasm = installed
        .lines()
        .any(|line| line.trim() == "wasm32-unknown-unknown");
    if !has_wasm {
        println!(
            "cargo:warning=wasm32-unknown-unknown target not installed; run `rustup target add wasm32-unknown-unknown`"
        );
    }
}
