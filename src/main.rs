#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("devfolio runs in the browser. Build it with `trunk build --release` and open dist/index.html.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    devfolio::frontend::run();
}
