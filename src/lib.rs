//! Interactive portfolio site.
//!
//! Everything outside [`frontend`] is target-independent state and
//! geometry, so it runs under `cargo test` on the host. The `frontend`
//! module binds it to the DOM through Yew and only builds for `wasm32`.

pub mod config;
pub mod contact;
pub mod overlay;
pub mod pointer;
pub mod projects;
pub mod scroll;
pub mod telemetry;
pub mod theme;
pub mod typing;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
