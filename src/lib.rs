//! Behaviour layer of the portfolio page: the animated particle background,
//! the cursor glow, the typing subtitle, navigation, reveal-on-scroll effects,
//! count-up counters, scroll thresholds and the contact form. Everything
//! browser-facing is exported through `wasm-bindgen`; `Page::start` wires it
//! all up at once.

mod utils;

pub mod color;
pub mod config;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod dom;
pub mod field;
pub mod nav;
pub mod page;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod run_loop;
pub mod scroll;
pub mod surface;
pub mod text;
pub mod typing;

use wasm_bindgen::prelude::*;

pub use config::FieldConfig;
pub use field::{FieldState, ParticleField};
pub use page::Page;
pub use particle::Particle;
pub use run_loop::Background;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and the console logger. Call once before starting
/// anything else; repeated calls are harmless.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("portfolio page behaviour initialized");
    }
}
