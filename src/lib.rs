//! HopCore: Link Hint Detection + Flash Search Engine
//!
//! A Rust/WASM implementation of the HopCore editor-navigation pipeline.
//! The crate is the pure core of a link-hint / flash-jump system: the host
//! surface extracts visible text, renders hint widgets and captures keys,
//! while HopCore decides *what* can be jumped to and *which* letter sequence
//! selects it.
//!
//! # Architecture
//!
//! ## Hint Components
//! - `hints/labels.rs` - Hint label allocation: shortest collision-free
//!   letter sequences from a restricted alphabet
//! - `hints/compose.rs` - Shared label space across preview-DOM and
//!   source-text candidates
//!
//! ## Scanner Components
//! - `scanner/link.rs` - LinkCortex: four link-syntax detectors with
//!   positional dedup (wiki, external, internal markdown, bare URL)
//! - `scanner/pattern.rs` - RegexCortex: user-pattern scanning with
//!   validation, unicode fallback and resource ceilings
//! - `scanner/flash.rs` - FlashCortex: incremental literal search over the
//!   visible viewport with next-character label exclusion
//! - `scanner/visible.rs` - Viewport contract supplied by the host surface
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { LinkScanner, FlashScanner } from 'hopcore';
//!
//! await init();
//!
//! const links = new LinkScanner();
//! const hints = links.scan(visibleText, startIndex);
//! // [{ letter: 's', index: 4, kind: 'internal', text: 'Note' }, ...]
//!
//! const flash = new FlashScanner();
//! const matches = flash.findMatches('cat', visibleText, startIndex, ranges);
//! ```

pub mod config;
pub mod diagnostics;
pub mod hints;
pub mod scanner;
pub mod wasm;

// Public exports - core
pub use config::*;
pub use diagnostics::*;
pub use hints::*;
pub use scanner::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("hopcore v{}", env!("CARGO_PKG_VERSION"))
}
