//! WASM bindings for the navigation core
//!
//! Thin wrappers that serialize core results with serde-wasm-bindgen. All
//! scanning logic lives in the pure modules; this facade only converts
//! values across the JS boundary.

use std::collections::HashSet;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::HopSettings;
use crate::diagnostics::ConsoleSink;
use crate::hints;
use crate::scanner::flash::{find_flash_matches, FlashCortex};
use crate::scanner::link::LinkCortex;
use crate::scanner::pattern::RegexCortex;
use crate::scanner::types::{DetectedLink, SourceHint};
use crate::scanner::visible::{VisibleContent, VisibleContentSource, VisibleRange};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn settings_from_js(settings: JsValue) -> Result<HopSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(HopSettings::default());
    }
    serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))
}

// ==================== HINT LABELS ====================

/// Generate hint labels from an alphabet. `excluded_chars` is a string whose
/// characters are removed from the alphabet (best-effort).
#[wasm_bindgen(js_name = generateHintLabels)]
pub fn generate_hint_labels(
    alphabet: &str,
    count: usize,
    excluded_chars: Option<String>,
) -> Result<JsValue, JsValue> {
    let excluded: Option<HashSet<char>> = excluded_chars.map(|s| s.chars().collect());
    let labels = hints::generate_hint_labels(alphabet, count, excluded.as_ref());
    to_js(&labels)
}

#[derive(Serialize)]
struct ComposedHints {
    preview: Vec<SourceHint>,
    source: Vec<SourceHint>,
}

/// Assign one shared label space across preview-DOM candidates and
/// source-text candidates. Both arguments are arrays of
/// `{ index, kind, text }`.
#[wasm_bindgen(js_name = assignSharedLabels)]
pub fn assign_shared_labels(
    preview: JsValue,
    source: JsValue,
    alphabet: &str,
) -> Result<JsValue, JsValue> {
    let preview: Vec<DetectedLink> = serde_wasm_bindgen::from_value(preview)
        .map_err(|e| JsValue::from_str(&format!("Invalid preview candidates: {}", e)))?;
    let source: Vec<DetectedLink> = serde_wasm_bindgen::from_value(source)
        .map_err(|e| JsValue::from_str(&format!("Invalid source candidates: {}", e)))?;

    let (preview, source) = hints::assign_shared_labels(&preview, &source, alphabet);
    to_js(&ComposedHints { preview, source })
}

// ==================== LINK SCANNER ====================

/// Link detection over visible text
#[wasm_bindgen]
pub struct LinkScanner {
    cortex: LinkCortex,
    letters: String,
}

#[wasm_bindgen]
impl LinkScanner {
    #[wasm_bindgen(constructor)]
    pub fn new(letters: Option<String>) -> Self {
        Self {
            cortex: LinkCortex::new(),
            letters: letters.unwrap_or_else(|| HopSettings::default().letters),
        }
    }

    /// Detect links without labels
    #[wasm_bindgen(js_name = detect)]
    pub fn detect(&self, text: &str, offset: usize) -> Result<JsValue, JsValue> {
        to_js(&self.cortex.detect(text, offset))
    }

    /// Detect links and assign hint labels
    #[wasm_bindgen(js_name = scan)]
    pub fn scan(&self, text: &str, offset: usize) -> Result<JsValue, JsValue> {
        to_js(&self.cortex.detect_with_labels(text, offset, &self.letters))
    }
}

// ==================== REGEX SCANNER ====================

/// User-pattern scanning over visible text
#[wasm_bindgen]
pub struct RegexScanner {
    cortex: RegexCortex,
    settings: HopSettings,
}

#[wasm_bindgen]
impl RegexScanner {
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<RegexScanner, JsValue> {
        Ok(Self {
            cortex: RegexCortex::new(),
            settings: settings_from_js(settings)?,
        })
    }

    /// Scan with an explicit pattern, or the configured jump-anywhere
    /// pattern when none is given
    #[wasm_bindgen(js_name = scan)]
    pub fn scan(
        &self,
        text: &str,
        offset: usize,
        pattern: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let pattern = pattern.unwrap_or_else(|| self.settings.jump_anywhere_pattern.clone());
        to_js(&self.cortex.find_matches(
            text,
            offset,
            &pattern,
            &self.settings.letters,
            self.settings.pattern_case_sensitive,
        ))
    }
}

// ==================== FLASH SCANNER ====================

/// Flash incremental search, viewport supplied per call
#[wasm_bindgen]
pub struct FlashScanner {
    settings: HopSettings,
}

#[wasm_bindgen]
impl FlashScanner {
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<FlashScanner, JsValue> {
        Ok(Self {
            settings: settings_from_js(settings)?,
        })
    }

    /// Find labelled matches in the supplied visible text. `visible_ranges`
    /// is an array of `{ from, to }` document ranges; pass null to treat the
    /// whole text as visible.
    #[wasm_bindgen(js_name = findMatches)]
    pub fn find_matches(
        &self,
        search_string: &str,
        text: &str,
        start_index: usize,
        visible_ranges: JsValue,
    ) -> Result<JsValue, JsValue> {
        let visible = if visible_ranges.is_undefined() || visible_ranges.is_null() {
            VisibleContent::spanning(start_index, text)
        } else {
            let ranges: Vec<VisibleRange> = serde_wasm_bindgen::from_value(visible_ranges)
                .map_err(|e| JsValue::from_str(&format!("Invalid visible ranges: {}", e)))?;
            VisibleContent {
                start_index,
                text: text.to_string(),
                visible_ranges: ranges,
            }
        };

        to_js(&find_flash_matches(
            search_string,
            &visible,
            &self.settings.letters,
            self.settings.flash_case_sensitive,
            &ConsoleSink,
        ))
    }
}

// ==================== BOUND FLASH SCANNER ====================

/// Viewport source backed by a JS callback returning
/// `{ start_index, text, visible_ranges }`.
struct JsViewportSource {
    callback: js_sys::Function,
}

impl VisibleContentSource for JsViewportSource {
    fn visible_content(&self) -> VisibleContent {
        let result = self
            .callback
            .call0(&JsValue::NULL)
            .unwrap_or(JsValue::UNDEFINED);
        serde_wasm_bindgen::from_value(result).unwrap_or(VisibleContent {
            start_index: 0,
            text: String::new(),
            visible_ranges: Vec::new(),
        })
    }
}

/// Flash incremental search bound to a viewport callback, so each keystroke
/// only needs the search string
#[wasm_bindgen]
pub struct BoundFlashScanner {
    cortex: FlashCortex<JsViewportSource>,
}

#[wasm_bindgen]
impl BoundFlashScanner {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport: js_sys::Function, settings: JsValue) -> Result<BoundFlashScanner, JsValue> {
        Ok(Self {
            cortex: FlashCortex::new(JsViewportSource { callback: viewport }, settings_from_js(settings)?),
        })
    }

    #[wasm_bindgen(js_name = findMatches)]
    pub fn find_matches(&self, search_string: &str) -> Result<JsValue, JsValue> {
        to_js(&self.cortex.find_matches(search_string))
    }
}
