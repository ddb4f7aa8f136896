//! Diagnostics channel for scanner warnings
//!
//! Nothing in the scanning core fails hard: invalid patterns, unicode
//! compile fallbacks and resource ceilings all degrade to empty or truncated
//! output and report through this channel instead.

/// Receives human-readable warnings from the scanners. Implementations must
/// never interrupt control flow.
pub trait DiagnosticsSink {
    fn warn(&self, message: &str);
}

/// Default sink: browser console on wasm32, stderr elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn warn(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("[hopcore] {}", message);
    }
}

// Allows one sink instance to be shared by several cortexes.
impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for std::rc::Rc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Sink that records warnings for inspection in unit tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySink(pub std::cell::RefCell<Vec<String>>);

#[cfg(test)]
impl DiagnosticsSink for MemorySink {
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}
