//! Custom events the page announces to other scripts.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

/// Where a page signal is dispatched. Signals are created without
/// `bubbles`, so listeners only see them on this exact target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalTarget {
    Window,
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSignal {
    pub name: &'static str,
    pub target: SignalTarget,
}

/// Fired once the DOM is parsed, with `detail.timestamp` in epoch millis.
pub const WEBSITE_LOADED: PageSignal = PageSignal { name: "websiteLoaded", target: SignalTarget::Window };
