//! Browser capabilities detected once at startup, and the strategies they select.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fallback branches are chosen a single time when the controller boots so
//! individual handlers never re-detect the environment.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub intersection_observer: bool,
    pub async_clipboard: bool,
    pub secure_context: bool,
    pub service_worker: bool,
    pub https: bool,
    pub reduced_motion: bool,
}

/// How deferred `data-src` images are promoted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageLoading {
    /// Promote each image when it scrolls into view.
    OnIntersect,
    /// Promote every image immediately.
    Eager,
}

/// How text reaches the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardStrategy {
    /// `navigator.clipboard.writeText`.
    AsyncApi,
    /// Hidden textarea plus `document.execCommand("copy")`.
    ExecCommand,
}

/// Whether scroll-driven animations run at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Animated,
    Reduced,
}

/// Hostnames that get the development console banner.
pub const DEVELOPMENT_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

const DEVELOPMENT_BANNER: &str = "Muhammad Fajri's Website\n\
    Built with vanilla HTML, CSS, and JavaScript\n\
    Developer: Muhammad Fajri\n\
    GitHub: https://github.com/Jii4u\n\
    Thanks for checking out the code!";

pub fn is_development_host(hostname: &str) -> bool {
    DEVELOPMENT_HOSTS.contains(&hostname)
}

/// Console welcome banner, shown only on development hosts.
pub fn development_banner(hostname: &str) -> Option<&'static str> {
    is_development_host(hostname).then_some(DEVELOPMENT_BANNER)
}

impl Capabilities {
    #[must_use]
    pub fn image_loading(&self) -> ImageLoading {
        if self.intersection_observer { ImageLoading::OnIntersect } else { ImageLoading::Eager }
    }

    #[must_use]
    pub fn clipboard(&self) -> ClipboardStrategy {
        if self.async_clipboard && self.secure_context {
            ClipboardStrategy::AsyncApi
        } else {
            ClipboardStrategy::ExecCommand
        }
    }

    /// Reveal and skill-bar animations need both the observer and the
    /// user's consent to motion.
    #[must_use]
    pub fn motion(&self) -> Motion {
        if self.reduced_motion || !self.intersection_observer { Motion::Reduced } else { Motion::Animated }
    }

    #[must_use]
    pub fn registers_service_worker(&self) -> bool {
        self.service_worker && self.https
    }

    /// Detect what the running browser supports.
    #[cfg(feature = "hydrate")]
    pub fn detect(window: &web_sys::Window) -> Self {
        use wasm_bindgen::JsValue;

        let has = |target: &JsValue, name: &str| {
            js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
        };
        let navigator = window.navigator();
        let protocol = window.location().protocol().unwrap_or_default();
        let reduced_motion = matches!(
            window.match_media("(prefers-reduced-motion: reduce)"),
            Ok(Some(query)) if query.matches()
        );

        Self {
            intersection_observer: has(window.as_ref(), "IntersectionObserver"),
            async_clipboard: has(navigator.as_ref(), "clipboard"),
            secure_context: window.is_secure_context(),
            service_worker: has(navigator.as_ref(), "serviceWorker"),
            https: protocol == "https:",
            reduced_motion,
        }
    }
}
