//! Page configuration: storage key, timings, and observer tuning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every delay and threshold the controller uses lives here so the page can
//! override them from an inline `<script type="application/json"
//! id="site-config">` block. Missing fields fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_THEME_KEY: &str = "mf_theme";
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the theme literal.
    pub theme_key: String,
    /// Lifetime of the screen-reader theme notice.
    pub theme_notice_ms: u32,
    /// Latency of the simulated contact delivery.
    pub submit_latency_ms: u32,
    /// Delay before a success status clears itself.
    pub status_clear_ms: u32,
    /// Delay between unhiding a filtered card and starting its fade-in.
    pub filter_enter_delay_ms: u32,
    /// Duration of the card fade transition; hidden cards leave layout after it.
    pub filter_transition_ms: u32,
    pub skill_bar_delay_ms: u32,
    pub copy_feedback_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Extra gap kept above a hash-link target after subtracting the header.
    pub scroll_gap_px: f64,
    /// Viewport width above which the mobile navigation is force-closed.
    pub nav_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub service_worker_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            theme_notice_ms: 1000,
            submit_latency_ms: 2000,
            status_clear_ms: 5000,
            filter_enter_delay_ms: 100,
            filter_transition_ms: 300,
            skill_bar_delay_ms: 200,
            copy_feedback_ms: 2000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            scroll_gap_px: 20.0,
            nav_breakpoint_px: 768.0,
            resize_debounce_ms: 150,
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration block. Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Read the inline configuration block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if self.theme_key.trim().is_empty() {
            self.theme_key = DEFAULT_THEME_KEY.to_owned();
        }
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self
    }
}
