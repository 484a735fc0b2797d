//! One-shot scroll reveals and skill-bar fill animation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements that fade in when first scrolled into view.
pub const REVEAL_SELECTOR: &str = ".card, .hero-text, .hero-art, .page-header";
/// Added up front so the element starts in its pre-reveal style.
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

pub const SKILL_BAR_SELECTOR: &str = ".progress-fill";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

const COLLAPSED_WIDTH: &str = "0%";

/// Tracks which observed elements have already fired.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: Vec<bool>,
}

impl OneShot {
    pub fn new(len: usize) -> Self {
        Self { fired: vec![false; len] }
    }

    /// Returns `true` only the first time `idx` enters the viewport.
    pub fn fire(&mut self, idx: usize) -> bool {
        match self.fired.get_mut(idx) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn all_fired(&self) -> bool {
        self.fired.iter().all(|f| *f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BarPhase {
    Waiting,
    Collapsed { target: String },
    Filled,
}

/// Skill progress bar: collapses to zero on first sight, then grows back
/// to the width it was authored with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBar {
    phase: BarPhase,
}

impl Default for SkillBar {
    fn default() -> Self {
        Self { phase: BarPhase::Waiting }
    }
}

impl SkillBar {
    #[cfg(test)]
    pub fn phase(&self) -> &BarPhase {
        &self.phase
    }

    /// First viewport entry: snapshot `current_width` and return the width
    /// to apply now. Later entries return `None`.
    pub fn enter(&mut self, current_width: &str) -> Option<&'static str> {
        if self.phase != BarPhase::Waiting {
            return None;
        }
        self.phase = BarPhase::Collapsed { target: current_width.to_owned() };
        Some(COLLAPSED_WIDTH)
    }

    /// Delayed step: the snapshotted width to animate to.
    pub fn fill(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.phase, BarPhase::Filled) {
            BarPhase::Collapsed { target } => Some(target),
            other => {
                self.phase = other;
                None
            }
        }
    }
}
