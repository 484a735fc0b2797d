//! Category filter over project cards, with per-card fade choreography.
//!
//! DESIGN
//! ======
//! Each card runs its own small state machine:
//!
//! ```text
//!   Hidden ──show──▶ Appearing ──tick──▶ Shown
//!     ▲                                    │
//!     └──tick── Disappearing ◀──hide───────┘
//! ```
//!
//! Every request that changes direction bumps the card's generation, and the
//! follow-up tick carries the generation it was scheduled for; a stale tick is
//! ignored. [`FilterRunner`] additionally keeps one pending timer per card and
//! replaces it on each request, so re-filtering mid-animation always settles
//! on the latest request.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::util::scheduler::{Scheduler, TaskSlot};

/// Class marking the selected filter button.
pub const ACTIVE_CLASS: &str = "active";
pub const ALL: &str = "all";

const CARD_TRANSITION: &str = "all 0.3s ease";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL { Self::All } else { Self::Category(raw.to_owned()) }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Shown,
    Appearing,
    Disappearing,
    Hidden,
}

impl CardPhase {
    #[cfg(test)]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Shown | Self::Hidden)
    }
}

/// A style update applied to a card element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFrame {
    /// Back in layout, transparent and shifted down, no transition.
    Enter,
    /// Fade in to the resting position.
    Settle,
    /// Fade out while shifting up.
    Leave,
    /// Out of layout.
    Remove,
}

impl CardFrame {
    /// Inline style properties to set, in order.
    pub fn style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Enter => &[
                ("transition", "none"),
                ("display", ""),
                ("opacity", "0"),
                ("transform", "translateY(20px)"),
            ],
            Self::Settle => &[
                ("transition", CARD_TRANSITION),
                ("opacity", "1"),
                ("transform", "translateY(0)"),
            ],
            Self::Leave => &[
                ("transition", CARD_TRANSITION),
                ("opacity", "0"),
                ("transform", "translateY(-20px)"),
            ],
            Self::Remove => &[("display", "none")],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub delay_ms: u32,
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub frame: CardFrame,
    pub follow_up: FollowUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterTiming {
    pub enter_delay_ms: u32,
    pub transition_ms: u32,
}

impl Default for FilterTiming {
    fn default() -> Self {
        Self { enter_delay_ms: 100, transition_ms: 300 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardMotion {
    phase: CardPhase,
    generation: u64,
}

impl CardMotion {
    pub fn new(visible: bool) -> Self {
        let phase = if visible { CardPhase::Shown } else { CardPhase::Hidden };
        Self { phase, generation: 0 }
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Ask for the card to end up shown (`true`) or hidden. Returns the
    /// immediate frame plus the follow-up to schedule, or `None` when the
    /// card is already heading that way.
    pub fn request(&mut self, show: bool, timing: FilterTiming) -> Option<Step> {
        let (phase, frame, delay_ms) = match (show, self.phase) {
            (true, CardPhase::Hidden | CardPhase::Disappearing) => {
                (CardPhase::Appearing, CardFrame::Enter, timing.enter_delay_ms)
            }
            (false, CardPhase::Shown | CardPhase::Appearing) => {
                (CardPhase::Disappearing, CardFrame::Leave, timing.transition_ms)
            }
            _ => return None,
        };
        self.phase = phase;
        self.generation += 1;
        Some(Step { frame, follow_up: FollowUp { delay_ms, generation: self.generation } })
    }

    /// Finish the transition scheduled as `generation`.
    pub fn complete(&mut self, generation: u64) -> Option<CardFrame> {
        if generation != self.generation {
            return None;
        }
        let (phase, frame) = match self.phase {
            CardPhase::Appearing => (CardPhase::Shown, CardFrame::Settle),
            CardPhase::Disappearing => (CardPhase::Hidden, CardFrame::Remove),
            CardPhase::Shown | CardPhase::Hidden => return None,
        };
        self.phase = phase;
        Some(frame)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Card {
    category: String,
    motion: CardMotion,
}

/// Filter buttons and cards of one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBoard {
    button_count: usize,
    active: Option<usize>,
    cards: Vec<Card>,
    timing: FilterTiming,
}

impl FilterBoard {
    /// `cards` holds each card's category and whether it starts visible.
    pub fn new(button_count: usize, active: Option<usize>, cards: Vec<(String, bool)>, timing: FilterTiming) -> Self {
        let cards = cards
            .into_iter()
            .map(|(category, visible)| Card { category, motion: CardMotion::new(visible) })
            .collect();
        Self { button_count, active: active.filter(|idx| *idx < button_count), cards, timing }
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    pub fn button_count(&self) -> usize {
        self.button_count
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn phase(&self, card: usize) -> Option<CardPhase> {
        self.cards.get(card).map(|c| c.motion.phase())
    }

    /// Make `button` the only active one and compute each card's step.
    pub fn activate(&mut self, button: usize, filter: &Filter) -> Vec<(usize, Step)> {
        if button < self.button_count {
            self.active = Some(button);
        }
        let timing = self.timing;
        self.cards
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, card)| {
                let show = filter.matches(&card.category);
                card.motion.request(show, timing).map(|step| (idx, step))
            })
            .collect()
    }

    pub fn complete(&mut self, card: usize, generation: u64) -> Option<CardFrame> {
        self.cards.get_mut(card)?.motion.complete(generation)
    }
}

/// Rendering surface for filter buttons and cards.
pub trait CardSink {
    fn set_button_active(&self, button: usize, active: bool);
    fn render_card(&self, card: usize, frame: CardFrame);
}

struct RunnerInner<S: Scheduler, V: CardSink> {
    board: RefCell<FilterBoard>,
    pending: Vec<TaskSlot<S>>,
    scheduler: S,
    sink: V,
}

/// Drives a [`FilterBoard`] through a scheduler and a sink.
pub struct FilterRunner<S: Scheduler, V: CardSink> {
    inner: Rc<RunnerInner<S, V>>,
}

impl<S: Scheduler, V: CardSink> Clone for FilterRunner<S, V> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: Scheduler, V: CardSink + 'static> FilterRunner<S, V> {
    pub fn new(board: FilterBoard, scheduler: S, sink: V) -> Self {
        let pending = (0..board.card_count()).map(|_| TaskSlot::new()).collect();
        Self { inner: Rc::new(RunnerInner { board: RefCell::new(board), pending, scheduler, sink }) }
    }

    pub fn board(&self) -> std::cell::Ref<'_, FilterBoard> {
        self.inner.board.borrow()
    }

    pub fn sink(&self) -> &V {
        &self.inner.sink
    }

    /// Handle activation of filter button `button`.
    pub fn select(&self, button: usize, filter: &Filter) {
        let (steps, button_count, active) = {
            let mut board = self.inner.board.borrow_mut();
            let steps = board.activate(button, filter);
            (steps, board.button_count(), board.active_button())
        };
        log::debug!("filter {filter:?}: {} card transitions", steps.len());

        for idx in 0..button_count {
            self.inner.sink.set_button_active(idx, Some(idx) == active);
        }

        for (card, step) in steps {
            self.inner.sink.render_card(card, step.frame);
            let weak: Weak<RunnerInner<S, V>> = Rc::downgrade(&self.inner);
            let generation = step.follow_up.generation;
            let handle = self.inner.scheduler.schedule(
                step.follow_up.delay_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        let frame = inner.board.borrow_mut().complete(card, generation);
                        if let Some(frame) = frame {
                            inner.sink.render_card(card, frame);
                        }
                    }
                }),
            );
            if let Some(slot) = self.inner.pending.get(card) {
                slot.replace(handle);
            }
        }
    }
}
