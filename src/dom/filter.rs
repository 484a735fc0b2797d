//! `.filter-btn` buttons and the project cards they filter.

use std::rc::Rc;

use web_sys::{Element, HtmlElement, MouseEvent};

use super::controller::Controller;
use super::{DomError, as_html, listen, select_all, set_class, set_style};
use crate::state::filter::{ACTIVE_CLASS, ALL, CardFrame, CardSink, Filter, FilterBoard, FilterRunner, FilterTiming};

pub const BUTTON_SELECTOR: &str = ".filter-btn";
pub const CARD_SELECTOR: &str = ".project[data-category]";

struct DomCardSink {
    buttons: Vec<Element>,
    cards: Vec<HtmlElement>,
}

impl CardSink for DomCardSink {
    fn set_button_active(&self, button: usize, active: bool) {
        if let Some(el) = self.buttons.get(button) {
            set_class(el, ACTIVE_CLASS, active);
        }
    }

    fn render_card(&self, card: usize, frame: CardFrame) {
        let Some(el) = self.cards.get(card) else {
            return;
        };
        for (name, value) in frame.style() {
            set_style(el, name, value);
        }
    }
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;
    let buttons = select_all(&env.document, BUTTON_SELECTOR);
    let cards: Vec<HtmlElement> = select_all(&env.document, CARD_SELECTOR)
        .iter()
        .filter_map(as_html)
        .collect();
    if buttons.is_empty() || cards.is_empty() {
        return Ok(());
    }

    let active = buttons
        .iter()
        .position(|b| b.class_list().contains(ACTIVE_CLASS));
    let card_states = cards
        .iter()
        .map(|card| {
            let category = card.get_attribute("data-category").unwrap_or_default();
            let visible = card.style().get_property_value("display").map_or(true, |d| d != "none");
            (category, visible)
        })
        .collect();
    let timing = FilterTiming {
        enter_delay_ms: env.config.filter_enter_delay_ms,
        transition_ms: env.config.filter_transition_ms,
    };
    let board = FilterBoard::new(buttons.len(), active, card_states, timing);
    let runner = FilterRunner::new(board, env.scheduler, DomCardSink { buttons: buttons.clone(), cards });

    for (idx, button) in buttons.iter().enumerate() {
        let runner = runner.clone();
        let el = button.clone();
        listen(button, "click", move |_: MouseEvent| {
            let raw = el.get_attribute("data-filter").unwrap_or_else(|| ALL.to_owned());
            runner.select(idx, &Filter::parse(&raw));
        })?;
    }
    Ok(())
}
