use super::*;
use crate::util::scheduler::manual::ManualScheduler;

#[derive(Clone, Default)]
struct RecordingSink {
    buttons: Rc<RefCell<Vec<(usize, bool)>>>,
    frames: Rc<RefCell<Vec<(usize, CardFrame)>>>,
}

impl CardSink for RecordingSink {
    fn set_button_active(&self, button: usize, active: bool) {
        self.buttons.borrow_mut().push((button, active));
    }

    fn render_card(&self, card: usize, frame: CardFrame) {
        self.frames.borrow_mut().push((card, frame));
    }
}

impl RecordingSink {
    fn last_frame(&self, card: usize) -> Option<CardFrame> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find(|(c, _)| *c == card)
            .map(|(_, f)| *f)
    }

    fn active_buttons(&self, count: usize) -> Vec<usize> {
        let mut state = vec![false; count];
        for (idx, active) in self.buttons.borrow().iter() {
            state[*idx] = *active;
        }
        state.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }
}

fn board() -> FilterBoard {
    FilterBoard::new(
        3,
        Some(0),
        vec![
            ("web".to_owned(), true),
            ("mobile".to_owned(), true),
            ("web".to_owned(), true),
            ("design".to_owned(), true),
        ],
        FilterTiming::default(),
    )
}

fn runner() -> (ManualScheduler, FilterRunner<ManualScheduler, RecordingSink>) {
    let scheduler = ManualScheduler::default();
    let runner = FilterRunner::new(board(), scheduler.clone(), RecordingSink::default());
    (scheduler, runner)
}

fn phases(runner: &FilterRunner<ManualScheduler, RecordingSink>) -> Vec<CardPhase> {
    let board = runner.board();
    (0..board.card_count()).filter_map(|idx| board.phase(idx)).collect()
}

// =============================================================
// Filter
// =============================================================

#[test]
fn all_matches_every_category() {
    let filter = Filter::parse("all");
    assert_eq!(filter, Filter::All);
    assert!(filter.matches("web"));
    assert!(filter.matches(""));
}

#[test]
fn category_matches_exactly() {
    let filter = Filter::parse("web");
    assert!(filter.matches("web"));
    assert!(!filter.matches("Web"));
    assert!(!filter.matches("mobile"));
}

// =============================================================
// CardMotion
// =============================================================

#[test]
fn hide_then_complete_removes_card() {
    let mut motion = CardMotion::new(true);
    let step = motion.request(false, FilterTiming::default()).expect("shown card should start hiding");
    assert_eq!(step.frame, CardFrame::Leave);
    assert_eq!(step.follow_up.delay_ms, 300);
    assert_eq!(motion.phase(), CardPhase::Disappearing);
    assert_eq!(motion.complete(step.follow_up.generation), Some(CardFrame::Remove));
    assert_eq!(motion.phase(), CardPhase::Hidden);
}

#[test]
fn show_then_complete_settles_card() {
    let mut motion = CardMotion::new(false);
    let step = motion.request(true, FilterTiming::default()).expect("hidden card should start showing");
    assert_eq!(step.frame, CardFrame::Enter);
    assert_eq!(step.follow_up.delay_ms, 100);
    assert_eq!(motion.complete(step.follow_up.generation), Some(CardFrame::Settle));
    assert_eq!(motion.phase(), CardPhase::Shown);
}

#[test]
fn repeated_request_in_same_direction_is_noop() {
    let mut motion = CardMotion::new(true);
    assert_eq!(motion.request(true, FilterTiming::default()), None);
    motion.request(false, FilterTiming::default());
    assert_eq!(motion.request(false, FilterTiming::default()), None);
}

#[test]
fn stale_completion_is_ignored() {
    let mut motion = CardMotion::new(true);
    let hide = motion.request(false, FilterTiming::default()).expect("hide step");
    let show = motion.request(true, FilterTiming::default()).expect("show step");
    assert_eq!(motion.complete(hide.follow_up.generation), None);
    assert_eq!(motion.phase(), CardPhase::Appearing);
    assert_eq!(motion.complete(show.follow_up.generation), Some(CardFrame::Settle));
}

#[test]
fn frames_render_expected_styles() {
    assert!(CardFrame::Remove.style().contains(&("display", "none")));
    assert!(CardFrame::Enter.style().contains(&("display", "")));
    assert!(CardFrame::Settle.style().contains(&("opacity", "1")));
    assert!(CardFrame::Leave.style().contains(&("transform", "translateY(-20px)")));
}

// =============================================================
// FilterRunner
// =============================================================

#[test]
fn category_filter_shows_only_matching_cards_after_settling() {
    let (scheduler, runner) = runner();
    runner.select(1, &Filter::parse("web"));
    scheduler.advance(1000);

    assert_eq!(
        phases(&runner),
        vec![CardPhase::Shown, CardPhase::Hidden, CardPhase::Shown, CardPhase::Hidden]
    );
    assert_eq!(runner.sink().last_frame(1), Some(CardFrame::Remove));
    assert_eq!(runner.sink().last_frame(3), Some(CardFrame::Remove));
    assert_eq!(runner.sink().last_frame(0), None);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn all_filter_restores_every_card() {
    let (scheduler, runner) = runner();
    runner.select(1, &Filter::parse("web"));
    scheduler.advance(1000);
    runner.select(0, &Filter::All);
    scheduler.advance(1000);

    assert!(phases(&runner).iter().all(|p| *p == CardPhase::Shown));
    assert_eq!(runner.sink().last_frame(1), Some(CardFrame::Settle));
    assert_eq!(runner.sink().last_frame(3), Some(CardFrame::Settle));
}

#[test]
fn exactly_one_button_is_active() {
    let (_scheduler, runner) = runner();
    runner.select(2, &Filter::parse("design"));
    assert_eq!(runner.board().active_button(), Some(2));
    assert_eq!(runner.sink().active_buttons(3), vec![2]);
    runner.select(1, &Filter::parse("mobile"));
    assert_eq!(runner.sink().active_buttons(3), vec![1]);
}

#[test]
fn rapid_refilter_mid_hide_ends_shown() {
    let (scheduler, runner) = runner();
    runner.select(1, &Filter::parse("mobile"));
    scheduler.advance(150);
    assert_eq!(runner.board().phase(0), Some(CardPhase::Disappearing));

    runner.select(0, &Filter::All);
    scheduler.advance(1000);

    assert!(phases(&runner).iter().all(|p| *p == CardPhase::Shown));
    assert_eq!(runner.sink().last_frame(0), Some(CardFrame::Settle));
    assert!(
        !runner.sink().frames.borrow().iter().any(|(card, frame)| *card == 0 && *frame == CardFrame::Remove),
        "cancelled hide must never pull the card out of layout"
    );
}

#[test]
fn rapid_refilter_mid_show_ends_hidden() {
    let (scheduler, runner) = runner();
    runner.select(1, &Filter::parse("web"));
    scheduler.advance(1000);
    runner.select(0, &Filter::All);
    scheduler.advance(50);
    assert_eq!(runner.board().phase(1), Some(CardPhase::Appearing));

    runner.select(1, &Filter::parse("web"));
    scheduler.advance(1000);

    assert_eq!(runner.board().phase(1), Some(CardPhase::Hidden));
    assert_eq!(runner.sink().last_frame(1), Some(CardFrame::Remove));
    assert!(phases(&runner).iter().all(|p| p.is_settled()));
}

#[test]
fn out_of_range_button_keeps_previous_active() {
    let mut board = board();
    board.activate(7, &Filter::All);
    assert_eq!(board.active_button(), Some(0));
}
