use super::manual::ManualScheduler;
use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_task = Rc::clone(&log);
    let task = move |label: &'static str| {
        let log = Rc::clone(&log_for_task);
        Box::new(move || log.borrow_mut().push(label)) as Box<dyn FnOnce()>
    };
    (log, task)
}

#[test]
fn tasks_run_in_deadline_order() {
    let scheduler = ManualScheduler::default();
    let (log, task) = recorder();
    scheduler.defer(300, task("late"));
    scheduler.defer(100, task("early"));
    scheduler.advance(200);
    assert_eq!(*log.borrow(), vec!["early"]);
    scheduler.advance(100);
    assert_eq!(*log.borrow(), vec!["early", "late"]);
    assert_eq!(scheduler.now_ms(), 300);
}

#[test]
fn dropping_handle_cancels_task() {
    let scheduler = ManualScheduler::default();
    let (log, task) = recorder();
    let handle = scheduler.schedule(50, task("never"));
    drop(handle);
    scheduler.advance(100);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn task_slot_keeps_only_latest() {
    let scheduler = ManualScheduler::default();
    let slot = TaskSlot::<ManualScheduler>::new();
    let (log, task) = recorder();
    slot.replace(scheduler.schedule(100, task("first")));
    slot.replace(scheduler.schedule(100, task("second")));
    scheduler.advance(100);
    assert_eq!(*log.borrow(), vec!["second"]);
}

#[test]
fn task_slot_cancel_clears_pending() {
    let scheduler = ManualScheduler::default();
    let slot = TaskSlot::<ManualScheduler>::new();
    let (log, task) = recorder();
    slot.replace(scheduler.schedule(10, task("cancelled")));
    slot.cancel();
    scheduler.advance(10);
    assert!(log.borrow().is_empty());
}

#[test]
fn tasks_scheduled_while_running_are_honoured() {
    let scheduler = ManualScheduler::default();
    let log = Rc::new(RefCell::new(Vec::new()));
    let inner_scheduler = scheduler.clone();
    let inner_log = Rc::clone(&log);
    scheduler.defer(
        100,
        Box::new(move || {
            inner_log.borrow_mut().push(1);
            let nested_log = Rc::clone(&inner_log);
            inner_scheduler.defer(100, Box::new(move || nested_log.borrow_mut().push(2)));
        }),
    );
    scheduler.advance(150);
    assert_eq!(*log.borrow(), vec![1]);
    scheduler.advance(50);
    assert_eq!(*log.borrow(), vec![1, 2]);
}
