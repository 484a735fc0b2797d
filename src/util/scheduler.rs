//! Timer abstraction driving every delayed step on the page.
//!
//! DESIGN
//! ======
//! A scheduled task returns a handle; dropping the handle cancels the task.
//! Holding the latest handle per element in a [`TaskSlot`] therefore cancels
//! any earlier pending step for that element, which is what keeps rapid
//! re-triggering from racing. The browser implementation is backed by
//! `gloo_timers::callback::Timeout`; tests use a virtual clock.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;

/// Deferred execution of one-shot tasks.
pub trait Scheduler: Clone + 'static {
    /// Cancels the task when dropped, unless [`Scheduler::detach`]ed.
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Let the task run even though its handle goes away.
    fn detach(handle: Self::Handle);

    /// Schedule a task that nothing will ever cancel.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Self::detach(self.schedule(delay_ms, task));
    }
}

/// Holds at most one pending task; storing a new one cancels the previous.
pub struct TaskSlot<S: Scheduler> {
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Default for TaskSlot<S> {
    fn default() -> Self {
        Self { pending: RefCell::new(None) }
    }
}

impl<S: Scheduler> TaskSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, handle: S::Handle) {
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

/// Browser timers backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }

    fn detach(handle: Self::Handle) {
        handle.forget();
    }
}
