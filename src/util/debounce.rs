//! Trailing-edge debounce on top of [`Scheduler`].

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::rc::Rc;

use crate::util::scheduler::{Scheduler, TaskSlot};

/// A function whose invocation is deferred until `wait_ms` has passed since
/// the most recent call. Each call cancels the pending invocation.
pub struct Debounced<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: TaskSlot<S>,
}

pub fn debounce<S, A, F>(scheduler: S, wait_ms: u32, func: F) -> Debounced<S, A>
where
    S: Scheduler,
    F: Fn(A) + 'static,
{
    Debounced { scheduler, wait_ms, func: Rc::new(func), pending: TaskSlot::new() }
}

impl<S: Scheduler, A: 'static> Debounced<S, A> {
    pub fn call(&self, arg: A) {
        let func = Rc::clone(&self.func);
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(move || func(arg)));
        self.pending.replace(handle);
    }

    #[cfg(test)]
    pub fn cancel(&self) {
        self.pending.cancel();
    }
}
