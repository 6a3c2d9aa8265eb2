use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Deferred execution used by every behavior. Scheduled tasks are
/// fire-and-forget: nothing here can cancel them.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Task);
    fn next_frame(&self, task: Task);
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }

    fn next_frame(&self, task: Task) {
        // Dropping an AnimationFrame cancels it, so the handle stays alive
        // until its own callback runs.
        let handle: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
        let pending = handle.clone();
        let frame = request_animation_frame(move |_| {
            pending.borrow_mut().take();
            task();
        });
        *handle.borrow_mut() = Some(frame);
    }
}
