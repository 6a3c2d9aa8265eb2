//! In-memory stand-ins for the browser, used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::components::notification::{ToastHost, ToastKind};
use crate::dom::{LinkOpener, Surface};
use crate::scheduler::{Scheduler, Task};

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    timers: Vec<(u64, u64, Task)>,
    frames: Vec<Task>,
}

/// Virtual clock. Time only moves when a test calls `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        let clock = self.clock.borrow();
        clock.timers.len() + clock.frames.len()
    }

    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut self.clock.borrow_mut().frames);
        for frame in frames {
            frame();
        }
    }

    pub fn advance(&self, ms: u64) {
        self.run_frames();
        let target = self.now() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let (at, _, task) = clock.timers.remove(i);
                    clock.now = at;
                    task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let at = clock.now + u64::from(delay_ms);
        let seq = clock.seq;
        clock.seq += 1;
        clock.timers.push((at, seq, task));
    }

    fn next_frame(&self, task: Task) {
        self.clock.borrow_mut().frames.push(task);
    }
}

#[derive(Default)]
pub struct FakeSurface {
    styles: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    detached: Cell<bool>,
    style_writes: Cell<usize>,
}

impl FakeSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl Surface for FakeSurface {
    fn set_style(&self, property: &str, value: &str) {
        self.style_writes.set(self.style_writes.get() + 1);
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn detach(&self) {
        self.detached.set(true);
    }
}

pub struct MountedToast {
    pub message: String,
    pub kind: ToastKind,
    pub surface: Rc<FakeSurface>,
}

/// Mirrors a document body: every mounted toast stays listed, and the ones
/// still attached are what a `.notification` query would find.
#[derive(Default)]
pub struct FakeToastHost {
    mounted: RefCell<Vec<MountedToast>>,
}

impl FakeToastHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn attached(&self) -> Vec<(String, ToastKind, Rc<FakeSurface>)> {
        self.mounted
            .borrow()
            .iter()
            .filter(|toast| !toast.surface.is_detached())
            .map(|toast| (toast.message.clone(), toast.kind, toast.surface.clone()))
            .collect()
    }

    pub fn history(&self) -> Vec<(String, ToastKind)> {
        self.mounted
            .borrow()
            .iter()
            .map(|toast| (toast.message.clone(), toast.kind))
            .collect()
    }
}

impl ToastHost for FakeToastHost {
    fn dismiss_current(&self) {
        if let Some(current) = self
            .mounted
            .borrow()
            .iter()
            .find(|toast| !toast.surface.is_detached())
        {
            current.surface.detach();
        }
    }

    fn mount(&self, message: &str, kind: ToastKind) -> Rc<dyn Surface> {
        let surface = FakeSurface::new();
        self.mounted.borrow_mut().push(MountedToast {
            message: message.to_string(),
            kind,
            surface: surface.clone(),
        });
        surface
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
