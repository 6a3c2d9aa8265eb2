use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::dom::Surface;

const ACTIVE: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkActivated,
    Escape,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkActivated | MenuEvent::Escape) => MenuState::Closed,
        }
    }
}

/// Collapsible nav for small screens. Both `active` markers and the body
/// scroll lock are derived from the single state.
pub struct MobileMenu {
    state: Cell<MenuState>,
    toggle: Rc<dyn Surface>,
    links: Rc<dyn Surface>,
    body: Rc<dyn Surface>,
}

impl MobileMenu {
    pub fn new(toggle: Rc<dyn Surface>, links: Rc<dyn Surface>, body: Rc<dyn Surface>) -> Self {
        Self {
            state: Cell::new(MenuState::Closed),
            toggle,
            links,
            body,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn handle(&self, event: MenuEvent) -> MenuState {
        let previous = self.state();
        let next = previous.next(event);
        if previous == next && event == MenuEvent::Escape {
            return next;
        }
        if previous != next {
            debug!("Mobile menu {:?} -> {:?}", previous, next);
        }
        self.state.set(next);

        let open = next == MenuState::Open;
        self.toggle.set_class(ACTIVE, open);
        self.links.set_class(ACTIVE, open);
        self.body
            .set_style("overflow", if open { "hidden" } else { "initial" });
        next
    }
}
