use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::components::notification::{DocumentToastHost, Toaster};
use crate::config::{self, EnhancerConfig};
use crate::dom::{as_surface, html_elements, query_all, Surface};
use crate::enhancer::download::Downloads;
use crate::enhancer::menu::{MenuEvent, MobileMenu};
use crate::enhancer::navbar::NavbarState;
use crate::enhancer::navigation::{plan_jump, Jump};
use crate::enhancer::pointer::{track_glow, Parallax, Point};
use crate::enhancer::reveal::{Batch, ScrollReveal, REVEAL_INDEX};
use crate::error::EnhanceError;
use crate::scheduler::Scheduler;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Every landing-page behavior, attached to an already rendered document.
/// Dropping the enhancer unregisters all of its listeners; timers already
/// scheduled still run.
pub struct PageEnhancer {
    listeners: Vec<EventListener>,
    _reveal: Option<RevealObserver>,
}

impl PageEnhancer {
    pub fn attach(
        window: Window,
        document: Document,
        scheduler: Rc<dyn Scheduler>,
        config: EnhancerConfig,
    ) -> Result<Self, EnhanceError> {
        let body = document.body().ok_or(EnhanceError::NoBody)?;
        let mut listeners = Vec::new();

        let reveal = attach_reveal(&document, scheduler.clone(), &config)?;
        attach_navigation(&window, &document, &config, &mut listeners);
        attach_navbar(&window, &document, &config, &mut listeners);
        attach_menu(&document, &body, &mut listeners);

        let toaster = Rc::new(Toaster::new(
            Rc::new(DocumentToastHost::new(document.clone())?),
            scheduler.clone(),
            config.toast,
        ));
        let downloads = Rc::new(Downloads::new(
            toaster,
            scheduler,
            Rc::new(window.clone()),
            config.download.clone(),
        ));
        attach_downloads(&document, downloads, &mut listeners);
        attach_pointer(&window, &document, &config, &mut listeners);

        info!("Page enhancer attached ({} listeners)", listeners.len());
        Ok(Self {
            listeners,
            _reveal: reveal,
        })
    }

    /// Attaches to the current browser page, reading config overrides from it.
    pub fn attach_to_page(scheduler: Rc<dyn Scheduler>) -> Result<Self, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
        let document = window.document().ok_or(EnhanceError::NoDocument)?;
        let config = EnhancerConfig::from_document(&document);
        Self::attach(window, document, scheduler, config)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Listener that is allowed to call `prevent_default`.
fn cancelable<F>(target: &web_sys::EventTarget, event: &'static str, handler: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
}

fn attach_reveal(
    document: &Document,
    scheduler: Rc<dyn Scheduler>,
    config: &EnhancerConfig,
) -> Result<Option<RevealObserver>, EnhanceError> {
    let elements = query_all(document, config::REVEAL_TARGETS);
    if elements.is_empty() {
        debug!("No reveal targets on the page");
        return Ok(None);
    }

    for (index, element) in elements.iter().enumerate() {
        let _ = element.set_attribute(REVEAL_INDEX, &index.to_string());
    }
    // Hidden before observing, so nothing flashes in and back out.
    let reveal = ScrollReveal::new(
        elements.iter().map(as_surface).collect(),
        scheduler,
        config.reveal.clone(),
    );
    let watched = reveal.len();

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let batch = Batch::collect(
            entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let target = entry.target();
                    (target.get_attribute(REVEAL_INDEX), entry.is_intersecting(), target)
                }),
        );
        for target in reveal.settle(&batch) {
            observer.unobserve(target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&config.reveal.threshold.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(EnhanceError::js("create intersection observer"))?;
    for element in &elements {
        observer.observe(element);
    }

    info!("Scroll reveal watching {} elements", watched);
    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}

fn navbar_height(document: &Document) -> f64 {
    document
        .query_selector(config::NAVBAR)
        .ok()
        .flatten()
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or(0.0)
}

fn attach_navigation(
    window: &Window,
    document: &Document,
    config: &EnhancerConfig,
    listeners: &mut Vec<EventListener>,
) {
    let links = query_all(document, config::FRAGMENT_LINKS);
    let gutter = config.navigation.gutter_px;

    for link in &links {
        let link_ref = link.clone();
        let window = window.clone();
        let document = document.clone();
        listeners.push(cancelable(link, "click", move |event: &Event| {
            let href = link_ref.get_attribute("href").unwrap_or_default();
            let jump = plan_jump(&href, navbar_height(&document), gutter, |id| {
                document
                    .get_element_by_id(id)
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                    .map(|target| f64::from(target.offset_top()))
            });

            if jump.suppresses_default() {
                event.prevent_default();
            }
            match jump {
                Jump::Smooth { top: Some(top) } => {
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
                Jump::Smooth { top: None } => debug!("No element for {}", href),
                Jump::Native => {}
            }
        }));
    }

    debug!("Smooth scrolling on {} links", links.len());
}

fn attach_navbar(
    window: &Window,
    document: &Document,
    config: &EnhancerConfig,
    listeners: &mut Vec<EventListener>,
) {
    let Some(navbar) = document
        .query_selector(config::NAVBAR)
        .ok()
        .flatten()
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
    else {
        warn!("No navbar found, skipping scroll effect");
        return;
    };

    let threshold = config.navigation.solid_after_px;
    let scroll_y = {
        let window = window.clone();
        move || window.scroll_y().unwrap_or(0.0)
    };

    NavbarState::at(scroll_y(), threshold).apply(&navbar);
    listeners.push(EventListener::new(window, "scroll", move |_| {
        NavbarState::at(scroll_y(), threshold).apply(&navbar);
    }));
}

fn attach_menu(
    document: &Document,
    body: &HtmlElement,
    listeners: &mut Vec<EventListener>,
) {
    let toggle = document
        .get_element_by_id(config::MENU_TOGGLE_ID)
        .and_then(|toggle| toggle.dyn_into::<HtmlElement>().ok());
    let links = document
        .query_selector(config::NAV_LINKS)
        .ok()
        .flatten()
        .and_then(|links| links.dyn_into::<HtmlElement>().ok());
    let (Some(toggle), Some(links)) = (toggle, links) else {
        debug!("No mobile menu on the page");
        return;
    };

    let menu = Rc::new(MobileMenu::new(
        as_surface(&toggle),
        as_surface(&links),
        as_surface(body),
    ));

    {
        let menu = menu.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            menu.handle(MenuEvent::Toggle);
        }));
    }

    let anchors = links
        .query_selector_all("a")
        .map(html_elements)
        .unwrap_or_default();
    for anchor in &anchors {
        let menu = menu.clone();
        listeners.push(EventListener::new(anchor, "click", move |_| {
            menu.handle(MenuEvent::LinkActivated);
        }));
    }

    listeners.push(EventListener::new(document, "keydown", move |event: &Event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            if key.key() == "Escape" {
                menu.handle(MenuEvent::Escape);
            }
        }
    }));
}

fn platform_label(button: &Element) -> String {
    button
        .query_selector(config::PLATFORM_LABEL)
        .ok()
        .flatten()
        .and_then(|label| label.text_content())
        .unwrap_or_default()
}

fn attach_downloads(
    document: &Document,
    downloads: Rc<Downloads>,
    listeners: &mut Vec<EventListener>,
) {
    let buttons = query_all(document, config::DOWNLOAD_BUTTONS);
    for button in &buttons {
        let downloads = downloads.clone();
        let element: Element = button.clone().into();
        listeners.push(cancelable(button, "click", move |event: &Event| {
            event.prevent_default();
            downloads.start(&platform_label(&element));
        }));
    }
    debug!("{} download buttons wired", buttons.len());
}

fn client_point(event: &Event) -> Option<Point> {
    event.dyn_ref::<MouseEvent>().map(|mouse| Point {
        x: f64::from(mouse.client_x()),
        y: f64::from(mouse.client_y()),
    })
}

fn attach_pointer(
    window: &Window,
    document: &Document,
    config: &EnhancerConfig,
    listeners: &mut Vec<EventListener>,
) {
    let orbs = query_all(document, config::ORBS);
    if !orbs.is_empty() {
        let parallax = Parallax::new(orbs.iter().map(as_surface).collect(), config.parallax_step);
        let window = window.clone();
        listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(pointer) = client_point(event) else {
                return;
            };
            let viewport = Point {
                x: window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0),
                y: window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0),
            };
            parallax.on_pointer(pointer, viewport);
        }));
    }

    let cards = query_all(document, config::GLOW_CARDS);
    for card in &cards {
        let surface = card.clone();
        listeners.push(EventListener::new(card, "mousemove", move |event: &Event| {
            let Some(pointer) = client_point(event) else {
                return;
            };
            let rect = surface.get_bounding_client_rect();
            track_glow(
                &surface as &dyn Surface,
                pointer,
                Point {
                    x: rect.left(),
                    y: rect.top(),
                },
            );
        }));
    }

    debug!("Pointer effects: {} orbs, {} cards", orbs.len(), cards.len());
}
