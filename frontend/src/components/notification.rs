use std::fmt;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, HtmlElement};
use wasm_bindgen::JsCast;

use crate::config::{ToastConfig, NOTIFICATION};
use crate::dom::Surface;
use crate::error::EnhanceError;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "linear-gradient(135deg, rgba(139, 92, 246, 0.9), rgba(79, 70, 229, 0.9))",
            ToastKind::Success => "linear-gradient(135deg, rgba(34, 197, 94, 0.9), rgba(22, 163, 74, 0.9))",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Hidden,
    Shown,
}

impl Presence {
    fn apply(self, surface: &dyn Surface) {
        let (opacity, transform) = match self {
            Presence::Hidden => ("0", "translateY(20px)"),
            Presence::Shown => ("1", "translateY(0)"),
        };
        surface.set_style("opacity", opacity);
        surface.set_style("transform", transform);
    }
}

/// Where toasts live. `dismiss_current` removes whatever toast is on the page,
/// `mount` builds and attaches a fresh one.
pub trait ToastHost {
    fn dismiss_current(&self);
    fn mount(&self, message: &str, kind: ToastKind) -> Rc<dyn Surface>;
}

pub struct Toaster {
    host: Rc<dyn ToastHost>,
    scheduler: Rc<dyn Scheduler>,
    timing: ToastConfig,
}

impl Toaster {
    pub fn new(host: Rc<dyn ToastHost>, scheduler: Rc<dyn Scheduler>, timing: ToastConfig) -> Self {
        Self { host, scheduler, timing }
    }

    pub fn show(&self, message: &str, kind: ToastKind) {
        debug!("Toast ({}): {}", kind, message);
        self.host.dismiss_current();

        let toast = self.host.mount(message, kind);
        Presence::Hidden.apply(&*toast);

        // Showing on the next frame lets the browser see the hidden state first,
        // otherwise the transition is skipped.
        let shown = toast.clone();
        self.scheduler
            .next_frame(Box::new(move || Presence::Shown.apply(&*shown)));

        let scheduler = self.scheduler.clone();
        let fade_ms = self.timing.fade_ms;
        self.scheduler.after(
            self.timing.lifetime_ms,
            Box::new(move || {
                Presence::Hidden.apply(&*toast);
                scheduler.after(fade_ms, Box::new(move || toast.detach()));
            }),
        );
    }
}

const TOAST_LAYOUT: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "24px"),
    ("right", "24px"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "12px"),
    ("padding", "16px 24px"),
    ("color", "white"),
    ("border-radius", "12px"),
    ("box-shadow", "0 10px 40px rgba(0, 0, 0, 0.3)"),
    ("z-index", "10000"),
    ("transition", "all 0.3s ease"),
    ("font-family", "Inter, sans-serif"),
    ("font-size", "0.95rem"),
    ("font-weight", "500"),
];

pub struct DocumentToastHost {
    document: Document,
    body: HtmlElement,
}

impl DocumentToastHost {
    pub fn new(document: Document) -> Result<Self, EnhanceError> {
        let body = document.body().ok_or(EnhanceError::NoBody)?;
        Ok(Self { document, body })
    }

    fn span(&self, class: &str, text: &str) -> Result<web_sys::Element, EnhanceError> {
        let span = self
            .document
            .create_element("span")
            .map_err(EnhanceError::js("create toast span"))?;
        span.set_class_name(class);
        span.set_text_content(Some(text));
        Ok(span)
    }

    fn build(&self, message: &str, kind: ToastKind) -> Result<HtmlElement, EnhanceError> {
        let toast = self
            .document
            .create_element("div")
            .map_err(EnhanceError::js("create toast"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| EnhanceError::Js {
                context: "create toast",
                message: "not an HTML element".to_string(),
            })?;
        toast.set_class_name(&format!("notification notification-{}", kind));

        let icon = self.span("notification-icon", kind.icon())?;
        toast
            .append_child(&icon)
            .map_err(EnhanceError::js("append toast icon"))?;
        let text = self.span("notification-message", message)?;
        toast
            .append_child(&text)
            .map_err(EnhanceError::js("append toast message"))?;

        for (property, value) in TOAST_LAYOUT {
            toast.set_style(property, value);
        }
        toast.set_style("background", kind.background());
        Presence::Hidden.apply(&toast);

        self.body
            .append_child(&toast)
            .map_err(EnhanceError::js("append toast"))?;
        Ok(toast)
    }
}

impl ToastHost for DocumentToastHost {
    fn dismiss_current(&self) {
        if let Ok(Some(existing)) = self.document.query_selector(NOTIFICATION) {
            existing.remove();
        }
    }

    fn mount(&self, message: &str, kind: ToastKind) -> Rc<dyn Surface> {
        match self.build(message, kind) {
            Ok(toast) => Rc::new(toast),
            Err(err) => {
                // Keep the toaster's timers happy with a detached element.
                log::warn!("Toast not shown: {}", err);
                Rc::new(Detached)
            }
        }
    }
}

struct Detached;

impl Surface for Detached {
    fn set_style(&self, _property: &str, _value: &str) {}
    fn set_class(&self, _class: &str, _on: bool) {}
    fn detach(&self) {}
}
