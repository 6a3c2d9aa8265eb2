/// What a click on an in-page link should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Jump {
    /// Let the browser handle it (bare `#` or not a fragment at all).
    Native,
    /// Suppress the default jump and scroll to `top`, or do nothing when the
    /// fragment names no element.
    Smooth { top: Option<f64> },
}

impl Jump {
    /// Default navigation is cancelled for every fragment link except a bare
    /// `#`, even when the target is missing.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Jump::Smooth { .. })
    }
}

pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts the target just below the fixed navbar.
pub fn scroll_top(target_top: f64, navbar_height: f64, gutter: f64) -> f64 {
    target_top - navbar_height - gutter
}

pub fn plan_jump<F>(href: &str, navbar_height: f64, gutter: f64, offset_of: F) -> Jump
where
    F: FnOnce(&str) -> Option<f64>,
{
    match fragment(href) {
        None => Jump::Native,
        Some(id) => Jump::Smooth {
            top: offset_of(id).map(|top| scroll_top(top, navbar_height, gutter)),
        },
    }
}
