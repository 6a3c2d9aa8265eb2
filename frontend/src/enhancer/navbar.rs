use crate::dom::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Transparent,
    Solid,
}

impl NavbarState {
    /// Strictly past the threshold is solid; no hysteresis.
    pub fn at(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarState::Solid
        } else {
            NavbarState::Transparent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarState::Transparent => "rgba(10, 10, 15, 0.8)",
            NavbarState::Solid => "rgba(10, 10, 15, 0.95)",
        }
    }

    pub fn shadow(self) -> &'static str {
        match self {
            NavbarState::Transparent => "none",
            NavbarState::Solid => "0 4px 30px rgba(0, 0, 0, 0.3)",
        }
    }

    pub fn apply(self, navbar: &dyn Surface) {
        navbar.set_style("background", self.background());
        navbar.set_style("box-shadow", self.shadow());
    }
}
