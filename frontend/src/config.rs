use log::warn;
use serde::Deserialize;
use web_sys::Document;

use crate::error::EnhanceError;

pub const NAVBAR: &str = ".navbar";
pub const NAV_LINKS: &str = ".nav-links";
pub const MENU_TOGGLE_ID: &str = "mobile-menu";
pub const REVEAL_TARGETS: &str = ".feature-card, .tech-card, .step-card, .section-header";
pub const FRAGMENT_LINKS: &str = "a[href^=\"#\"]";
pub const DOWNLOAD_BUTTONS: &str = ".btn-download";
pub const PLATFORM_LABEL: &str = ".btn-platform";
pub const ORBS: &str = ".gradient-orb";
pub const GLOW_CARDS: &str = ".feature-card";
pub const NOTIFICATION: &str = ".notification";
pub const CONFIG_SCRIPT_ID: &str = "enhancer-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub stagger_ms: u32,
    pub transition_secs: f64,
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            stagger_ms: 100,
            transition_secs: 0.6,
            offset_px: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub gutter_px: f64,
    pub solid_after_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            gutter_px: 20.0,
            solid_after_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub delay_ms: u32,
    pub mac_url: String,
    pub windows_url: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            mac_url: "https://drive.google.com/u/0/uc?id=1NjaOGekRz-caLx1ec9CUvJ-Y6eFPj0AB&export=download&confirm=t".to_string(),
            windows_url: "https://drive.google.com/u/0/uc?id=1TKzgKrx1zSg-SsXMFNQdhOQ_jyTUgV8H&export=download&confirm=t".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub lifetime_ms: u32,
    /// Must match the CSS transition so the element leaves after it has faded.
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 4000,
            fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub reveal: RevealConfig,
    pub navigation: NavigationConfig,
    pub download: DownloadConfig,
    pub toast: ToastConfig,
    pub parallax_step: f64,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            navigation: NavigationConfig::default(),
            download: DownloadConfig::default(),
            toast: ToastConfig::default(),
            parallax_step: 0.02,
        }
    }
}

impl EnhancerConfig {
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from `<script type="application/json" id="enhancer-config">`.
    /// Pages without the block, or with a broken one, get the defaults.
    pub fn from_document(document: &Document) -> Self {
        let raw = match document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring enhancer config overrides: {}", err);
                Self::default()
            }
        }
    }
}
