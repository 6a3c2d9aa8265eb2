use std::fmt;
use std::rc::Rc;

use log::info;

use crate::components::notification::{ToastKind, Toaster};
use crate::config::DownloadConfig;
use crate::dom::LinkOpener;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
}

impl Platform {
    /// Anything that doesn't mention macOS is treated as Windows.
    pub fn from_label(label: &str) -> Self {
        if label.contains("macOS") {
            Platform::MacOs
        } else {
            Platform::Windows
        }
    }

    pub fn url(self, config: &DownloadConfig) -> &str {
        match self {
            Platform::MacOs => &config.mac_url,
            Platform::Windows => &config.windows_url,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
        })
    }
}

/// The simulated download: announce, wait, then open the platform page.
pub struct Downloads {
    toaster: Rc<Toaster>,
    scheduler: Rc<dyn Scheduler>,
    opener: Rc<dyn LinkOpener>,
    config: DownloadConfig,
}

impl Downloads {
    pub fn new(
        toaster: Rc<Toaster>,
        scheduler: Rc<dyn Scheduler>,
        opener: Rc<dyn LinkOpener>,
        config: DownloadConfig,
    ) -> Self {
        Self {
            toaster,
            scheduler,
            opener,
            config,
        }
    }

    pub fn start(&self, label: &str) -> Platform {
        let platform = Platform::from_label(label);
        info!("Download requested for {}", platform);
        self.toaster
            .show(&format!("Preparing {} download...", platform), ToastKind::Info);

        let toaster = self.toaster.clone();
        let opener = self.opener.clone();
        let url = platform.url(&self.config).to_string();
        self.scheduler.after(
            self.config.delay_ms,
            Box::new(move || {
                toaster.show(
                    &format!("Opening {} download page...", platform),
                    ToastKind::Success,
                );
                opener.open_in_new_tab(&url);
            }),
        );
        platform
    }
}
