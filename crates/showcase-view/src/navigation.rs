//! # Page Navigation State Machine
//!
//! Three pages, any-to-any transitions:
//!
//! ```text
//!        ┌──────────── navigate ───────────┐
//!        ▼                                  │
//!      HOME ◀──────▶ UPLOAD ◀──────▶ RESULTS
//!        ▲                                  │
//!        └──────────────────────────────────┘
//! ```
//!
//! Entering `Home` re-renders the grid, entering `Results` re-renders the
//! leaderboard, entering `Upload` re-renders nothing. Navigation never
//! touches the project store and always closes the mobile menu.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Upload,
    Results,
}

/// A page name or path that maps to no page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page: \"{0}\"")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Upload, Page::Results];

    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Upload => "upload",
            Self::Results => "results",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Upload => "/upload",
            Self::Results => "/results",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Projects",
            Self::Upload => "Upload",
            Self::Results => "Results",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Home => "th-large",
            Self::Upload => "cloud-upload-alt",
            Self::Results => "trophy",
        }
    }
}

impl std::str::FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// The view a transition asks to be re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Grid,
    Leaderboard,
    Nothing,
}

/// Current page plus the mobile menu toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
    menu_open: bool,
}

impl Navigator {
    /// Starts on the home page with the menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Move to `page`. Re-entering the current page refreshes it again.
    pub fn navigate(&mut self, page: Page) -> Refresh {
        self.current = page;
        self.menu_open = false;
        match page {
            Page::Home => Refresh::Grid,
            Page::Results => Refresh::Leaderboard,
            Page::Upload => Refresh::Nothing,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
