//! Navigation bar state

use crate::route::{FORM_PATH, LIST_PATH};

/// One header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Add Blog",
        href: FORM_PATH,
    },
    NavLink {
        label: "View Blog",
        href: LIST_PATH,
    },
];

/// Mobile menu toggle. Desktop always shows the links.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavBar {
    open: bool,
}

impl NavBar {
    pub fn links(&self) -> &'static [NavLink] {
        NAV_LINKS
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link closes the mobile menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}
