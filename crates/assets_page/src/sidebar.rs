//! Sticky-sidebar decision for the records page.

use crate::config::AssetsPageConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Measured geometry of the records pane and sidebar, in CSS pixels.
pub struct SidebarLayout {
    /// Distance from the viewport top to the records pane top.
    pub records_top: f64,
    /// Rendered records pane height.
    pub records_height: f64,
    /// Rendered sidebar content height.
    pub sidebar_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What to do with the sidebar `fixed` class.
pub enum SidebarPin {
    /// Add the class.
    Pin,
    /// Remove the class.
    Unpin,
    /// Leave the class as it is.
    Keep,
}

/// Decides whether the sidebar should stay pinned below the page header.
///
/// A sidebar at least as tall as the records pane scrolls with the page and is left alone.
pub fn sidebar_pin(layout: SidebarLayout, config: &AssetsPageConfig) -> SidebarPin {
    if layout.sidebar_height >= layout.records_height {
        return SidebarPin::Keep;
    }
    if layout.records_top <= config.header_height_px + config.sidebar_pin_offset_px {
        SidebarPin::Pin
    } else {
        SidebarPin::Unpin
    }
}
