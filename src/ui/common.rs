//! Shared UI state, palette and styling helpers.

use eframe::egui::{Color32, Frame, Stroke};

/// Current active screen in the UI navigation state machine.
///
/// Any screen can transition to any other, so a plain enum is enough;
/// the detail screen carries its per-listing state separately in
/// [`super::detail_screen::DetailData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// VIP carousel and listing feed
    Home,
    /// Feed filtered to favorited listings
    Favorites,
    /// Single listing with image carousel and similar rail
    Detail,
}

/// Creates a styled frame with consistent margins and border.
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(4)
        .outer_margin(2)
}

/// Centralized color palette for the dark theme.
///
/// Compile-time constants, organized from darkest to lightest
/// background, with semantic colors for badges and markers.
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas
    pub const MAIN_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Secondary background color for nested components
    pub const INNER_BG: Color32 = Color32::from_rgb(25, 25, 25);

    /// Deepest background color for emphasized content areas
    pub const EXTREME_BG: Color32 = Color32::from_rgb(20, 20, 20);

    /// Border color for component separation
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Price text and highlighted values
    pub const PRICE: Color32 = Color32::from_rgb(120, 220, 120);

    /// VIP badge background
    pub const VIP_BADGE: Color32 = Color32::from_rgb(200, 160, 30);

    /// Favorite heart
    pub const FAVORITE: Color32 = Color32::from_rgb(220, 60, 60);

    /// Secondary text (locations, timestamps, placeholders)
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 140);

    /// Pagination marker for the current image
    pub const MARKER_ACTIVE: Color32 = Color32::from_rgb(230, 230, 230);

    /// Pagination marker for the other images
    pub const MARKER_INACTIVE: Color32 = Color32::from_rgb(90, 90, 90);
}
