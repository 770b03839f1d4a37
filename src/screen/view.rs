//! Per-frame view of a menu screen
//!
//! The host engine draws the menu from these structures; they carry every
//! rectangle and flag needed to render a frame without reaching into the
//! layout engine. A fresh [`Frame`] is built once per render callback and
//! always reflects a consistent layout.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::layout::SizeClass;

/// Colors for the card grid menu
#[derive(Debug, Clone)]
pub struct CardMenuStyle {
    /// Fullscreen backdrop gradient, top color
    pub overlay_top: Color,

    /// Fullscreen backdrop gradient, bottom color
    pub overlay_bottom: Color,

    /// Title bar fill
    pub title_bar_color: Color,

    /// Title text color
    pub title_color: Color,

    /// Subtitle text color
    pub subtitle_color: Color,

    /// Card body fill
    pub card_color: Color,

    /// Card body fill while hovered
    pub card_hover_color: Color,

    /// Card border while the toggle is enabled
    pub border_enabled_color: Color,

    /// Card border while the toggle is disabled
    pub border_disabled_color: Color,

    /// Resize/settings affordance fill
    pub affordance_color: Color,

    /// Affordance fill while hovered
    pub affordance_hover_color: Color,

    /// Status bar fill when enabled / disabled
    pub status_on_color: Color,
    pub status_off_color: Color,

    /// Status text color when enabled / disabled
    pub status_text_on_color: Color,
    pub status_text_off_color: Color,

    /// Close button backdrop while hovered
    pub close_hover_color: Color,

    /// Close glyph color, normal and hovered
    pub close_text_color: Color,
    pub close_text_hover_color: Color,
}

impl Default for CardMenuStyle {
    fn default() -> Self {
        CardMenuStyle {
            overlay_top: Color::RGBA(0, 0, 0, 204),
            overlay_bottom: Color::RGBA(17, 17, 17, 221),
            title_bar_color: Color::RGB(26, 26, 26),
            title_color: Color::RGB(0, 170, 255),
            subtitle_color: Color::RGB(170, 170, 170),
            card_color: Color::RGB(46, 46, 46),
            card_hover_color: Color::RGB(54, 54, 54),
            border_enabled_color: Color::RGB(0, 170, 0),
            border_disabled_color: Color::RGB(102, 102, 102),
            affordance_color: Color::RGB(68, 68, 68),
            affordance_hover_color: Color::RGB(85, 85, 85),
            status_on_color: Color::RGB(0, 68, 0),
            status_off_color: Color::RGB(68, 0, 0),
            status_text_on_color: Color::RGB(0, 255, 0),
            status_text_off_color: Color::RGB(255, 68, 68),
            close_hover_color: Color::RGBA(255, 255, 255, 51),
            close_text_color: Color::RGB(170, 170, 170),
            close_text_hover_color: Color::RGB(255, 255, 255),
        }
    }
}

/// One card, ready to draw
#[derive(Debug, Clone)]
pub struct CardView {
    /// Toggle name, also the card's label
    pub name: String,

    /// On-screen rectangle; follows the pointer while dragging
    pub rect: Rect,

    /// Current size class
    pub size: SizeClass,

    /// Toggle state, drives border and status colors
    pub enabled: bool,

    /// Pointer is over the card body
    pub hovered: bool,

    /// Card is being dragged
    pub dragging: bool,

    /// Pointer is over the resize affordance
    pub resize_hovered: bool,

    /// Pointer is over the settings affordance
    pub settings_hovered: bool,

    /// Resize affordance rectangle
    pub resize_button: Rect,

    /// Settings affordance rectangle; absent on small cards
    pub settings_button: Option<Rect>,

    /// Status bar label ("ON"/"OFF", spelled out on larger cards)
    pub status_label: &'static str,
}

/// One push-button of the legacy list menu
#[derive(Debug, Clone)]
pub struct ButtonView {
    pub label: String,
    pub rect: Rect,
    pub hovered: bool,
}

/// The close affordance in the screen corner
#[derive(Debug, Clone, Copy)]
pub struct CloseButtonView {
    pub rect: Rect,
    pub hovered: bool,
}

/// Everything the host needs to draw one frame of a menu screen
#[derive(Debug, Clone)]
pub enum Frame {
    /// The card grid variant
    ///
    /// Cards appear in draw order: a dragged card is always last so it
    /// renders on top.
    CardGrid {
        /// Full screen rectangle, for the backdrop gradient
        bounds: Rect,
        title: String,
        subtitle: String,
        cards: Vec<CardView>,
        close_button: CloseButtonView,
    },

    /// The legacy push-button list variant
    ///
    /// The final button is always "Done".
    ButtonList {
        title: String,
        subtitle: String,
        buttons: Vec<ButtonView>,
    },
}
