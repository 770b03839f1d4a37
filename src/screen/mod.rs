//! Menu screen surface
//!
//! This module provides the overlay screens that the host engine displays
//! over the running game. Both variants implement [`MenuScreen`], so the
//! host drives them uniformly:
//! - Feed pointer and key events into the handlers
//! - Call [`MenuScreen::render`] once per frame and draw the returned
//!   [`view::Frame`]
//! - Leave the screen when a handler returns [`ScreenAction::Close`]
//!
//! # Available Screens
//!
//! - [`CardMenu`] - draggable, resizable toggle cards on a grid
//! - [`ToggleListMenu`] - the legacy push-button list

pub mod card_menu;
pub mod toggle_list;
pub mod view;

pub use card_menu::CardMenu;
pub use toggle_list::ToggleListMenu;
pub use view::{ButtonView, CardMenuStyle, CardView, CloseButtonView, Frame};

use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// What the host should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Keep the screen open
    Stay,

    /// Return to the previous screen
    Close,
}

/// Shared contract of the two menu screen variants
///
/// All handlers run synchronously on the thread delivering events; no
/// handler blocks or re-enters another. The host owns the actual window,
/// event pump and drawing; a screen only owns menu state.
pub trait MenuScreen {
    /// Resets transient interaction state when the screen is (re)shown
    fn initialize(&mut self);

    /// Pointer button pressed at (x, y)
    fn pointer_down(&mut self, x: i32, y: i32, button: MouseButton) -> ScreenAction;

    /// Pointer moved to (x, y) with a button possibly held
    fn pointer_moved(&mut self, x: i32, y: i32);

    /// Pointer button released at (x, y)
    fn pointer_up(&mut self, x: i32, y: i32, button: MouseButton) -> ScreenAction;

    /// Key pressed; Escape or the configured menu key closes the screen
    fn key_pressed(&mut self, key: Keycode) -> ScreenAction;

    /// Builds the frame view for the current pointer position
    ///
    /// Also refreshes hover state, so call it once per rendered frame.
    fn render(&mut self, pointer_x: i32, pointer_y: i32) -> view::Frame;

    /// True if the underlying simulation should pause while this screen
    /// is open
    fn pauses_host(&self) -> bool;
}
