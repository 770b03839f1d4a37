//! Input translation for menu screens
//!
//! The host engine polls its own SDL2 event pump; this module translates
//! the events a menu cares about into [`MenuEvent`]s and routes them into
//! a [`MenuScreen`]. Decoupling raw input from the screen keeps the
//! screens testable without a window.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use crate::screen::{MenuScreen, ScreenAction};

/// High-level input events a menu screen handles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Pointer button pressed
    PointerDown { x: i32, y: i32, button: MouseButton },

    /// Pointer moved (a button may be held)
    PointerMoved { x: i32, y: i32 },

    /// Pointer button released
    PointerUp { x: i32, y: i32, button: MouseButton },

    /// Key pressed
    KeyPressed(Keycode),
}

/// Translates one SDL2 event into a menu event
///
/// Returns None for event types the menu does not handle (window events,
/// text input, controller input, and so on).
pub fn translate_event(event: &Event) -> Option<MenuEvent> {
    match event {
        Event::MouseButtonDown { mouse_btn, x, y, .. } => Some(MenuEvent::PointerDown {
            x: *x,
            y: *y,
            button: *mouse_btn,
        }),
        Event::MouseMotion { x, y, .. } => Some(MenuEvent::PointerMoved { x: *x, y: *y }),
        Event::MouseButtonUp { mouse_btn, x, y, .. } => Some(MenuEvent::PointerUp {
            x: *x,
            y: *y,
            button: *mouse_btn,
        }),
        Event::KeyDown { keycode: Some(key), .. } => Some(MenuEvent::KeyPressed(*key)),
        _ => None,
    }
}

/// Feeds one menu event into a screen and reports the resulting action
pub fn dispatch(screen: &mut dyn MenuScreen, event: MenuEvent) -> ScreenAction {
    match event {
        MenuEvent::PointerDown { x, y, button } => screen.pointer_down(x, y, button),
        MenuEvent::PointerMoved { x, y } => {
            screen.pointer_moved(x, y);
            ScreenAction::Stay
        }
        MenuEvent::PointerUp { x, y, button } => screen.pointer_up(x, y, button),
        MenuEvent::KeyPressed(key) => screen.key_pressed(key),
    }
}
