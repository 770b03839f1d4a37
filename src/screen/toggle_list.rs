//! Legacy toggle list screen
//!
//! The simple menu variant: one stock push-button per toggle in a
//! centered column, plus a Done button near the bottom edge. Kept for
//! hosts that want the plain list instead of the card grid.

use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Rect;

use super::view::{ButtonView, Frame};
use super::{MenuScreen, ScreenAction};
use crate::toggle::ToggleRegistry;

const BUTTON_WIDTH: i32 = 200;
const BUTTON_HEIGHT: i32 = 20;
const LIST_TOP: i32 = 60;
const LIST_STEP: i32 = 25;

/// The legacy push-button list menu
pub struct ToggleListMenu<'a> {
    registry: &'a mut ToggleRegistry,
    title: String,
    subtitle: String,
    screen_width: i32,
    screen_height: i32,
    menu_key: Keycode,
}

impl<'a> ToggleListMenu<'a> {
    /// Creates the list menu over the shared toggle catalog
    pub fn new(
        registry: &'a mut ToggleRegistry,
        screen_width: i32,
        screen_height: i32,
        menu_key: Keycode,
    ) -> Self {
        ToggleListMenu {
            registry,
            title: String::from("Mod Menu"),
            subtitle: String::from("Toggle mods on/off"),
            screen_width,
            screen_height,
            menu_key,
        }
    }

    /// Updates the screen dimensions after a host window resize
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    fn toggle_button_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.screen_width / 2 - BUTTON_WIDTH / 2,
            LIST_TOP + index as i32 * LIST_STEP,
            BUTTON_WIDTH as u32,
            BUTTON_HEIGHT as u32,
        )
    }

    fn done_button_rect(&self) -> Rect {
        Rect::new(
            self.screen_width / 2 - BUTTON_WIDTH / 2,
            self.screen_height - 50,
            BUTTON_WIDTH as u32,
            BUTTON_HEIGHT as u32,
        )
    }

    fn rect_contains(rect: Rect, x: i32, y: i32) -> bool {
        x >= rect.x()
            && x <= rect.x() + rect.width() as i32
            && y >= rect.y()
            && y <= rect.y() + rect.height() as i32
    }
}

impl MenuScreen for ToggleListMenu<'_> {
    fn initialize(&mut self) {
        // The list has no transient interaction state.
    }

    fn pointer_down(&mut self, x: i32, y: i32, button: MouseButton) -> ScreenAction {
        if button != MouseButton::Left {
            return ScreenAction::Stay;
        }

        if Self::rect_contains(self.done_button_rect(), x, y) {
            return ScreenAction::Close;
        }

        let pressed = (0..self.registry.len())
            .find(|&index| Self::rect_contains(self.toggle_button_rect(index), x, y));
        if let Some(index) = pressed {
            if let Some(toggle) = self.registry.iter_mut().nth(index) {
                toggle.flip();
            }
        }

        ScreenAction::Stay
    }

    fn pointer_moved(&mut self, _x: i32, _y: i32) {
        // Stock buttons have no drag behavior.
    }

    fn pointer_up(&mut self, _x: i32, _y: i32, _button: MouseButton) -> ScreenAction {
        ScreenAction::Stay
    }

    fn key_pressed(&mut self, key: Keycode) -> ScreenAction {
        if key == Keycode::Escape || key == self.menu_key {
            ScreenAction::Close
        } else {
            ScreenAction::Stay
        }
    }

    fn render(&mut self, pointer_x: i32, pointer_y: i32) -> Frame {
        let mut buttons = Vec::with_capacity(self.registry.len() + 1);

        for (index, toggle) in self.registry.iter().enumerate() {
            let rect = self.toggle_button_rect(index);
            buttons.push(ButtonView {
                label: format!(
                    "{}: {}",
                    toggle.name,
                    if toggle.enabled { "ON" } else { "OFF" }
                ),
                rect,
                hovered: Self::rect_contains(rect, pointer_x, pointer_y),
            });
        }

        let done_rect = self.done_button_rect();
        buttons.push(ButtonView {
            label: String::from("Done"),
            rect: done_rect,
            hovered: Self::rect_contains(done_rect, pointer_x, pointer_y),
        });

        Frame::ButtonList {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            buttons,
        }
    }

    fn pauses_host(&self) -> bool {
        true
    }
}
