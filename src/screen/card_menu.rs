//! Card grid menu screen
//!
//! The advanced menu variant: every toggle is a card on the grid. Cards
//! can be clicked (flip the toggle), dragged to a new cell, or resized
//! through the affordance in their corner, with the layout engine pushing
//! colliding neighbors out of the way. Every mutation writes the layout
//! through to the config store, so reopening the menu restores it.

use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Rect;

use super::view::{CardMenuStyle, CardView, CloseButtonView, Frame};
use super::{MenuScreen, ScreenAction};
use crate::config::ConfigStore;
use crate::geometry;
use crate::layout::card::AFFORDANCE_SIZE;
use crate::layout::{Card, Layout, SizeClass};
use crate::toggle::ToggleRegistry;

/// Manhattan distance (pixels) the pointer must travel from the press
/// point before a press becomes a drag instead of a click.
const DRAG_THRESHOLD: i32 = 5;

/// Edge length of the close button in the screen corner.
const CLOSE_BUTTON_SIZE: i32 = 20;

/// A press that may still become either a click or a drag
struct ActiveDrag {
    /// Toggle name of the pressed card
    name: String,

    /// Pointer position at press time
    press_x: i32,
    press_y: i32,

    /// Pointer offset from the card's top-left pixel at press time
    offset_x: i32,
    offset_y: i32,

    /// Drag threshold has been crossed
    has_dragged: bool,
}

/// The draggable card grid menu
///
/// Borrows the toggle registry and config store for its lifetime; the
/// host creates a fresh `CardMenu` every time the menu opens and the
/// store carries the layout across openings.
pub struct CardMenu<'a> {
    registry: &'a mut ToggleRegistry,
    store: &'a mut ConfigStore,
    layout: Layout,
    style: CardMenuStyle,
    title: String,
    subtitle: String,
    screen_width: i32,
    screen_height: i32,
    menu_key: Keycode,
    drag: Option<ActiveDrag>,
}

/// What a pointer press landed on
enum PressTarget {
    Resize(String),
    Settings,
    Body { name: String, offset_x: i32, offset_y: i32 },
}

impl<'a> CardMenu<'a> {
    /// Creates the menu, restoring card placements from the store
    ///
    /// `menu_key` is the key bound to opening the menu; pressing it again
    /// (or Escape) closes the screen.
    pub fn new(
        registry: &'a mut ToggleRegistry,
        store: &'a mut ConfigStore,
        screen_width: i32,
        screen_height: i32,
        menu_key: Keycode,
    ) -> Self {
        let layout = Layout::from_registry(registry, store);

        CardMenu {
            registry,
            store,
            layout,
            style: CardMenuStyle::default(),
            title: String::from("Mod Menu"),
            subtitle: String::from("Toggle mods on/off"),
            screen_width,
            screen_height,
            menu_key,
            drag: None,
        }
    }

    /// Creates the menu with custom styling
    pub fn with_style(
        registry: &'a mut ToggleRegistry,
        store: &'a mut ConfigStore,
        screen_width: i32,
        screen_height: i32,
        menu_key: Keycode,
        style: CardMenuStyle,
    ) -> Self {
        let mut menu = Self::new(registry, store, screen_width, screen_height, menu_key);
        menu.style = style;
        menu
    }

    /// Colors to draw the menu with
    pub fn style(&self) -> &CardMenuStyle {
        &self.style
    }

    /// Read access to the current card layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Updates the screen dimensions after a host window resize
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    fn close_button_rect(&self) -> Rect {
        Rect::new(
            self.screen_width - 25,
            5,
            CLOSE_BUTTON_SIZE as u32,
            CLOSE_BUTTON_SIZE as u32,
        )
    }

    fn close_button_contains(&self, x: i32, y: i32) -> bool {
        let rect = self.close_button_rect();
        x >= rect.x()
            && x <= rect.x() + CLOSE_BUTTON_SIZE
            && y >= rect.y()
            && y <= rect.y() + CLOSE_BUTTON_SIZE
    }

    /// Finds what a press at (x, y) hits, checking each card's affordances
    /// before its body, in catalog order
    fn press_target(&self, x: i32, y: i32) -> Option<PressTarget> {
        for card in self.layout.cards() {
            if card.resize_button_contains(x, y) {
                return Some(PressTarget::Resize(card.toggle_name.clone()));
            }
            if card.settings_button_contains(x, y) {
                return Some(PressTarget::Settings);
            }
            if card.contains(x, y) {
                let (card_x, card_y) = card.pixel_pos();
                return Some(PressTarget::Body {
                    name: card.toggle_name.clone(),
                    offset_x: x - card_x,
                    offset_y: y - card_y,
                });
            }
        }
        None
    }

    fn status_label(size: SizeClass, enabled: bool) -> &'static str {
        match (size, enabled) {
            (SizeClass::Medium | SizeClass::Large, true) => "ENABLED",
            (SizeClass::Medium | SizeClass::Large, false) => "DISABLED",
            (_, true) => "ON",
            (_, false) => "OFF",
        }
    }

    /// Builds the view for one card at the current pointer position
    fn card_view(&self, card: &Card, pointer_x: i32, pointer_y: i32) -> CardView {
        // A dragged card rides along under the pointer; everything else
        // sits at its grid position.
        let (x, y) = match &self.drag {
            Some(drag) if card.is_dragging && drag.name == card.toggle_name => {
                (pointer_x - drag.offset_x, pointer_y - drag.offset_y)
            }
            _ => card.pixel_pos(),
        };
        let (w, h) = card.pixel_size();

        let resize_button = Rect::new(
            x + w - 15,
            y + 3,
            AFFORDANCE_SIZE as u32,
            AFFORDANCE_SIZE as u32,
        );
        let settings_button = (card.size != SizeClass::Small).then(|| {
            Rect::new(
                x + w - 30,
                y + 3,
                AFFORDANCE_SIZE as u32,
                AFFORDANCE_SIZE as u32,
            )
        });

        let enabled = self
            .registry
            .get(&card.toggle_name)
            .map(|t| t.enabled)
            .unwrap_or(false);

        CardView {
            name: card.toggle_name.clone(),
            rect: Rect::new(x, y, w as u32, h as u32),
            size: card.size,
            enabled,
            hovered: card.is_hovered,
            dragging: card.is_dragging,
            resize_hovered: card.resize_hovered,
            settings_hovered: card.settings_button_contains(pointer_x, pointer_y),
            resize_button,
            settings_button,
            status_label: Self::status_label(card.size, enabled),
        }
    }
}

impl MenuScreen for CardMenu<'_> {
    fn initialize(&mut self) {
        self.drag = None;
        self.layout.clear_flags();
    }

    fn pointer_down(&mut self, x: i32, y: i32, button: MouseButton) -> ScreenAction {
        if button != MouseButton::Left {
            return ScreenAction::Stay;
        }

        if self.close_button_contains(x, y) {
            return ScreenAction::Close;
        }

        match self.press_target(x, y) {
            Some(PressTarget::Resize(name)) => {
                // Resize is terminal for this press; no drag tracking starts.
                if self.layout.cycle_size(&name).is_ok() {
                    self.layout.save_to(self.store);
                }
            }
            Some(PressTarget::Settings) => {
                // Settings affordance is a reserved no-op.
            }
            Some(PressTarget::Body { name, offset_x, offset_y }) => {
                if let Some(card) = self.layout.card_mut(&name) {
                    // Don't start dragging until the threshold is crossed.
                    card.is_dragging = false;
                }
                self.drag = Some(ActiveDrag {
                    name,
                    press_x: x,
                    press_y: y,
                    offset_x,
                    offset_y,
                    has_dragged: false,
                });
            }
            None => {}
        }

        ScreenAction::Stay
    }

    fn pointer_moved(&mut self, x: i32, y: i32) {
        if let Some(drag) = &mut self.drag {
            if !drag.has_dragged {
                let travel = (x - drag.press_x).abs() + (y - drag.press_y).abs();
                if travel > DRAG_THRESHOLD {
                    drag.has_dragged = true;
                    if let Some(card) = self.layout.card_mut(&drag.name) {
                        card.is_dragging = true;
                    }
                }
            }
        }
    }

    fn pointer_up(&mut self, x: i32, y: i32, button: MouseButton) -> ScreenAction {
        if button != MouseButton::Left {
            return ScreenAction::Stay;
        }

        let Some(drag) = self.drag.take() else {
            return ScreenAction::Stay;
        };

        if drag.has_dragged {
            // Snap the card's top-left corner to the nearest cell; an
            // occupied target discards the drag and the card stays put.
            let (grid_x, grid_y) =
                geometry::pixel_to_nearest_cell(x - drag.offset_x, y - drag.offset_y);
            if self.layout.move_card(&drag.name, grid_x, grid_y).is_ok() {
                self.layout.save_to(self.store);
            }
            if let Some(card) = self.layout.card_mut(&drag.name) {
                card.is_dragging = false;
            }
        } else if let Some(toggle) = self.registry.get_mut(&drag.name) {
            // Press without significant movement: plain click.
            toggle.flip();
        }

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
        self.layout.refresh_hover(pointer_x, pointer_y);

        let mut cards = Vec::with_capacity(self.layout.len());
        let mut dragged = None;

        for card in self.layout.cards() {
            let view = self.card_view(card, pointer_x, pointer_y);
            if card.is_dragging {
                dragged = Some(view);
            } else {
                cards.push(view);
            }
        }

        // Dragged card last, so it draws on top.
        if let Some(view) = dragged {
            cards.push(view);
        }

        let close_rect = self.close_button_rect();
        Frame::CardGrid {
            bounds: Rect::new(0, 0, self.screen_width as u32, self.screen_height as u32),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            cards,
            close_button: CloseButtonView {
                rect: close_rect,
                hovered: self.close_button_contains(pointer_x, pointer_y),
            },
        }
    }

    fn pauses_host(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cell_to_pixel;

    const SCREEN_W: i32 = 640;
    const SCREEN_H: i32 = 360;

    fn new_menu<'a>(
        registry: &'a mut ToggleRegistry,
        store: &'a mut ConfigStore,
    ) -> CardMenu<'a> {
        CardMenu::new(registry, store, SCREEN_W, SCREEN_H, Keycode::M)
    }

    fn card_pos(menu: &CardMenu, name: &str) -> (i32, i32) {
        let card = menu.layout().card(name).unwrap();
        (card.grid_x, card.grid_y)
    }

    /// A point safely inside a card's body, away from its affordances.
    fn body_point(menu: &CardMenu, name: &str) -> (i32, i32) {
        let (x, y) = menu.layout().card(name).unwrap().pixel_pos();
        (x + 10, y + 40)
    }

    #[test]
    fn click_without_movement_flips_the_toggle() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        let (x, y) = body_point(&menu, "Bright");
        menu.pointer_down(x, y, MouseButton::Left);
        menu.pointer_up(x, y, MouseButton::Left);

        drop(menu);
        assert!(registry.get("Bright").unwrap().enabled);
    }

    #[test]
    fn click_within_threshold_still_counts_as_click() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        let (x, y) = body_point(&menu, "Bright");
        menu.pointer_down(x, y, MouseButton::Left);
        menu.pointer_moved(x + 2, y + 2);
        menu.pointer_up(x + 2, y + 2, MouseButton::Left);
        assert_eq!(card_pos(&menu, "Bright"), (1, 0));

        drop(menu);
        assert!(registry.get("Bright").unwrap().enabled);
    }

    #[test]
    fn drag_beyond_threshold_moves_without_toggling() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        // Sprint starts at (0, 0); drag it down to the free cell (0, 2).
        let (x, y) = body_point(&menu, "Sprint");
        menu.pointer_down(x, y, MouseButton::Left);
        menu.pointer_moved(x, y + 6);

        let (target_x, target_y) = cell_to_pixel(0, 2);
        menu.pointer_up(target_x + 10, target_y + 40, MouseButton::Left);

        assert_eq!(card_pos(&menu, "Sprint"), (0, 2));
        assert!(!menu.layout().card("Sprint").unwrap().is_dragging);

        drop(menu);
        // A drag is not a click: the toggle keeps its state.
        assert!(registry.get("Sprint").unwrap().enabled);
    }

    #[test]
    fn drag_onto_occupied_cell_is_discarded() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        // Drop Sprint exactly onto Bright's cell (1, 0).
        let (x, y) = body_point(&menu, "Sprint");
        menu.pointer_down(x, y, MouseButton::Left);
        menu.pointer_moved(x, y + 6);

        let (target_x, target_y) = cell_to_pixel(1, 0);
        menu.pointer_up(target_x + 10, target_y + 40, MouseButton::Left);

        assert_eq!(card_pos(&menu, "Sprint"), (0, 0));
        assert_eq!(card_pos(&menu, "Bright"), (1, 0));

        drop(menu);
        assert!(registry.get("Sprint").unwrap().enabled);
    }

    #[test]
    fn resize_press_is_terminal_and_cycles_back_after_four() {
        let mut registry = ToggleRegistry::new();
        registry
            .register(crate::toggle::ModToggle::new("Sprint", "", true))
            .unwrap();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        for _ in 0..4 {
            let card = menu.layout().card("Sprint").unwrap();
            let (bx, by) = card.resize_button_origin();
            menu.pointer_down(bx + 1, by + 1, MouseButton::Left);
            menu.pointer_up(bx + 1, by + 1, MouseButton::Left);
        }

        let card = menu.layout().card("Sprint").unwrap();
        assert_eq!(card.size, SizeClass::Normal);

        drop(menu);
        // Resize presses never toggle the mod.
        assert!(registry.get("Sprint").unwrap().enabled);
    }

    #[test]
    fn resize_pushes_neighbor_and_persists() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        // Two resize presses take Sprint from Normal to Large (2x2).
        for _ in 0..2 {
            let card = menu.layout().card("Sprint").unwrap();
            let (bx, by) = card.resize_button_origin();
            menu.pointer_down(bx + 1, by + 1, MouseButton::Left);
            menu.pointer_up(bx + 1, by + 1, MouseButton::Left);
        }

        assert_eq!(menu.layout().card("Sprint").unwrap().size, SizeClass::Large);
        drop(menu);

        // The displaced neighbors were written through to the store.
        assert_eq!(store.get("Sprint").unwrap().size, SizeClass::Large);
        assert!(store.get("Bright").is_some());
    }

    #[test]
    fn layout_survives_screen_reconstruction() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();

        let mut saved = Vec::new();
        {
            let mut menu = new_menu(&mut registry, &mut store);

            let (x, y) = body_point(&menu, "Fly");
            menu.pointer_down(x, y, MouseButton::Left);
            menu.pointer_moved(x, y + 6);
            let (target_x, target_y) = cell_to_pixel(0, 3);
            menu.pointer_up(target_x + 10, target_y + 40, MouseButton::Left);

            let card = menu.layout().card("Bright").unwrap();
            let (bx, by) = card.resize_button_origin();
            menu.pointer_down(bx + 1, by + 1, MouseButton::Left);

            for card in menu.layout().cards() {
                saved.push((card.toggle_name.clone(), card.grid_x, card.grid_y, card.size));
            }
        }

        // A fresh screen over the same store reproduces every placement.
        let menu = new_menu(&mut registry, &mut store);
        for (name, grid_x, grid_y, size) in saved {
            let card = menu.layout().card(&name).unwrap();
            assert_eq!((card.grid_x, card.grid_y), (grid_x, grid_y));
            assert_eq!(card.size, size);
        }
    }

    #[test]
    fn close_button_and_keys_close_the_screen() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        assert_eq!(
            menu.pointer_down(SCREEN_W - 15, 10, MouseButton::Left),
            ScreenAction::Close
        );
        assert_eq!(menu.key_pressed(Keycode::Escape), ScreenAction::Close);
        assert_eq!(menu.key_pressed(Keycode::M), ScreenAction::Close);
        assert_eq!(menu.key_pressed(Keycode::A), ScreenAction::Stay);
        assert!(menu.pauses_host());
    }

    #[test]
    fn render_puts_dragged_card_last() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        let (x, y) = body_point(&menu, "Sprint");
        menu.pointer_down(x, y, MouseButton::Left);
        menu.pointer_moved(x + 20, y + 20);

        let frame = menu.render(x + 20, y + 20);
        let Frame::CardGrid { cards, .. } = frame else {
            panic!("card menu renders a card grid");
        };

        assert_eq!(cards.len(), 8);
        let last = cards.last().unwrap();
        assert_eq!(last.name, "Sprint");
        assert!(last.dragging);
        // The dragged card follows the pointer, offset by the grab point.
        let (sprint_x, sprint_y) = cell_to_pixel(0, 0);
        assert_eq!(last.rect.x(), x + 20 - (x - sprint_x));
        assert_eq!(last.rect.y(), y + 20 - (y - sprint_y));
    }

    #[test]
    fn render_reports_hover_and_affordances() {
        let mut registry = ToggleRegistry::create_default();
        let mut store = ConfigStore::new();
        let mut menu = new_menu(&mut registry, &mut store);

        let (x, y) = body_point(&menu, "Speed");
        let frame = menu.render(x, y);
        let Frame::CardGrid { cards, close_button, .. } = frame else {
            panic!("card menu renders a card grid");
        };

        let speed = cards.iter().find(|c| c.name == "Speed").unwrap();
        assert!(speed.hovered);
        assert!(!speed.enabled);
        assert_eq!(speed.status_label, "OFF");
        assert!(speed.settings_button.is_some());
        assert!(!close_button.hovered);

        let sprint = cards.iter().find(|c| c.name == "Sprint").unwrap();
        assert!(sprint.enabled);
        assert_eq!(sprint.status_label, "ON");
        assert!(!sprint.hovered);
    }
}
