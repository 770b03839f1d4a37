//! In-game mod menu overlay
//!
//! Logic for a single-screen overlay that lets the player switch client
//! mods on and off. Two screen variants share one toggle catalog:
//!
//! - [`CardMenu`]: every toggle is a card on an integer grid. Cards can
//!   be clicked to toggle, dragged to a new cell, and cycled through four
//!   sizes; the layout engine relocates colliding neighbors to the
//!   nearest free cell.
//! - [`ToggleListMenu`]: the legacy list of stock push-buttons.
//!
//! The crate owns no window and draws nothing. The host engine feeds
//! pointer/key events in (see [`input`]) and draws the [`screen::Frame`]
//! returned by [`MenuScreen::render`] each frame. Card placements live in
//! a [`ConfigStore`] owned by the host session, so the layout survives
//! closing and reopening the menu.

pub mod config;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod screen;
pub mod toggle;

pub use config::{CardConfig, ConfigStore};
pub use input::{dispatch, translate_event, MenuEvent};
pub use layout::{Card, CellRegion, Layout, LayoutError, SizeClass};
pub use screen::{CardMenu, CardMenuStyle, Frame, MenuScreen, ScreenAction, ToggleListMenu};
pub use toggle::{ModToggle, ToggleRegistry};
