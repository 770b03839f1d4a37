//! Layout engine for the card grid
//!
//! The [`Layout`] owns every card on the menu and is the only place card
//! positions are mutated. Its invariant: no two cards' occupied regions
//! overlap. The invariant may be violated transiently inside a single
//! resize or move operation, but holds again before the operation returns.

use super::card::{Card, CellRegion, SizeClass};
use super::error::LayoutError;
use crate::config::{CardConfig, ConfigStore};
use crate::toggle::ToggleRegistry;

/// Columns used for the default placement of cards with no saved config.
const DEFAULT_COLUMNS: i32 = 4;

/// Largest ring searched before falling back to a raster scan.
const MAX_SEARCH_DISTANCE: i32 = 20;

/// Extent (in cells, both axes) of the raster-scan fallback region.
const FALLBACK_SCAN_EXTENT: i32 = 20;

/// All cards on the menu, in catalog order
///
/// Card order matches toggle registration order and never changes; it
/// determines the order in which colliding cards are relocated.
pub struct Layout {
    cards: Vec<Card>,
}

impl Layout {
    /// Builds the layout for a registry, restoring saved placements
    ///
    /// Toggles with a saved config reappear exactly where they were left;
    /// the rest fall into the default pattern of [`DEFAULT_COLUMNS`]
    /// columns in registration order, at normal size.
    pub fn from_registry(registry: &ToggleRegistry, store: &ConfigStore) -> Self {
        let mut cards = Vec::with_capacity(registry.len());

        for (i, toggle) in registry.iter().enumerate() {
            let card = match store.get(&toggle.name) {
                Some(saved) => Card::new(&toggle.name, saved.grid_x, saved.grid_y, saved.size),
                None => Card::new(
                    &toggle.name,
                    i as i32 % DEFAULT_COLUMNS,
                    i as i32 / DEFAULT_COLUMNS,
                    SizeClass::Normal,
                ),
            };
            cards.push(card);
        }

        Layout { cards }
    }

    /// All cards in catalog order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the layout
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the layout holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Looks up a card by toggle name
    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.toggle_name == name)
    }

    /// Mutable lookup, for per-frame hover/drag flags
    ///
    /// Crate-internal: positions must only change through [`Layout::move_card`],
    /// [`Layout::cycle_size`] and [`Layout::resolve_collisions`].
    pub(crate) fn card_mut(&mut self, name: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.toggle_name == name)
    }

    /// Checks whether a hypothetical placement is free of collisions
    ///
    /// True iff no card other than `excluding` occupies any cell of the
    /// region `(grid_x, grid_y)` + footprint of `size`. Evaluated against
    /// the current card positions on every call; results must not be
    /// cached across mutations.
    pub fn is_region_free(
        &self,
        grid_x: i32,
        grid_y: i32,
        size: SizeClass,
        excluding: Option<&str>,
    ) -> bool {
        let candidate = CellRegion::at(grid_x, grid_y, size);

        for card in &self.cards {
            if excluding == Some(card.toggle_name.as_str()) {
                continue;
            }
            if card.region().overlaps(&candidate) {
                return false;
            }
        }

        true
    }

    /// Finds the closest free placement for a card at its current size
    ///
    /// Searches rings of increasing Chebyshev distance around the card's
    /// current position, distance 1 through [`MAX_SEARCH_DISTANCE`]. Each
    /// ring enumerates only its perimeter cells, `dx` in the outer loop
    /// from -d to d and `dy` in the inner loop from -d to d; candidates
    /// are clamped to >= 0 per axis before the occupancy test and the
    /// first free cell wins. This fixed order is part of the contract:
    /// equal inputs always produce the same cell.
    ///
    /// If every ring cell is taken, a row-major raster scan of the
    /// [`FALLBACK_SCAN_EXTENT`] region runs next. If that also finds
    /// nothing, the card's current position is returned and the collision
    /// is tolerated.
    pub fn find_nearest_free_cell(&self, name: &str) -> Result<(i32, i32), LayoutError> {
        let card = self
            .card(name)
            .ok_or_else(|| LayoutError::UnknownCard(name.to_string()))?;
        Ok(self.nearest_free_for(card))
    }

    fn nearest_free_for(&self, card: &Card) -> (i32, i32) {
        for distance in 1..=MAX_SEARCH_DISTANCE {
            for dx in -distance..=distance {
                for dy in -distance..=distance {
                    // Perimeter cells only; the ring interior was covered
                    // at smaller distances.
                    if dx.abs() != distance && dy.abs() != distance {
                        continue;
                    }

                    let new_x = (card.grid_x + dx).max(0);
                    let new_y = (card.grid_y + dy).max(0);

                    if self.is_region_free(new_x, new_y, card.size, Some(&card.toggle_name)) {
                        return (new_x, new_y);
                    }
                }
            }
        }

        // Fallback: take any free cell in the scan region.
        for y in 0..FALLBACK_SCAN_EXTENT {
            for x in 0..FALLBACK_SCAN_EXTENT {
                if self.is_region_free(x, y, card.size, Some(&card.toggle_name)) {
                    return (x, y);
                }
            }
        }

        // No free space found; keep the current position.
        (card.grid_x, card.grid_y)
    }

    /// Relocates every card that overlaps the changed card
    ///
    /// Displaced cards are processed in catalog order and each is moved
    /// once, to its nearest free cell. A displaced card is not re-checked
    /// after later relocations: cascading collisions (possible only when
    /// the search degrades to keeping a position) are left for the next
    /// interaction rather than resolved recursively.
    ///
    /// Returns the names of the cards that moved, in catalog order.
    pub fn resolve_collisions(&mut self, changed: &str) -> Result<Vec<String>, LayoutError> {
        let changed_region = self
            .card(changed)
            .map(|c| c.region())
            .ok_or_else(|| LayoutError::UnknownCard(changed.to_string()))?;

        let mut displaced = Vec::new();

        for i in 0..self.cards.len() {
            if self.cards[i].toggle_name == changed {
                continue;
            }

            if self.cards[i].region().overlaps(&changed_region) {
                let (new_x, new_y) = self.nearest_free_for(&self.cards[i]);
                self.cards[i].grid_x = new_x;
                self.cards[i].grid_y = new_y;
                displaced.push(self.cards[i].toggle_name.clone());
            }
        }

        Ok(displaced)
    }

    /// Advances a card to its next size class and resolves collisions
    ///
    /// Returns the names of the cards displaced by the new footprint.
    pub fn cycle_size(&mut self, name: &str) -> Result<Vec<String>, LayoutError> {
        let card = self
            .card_mut(name)
            .ok_or_else(|| LayoutError::UnknownCard(name.to_string()))?;
        card.size = card.size.next();

        self.resolve_collisions(name)
    }

    /// Moves a card to a new grid position if that position is free
    ///
    /// Unlike [`Layout::cycle_size`], a move never displaces neighbors:
    /// an occupied target is refused and the card keeps its position.
    pub fn move_card(&mut self, name: &str, grid_x: i32, grid_y: i32) -> Result<(), LayoutError> {
        let size = self
            .card(name)
            .map(|c| c.size)
            .ok_or_else(|| LayoutError::UnknownCard(name.to_string()))?;

        if !self.is_region_free(grid_x, grid_y, size, Some(name)) {
            return Err(LayoutError::RegionOccupied { grid_x, grid_y });
        }

        if let Some(card) = self.card_mut(name) {
            card.grid_x = grid_x;
            card.grid_y = grid_y;
        }
        Ok(())
    }

    /// Writes every card's placement through to the config store
    pub fn save_to(&self, store: &mut ConfigStore) {
        for card in &self.cards {
            store.record(
                &card.toggle_name,
                CardConfig {
                    grid_x: card.grid_x,
                    grid_y: card.grid_y,
                    size: card.size,
                },
            );
        }
    }

    /// Resets all per-frame interaction flags
    pub(crate) fn clear_flags(&mut self) {
        for card in &mut self.cards {
            card.is_hovered = false;
            card.resize_hovered = false;
            card.is_dragging = false;
        }
    }

    /// Clears hover flags and recomputes them for the current pointer
    ///
    /// Cards being dragged keep their flags; the screen positions them
    /// under the pointer itself.
    pub(crate) fn refresh_hover(&mut self, px: i32, py: i32) {
        for card in &mut self.cards {
            if card.is_dragging {
                continue;
            }
            card.is_hovered = card.contains(px, py);
            card.resize_hovered = card.resize_button_contains(px, py);
        }
    }
}
