use serde::{Deserialize, Serialize};

use crate::geometry;

/// Edge length of the square resize/settings affordances in pixels.
pub const AFFORDANCE_SIZE: i32 = 12;

/// The four sizes a card can take
///
/// Sizes cycle in declaration order: clicking a card's resize affordance
/// advances Small -> Normal -> Medium -> Large and wraps back to Small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    /// Quarter-size tile, 1x1 cells
    Small,
    /// Standard tile, 1x1 cells
    Normal,
    /// Wide rectangle, 2x1 cells
    Medium,
    /// Big square, 2x2 cells
    Large,
}

impl SizeClass {
    /// Nominal edge length in pixels
    ///
    /// Note: Currently informational; on-screen extent comes from the grid
    /// footprint via [`SizeClass::footprint_pixels`].
    pub fn edge_px(self) -> i32 {
        match self {
            SizeClass::Small => 40,
            SizeClass::Normal => 80,
            SizeClass::Medium => 160,
            SizeClass::Large => 160,
        }
    }

    /// Footprint width in grid cells
    pub fn cells_wide(self) -> i32 {
        match self {
            SizeClass::Small | SizeClass::Normal => 1,
            SizeClass::Medium | SizeClass::Large => 2,
        }
    }

    /// Footprint height in grid cells
    pub fn cells_high(self) -> i32 {
        match self {
            SizeClass::Small | SizeClass::Normal | SizeClass::Medium => 1,
            SizeClass::Large => 2,
        }
    }

    /// The next size in the cycle
    pub fn next(self) -> SizeClass {
        match self {
            SizeClass::Small => SizeClass::Normal,
            SizeClass::Normal => SizeClass::Medium,
            SizeClass::Medium => SizeClass::Large,
            SizeClass::Large => SizeClass::Small,
        }
    }

    /// On-screen dimensions of this size's footprint
    pub fn footprint_pixels(self) -> (i32, i32) {
        geometry::footprint_pixels(self.cells_wide(), self.cells_high())
    }
}

/// The closed rectangle of grid cells a card occupies
///
/// Both intervals are inclusive: a 1x1 card at (2, 3) occupies exactly
/// `[2, 2] x [3, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRegion {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellRegion {
    /// The region covered by a footprint of `size` anchored at (x, y)
    pub fn at(x: i32, y: i32, size: SizeClass) -> Self {
        CellRegion {
            min_x: x,
            min_y: y,
            max_x: x + size.cells_wide() - 1,
            max_y: y + size.cells_high() - 1,
        }
    }

    /// Checks whether two cell regions share at least one cell.
    ///
    /// For two regions to NOT overlap, one must lie entirely to the left,
    /// right, top or bottom of the other. If none of those hold they must
    /// share a cell. Regions that merely touch diagonally at a corner of
    /// the spacing do not share a cell and are not overlapping.
    pub fn overlaps(&self, other: &CellRegion) -> bool {
        !(self.min_x > other.max_x
            || self.max_x < other.min_x
            || self.min_y > other.max_y
            || self.max_y < other.min_y)
    }
}

/// One placeable card on the menu grid
///
/// A card binds a toggle (by name) to a grid position and size. The hover
/// and drag flags are per-frame presentation state maintained by the
/// screen; they never influence placement.
#[derive(Debug, Clone)]
pub struct Card {
    /// Name of the toggle this card controls; the card's stable identity
    pub toggle_name: String,

    /// Grid column of the card's top-left cell (>= 0)
    pub grid_x: i32,

    /// Grid row of the card's top-left cell (>= 0)
    pub grid_y: i32,

    /// Current size class
    pub size: SizeClass,

    /// Pointer is over the card body this frame
    pub is_hovered: bool,

    /// Pointer is over the resize affordance this frame
    pub resize_hovered: bool,

    /// Card is currently being dragged
    pub is_dragging: bool,
}

impl Card {
    /// Creates a card at the given grid position
    pub fn new(toggle_name: impl Into<String>, grid_x: i32, grid_y: i32, size: SizeClass) -> Self {
        Card {
            toggle_name: toggle_name.into(),
            grid_x,
            grid_y,
            size,
            is_hovered: false,
            resize_hovered: false,
            is_dragging: false,
        }
    }

    /// The cells this card occupies
    pub fn region(&self) -> CellRegion {
        CellRegion::at(self.grid_x, self.grid_y, self.size)
    }

    /// Pixel position of the card's top-left corner
    pub fn pixel_pos(&self) -> (i32, i32) {
        geometry::cell_to_pixel(self.grid_x, self.grid_y)
    }

    /// On-screen width and height in pixels
    pub fn pixel_size(&self) -> (i32, i32) {
        self.size.footprint_pixels()
    }

    /// True if the pointer is over the card body
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (x, y) = self.pixel_pos();
        let (w, h) = self.pixel_size();
        px >= x && px <= x + w && py >= y && py <= y + h
    }

    /// Pixel position of the resize affordance (top-right corner)
    pub fn resize_button_origin(&self) -> (i32, i32) {
        let (x, y) = self.pixel_pos();
        let (w, _) = self.pixel_size();
        (x + w - 15, y + 3)
    }

    /// True if the pointer is over the resize affordance
    pub fn resize_button_contains(&self, px: i32, py: i32) -> bool {
        let (bx, by) = self.resize_button_origin();
        px >= bx && px <= bx + AFFORDANCE_SIZE && py >= by && py <= by + AFFORDANCE_SIZE
    }

    /// Pixel position of the settings affordance, if this card has one
    ///
    /// Small cards have no settings affordance; there is no room next to
    /// the resize affordance.
    pub fn settings_button_origin(&self) -> Option<(i32, i32)> {
        if self.size == SizeClass::Small {
            return None;
        }
        let (x, y) = self.pixel_pos();
        let (w, _) = self.pixel_size();
        Some((x + w - 30, y + 3))
    }

    /// True if the pointer is over the settings affordance
    pub fn settings_button_contains(&self, px: i32, py: i32) -> bool {
        match self.settings_button_origin() {
            Some((bx, by)) => {
                px >= bx && px <= bx + AFFORDANCE_SIZE && py >= by && py <= by + AFFORDANCE_SIZE
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_cycle_back_to_start_after_four_steps() {
        let mut size = SizeClass::Small;
        for _ in 0..4 {
            size = size.next();
        }
        assert_eq!(size, SizeClass::Small);

        assert_eq!(SizeClass::Normal.next(), SizeClass::Medium);
        assert_eq!(SizeClass::Large.next(), SizeClass::Small);
    }

    #[test]
    fn footprints_match_size_class() {
        assert_eq!((SizeClass::Small.cells_wide(), SizeClass::Small.cells_high()), (1, 1));
        assert_eq!((SizeClass::Normal.cells_wide(), SizeClass::Normal.cells_high()), (1, 1));
        assert_eq!((SizeClass::Medium.cells_wide(), SizeClass::Medium.cells_high()), (2, 1));
        assert_eq!((SizeClass::Large.cells_wide(), SizeClass::Large.cells_high()), (2, 2));
    }

    #[test]
    fn region_uses_closed_intervals() {
        let region = CellRegion::at(1, 0, SizeClass::Large);
        assert_eq!(
            region,
            CellRegion { min_x: 1, min_y: 0, max_x: 2, max_y: 1 }
        );
    }

    #[test]
    fn identical_regions_overlap() {
        let a = CellRegion::at(3, 3, SizeClass::Normal);
        let b = CellRegion::at(3, 3, SizeClass::Normal);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn adjacent_regions_do_not_overlap() {
        let a = CellRegion::at(0, 0, SizeClass::Normal);
        assert!(!a.overlaps(&CellRegion::at(1, 0, SizeClass::Normal)));
        assert!(!a.overlaps(&CellRegion::at(0, 1, SizeClass::Normal)));
        // Diagonal neighbor shares no cell either.
        assert!(!a.overlaps(&CellRegion::at(1, 1, SizeClass::Normal)));
    }

    #[test]
    fn wide_region_overlaps_cell_under_it() {
        let medium = CellRegion::at(0, 0, SizeClass::Medium);
        assert!(medium.overlaps(&CellRegion::at(1, 0, SizeClass::Normal)));
        assert!(!medium.overlaps(&CellRegion::at(2, 0, SizeClass::Normal)));
    }

    #[test]
    fn small_cards_have_no_settings_button() {
        let small = Card::new("Sprint", 0, 0, SizeClass::Small);
        assert!(small.settings_button_origin().is_none());

        let normal = Card::new("Sprint", 0, 0, SizeClass::Normal);
        assert!(normal.settings_button_origin().is_some());
    }

    #[test]
    fn affordance_hit_testing() {
        let card = Card::new("Sprint", 0, 0, SizeClass::Normal);
        let (bx, by) = card.resize_button_origin();
        assert!(card.resize_button_contains(bx + 1, by + 1));
        assert!(!card.resize_button_contains(bx - 1, by - 1));
        // The resize affordance sits inside the card body.
        assert!(card.contains(bx + 1, by + 1));
    }
}
