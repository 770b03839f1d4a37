// Card layout module
//
// This module provides grid placement for the card menu, including:
// - Card and size-class types with their occupied-cell regions
// - The layout engine that detects and resolves card collisions
// - Error types for the programmatic layout API

pub mod card;
pub mod engine;
pub mod error;

// Re-export main types
pub use card::{Card, CellRegion, SizeClass};
pub use engine::Layout;
pub use error::LayoutError;
