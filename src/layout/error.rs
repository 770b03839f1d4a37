use std::fmt;

/// Errors that can occur during layout operations
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// No card exists for this toggle name
    UnknownCard(String),

    /// Target cells are already occupied by another card
    RegionOccupied { grid_x: i32, grid_y: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::UnknownCard(name) => {
                write!(f, "Unknown card: {}", name)
            }
            LayoutError::RegionOccupied { grid_x, grid_y } => {
                write!(f, "Grid region at ({}, {}) is occupied", grid_x, grid_y)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<LayoutError> for String {
    fn from(error: LayoutError) -> Self {
        error.to_string()
    }
}
