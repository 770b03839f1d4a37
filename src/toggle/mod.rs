// Mod toggle module
//
// This module provides the catalog of client mods that the menu screens
// operate on:
// - Toggle definitions (name, description, enabled state)
// - Toggle registry for centralized, insertion-ordered storage

pub mod definition;
pub mod registry;

// Re-export main types for convenient access
pub use definition::ModToggle;
pub use registry::ToggleRegistry;
