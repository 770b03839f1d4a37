/// One client mod that can be switched on or off
///
/// The name doubles as the toggle's stable identity: cards and saved
/// layout entries refer to toggles by name, so names must be unique
/// within a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ModToggle {
    /// Unique identifier, also the label shown on the card
    pub name: String,

    /// Description shown in tooltips
    pub description: String,

    /// Whether the mod is currently active
    pub enabled: bool,
}

impl ModToggle {
    /// Creates a new toggle
    pub fn new(name: impl Into<String>, description: impl Into<String>, enabled: bool) -> Self {
        ModToggle {
            name: name.into(),
            description: description.into(),
            enabled,
        }
    }

    /// Flips the enabled state
    pub fn flip(&mut self) {
        self.enabled = !self.enabled;
    }
}
