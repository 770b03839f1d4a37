use super::definition::ModToggle;

/// Central registry of all mod toggles
///
/// This is the single source of truth for which mods exist and whether
/// they are enabled. Cards and saved layout entries reference toggles
/// by name and look them up here.
///
/// Toggles are kept in insertion order. That order is load-bearing: it
/// determines the default grid placement of cards and the order in which
/// colliding cards are relocated, so it must be stable across lookups.
pub struct ToggleRegistry {
    toggles: Vec<ModToggle>,
}

impl ToggleRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ToggleRegistry {
            toggles: Vec::new(),
        }
    }

    /// Creates a registry with all built-in mods pre-registered
    ///
    /// This is called once at client startup to populate the registry
    /// with the stock toggle set.
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.register_base_toggles();
        registry
    }

    /// Registers a new toggle
    ///
    /// Returns an error if a toggle with this name already exists.
    pub fn register(&mut self, toggle: ModToggle) -> Result<(), String> {
        if self.toggles.iter().any(|t| t.name == toggle.name) {
            return Err(format!("Toggle '{}' already registered", toggle.name));
        }

        self.toggles.push(toggle);
        Ok(())
    }

    /// Gets a toggle by name
    ///
    /// Returns None if no toggle with this name exists.
    pub fn get(&self, name: &str) -> Option<&ModToggle> {
        self.toggles.iter().find(|t| t.name == name)
    }

    /// Gets a mutable reference to a toggle by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ModToggle> {
        self.toggles.iter_mut().find(|t| t.name == name)
    }

    /// Returns true if a toggle with this name exists
    pub fn exists(&self, name: &str) -> bool {
        self.toggles.iter().any(|t| t.name == name)
    }

    /// Returns the number of registered toggles
    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    /// Returns true if no toggles are registered
    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Iterates over all toggles in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ModToggle> {
        self.toggles.iter()
    }

    /// Mutable iteration in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ModToggle> {
        self.toggles.iter_mut()
    }

    /// Registers the stock toggle set
    ///
    /// This is where all built-in mods are defined. Add new mods here.
    fn register_base_toggles(&mut self) {
        let base = [
            ("Sprint", true),
            ("Bright", false),
            ("Speed", false),
            ("X-Ray", false),
            ("Fly", false),
            ("NoFall", false),
            ("AutoClicker", false),
            ("Reach", false),
        ];

        for (name, enabled) in base {
            // Names above are distinct, so registration cannot fail
            let _ = self.register(ModToggle::new(name, "", enabled));
        }
    }
}

impl Default for ToggleRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_keeps_registration_order() {
        let registry = ToggleRegistry::create_default();
        let names: Vec<&str> = registry.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sprint", "Bright", "Speed", "X-Ray", "Fly", "NoFall", "AutoClicker", "Reach"]
        );
    }

    #[test]
    fn only_sprint_starts_enabled() {
        let registry = ToggleRegistry::create_default();
        for toggle in registry.iter() {
            assert_eq!(toggle.enabled, toggle.name == "Sprint");
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToggleRegistry::new();
        registry.register(ModToggle::new("Sprint", "", false)).unwrap();
        assert!(registry.register(ModToggle::new("Sprint", "", true)).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_by_name() {
        let registry = ToggleRegistry::create_default();
        assert!(registry.exists("Fly"));
        assert!(registry.get("Fly").is_some());
        assert!(registry.get("Warp").is_none());
    }
}
