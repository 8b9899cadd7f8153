//! Output surface: where validation results become visible.
//!
//! Each field owns a pair of handles, an error region and a style toggle on
//! its control. [`FieldDisplay`] abstracts that pair so the engine never
//! touches a concrete UI toolkit; [`DisplayMap`] is the explicit mapping from
//! field to handle supplied when the engine is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{Appearance, FieldId};

/// The visible state of one field.
pub trait FieldDisplay {
    /// Writes `text` into the error region and shows it.
    fn show_error(&mut self, text: &str);

    /// Empties the error region and hides it.
    fn clear_error(&mut self);

    /// Sets the control's style toggle.
    fn set_appearance(&mut self, appearance: Appearance);

    /// Returns true if the error region is currently shown.
    fn error_visible(&self) -> bool;
}

/// An in-memory display that records what would be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDisplay {
    error_text: String,
    error_shown: bool,
    appearance: Appearance,
    renders: usize,
}

impl MemoryDisplay {
    /// Creates a blank display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current error text (empty when cleared).
    #[must_use]
    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// The current control style.
    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Number of display mutations applied so far.
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }

    /// Returns true if nothing is shown and the control is neutral.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.error_shown && self.error_text.is_empty() && self.appearance == Appearance::Neutral
    }
}

impl FieldDisplay for MemoryDisplay {
    fn show_error(&mut self, text: &str) {
        text.clone_into(&mut self.error_text);
        self.error_shown = true;
        self.renders += 1;
    }

    fn clear_error(&mut self) {
        self.error_text.clear();
        self.error_shown = false;
        self.renders += 1;
    }

    fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.renders += 1;
    }

    fn error_visible(&self) -> bool {
        self.error_shown
    }
}

/// Explicit mapping from field to its display handle.
#[derive(Debug, Clone)]
pub struct DisplayMap<D> {
    handles: HashMap<FieldId, D>,
}

impl<D> Default for DisplayMap<D> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<D> DisplayMap<D> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `handle` to `field`.
    #[must_use]
    pub fn with(mut self, field: FieldId, handle: D) -> Self {
        self.handles.insert(field, handle);
        self
    }

    /// Attaches `handle` to `field`, returning the previous handle.
    pub fn insert(&mut self, field: FieldId, handle: D) -> Option<D> {
        self.handles.insert(field, handle)
    }

    /// The handle for `field`.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&D> {
        self.handles.get(&field)
    }

    /// The handle for `field`, mutably.
    pub fn get_mut(&mut self, field: FieldId) -> Option<&mut D> {
        self.handles.get_mut(&field)
    }

    /// Returns true if `field` has a handle.
    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        self.handles.contains_key(&field)
    }
}

impl<D: Default> DisplayMap<D> {
    /// A default handle for every field.
    #[must_use]
    pub fn for_all_fields() -> Self {
        FieldId::ALL.into_iter().map(|field| (field, D::default())).collect()
    }
}

impl<D> FromIterator<(FieldId, D)> for DisplayMap<D> {
    fn from_iter<I: IntoIterator<Item = (FieldId, D)>>(iter: I) -> Self {
        Self {
            handles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_display_error_cycle() {
        let mut display = MemoryDisplay::new();
        assert!(display.is_blank());

        display.show_error("required");
        display.set_appearance(Appearance::Invalid);
        assert!(display.error_visible());
        assert_eq!(display.error_text(), "required");
        assert_eq!(display.appearance(), Appearance::Invalid);

        display.clear_error();
        display.set_appearance(Appearance::Neutral);
        assert!(display.is_blank());
        assert_eq!(display.renders(), 4);
    }

    #[test]
    fn test_display_map_for_all_fields() {
        let map: DisplayMap<MemoryDisplay> = DisplayMap::for_all_fields();
        for field in FieldId::ALL {
            assert!(map.contains(field));
        }
    }

    #[test]
    fn test_display_map_partial() {
        let mut map = DisplayMap::new().with(FieldId::Email, MemoryDisplay::new());
        assert!(map.contains(FieldId::Email));
        assert!(!map.contains(FieldId::Phone));
        assert!(map.get_mut(FieldId::Phone).is_none());
        assert!(map.insert(FieldId::Email, MemoryDisplay::new()).is_some());
    }
}
