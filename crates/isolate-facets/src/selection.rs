//! User facet selection state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Checkbox state keyed by facet label.
///
/// Ordered by label, so evaluation does not depend on the order in which
/// boxes were ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    states: BTreeMap<String, bool>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with every given label ticked.
    pub fn with_selected<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for label in labels {
            selection.select(label);
        }
        selection
    }

    pub fn set(&mut self, label: impl Into<String>, selected: bool) {
        self.states.insert(label.into(), selected);
    }

    pub fn select(&mut self, label: impl Into<String>) {
        self.set(label, true);
    }

    pub fn deselect(&mut self, label: impl Into<String>) {
        self.set(label, false);
    }

    /// Flip a label; returns the new state.
    pub fn toggle(&mut self, label: impl Into<String>) -> bool {
        let state = self.states.entry(label.into()).or_insert(false);
        *state = !*state;
        *state
    }

    /// Untick everything.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.states.get(label).copied().unwrap_or(false)
    }

    /// Labels currently ticked, in label order.
    pub fn selected_labels(&self) -> impl Iterator<Item = &str> {
        self.states.iter().filter(|(_, on)| **on).map(|(label, _)| label.as_str())
    }

    pub fn has_selection(&self) -> bool {
        self.states.values().any(|on| *on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_clear() {
        let mut sel = FilterSelection::new();
        assert!(sel.toggle("Laguna"));
        assert!(sel.is_selected("Laguna"));
        assert!(!sel.toggle("Laguna"));
        assert!(!sel.has_selection());

        sel.select("Public");
        sel.select("Bacteria");
        sel.clear();
        assert_eq!(sel.selected_labels().count(), 0);
    }

    #[test]
    fn deselected_labels_are_not_reported() {
        let mut sel = FilterSelection::with_selected(["Public", "Soil"]);
        sel.deselect("Soil");
        assert_eq!(sel.selected_labels().collect::<Vec<_>>(), vec!["Public"]);
    }

    #[test]
    fn json_is_a_plain_object() {
        let sel: FilterSelection = serde_json::from_str(r#"{"Laguna": true, "Fungi": false}"#).unwrap();
        assert!(sel.is_selected("Laguna"));
        assert!(!sel.is_selected("Fungi"));
        assert_eq!(serde_json::to_string(&sel).unwrap(), r#"{"Fungi":false,"Laguna":true}"#);
    }
}
