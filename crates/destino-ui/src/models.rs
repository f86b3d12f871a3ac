//! Destination options offered by the demo picker and the preview tool.

use crate::components::atoms::icons::{Glyph, glyphs};

/// A selectable destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    /// Stable identifier used to track selection.
    pub id: &'static str,
    /// Text shown on the button.
    pub label: &'static str,
    /// Leading glyph.
    pub glyph: Glyph,
}

/// Fixed destination list used when no caller-provided options exist.
#[must_use]
pub fn demo_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "home",
            label: "Home",
            glyph: glyphs::home(),
        },
        Destination {
            id: "work",
            label: "Work",
            glyph: glyphs::work(),
        },
        Destination {
            id: "school",
            label: "School",
            glyph: glyphs::school(),
        },
        Destination {
            id: "market",
            label: "Market",
            glyph: glyphs::market(),
        },
        Destination {
            id: "hospital",
            label: "Hospital",
            glyph: glyphs::hospital(),
        },
    ]
}

/// Resolves the label of the selected destination, if any.
#[must_use]
pub fn selected_label(
    destinations: &[Destination],
    selected: Option<&str>,
) -> Option<&'static str> {
    let selected = selected?;
    destinations
        .iter()
        .find(|destination| destination.id == selected)
        .map(|destination| destination.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_ids_are_unique_and_labels_non_empty() {
        let destinations = demo_destinations();
        let ids: HashSet<_> = destinations.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), destinations.len());
        assert!(destinations.iter().all(|d| !d.label.trim().is_empty()));
    }

    #[test]
    fn home_uses_the_house_glyph() {
        let home = demo_destinations()[0];
        assert_eq!(home.label, "Home");
        assert_eq!(home.glyph, glyphs::home());
    }

    #[test]
    fn selected_label_resolves_known_ids_only() {
        let destinations = demo_destinations();
        assert_eq!(selected_label(&destinations, Some("market")), Some("Market"));
        assert_eq!(selected_label(&destinations, Some("airport")), None);
        assert_eq!(selected_label(&destinations, None), None);
    }
}
