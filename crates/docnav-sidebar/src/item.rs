//! Sidebar item types and authored definition parsing.
//!
//! The authored definition is a JSON object mapping sidebar names to item
//! lists. Items carry a `type` discriminator (`doc`, `category`, `link`),
//! represented here as an explicit sum type so handling is exhaustive.
//!
//! Parsing validates the one structural invariant the rest of the system
//! relies on: doc ids are unique across all sidebars in the definition.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One node of the authored sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Link to a document by id. The id must resolve to a known document
    /// at build time.
    Doc {
        /// Document id (e.g., "usage/models").
        id: String,
        /// Display label.
        label: String,
    },
    /// Grouping node. Contributes no navigation entry itself; its `items`
    /// are visited in listed order.
    Category {
        /// Display label.
        label: String,
        /// Child items in navigation order.
        items: Vec<SidebarItem>,
        /// Initial collapsed state in the UI.
        #[serde(default = "default_true")]
        collapsed: bool,
        /// Whether the UI allows collapsing this category.
        #[serde(default = "default_true")]
        collapsible: bool,
    },
    /// External link. Contributes no document entry.
    Link {
        /// Display label.
        label: String,
        /// Link target URL.
        href: String,
    },
}

fn default_true() -> bool {
    true
}

/// Error from parsing or validating a sidebar definition.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Malformed JSON or an unknown item shape.
    #[error("Sidebar parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A doc id appears more than once across the definition.
    #[error("Duplicate doc id in sidebar definition: {0}")]
    DuplicateId(String),
}

/// Named sidebars parsed from an authored JSON definition.
///
/// The map is ordered by name so iteration (and everything derived from it,
/// including the serialized build output) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebars {
    sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl Sidebars {
    /// Parse a sidebar definition from JSON and validate doc id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Parse`] for malformed JSON and
    /// [`SidebarError::DuplicateId`] if any doc id appears more than once.
    pub fn from_json(content: &str) -> Result<Self, SidebarError> {
        let sidebars: Self = serde_json::from_str(content)?;
        sidebars.validate()?;
        Ok(sidebars)
    }

    /// Get a sidebar's items by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[SidebarItem]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Iterate over `(name, items)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of sidebars in the definition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// True if the definition contains no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Check that no doc id appears twice across the whole definition.
    fn validate(&self) -> Result<(), SidebarError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, items) in self.iter() {
            for item in items {
                check_unique_ids(item, &mut seen)?;
            }
        }
        Ok(())
    }
}

/// Recursively collect doc ids, failing on the first duplicate.
fn check_unique_ids<'a>(
    item: &'a SidebarItem,
    seen: &mut HashSet<&'a str>,
) -> Result<(), SidebarError> {
    match item {
        SidebarItem::Doc { id, .. } => {
            if !seen.insert(id) {
                return Err(SidebarError::DuplicateId(id.clone()));
            }
        }
        SidebarItem::Category { items, .. } => {
            for child in items {
                check_unique_ids(child, seen)?;
            }
        }
        SidebarItem::Link { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(id: &str, label: &str) -> SidebarItem {
        SidebarItem::Doc {
            id: id.to_owned(),
            label: label.to_owned(),
        }
    }

    // Parsing tests

    #[test]
    fn test_from_json_doc_item() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [{"type": "doc", "id": "index", "label": "Introduction"}]}"#,
        )
        .unwrap();

        assert_eq!(
            sidebars.get("sidebar").unwrap(),
            &[doc("index", "Introduction")]
        );
    }

    #[test]
    fn test_from_json_category_defaults_collapsed_and_collapsible() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [{"type": "category", "label": "Usage", "items": []}]}"#,
        )
        .unwrap();

        let items = sidebars.get("sidebar").unwrap();
        assert_eq!(
            items,
            &[SidebarItem::Category {
                label: "Usage".to_owned(),
                items: Vec::new(),
                collapsed: true,
                collapsible: true,
            }]
        );
    }

    #[test]
    fn test_from_json_category_explicit_flags() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [{
                "type": "category", "label": "Usage", "items": [],
                "collapsed": false, "collapsible": false
            }]}"#,
        )
        .unwrap();

        let SidebarItem::Category {
            collapsed,
            collapsible,
            ..
        } = &sidebars.get("sidebar").unwrap()[0]
        else {
            panic!("expected category");
        };
        assert!(!collapsed);
        assert!(!collapsible);
    }

    #[test]
    fn test_from_json_link_item() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [{"type": "link", "label": "GitHub", "href": "https://github.com/example"}]}"#,
        )
        .unwrap();

        assert_eq!(
            sidebars.get("sidebar").unwrap(),
            &[SidebarItem::Link {
                label: "GitHub".to_owned(),
                href: "https://github.com/example".to_owned(),
            }]
        );
    }

    #[test]
    fn test_from_json_unknown_type_fails() {
        let result = Sidebars::from_json(r#"{"sidebar": [{"type": "page", "label": "X"}]}"#);

        assert!(matches!(result, Err(SidebarError::Parse(_))));
    }

    #[test]
    fn test_from_json_malformed_json_fails() {
        let result = Sidebars::from_json("{not json");

        assert!(matches!(result, Err(SidebarError::Parse(_))));
    }

    #[test]
    fn test_from_json_empty_object_is_empty() {
        let sidebars = Sidebars::from_json("{}").unwrap();

        assert!(sidebars.is_empty());
        assert_eq!(sidebars.len(), 0);
    }

    #[test]
    fn test_from_json_multiple_sidebars() {
        let sidebars = Sidebars::from_json(
            r#"{
                "docs": [{"type": "doc", "id": "index", "label": "Home"}],
                "api": [{"type": "doc", "id": "api", "label": "API"}]
            }"#,
        )
        .unwrap();

        assert_eq!(sidebars.len(), 2);
        let names: Vec<_> = sidebars.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["api", "docs"]);
    }

    // Validation tests

    #[test]
    fn test_from_json_duplicate_id_fails() {
        let result = Sidebars::from_json(
            r#"{"sidebar": [
                {"type": "doc", "id": "index", "label": "A"},
                {"type": "doc", "id": "index", "label": "B"}
            ]}"#,
        );

        assert!(matches!(result, Err(SidebarError::DuplicateId(id)) if id == "index"));
    }

    #[test]
    fn test_from_json_duplicate_id_inside_category_fails() {
        let result = Sidebars::from_json(
            r#"{"sidebar": [
                {"type": "doc", "id": "models", "label": "Models"},
                {"type": "category", "label": "Usage", "items": [
                    {"type": "doc", "id": "models", "label": "Models Again"}
                ]}
            ]}"#,
        );

        assert!(matches!(result, Err(SidebarError::DuplicateId(id)) if id == "models"));
    }

    #[test]
    fn test_from_json_duplicate_id_across_sidebars_fails() {
        let result = Sidebars::from_json(
            r#"{
                "a": [{"type": "doc", "id": "index", "label": "A"}],
                "b": [{"type": "doc", "id": "index", "label": "B"}]
            }"#,
        );

        assert!(matches!(result, Err(SidebarError::DuplicateId(_))));
    }

    #[test]
    fn test_from_json_links_never_collide() {
        // External links carry no doc id, so identical hrefs are fine.
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [
                {"type": "link", "label": "A", "href": "https://example.com"},
                {"type": "link", "label": "B", "href": "https://example.com"}
            ]}"#,
        );

        assert!(sidebars.is_ok());
    }

    // Serialization tests

    #[test]
    fn test_serialize_doc_item_carries_type_tag() {
        let json = serde_json::to_value(doc("index", "Introduction")).unwrap();

        assert_eq!(json["type"], "doc");
        assert_eq!(json["id"], "index");
        assert_eq!(json["label"], "Introduction");
    }

    #[test]
    fn test_serialize_category_roundtrips() {
        let category = SidebarItem::Category {
            label: "Usage".to_owned(),
            items: vec![doc("usage/models", "Models")],
            collapsed: true,
            collapsible: true,
        };

        let json = serde_json::to_string(&category).unwrap();
        let back: SidebarItem = serde_json::from_str(&json).unwrap();

        assert_eq!(back, category);
    }
}
