//! Pure traversals over the sidebar tree.
//!
//! All functions here borrow from the tree and allocate only their result
//! vectors. The tree is immutable after parsing, so the traversals are safe
//! to call from any number of concurrent readers.

use crate::item::SidebarItem;

/// One entry of the flattened navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Document id.
    pub id: &'a str,
    /// Display label from the sidebar definition.
    pub label: &'a str,
}

/// One element of a breadcrumb path.
///
/// Category crumbs have no `doc_id`; the final crumb is the document itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem<'a> {
    /// Display label.
    pub label: &'a str,
    /// Document id, `None` for category crumbs.
    pub doc_id: Option<&'a str>,
}

/// Error from a navigation query.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The requested doc id is absent from the tree. Recoverable: callers
    /// render without navigation.
    #[error("Doc id not found in sidebar: {0}")]
    NotFound(String),
}

/// Flatten a sidebar into its depth-first, pre-order navigation order.
///
/// A `Category` contributes no entry itself but recurses into its items in
/// listed order; a `Doc` contributes exactly one entry; a `Link` contributes
/// none. Deterministic: the same tree always yields the same sequence.
#[must_use]
pub fn flatten(items: &[SidebarItem]) -> Vec<FlatEntry<'_>> {
    let mut order = Vec::new();
    collect(items, &mut order);
    order
}

fn collect<'a>(items: &'a [SidebarItem], order: &mut Vec<FlatEntry<'a>>) {
    for item in items {
        match item {
            SidebarItem::Doc { id, label } => order.push(FlatEntry { id, label }),
            SidebarItem::Category { items, .. } => collect(items, order),
            SidebarItem::Link { .. } => {}
        }
    }
}

/// Find the entries immediately before and after `id` in a flat order.
///
/// Returns `(None, None)` when `id` is absent. `previous` is `None` for the
/// first entry, `next` is `None` for the last. Linear scan; navigation
/// orders are tens to low hundreds of entries.
#[must_use]
pub fn neighbors<'a>(
    order: &'a [FlatEntry<'a>],
    id: &str,
) -> (Option<FlatEntry<'a>>, Option<FlatEntry<'a>>) {
    let Some(pos) = order.iter().position(|entry| entry.id == id) else {
        return (None, None);
    };

    let previous = pos.checked_sub(1).map(|i| order[i]);
    let next = order.get(pos + 1).copied();
    (previous, next)
}

/// Build the breadcrumb path for a doc id: ancestor category labels from the
/// root down, ending with the doc's own entry.
///
/// A doc that is a direct child of the tree root yields a single-element
/// path. A leading synthetic home entry is the caller's to prepend.
///
/// # Errors
///
/// Returns [`NavError::NotFound`] if `id` is absent from the tree.
pub fn breadcrumbs<'a>(
    items: &'a [SidebarItem],
    id: &str,
) -> Result<Vec<BreadcrumbItem<'a>>, NavError> {
    let mut path = Vec::new();
    if find_path(items, id, &mut path) {
        Ok(path)
    } else {
        Err(NavError::NotFound(id.to_owned()))
    }
}

/// Depth-first search accumulating the category path to `id`.
///
/// On success `path` holds the root-first crumbs including the doc itself;
/// on failure it is left empty.
fn find_path<'a>(items: &'a [SidebarItem], id: &str, path: &mut Vec<BreadcrumbItem<'a>>) -> bool {
    for item in items {
        match item {
            SidebarItem::Doc { id: doc_id, label } if doc_id == id => {
                path.push(BreadcrumbItem {
                    label,
                    doc_id: Some(doc_id),
                });
                return true;
            }
            SidebarItem::Category {
                label,
                items: children,
                ..
            } => {
                path.push(BreadcrumbItem {
                    label,
                    doc_id: None,
                });
                if find_path(children, id, path) {
                    return true;
                }
                path.pop();
            }
            SidebarItem::Doc { .. } | SidebarItem::Link { .. } => {}
        }
    }
    false
}
