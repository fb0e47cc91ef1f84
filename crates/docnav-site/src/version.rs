//! Version and document metadata for the built site.
//!
//! These types form the one-time build output: constructed once from the
//! sidebar definition and document frontmatter, immutable afterwards, and
//! read by any number of concurrent consumers without synchronization.
//!
//! Serialized field names follow the generated navigation payload consumed
//! by the rendering layer (`pluginId`, `docsSidebars`, `docId`, ...).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Version status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Banner {
    /// The version is not released yet.
    Unreleased,
    /// The version is no longer maintained.
    Unmaintained,
}

/// Reference to a document: display title and permalink.
///
/// This is the shape of previous/next pointers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocRef {
    /// Display title.
    pub title: String,
    /// Permalink under the site base URL.
    pub permalink: String,
}

/// Built metadata for one document.
///
/// `previous` and `next` are derived from the flattened sidebar order at
/// build time; they are never authored and cannot drift from the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocMetadata {
    /// Document id (e.g., "usage/models").
    pub id: String,
    /// Display title.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Permalink under the site base URL.
    pub permalink: String,
    /// Name of the sidebar this document appears in, if any.
    #[serde(rename = "sidebar", skip_serializing_if = "Option::is_none")]
    pub sidebar_id: Option<String>,
    /// The document immediately before this one in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<DocRef>,
    /// The document immediately after this one in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<DocRef>,
    /// Document tags.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// Per-document banner override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    /// Per-document badge override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<bool>,
}

/// A sidebar item with doc ids resolved to permalinks.
///
/// This is the rendered form of the authored tree: doc entries become links
/// carrying both the resolved `href` and the originating `docId`; external
/// links carry no `docId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedSidebarItem {
    /// A resolved link entry.
    Link {
        /// Display label.
        label: String,
        /// Link target.
        href: String,
        /// Originating doc id, `None` for external links.
        #[serde(rename = "docId", skip_serializing_if = "Option::is_none")]
        doc_id: Option<String>,
    },
    /// A category with resolved children.
    Category {
        /// Display label.
        label: String,
        /// Resolved child items.
        items: Vec<ResolvedSidebarItem>,
        /// Initial collapsed state in the UI.
        collapsed: bool,
        /// Whether the UI allows collapsing this category.
        collapsible: bool,
    },
}

/// Built metadata for one documentation version.
///
/// Constructed once at build time and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    /// Owning plugin id.
    pub plugin_id: String,
    /// Version name (e.g., "current").
    pub version: String,
    /// Display label (e.g., "Next").
    pub label: String,
    /// Version status banner. Serialized as `null` when absent.
    pub banner: Option<Banner>,
    /// Whether the UI shows a version badge.
    pub badge: bool,
    /// CSS class for version-specific styling.
    pub class_name: String,
    /// Whether this is the latest version.
    pub is_last: bool,
    /// Resolved sidebars by name.
    pub docs_sidebars: BTreeMap<String, Vec<ResolvedSidebarItem>>,
    /// Built document metadata by id.
    pub docs: BTreeMap<String, DocMetadata>,
}

impl VersionMetadata {
    /// The version banner, if any. Pure lookup, no transformation.
    #[must_use]
    pub fn resolve_banner(&self) -> Option<Banner> {
        self.banner
    }

    /// Get built metadata for a document by id.
    #[must_use]
    pub fn doc(&self, id: &str) -> Option<&DocMetadata> {
        self.docs.get(id)
    }
}

/// One element of a rendered breadcrumb path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Link target, `None` for category crumbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The fixed-shape navigation record the rendering layer consumes for one
/// document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavRecord {
    /// The document before this one in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<DocRef>,
    /// The document after this one in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<DocRef>,
    /// Root-first breadcrumb path ending at the document itself.
    pub breadcrumbs: Vec<Crumb>,
    /// Effective banner (document override or version banner).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    /// Effective badge flag.
    pub badge: bool,
}
