//! Site navigation build.
//!
//! Links the authored sidebar definition with the loaded document set into
//! an immutable [`SiteNav`]: per-document permalinks, derived previous/next
//! pointers, resolved sidebars, and the version metadata blob the rendering
//! layer consumes.
//!
//! # Architecture
//!
//! The sidebar definition is the single source of truth for navigation
//! order. Previous/next pointers are always recomputed from the flattened
//! sidebar order during the build; they are never read from authored input,
//! so they cannot drift from the sidebar.
//!
//! # Thread Safety
//!
//! The build runs once, synchronously. The resulting [`SiteNav`] is
//! immutable and `Send + Sync`; queries are pure reads and need no locking.

use std::collections::BTreeMap;
use std::path::PathBuf;

use docnav_config::{BrokenLinks, Config};
use docnav_sidebar::{FlatEntry, SidebarError, SidebarItem, Sidebars, breadcrumbs, flatten};

use crate::loader::{DocSet, LoadError};
use crate::version::{
    Banner, Crumb, DocMetadata, DocRef, NavRecord, ResolvedSidebarItem, VersionMetadata,
};

/// Options for the documentation version being built.
#[derive(Clone, Debug)]
pub struct VersionOptions {
    /// Owning plugin id.
    pub plugin_id: String,
    /// Version name (e.g., "current").
    pub version: String,
    /// Display label (e.g., "Next").
    pub label: String,
    /// Version status banner.
    pub banner: Option<Banner>,
    /// Whether the UI shows a version badge.
    pub badge: bool,
    /// Whether this is the latest version.
    pub is_last: bool,
}

impl Default for VersionOptions {
    fn default() -> Self {
        Self {
            plugin_id: "default".to_owned(),
            version: "current".to_owned(),
            label: "Next".to_owned(),
            banner: None,
            badge: false,
            is_last: true,
        }
    }
}

/// Error returned when the site build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A sidebar entry references a document that does not exist. Fatal at
    /// build time: the build aborts with no partial output.
    #[error("Sidebar \"{sidebar}\" references unknown doc id: {id}")]
    UnknownDoc {
        /// Name of the sidebar containing the broken entry.
        sidebar: String,
        /// The unresolved doc id.
        id: String,
    },
    /// The sidebar definition file could not be read.
    #[error("Failed to read sidebar file {}: {source}", .path.display())]
    SidebarFile {
        /// Path of the definition file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The sidebar definition failed to parse or validate.
    #[error(transparent)]
    Sidebar(#[from] SidebarError),
    /// Document loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// The built navigation model for one documentation version.
///
/// Constructed once from static input, immutable thereafter. Holds the
/// authored sidebar tree (for breadcrumb queries) and the derived
/// [`VersionMetadata`] (for everything else).
#[derive(Clone, Debug)]
pub struct SiteNav {
    sidebars: Sidebars,
    version: VersionMetadata,
}

impl SiteNav {
    /// Build the navigation model from a sidebar definition and document set.
    ///
    /// Unknown doc ids in the sidebar are handled per
    /// [`Config::on_broken_links`]: `throw` aborts the build, `warn` logs
    /// and drops the entry, `ignore` drops it silently.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownDoc`] for a broken entry under the
    /// `throw` policy.
    pub fn build(
        sidebars: Sidebars,
        docs: &DocSet,
        config: &Config,
        options: VersionOptions,
    ) -> Result<Self, BuildError> {
        // Every known document gets an entry, listed in a sidebar or not
        let mut doc_meta: BTreeMap<String, DocMetadata> = docs
            .iter()
            .map(|doc| {
                let meta = DocMetadata {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    description: doc.description.clone(),
                    permalink: permalink(config, &doc.id),
                    sidebar_id: None,
                    previous: None,
                    next: None,
                    tags: doc.tags.clone(),
                    banner: doc.banner,
                    badge: doc.badge,
                };
                (doc.id.clone(), meta)
            })
            .collect();

        let mut docs_sidebars = BTreeMap::new();

        for (name, items) in sidebars.iter() {
            let order = resolve_order(name, items, docs, config)?;

            // Previous/next are the immediate neighbors in the flat order.
            // The pointers for the whole order are computed up front so the
            // assignment loop below holds the only borrow of the map.
            let refs: Vec<DocRef> = order.iter().map(|e| doc_ref(e, &doc_meta)).collect();
            for (pos, entry) in order.iter().enumerate() {
                let Some(meta) = doc_meta.get_mut(entry.id) else {
                    continue;
                };
                meta.sidebar_id = Some(name.to_owned());
                meta.previous = pos.checked_sub(1).map(|i| refs[i].clone());
                meta.next = refs.get(pos + 1).cloned();
            }

            docs_sidebars.insert(name.to_owned(), resolve_items(items, docs, config));
        }

        let version = VersionMetadata {
            plugin_id: options.plugin_id,
            class_name: format!("docs-version-{}", options.version),
            version: options.version,
            label: options.label,
            banner: options.banner,
            badge: options.badge,
            is_last: options.is_last,
            docs_sidebars,
            docs: doc_meta,
        };

        tracing::info!(
            doc_count = version.docs.len(),
            sidebar_count = version.docs_sidebars.len(),
            "Site navigation built"
        );

        Ok(Self { sidebars, version })
    }

    /// Load the sidebar definition and documents per `config`, then build.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SidebarFile`] if the definition file cannot be
    /// read, plus any parse, load, or build error.
    pub fn load(config: &Config, options: VersionOptions) -> Result<Self, BuildError> {
        let sidebar_file = &config.docs_resolved.sidebar_file;
        let content =
            std::fs::read_to_string(sidebar_file).map_err(|source| BuildError::SidebarFile {
                path: sidebar_file.clone(),
                source,
            })?;
        let sidebars = Sidebars::from_json(&content)?;
        let docs = DocSet::load(&config.docs_resolved.source_dir)?;
        Self::build(sidebars, &docs, config, options)
    }

    /// The built version metadata.
    #[must_use]
    pub fn version(&self) -> &VersionMetadata {
        &self.version
    }

    /// Get built metadata for a document by id.
    #[must_use]
    pub fn doc(&self, id: &str) -> Option<&DocMetadata> {
        self.version.doc(id)
    }

    /// The version banner, if any.
    #[must_use]
    pub fn resolve_banner(&self) -> Option<Banner> {
        self.version.resolve_banner()
    }

    /// Assemble the navigation record for a document.
    ///
    /// Returns `None` for unknown ids: the caller renders without
    /// navigation. Documents not listed in any sidebar get a record with no
    /// neighbors and no breadcrumbs.
    #[must_use]
    pub fn nav_record(&self, id: &str) -> Option<NavRecord> {
        let doc = self.version.doc(id)?;

        let crumbs = doc
            .sidebar_id
            .as_deref()
            .and_then(|name| self.sidebars.get(name))
            .and_then(|items| breadcrumbs(items, id).ok())
            .map(|path| {
                path.into_iter()
                    .map(|crumb| Crumb {
                        label: crumb.label.to_owned(),
                        // Only the final crumb is the doc itself; categories
                        // are not linkable
                        href: crumb.doc_id.map(|_| doc.permalink.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(NavRecord {
            previous: doc.previous.clone(),
            next: doc.next.clone(),
            breadcrumbs: crumbs,
            banner: doc.banner.or(self.version.banner),
            badge: doc.badge.unwrap_or(self.version.badge),
        })
    }

    /// Serialize the version metadata blob consumed by the rendering layer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.version)
    }
}

/// Flatten one sidebar, applying the broken-link policy to unknown ids.
fn resolve_order<'a>(
    name: &str,
    items: &'a [SidebarItem],
    docs: &DocSet,
    config: &Config,
) -> Result<Vec<FlatEntry<'a>>, BuildError> {
    let mut order = Vec::new();
    for entry in flatten(items) {
        if docs.contains(entry.id) {
            order.push(entry);
            continue;
        }
        match config.on_broken_links {
            BrokenLinks::Throw => {
                return Err(BuildError::UnknownDoc {
                    sidebar: name.to_owned(),
                    id: entry.id.to_owned(),
                });
            }
            BrokenLinks::Warn => {
                tracing::warn!(sidebar = name, id = entry.id, "Dropping unknown doc id");
            }
            BrokenLinks::Ignore => {}
        }
    }
    Ok(order)
}

/// Build the prev/next pointer for a flat-order entry.
///
/// The display title is the document's own title, falling back to the
/// sidebar label for documents without one.
fn doc_ref(entry: &FlatEntry<'_>, doc_meta: &BTreeMap<String, DocMetadata>) -> DocRef {
    let (title, permalink) = doc_meta.get(entry.id).map_or_else(
        || (entry.label.to_owned(), String::new()),
        |meta| {
            let title = if meta.title.is_empty() {
                entry.label.to_owned()
            } else {
                meta.title.clone()
            };
            (title, meta.permalink.clone())
        },
    );
    DocRef { title, permalink }
}

/// Resolve an authored sidebar into its rendered form.
///
/// Doc entries become links with permalinks; unknown ids (already reported
/// by [`resolve_order`]) are dropped. Categories keep their structure.
fn resolve_items(
    items: &[SidebarItem],
    docs: &DocSet,
    config: &Config,
) -> Vec<ResolvedSidebarItem> {
    items
        .iter()
        .filter_map(|item| match item {
            SidebarItem::Doc { id, label } => docs.contains(id).then(|| {
                ResolvedSidebarItem::Link {
                    label: label.clone(),
                    href: permalink(config, id),
                    doc_id: Some(id.clone()),
                }
            }),
            SidebarItem::Category {
                label,
                items,
                collapsed,
                collapsible,
            } => Some(ResolvedSidebarItem::Category {
                label: label.clone(),
                items: resolve_items(items, docs, config),
                collapsed: *collapsed,
                collapsible: *collapsible,
            }),
            SidebarItem::Link { label, href } => Some(ResolvedSidebarItem::Link {
                label: label.clone(),
                href: href.clone(),
                doc_id: None,
            }),
        })
        .collect()
}

/// Compute a document permalink from the site base URL and route prefix.
///
/// Examples with `base_url = "/dade/"` and `route_base_path = "/"`:
/// - `"index"` -> `"/dade/"`
/// - `"usage/models"` -> `"/dade/usage/models"`
/// - `"usage/index"` -> `"/dade/usage"`
fn permalink(config: &Config, id: &str) -> String {
    let mut prefix = config.base_url.clone();
    let route = config.docs_resolved.route_base_path.trim_matches('/');
    if !route.is_empty() {
        prefix.push_str(route);
        prefix.push('/');
    }

    if id == "index" {
        prefix
    } else if let Some(parent) = id.strip_suffix("/index") {
        format!("{prefix}{parent}")
    } else {
        format!("{prefix}{id}")
    }
}

#[cfg(test)]
mod tests {
    // Built navigation is shared read-only across threads
    static_assertions::assert_impl_all!(super::SiteNav: Send, Sync);

    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::loader::Document;

    fn doc(id: &str, title: &str, description: &str) -> Document {
        Document {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            tags: BTreeSet::new(),
            banner: None,
            badge: None,
            source_path: format!("{id}.md").into(),
        }
    }

    fn example_docs() -> DocSet {
        DocSet::from_documents([
            doc("index", "", "dade is a framework for defining data structures"),
            doc("usage/models", "models", "how to define a model"),
            doc("usage/fields", "field", "field types and conditions"),
            doc("usage/schema", "schema", "JsonSchema export"),
            doc("api", "API Reference", ""),
        ])
    }

    fn example_sidebars() -> Sidebars {
        Sidebars::from_json(
            r#"{"sidebar": [
                {"type": "doc", "id": "index", "label": "Introduction"},
                {"type": "category", "label": "Usage", "items": [
                    {"type": "doc", "id": "usage/models", "label": "Models"},
                    {"type": "doc", "id": "usage/fields", "label": "Fields"},
                    {"type": "doc", "id": "usage/schema", "label": "Schema"}
                ]},
                {"type": "doc", "id": "api", "label": "API"}
            ]}"#,
        )
        .unwrap()
    }

    fn example_config() -> Config {
        let mut config = Config::default();
        config.base_url = "/dade/".to_owned();
        config
    }

    fn example_site() -> SiteNav {
        SiteNav::build(
            example_sidebars(),
            &example_docs(),
            &example_config(),
            VersionOptions::default(),
        )
        .unwrap()
    }

    // Build tests

    #[test]
    fn test_build_derives_neighbors_from_sidebar_order() {
        let site = example_site();

        let fields = site.doc("usage/fields").unwrap();
        assert_eq!(fields.previous.as_ref().unwrap().title, "models");
        assert_eq!(
            fields.previous.as_ref().unwrap().permalink,
            "/dade/usage/models"
        );
        assert_eq!(fields.next.as_ref().unwrap().title, "schema");
        assert_eq!(fields.next.as_ref().unwrap().permalink, "/dade/usage/schema");
    }

    #[test]
    fn test_build_first_doc_has_no_previous() {
        let site = example_site();

        let index = site.doc("index").unwrap();
        assert!(index.previous.is_none());
        assert_eq!(index.next.as_ref().unwrap().title, "models");
    }

    #[test]
    fn test_build_last_doc_has_no_next() {
        let site = example_site();

        let api = site.doc("api").unwrap();
        assert!(api.next.is_none());
        assert_eq!(api.previous.as_ref().unwrap().title, "schema");
    }

    #[test]
    fn test_build_neighbor_symmetry() {
        let site = example_site();

        for doc in site.version().docs.values() {
            if let Some(previous) = &doc.previous {
                let previous_doc = site
                    .version()
                    .docs
                    .values()
                    .find(|d| d.permalink == previous.permalink)
                    .unwrap();
                assert_eq!(
                    previous_doc.next.as_ref().unwrap().permalink,
                    doc.permalink
                );
            }
        }
    }

    #[test]
    fn test_build_doc_ref_title_falls_back_to_label() {
        let site = example_site();

        // "index" has an empty title, so its neighbor pointer uses the
        // sidebar label
        let models = site.doc("usage/models").unwrap();
        assert_eq!(models.previous.as_ref().unwrap().title, "Introduction");
    }

    #[test]
    fn test_build_records_sidebar_membership() {
        let site = example_site();

        assert_eq!(
            site.doc("api").unwrap().sidebar_id.as_deref(),
            Some("sidebar")
        );
    }

    #[test]
    fn test_build_unlisted_doc_has_no_navigation() {
        let mut docs = example_docs();
        docs = DocSet::from_documents(
            docs.iter()
                .cloned()
                .chain([doc("changelog", "Changelog", "")]),
        );

        let site = SiteNav::build(
            example_sidebars(),
            &docs,
            &example_config(),
            VersionOptions::default(),
        )
        .unwrap();

        let changelog = site.doc("changelog").unwrap();
        assert!(changelog.sidebar_id.is_none());
        assert!(changelog.previous.is_none());
        assert!(changelog.next.is_none());
        assert_eq!(changelog.permalink, "/dade/changelog");
    }

    #[test]
    fn test_build_unknown_doc_id_fails_under_throw() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [{"type": "doc", "id": "missing", "label": "Missing"}]}"#,
        )
        .unwrap();

        let result = SiteNav::build(
            sidebars,
            &example_docs(),
            &example_config(),
            VersionOptions::default(),
        );

        assert!(matches!(
            result,
            Err(BuildError::UnknownDoc { sidebar, id }) if sidebar == "sidebar" && id == "missing"
        ));
    }

    #[test]
    fn test_build_unknown_doc_id_dropped_under_warn() {
        let sidebars = Sidebars::from_json(
            r#"{"sidebar": [
                {"type": "doc", "id": "missing", "label": "Missing"},
                {"type": "doc", "id": "api", "label": "API"}
            ]}"#,
        )
        .unwrap();
        let mut config = example_config();
        config.on_broken_links = BrokenLinks::Warn;

        let site =
            SiteNav::build(sidebars, &example_docs(), &config, VersionOptions::default()).unwrap();

        // The broken entry is gone from order and resolved sidebar alike
        let api = site.doc("api").unwrap();
        assert!(api.previous.is_none());
        assert_eq!(site.version().docs_sidebars["sidebar"].len(), 1);
    }

    #[test]
    fn test_build_multiple_sidebars_keep_neighbors_separate() {
        let sidebars = Sidebars::from_json(
            r#"{
                "guides": [
                    {"type": "doc", "id": "usage/models", "label": "Models"},
                    {"type": "doc", "id": "usage/fields", "label": "Fields"}
                ],
                "reference": [
                    {"type": "doc", "id": "api", "label": "API"},
                    {"type": "doc", "id": "usage/schema", "label": "Schema"}
                ]
            }"#,
        )
        .unwrap();

        let site = SiteNav::build(
            sidebars,
            &example_docs(),
            &example_config(),
            VersionOptions::default(),
        )
        .unwrap();

        // Pointers carry the referenced document's own title and permalink
        let models = site.doc("usage/models").unwrap();
        assert_eq!(models.sidebar_id.as_deref(), Some("guides"));
        assert!(models.previous.is_none());
        assert_eq!(models.next.as_ref().unwrap().title, "field");
        assert_eq!(
            models.next.as_ref().unwrap().permalink,
            "/dade/usage/fields"
        );

        // The last doc of one sidebar never points into the next sidebar
        let fields = site.doc("usage/fields").unwrap();
        assert!(fields.next.is_none());
        let api = site.doc("api").unwrap();
        assert!(api.previous.is_none());
        assert_eq!(api.next.as_ref().unwrap().title, "schema");
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = example_site();
        let second = example_site();

        assert_eq!(first.version(), second.version());
    }

    // Permalink tests

    #[test]
    fn test_permalink_index_is_base_url() {
        let config = example_config();

        assert_eq!(permalink(&config, "index"), "/dade/");
    }

    #[test]
    fn test_permalink_nested_doc() {
        let config = example_config();

        assert_eq!(permalink(&config, "usage/models"), "/dade/usage/models");
    }

    #[test]
    fn test_permalink_directory_index_collapses() {
        let config = example_config();

        assert_eq!(permalink(&config, "usage/index"), "/dade/usage");
    }

    #[test]
    fn test_permalink_with_route_base_path() {
        let mut config = example_config();
        config.docs_resolved.route_base_path = "/docs".to_owned();

        assert_eq!(permalink(&config, "index"), "/dade/docs/");
        assert_eq!(permalink(&config, "api"), "/dade/docs/api");
    }

    // Navigation record tests

    #[test]
    fn test_nav_record_for_nested_doc() {
        let site = example_site();

        let record = site.nav_record("usage/fields").unwrap();

        assert_eq!(record.previous.as_ref().unwrap().title, "models");
        assert_eq!(record.next.as_ref().unwrap().title, "schema");
        assert_eq!(
            record.breadcrumbs,
            [
                Crumb {
                    label: "Usage".to_owned(),
                    href: None
                },
                Crumb {
                    label: "Fields".to_owned(),
                    href: Some("/dade/usage/fields".to_owned())
                },
            ]
        );
    }

    #[test]
    fn test_nav_record_root_doc_single_crumb() {
        let site = example_site();

        let record = site.nav_record("api").unwrap();

        assert_eq!(record.breadcrumbs.len(), 1);
        assert_eq!(record.breadcrumbs[0].label, "API");
        assert_eq!(record.breadcrumbs[0].href.as_deref(), Some("/dade/api"));
    }

    #[test]
    fn test_nav_record_unknown_id_is_none() {
        let site = example_site();

        assert!(site.nav_record("missing").is_none());
    }

    #[test]
    fn test_nav_record_banner_uses_version_banner() {
        let site = SiteNav::build(
            example_sidebars(),
            &example_docs(),
            &example_config(),
            VersionOptions {
                banner: Some(Banner::Unreleased),
                badge: true,
                ..Default::default()
            },
        )
        .unwrap();

        let record = site.nav_record("api").unwrap();

        assert_eq!(record.banner, Some(Banner::Unreleased));
        assert!(record.badge);
    }

    #[test]
    fn test_nav_record_doc_banner_overrides_version() {
        let mut documents: Vec<_> = example_docs().iter().cloned().collect();
        documents.push(Document {
            banner: Some(Banner::Unmaintained),
            badge: Some(false),
            ..doc("old", "Old Guide", "")
        });
        let docs = DocSet::from_documents(documents);

        let site = SiteNav::build(
            example_sidebars(),
            &docs,
            &example_config(),
            VersionOptions {
                banner: Some(Banner::Unreleased),
                badge: true,
                ..Default::default()
            },
        )
        .unwrap();

        let record = site.nav_record("old").unwrap();

        assert_eq!(record.banner, Some(Banner::Unmaintained));
        assert!(!record.badge);
    }

    // Banner resolution tests

    #[test]
    fn test_resolve_banner_unset() {
        assert_eq!(example_site().resolve_banner(), None);
    }

    #[test]
    fn test_resolve_banner_set() {
        let site = SiteNav::build(
            example_sidebars(),
            &example_docs(),
            &example_config(),
            VersionOptions {
                banner: Some(Banner::Unmaintained),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(site.resolve_banner(), Some(Banner::Unmaintained));
    }

    // Serialization tests

    #[test]
    fn test_to_json_matches_generated_payload_shape() {
        let site = example_site();

        let json: serde_json::Value = serde_json::from_str(&site.to_json().unwrap()).unwrap();

        assert_eq!(json["pluginId"], "default");
        assert_eq!(json["version"], "current");
        assert_eq!(json["label"], "Next");
        assert!(json["banner"].is_null());
        assert_eq!(json["badge"], false);
        assert_eq!(json["className"], "docs-version-current");
        assert_eq!(json["isLast"], true);

        let sidebar = &json["docsSidebars"]["sidebar"];
        assert_eq!(sidebar[0]["type"], "link");
        assert_eq!(sidebar[0]["label"], "Introduction");
        assert_eq!(sidebar[0]["href"], "/dade/");
        assert_eq!(sidebar[0]["docId"], "index");
        assert_eq!(sidebar[1]["type"], "category");
        assert_eq!(sidebar[1]["label"], "Usage");
        assert_eq!(sidebar[1]["collapsed"], true);
        assert_eq!(sidebar[1]["collapsible"], true);
        assert_eq!(sidebar[1]["items"][0]["href"], "/dade/usage/models");

        assert_eq!(json["docs"]["api"]["id"], "api");
        assert_eq!(json["docs"]["api"]["title"], "API Reference");
        assert_eq!(json["docs"]["api"]["sidebar"], "sidebar");
    }

    // End-to-end load test

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let docs_dir = dir.path().join("docs");
        std::fs::create_dir(&docs_dir).unwrap();
        std::fs::write(docs_dir.join("index.md"), "# Welcome\n\nIntro text.").unwrap();
        std::fs::write(docs_dir.join("guide.md"), "# Guide\n\nSteps.").unwrap();
        std::fs::write(
            dir.path().join("sidebars.json"),
            r#"{"sidebar": [
                {"type": "doc", "id": "index", "label": "Home"},
                {"type": "doc", "id": "guide", "label": "Guide"}
            ]}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.docs_resolved.source_dir = docs_dir;
        config.docs_resolved.sidebar_file = dir.path().join("sidebars.json");

        let site = SiteNav::load(&config, VersionOptions::default()).unwrap();

        assert_eq!(site.version().docs.len(), 2);
        let guide = site.doc("guide").unwrap();
        assert_eq!(guide.title, "Guide");
        assert_eq!(guide.permalink, "/guide");
        assert_eq!(guide.previous.as_ref().unwrap().title, "Welcome");
    }

    #[test]
    fn test_load_missing_sidebar_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.docs_resolved.sidebar_file = dir.path().join("missing.json");

        let result = SiteNav::load(&config, VersionOptions::default());

        assert!(matches!(result, Err(BuildError::SidebarFile { .. })));
    }
}
