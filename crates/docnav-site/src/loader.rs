//! Document loading from a docs directory.
//!
//! Scans a directory tree for markdown files and builds a [`DocSet`]:
//! ids derived from relative paths (`usage/models.md` -> `usage/models`),
//! frontmatter parsed from a leading `---` block, titles falling back to
//! the first H1 and then to a title-cased file stem.
//!
//! Hidden files and underscore-prefixed files (partials) are skipped.

use std::collections::BTreeSet;
use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

use crate::frontmatter::{Frontmatter, extract_description, extract_title, split_frontmatter};
use crate::version::Banner;

/// One loaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Document id (relative path without the `.md` extension).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Description text (frontmatter or first paragraph, may be empty).
    pub description: String,
    /// Document tags.
    pub tags: BTreeSet<String>,
    /// Per-document banner override from frontmatter.
    pub banner: Option<Banner>,
    /// Per-document badge override from frontmatter.
    pub badge: Option<bool>,
    /// Source file path relative to the docs directory.
    pub source_path: PathBuf,
}

/// Error from loading documents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The docs directory does not exist.
    #[error("Docs directory not found: {}", .0.display())]
    DirNotFound(PathBuf),
    /// I/O error reading a source file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Directory walk error.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// The set of known documents, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocSet {
    docs: BTreeMap<String, Document>,
}

impl DocSet {
    /// Load all markdown documents under `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DirNotFound`] if the directory does not exist
    /// and [`LoadError::Io`] if a discovered file cannot be read. Malformed
    /// frontmatter is not fatal: it is logged and the document falls back to
    /// extracted values.
    pub fn load(source_dir: &Path) -> Result<Self, LoadError> {
        if !source_dir.is_dir() {
            return Err(LoadError::DirNotFound(source_dir.to_path_buf()));
        }

        let mut docs = BTreeMap::new();

        let walk = ignore::WalkBuilder::new(source_dir)
            .standard_filters(false)
            .hidden(true)
            .filter_entry(|entry| {
                // Underscore-prefixed files and directories are partials;
                // the walk root itself is never filtered.
                entry.depth() == 0
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with('_'))
            })
            .build();

        for entry in walk {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let document = load_document(path, relative)?;
            docs.insert(document.id.clone(), document);
        }

        tracing::debug!(document_count = docs.len(), "Docs scan completed");

        Ok(Self { docs })
    }

    /// Build a doc set from already-constructed documents.
    ///
    /// Later documents replace earlier ones with the same id.
    #[must_use]
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let docs = documents.into_iter().map(|doc| (doc.id.clone(), doc)).collect();
        Self { docs }
    }

    /// Get a document by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    /// True if a document with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Iterate over documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True if the set contains no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<'a> IntoIterator for &'a DocSet {
    type Item = &'a Document;
    type IntoIter = btree_map::Values<'a, String, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.values()
    }
}

/// Load a single document from disk.
fn load_document(path: &Path, relative: &Path) -> Result<Document, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let id = path_to_id(relative);
    let (block, body) = split_frontmatter(&content);

    let frontmatter = match block.map(Frontmatter::from_yaml) {
        Some(Ok(frontmatter)) => frontmatter,
        Some(Err(e)) => {
            tracing::warn!(path = %relative.display(), error = %e, "Failed to parse frontmatter");
            Frontmatter::default()
        }
        None => Frontmatter::default(),
    };

    let title = frontmatter
        .title
        .or_else(|| extract_title(body))
        .unwrap_or_else(|| title_case_stem(relative));
    let description = frontmatter
        .description
        .or_else(|| extract_description(body))
        .unwrap_or_default();

    Ok(Document {
        id,
        title,
        description,
        tags: frontmatter.tags,
        banner: frontmatter.banner,
        badge: frontmatter.badge,
        source_path: relative.to_path_buf(),
    })
}

/// Derive a doc id from a relative source path.
///
/// Examples:
/// - `"index.md"` -> `"index"`
/// - `"usage/models.md"` -> `"usage/models"`
fn path_to_id(relative: &Path) -> String {
    let path_str = relative.to_string_lossy();
    let without_ext = path_str.strip_suffix(".md").unwrap_or(&path_str);
    // Normalize separators for ids on Windows
    without_ext.replace('\\', "/")
}

/// Title-case a file stem: `"getting-started.md"` -> `"Getting Started"`.
fn title_case_stem(relative: &Path) -> String {
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
