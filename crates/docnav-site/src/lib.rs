//! Document loading and navigation build for docnav.
//!
//! This crate provides:
//! - [`DocSet`]: Markdown documents loaded from a source directory
//! - [`SiteNav`]: The built navigation model for one documentation version
//! - [`VersionMetadata`]: The serialized blob the rendering layer consumes
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::Config;
//! use docnav_site::{SiteNav, VersionOptions};
//!
//! let config = Config::load(None, None)?;
//! let site = SiteNav::load(&config, VersionOptions::default())?;
//!
//! // Navigation for one document
//! let nav = site.nav_record("usage/models");
//!
//! // The full version metadata payload
//! let json = site.to_json()?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod frontmatter;
pub(crate) mod loader;
pub(crate) mod site;
pub(crate) mod version;

pub use frontmatter::{
    Frontmatter, FrontmatterError, extract_description, extract_title, split_frontmatter,
};
pub use loader::{DocSet, Document, LoadError};
pub use site::{BuildError, SiteNav, VersionOptions};
pub use version::{
    Banner, Crumb, DocMetadata, DocRef, NavRecord, ResolvedSidebarItem, VersionMetadata,
};
