//! Authored sidebar tree model and traversals for docnav.
//!
//! This crate provides:
//! - [`SidebarItem`]: the tagged sidebar node (doc link, category, external link)
//! - [`Sidebars`]: named sidebars parsed from an authored JSON definition
//! - Pure traversals over the tree: [`flatten`], [`neighbors`], [`breadcrumbs`]
//!
//! The sidebar definition is the single source of truth for navigation order.
//! All traversals are pure functions over an immutable tree; the built site
//! (see `docnav-site`) derives previous/next pointers and breadcrumb paths
//! from them and never stores authored copies.
//!
//! # Quick Start
//!
//! ```
//! use docnav_sidebar::{Sidebars, flatten, neighbors};
//!
//! let sidebars = Sidebars::from_json(
//!     r#"{"sidebar": [
//!         {"type": "doc", "id": "index", "label": "Introduction"},
//!         {"type": "category", "label": "Usage", "items": [
//!             {"type": "doc", "id": "usage/models", "label": "Models"}
//!         ]}
//!     ]}"#,
//! )?;
//!
//! let order = flatten(sidebars.get("sidebar").unwrap());
//! assert_eq!(order.len(), 2);
//!
//! let (previous, next) = neighbors(&order, "usage/models");
//! assert_eq!(previous.map(|e| e.id), Some("index"));
//! assert!(next.is_none());
//! # Ok::<(), docnav_sidebar::SidebarError>(())
//! ```

pub(crate) mod item;
pub(crate) mod nav;

pub use item::{SidebarError, SidebarItem, Sidebars};
pub use nav::{BreadcrumbItem, FlatEntry, NavError, breadcrumbs, flatten, neighbors};
