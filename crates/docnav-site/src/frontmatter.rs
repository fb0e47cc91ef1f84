//! Document frontmatter and content extraction.
//!
//! Frontmatter is a leading `---` delimited YAML block. All fields are
//! optional; a document without frontmatter falls back to values extracted
//! from its content (first H1 as title, first paragraph as description).

use std::collections::BTreeSet;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::version::Banner;

/// Per-document frontmatter.
///
/// All fields are optional. When a field is `None`, it indicates the value
/// was not explicitly set for this document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Custom document title (overrides H1 extraction).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document description for navigation and metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Document tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    /// Version banner override for this document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,

    /// Version badge override for this document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<bool>,
}

impl Frontmatter {
    /// Parse frontmatter from YAML content.
    ///
    /// Returns frontmatter for valid YAML (empty content returns a default
    /// instance).
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontmatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontmatterError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Check if frontmatter has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_empty()
            && self.banner.is_none()
            && self.badge.is_none()
    }
}

/// Error type for frontmatter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a markdown document into its frontmatter block and body.
///
/// The frontmatter block is delimited by `---` lines at the very start of
/// the document. Returns `(None, content)` when no block is present.
#[must_use]
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    // The opening fence must be a full line
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, content);
    };

    for (offset, line) in line_spans(rest) {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(block), body.strip_prefix('\n').unwrap_or(body));
        }
    }

    // Unterminated fence: treat the whole document as body
    (None, content)
}

/// Iterate over `(byte offset, line including terminator)` pairs.
fn line_spans(content: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    content.split_inclusive('\n').map(move |line| {
        let span = (offset, line);
        offset += line.len();
        span
    })
}

/// Extract the first H1 heading text from markdown content.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    return None;
                }
                return Some(trimmed.to_owned());
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            _ => {}
        }
    }

    None
}

/// Extract the first paragraph text from markdown content.
///
/// Used as the description fallback when frontmatter sets none.
#[must_use]
pub fn extract_description(content: &str) -> Option<String> {
    let mut in_paragraph = false;
    let mut description = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) => {
                let trimmed = description.trim();
                if trimmed.is_empty() {
                    return None;
                }
                return Some(trimmed.to_owned());
            }
            Event::Text(text) | Event::Code(text) if in_paragraph => description.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_paragraph => description.push(' '),
            _ => {}
        }
    }

    None
}
