//! Leafref path grammar.
//!
//! Only the narrow subset used by leafref statements is understood:
//!
//! ```text
//! absolute := "/" segment ("/" segment)*
//! relative := ("../")* segment ("/" segment)*
//! segment  := [prefix ":"] name
//! ```
//!
//! Predicates and wildcards are not part of the grammar. Parsing is split
//! into three independent passes ([`is_absolute`], [`count_ascents`],
//! [`strip_module_prefix`]) that [`LeafrefPath::parse`] composes.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::constants::{PARENT_STEP, PATH_SEPARATOR, PREFIX_DELIMITER};

/// Errors produced when a leafref path does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Fewer than two `/`-separated components.
    #[error("path '{path}' does not name a navigable segment")]
    TooFewComponents { path: String },

    /// Doubled or trailing `/`, or nothing left after the ascents.
    #[error("path '{path}' has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
}

/// Where descent starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAnchor {
    /// The root reachable from the leafref node.
    Root,
    /// The ancestor this many parent links above the leafref node.
    Ancestor(usize),
}

/// A leafref path split into its anchor and prefix-free descent list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafrefPath {
    anchor: PathAnchor,
    segments: Vec<SmolStr>,
}

impl LeafrefPath {
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.split(PATH_SEPARATOR).count() < 2 {
            return Err(PathError::TooFewComponents {
                path: path.to_string(),
            });
        }

        let (anchor, descent) = if is_absolute(path) {
            (PathAnchor::Root, path[1..].to_string())
        } else {
            (
                PathAnchor::Ancestor(count_ascents(path)),
                path.replace(PARENT_STEP, ""),
            )
        };

        let segments = descent
            .split(PATH_SEPARATOR)
            .enumerate()
            .map(|(index, segment)| match strip_module_prefix(segment) {
                "" => Err(PathError::EmptySegment {
                    path: path.to_string(),
                    index,
                }),
                local => Ok(SmolStr::new(local)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { anchor, segments })
    }

    pub fn anchor(&self) -> PathAnchor {
        self.anchor
    }

    pub fn is_absolute(&self) -> bool {
        self.anchor == PathAnchor::Root
    }

    /// Number of parent links to climb before descending (0 when absolute).
    pub fn ascents(&self) -> usize {
        match self.anchor {
            PathAnchor::Root => 0,
            PathAnchor::Ancestor(levels) => levels,
        }
    }

    /// The downward path: local names, module prefixes removed.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Renders the normalized (prefix-free) form of the path.
impl fmt::Display for LeafrefPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            PathAnchor::Root => f.write_str("/")?,
            PathAnchor::Ancestor(levels) => {
                for _ in 0..levels {
                    f.write_str(PARENT_STEP)?;
                }
            }
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// True when the path starts at the tree root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(PATH_SEPARATOR)
}

/// Number of `../` occurrences anywhere in the path.
pub fn count_ascents(path: &str) -> usize {
    path.matches(PARENT_STEP).count()
}

/// Drop a `prefix:` qualifier from a segment.
///
/// Segments with more than one `:` are returned unchanged.
pub fn strip_module_prefix(segment: &str) -> &str {
    let mut parts = segment.split(PREFIX_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(local), None) => local,
        _ => segment,
    }
}
