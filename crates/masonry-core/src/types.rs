//! Core value types for masonry layouts.

use std::borrow::Borrow;
use std::fmt;

use crate::identity::generate_identifier;

/// Platform a post is embedded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Twitter / X status posts
    Twitter,
    /// Instagram posts and reels
    Instagram,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub const ALL: [Platform; 2] = [Platform::Twitter, Platform::Instagram];

    /// Prefix used for identifiers derived from a post URL.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Platform::Twitter => "tw",
            Platform::Instagram => "ig",
        }
    }

    /// Lowercase platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a post within a layout.
///
/// Either supplied by the caller or derived from the post's platform and URL
/// (see [`generate_identifier`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PostId(pub String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId(s.to_string())
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        PostId(s)
    }
}

impl From<&PostId> for PostId {
    fn from(id: &PostId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for PostId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A social-media post to place in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    /// Platform the post belongs to
    pub platform: Platform,
    /// Canonical source URL
    pub url: String,
    /// Caller-supplied identifier; derived from the URL when absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
}

impl Post {
    /// Create a post without an explicit identifier.
    pub fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
            id: None,
        }
    }

    /// Create a Twitter / X post.
    pub fn twitter(url: impl Into<String>) -> Self {
        Self::new(Platform::Twitter, url)
    }

    /// Create an Instagram post.
    pub fn instagram(url: impl Into<String>) -> Self {
        Self::new(Platform::Instagram, url)
    }

    /// Set an explicit identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The identifier this post is laid out under.
    pub fn identifier(&self) -> PostId {
        generate_identifier(self)
    }
}

/// A responsive breakpoint: at container widths of `min_width` and above,
/// use `columns` columns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Minimum container width (inclusive)
    pub min_width: f64,
    /// Column count at and above `min_width`
    pub columns: i32,
}

impl Breakpoint {
    pub const fn new(min_width: f64, columns: i32) -> Self {
        Self { min_width, columns }
    }
}

/// How many columns to lay posts out in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColumnSpec {
    /// A fixed column count, used as given
    Fixed(i32),
    /// Column count chosen by container width
    Breakpoints(Vec<Breakpoint>),
}

impl ColumnSpec {
    /// The default responsive table: 4 columns from 1200px, 3 from 900px,
    /// 2 from 600px, otherwise 1.
    pub fn responsive() -> Self {
        ColumnSpec::Breakpoints(vec![
            Breakpoint::new(0.0, 1),
            Breakpoint::new(600.0, 2),
            Breakpoint::new(900.0, 3),
            Breakpoint::new(1200.0, 4),
        ])
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::responsive()
    }
}

impl From<i32> for ColumnSpec {
    fn from(count: i32) -> Self {
        ColumnSpec::Fixed(count)
    }
}

impl From<Vec<Breakpoint>> for ColumnSpec {
    fn from(breakpoints: Vec<Breakpoint>) -> Self {
        ColumnSpec::Breakpoints(breakpoints)
    }
}
