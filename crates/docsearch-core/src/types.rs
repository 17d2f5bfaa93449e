//! Domain types shared by the index, the controller and the view layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Content category of a documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Components,
    Guides,
    Styles,
    Bits,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Components, Category::Guides, Category::Styles, Category::Bits];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Guides => "guides",
            Category::Styles => "styles",
            Category::Bits => "bits",
        }
    }

    /// Icon class shown next to a result of this category.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Components => "fa-file-code-o",
            Category::Guides => "fa-file-text-o",
            Category::Styles => "fa-file-image-o",
            Category::Bits => "fa-puzzle-piece",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownFacet { group: FacetKind::Category.to_string(), name: s.to_string() })
    }
}

/// The two independent facet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Category,
    Type,
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetKind::Category => f.write_str("category"),
            FacetKind::Type => f.write_str("type"),
        }
    }
}

impl FromStr for FacetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" | "cat" => Ok(FacetKind::Category),
            "type" => Ok(FacetKind::Type),
            other => Err(Error::UnknownFacet { group: "facet group".to_string(), name: other.to_string() }),
        }
    }
}

/// An indexable documentation page as emitted by the corpus generator.
///
/// Identity is the position in the loaded corpus; see [`SearchHit::position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub link: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub section: String,
}

/// A matched document with its relevance score. Higher is better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub position: usize,
    pub score: f32,
    pub document: Document,
}

/// Knobs for query execution, fixed when the index is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Let every query term match indexed terms it is a prefix of.
    pub prefix: bool,
    /// Weight of matches on the `type` field relative to title/content.
    pub type_boost: f32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { prefix: true, type_boost: 20.0 }
    }
}
