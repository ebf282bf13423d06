//! Static site content: posts, projects, process steps, presets and demo data.
//!
//! The catalog is loaded once at startup, either from the bundled JSON or
//! from an override file, and passed down explicitly.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::gradient::{ColorTemplate, FontOption};
use crate::table::Row;
use crate::timeline::TimelineItem;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// A blog article. `content` is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub read_time: String,
    /// Externally hosted image URL. Displayed, never fetched.
    pub image: String,
    pub content: String,
}

/// A client project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProject {
    pub id: String,
    pub title: String,
    pub company: String,
    pub category: String,
    pub industry: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One phase of the engagement process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: u64,
    pub phase: String,
    pub title: String,
    pub content: String,
    pub deliverables: Vec<String>,
}

/// Errors from loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no {0}")]
    Empty(&'static str),
}

/// All site content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCatalog {
    #[serde(default)]
    pub presets: Vec<ColorTemplate>,
    #[serde(default)]
    pub fonts: Vec<FontOption>,
    #[serde(default)]
    pub projects: Vec<ClientProject>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub table_rows: Vec<Row>,
}

impl SiteCatalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog override from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            posts = catalog.posts.len(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load an override when a path is given, otherwise the bundled catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Carousels need at least one entry to rotate over.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.posts.is_empty() {
            return Err(CatalogError::Empty("blog posts"));
        }
        if self.projects.is_empty() {
            return Err(CatalogError::Empty("projects"));
        }
        Ok(())
    }

    pub fn post(&self, id: u64) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&ClientProject> {
        self.projects.iter().find(|p| p.id == id)
    }
}
