//! Route parsing and tool page resolution.

use crate::tools::{ToolDefinition, ToolRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// `/`: the connect form.
    Connect,
    /// `/tools`: the gallery.
    Tools,
    /// `/tools/{id}`: one tool, not yet checked against the table.
    Tool(String),
    /// Anything else.
    Unknown(String),
}

impl Route {
    /// Parses a path. A single trailing slash is tolerated.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path == "/" {
            return Self::Connect;
        }
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            ["", "tools"] => Self::Tools,
            ["", "tools", id] if !id.is_empty() => Self::Tool((*id).to_string()),
            _ => Self::Unknown(path.to_string()),
        }
    }

    /// The canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Connect => "/".to_string(),
            Self::Tools => "/tools".to_string(),
            Self::Tool(id) => format!("/tools/{id}"),
            Self::Unknown(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One breadcrumb link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Link text.
    pub label: String,
    /// Target path.
    pub href: String,
}

impl Breadcrumb {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Breadcrumbs for the gallery.
#[must_use]
pub fn gallery_breadcrumbs() -> Vec<Breadcrumb> {
    vec![Breadcrumb::new("Home", "/"), Breadcrumb::new("Tools", "/tools")]
}

/// Breadcrumbs for a tool page.
#[must_use]
pub fn tool_breadcrumbs(definition: &ToolDefinition) -> Vec<Breadcrumb> {
    let mut crumbs = gallery_breadcrumbs();
    crumbs.push(Breadcrumb::new(definition.name.clone(), definition.href()));
    crumbs
}

/// Label of the link out of the not-found page.
pub const BACK_TO_TOOLS: &str = "Back to Tools";

/// A tool route resolved against the tool table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolPage<'a> {
    /// A known tool.
    Found {
        /// The definition.
        definition: &'a ToolDefinition,
        /// Home / Tools / tool name.
        breadcrumbs: Vec<Breadcrumb>,
    },
    /// The id is not in the table.
    NotFound {
        /// The requested id.
        id: String,
        /// Link back to the gallery.
        back: Breadcrumb,
    },
}

impl<'a> ToolPage<'a> {
    /// Looks up `id` in the registry.
    #[must_use]
    pub fn resolve(id: &str, registry: &'a ToolRegistry) -> Self {
        registry.get(id).map_or_else(
            || Self::NotFound {
                id: id.to_string(),
                back: Breadcrumb::new(BACK_TO_TOOLS, "/tools"),
            },
            |definition| Self::Found {
                definition,
                breadcrumbs: tool_breadcrumbs(definition),
            },
        )
    }

    /// True for the not-found page.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
