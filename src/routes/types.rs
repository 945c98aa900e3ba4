use crate::diagnostics::Diagnostic;
use crate::model::ResourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verbs the standard operations map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Patch,
    Delete,
    Post,
}

impl HttpVerb {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
            HttpVerb::Post => "post",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpVerb> for http::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => http::Method::GET,
            HttpVerb::Patch => http::Method::PATCH,
            HttpVerb::Delete => http::Method::DELETE,
            HttpVerb::Post => http::Method::POST,
        }
    }
}

/// Whether an operation addresses one instance or the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetShape {
    /// Path ends in the resource's own key placeholder, if it has one
    Item,
    /// Path ends at the segment
    Collection,
}

/// The closed set of standard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Read,
    Update,
    Delete,
    Create,
    List,
}

impl OperationKind {
    pub const fn verb(&self) -> HttpVerb {
        match self {
            OperationKind::Read | OperationKind::List => HttpVerb::Get,
            OperationKind::Update => HttpVerb::Patch,
            OperationKind::Delete => HttpVerb::Delete,
            OperationKind::Create => HttpVerb::Post,
        }
    }

    pub const fn shape(&self) -> TargetShape {
        match self {
            OperationKind::Read | OperationKind::Update | OperationKind::Delete => {
                TargetShape::Item
            }
            OperationKind::Create | OperationKind::List => TargetShape::Collection,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Read => "read",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
            OperationKind::Create => "create",
            OperationKind::List => "list",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized HTTP operation. This is the engine's output contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub verb: HttpVerb,
    /// Path template with `{name}` placeholders
    pub path: String,
    /// Placeholder names in left-to-right order
    pub params: Vec<String>,
}

impl RouteDescriptor {
    pub fn new(verb: HttpVerb, path: impl Into<String>, params: Vec<String>) -> Self {
        RouteDescriptor {
            verb,
            path: path.into(),
            params,
        }
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

/// A descriptor together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub interface: String,
    /// Position of the instantiation inside its interface
    pub index: usize,
    pub template: String,
    #[serde(skip)]
    pub resource: ResourceId,
    pub operation: OperationKind,
    /// `{interface_snake}_{operation}`, e.g. `things_read`
    pub handler_name: String,
    #[serde(flatten)]
    pub route: RouteDescriptor,
}

/// Result of one synthesis run: routes in declaration order plus every
/// modeling defect found along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub entries: Vec<RouteEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Synthesis {
    /// The bare output list.
    pub fn descriptors(&self) -> Vec<RouteDescriptor> {
        self.entries.iter().map(|e| e.route.clone()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
