//! # Resource Modeling Errors
//!
//! Every failure the route engine can report is a compile-time modeling defect
//! in the resource graph or the interface declarations, never a transient
//! fault. Errors are values: the aggregator attaches them to the originating
//! interface instantiation (see [`crate::diagnostics`]) and keeps going.
//!
//! Variants carry both the stable [`ResourceId`] and the declared name so that
//! messages stay readable without a handle on the graph.

use crate::model::ResourceId;
use thiserror::Error;

/// A resource-modeling defect detected while synthesizing routes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// A `parent` chain revisits a node.
    #[error("Resource '{name}' ({id}) appears twice in its own parent chain")]
    CyclicResourceHierarchy {
        /// The first node seen twice during the walk.
        id: ResourceId,
        /// Declared name of that node.
        name: String,
    },

    /// A plain (non-singleton, non-extension) node is addressed by key but has none.
    #[error("Resource '{name}' ({id}) has no key field and is not mounted as a singleton")]
    UnaddressableResource {
        /// The keyless node.
        id: ResourceId,
        /// Declared name of that node.
        name: String,
    },

    /// A node that must contribute a path segment has none (or an empty one).
    #[error("Resource '{name}' ({id}) has no path segment")]
    MissingSegment {
        /// The node without a segment.
        id: ResourceId,
        /// Declared name of that node.
        name: String,
    },

    /// An interface mixes in a template name that is not in the catalogue.
    #[error("Unknown operation template '{0}'")]
    UnknownOperationTemplate(String),

    /// The same path parameter name would appear twice in one route.
    #[error("Path parameter '{param}' repeats in the route for resource '{name}' ({id})")]
    DuplicatePathParameter {
        /// The resource whose route repeats the parameter.
        id: ResourceId,
        /// Declared name of that resource.
        name: String,
        /// The repeated parameter name.
        param: String,
    },

    /// An extension template was instantiated with nothing to extend.
    #[error("Template '{template}' needs a target resource to extend, but '{name}' ({id}) has none")]
    MissingMountTarget {
        /// The extension resource.
        id: ResourceId,
        /// Declared name of that resource.
        name: String,
        /// The template that required a target.
        template: String,
    },

    /// A link or instantiation refers to an id outside the graph.
    #[error("Resource id {0} is not part of the resource graph")]
    UnknownResource(ResourceId),
}

impl ResourceError {
    /// Stable tag for this error, used as the diagnostic/lint `kind`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CyclicResourceHierarchy { .. } => "CyclicResourceHierarchy",
            Self::UnaddressableResource { .. } => "UnaddressableResource",
            Self::MissingSegment { .. } => "MissingSegment",
            Self::UnknownOperationTemplate(_) => "UnknownOperationTemplate",
            Self::DuplicatePathParameter { .. } => "DuplicatePathParameter",
            Self::MissingMountTarget { .. } => "MissingMountTarget",
            Self::UnknownResource(_) => "UnknownResource",
        }
    }

    /// The resource this error is about, when there is one.
    #[must_use]
    pub const fn resource(&self) -> Option<ResourceId> {
        match self {
            Self::CyclicResourceHierarchy { id, .. }
            | Self::UnaddressableResource { id, .. }
            | Self::MissingSegment { id, .. }
            | Self::DuplicatePathParameter { id, .. }
            | Self::MissingMountTarget { id, .. } => Some(*id),
            Self::UnknownResource(id) => Some(*id),
            Self::UnknownOperationTemplate(_) => None,
        }
    }
}
