use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a node in a [`super::ResourceGraph`].
///
/// Ids are arena indices handed out by the builder; they are only meaningful
/// for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(usize);

impl ResourceId {
    pub const fn new(index: usize) -> Self {
        ResourceId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The key property of a resource and the path parameter it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyField {
    /// Model property carrying the key (e.g. `thingId`)
    pub name: String,
    /// Placeholder name used in path templates
    pub param: String,
}

impl KeyField {
    /// Key whose parameter name is the property name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        KeyField {
            param: name.clone(),
            name,
        }
    }

    pub fn with_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        KeyField {
            name: name.into(),
            param: param.into(),
        }
    }
}

/// How a resource is mounted into the URL space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountMode {
    /// Addressed through its own `parent` chain.
    #[default]
    Plain,
    /// Keyless, one instance under its owner's item path.
    Singleton,
    /// Keyed, mounted under the item path of another resource that is not
    /// a `parent` of it.
    ExtensionOf(ResourceId),
}

impl MountMode {
    pub const fn is_singleton(&self) -> bool {
        matches!(self, MountMode::Singleton)
    }
}

impl fmt::Display for MountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountMode::Plain => write!(f, "Plain"),
            MountMode::Singleton => write!(f, "Singleton"),
            MountMode::ExtensionOf(target) => write!(f, "ExtensionOf({target})"),
        }
    }
}

/// One resource-capable model node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    pub id: ResourceId,
    /// Declared model name, used in diagnostics only
    pub name: String,
    pub segment: Option<String>,
    pub key: Option<KeyField>,
    /// The "contained-in" relation
    pub parent: Option<ResourceId>,
    /// Declared mount mode; templates may override it per instantiation
    pub mount: MountMode,
}

impl ResourceNode {
    /// The segment, treating an empty string as absent.
    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref().filter(|s| !s.is_empty())
    }

    /// Path parameter this node contributes, if any. Singletons never do.
    pub fn key_param(&self) -> Option<&str> {
        if self.mount.is_singleton() {
            return None;
        }
        self.key.as_ref().map(|k| k.param.as_str())
    }
}

/// A single mixed-in template: `Template<Resource, Target?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInstantiation {
    /// Template identifier as written (e.g. `ResourceOperations`)
    pub template: String,
    pub resource: ResourceId,
    /// Singleton owner or extension target
    pub mount_target: Option<ResourceId>,
}

impl TemplateInstantiation {
    pub fn new(template: impl Into<String>, resource: ResourceId) -> Self {
        TemplateInstantiation {
            template: template.into(),
            resource,
            mount_target: None,
        }
    }

    pub fn mounted_on(mut self, target: ResourceId) -> Self {
        self.mount_target = Some(target);
        self
    }
}

/// An interface declaration: an ordered list of mix-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub mixes: Vec<TemplateInstantiation>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>, mixes: Vec<TemplateInstantiation>) -> Self {
        InterfaceDecl {
            name: name.into(),
            mixes,
        }
    }
}

/// Everything one synthesis run consumes.
#[derive(Debug, Clone)]
pub struct ResourceModel {
    pub graph: super::ResourceGraph,
    /// In source order
    pub interfaces: Vec<InterfaceDecl>,
}

impl ResourceModel {
    pub fn new(graph: super::ResourceGraph, interfaces: Vec<InterfaceDecl>) -> Self {
        ResourceModel { graph, interfaces }
    }
}
