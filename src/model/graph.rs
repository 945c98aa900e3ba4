use super::types::{KeyField, MountMode, ResourceId, ResourceNode};
use crate::error::ResourceError;
use std::collections::HashMap;

/// Frozen arena of resource nodes.
///
/// Links (`parent`, `ExtensionOf`) are stored as [`ResourceId`]s, so the
/// graph may contain cycles without any ownership loops; the hierarchy
/// resolver is responsible for rejecting them.
#[derive(Debug, Clone, Default)]
pub struct ResourceGraph {
    nodes: Vec<ResourceNode>,
    by_name: HashMap<String, ResourceId>,
}

impl ResourceGraph {
    pub fn builder() -> ResourceGraphBuilder {
        ResourceGraphBuilder::default()
    }

    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<&ResourceNode> {
        self.nodes.get(id.index())
    }

    /// Like [`ResourceGraph::get`], but an unknown id is a modeling error.
    pub fn node(&self, id: ResourceId) -> Result<&ResourceNode, ResourceError> {
        self.get(id).ok_or(ResourceError::UnknownResource(id))
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<ResourceId> {
        self.by_name.get(name).copied()
    }

    /// Declared name for an id, or its display form when unknown.
    #[must_use]
    pub fn name_of(&self, id: ResourceId) -> String {
        self.get(id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Mutable stage of a [`ResourceGraph`].
///
/// `resource(name)` is get-or-create, so forward references (and cycles)
/// can be expressed by naming a node before configuring it.
#[derive(Debug, Default)]
pub struct ResourceGraphBuilder {
    graph: ResourceGraph,
}

impl ResourceGraphBuilder {
    pub fn resource(&mut self, name: &str) -> ResourceBuilder<'_> {
        let id = match self.graph.by_name.get(name) {
            Some(id) => *id,
            None => {
                let id = ResourceId::new(self.graph.nodes.len());
                self.graph.nodes.push(ResourceNode {
                    id,
                    name: name.to_string(),
                    segment: None,
                    key: None,
                    parent: None,
                    mount: MountMode::Plain,
                });
                self.graph.by_name.insert(name.to_string(), id);
                id
            }
        };
        ResourceBuilder { builder: self, id }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.graph.by_name.contains_key(name)
    }

    pub fn build(self) -> ResourceGraph {
        self.graph
    }
}

/// Configures one node inside a [`ResourceGraphBuilder`].
pub struct ResourceBuilder<'a> {
    builder: &'a mut ResourceGraphBuilder,
    id: ResourceId,
}

impl ResourceBuilder<'_> {
    fn node_mut(&mut self) -> &mut ResourceNode {
        // Ids handed out by `resource()` always index an existing node.
        &mut self.builder.graph.nodes[self.id.index()]
    }

    pub fn key(self, name: &str) -> Self {
        self.key_field(KeyField::new(name))
    }

    pub fn key_field(mut self, key: KeyField) -> Self {
        self.node_mut().key = Some(key);
        self
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.node_mut().segment = Some(segment.to_string());
        self
    }

    pub fn parent(mut self, parent: ResourceId) -> Self {
        self.node_mut().parent = Some(parent);
        self
    }

    pub fn singleton(mut self) -> Self {
        self.node_mut().mount = MountMode::Singleton;
        self
    }

    pub fn extension_of(mut self, target: ResourceId) -> Self {
        self.node_mut().mount = MountMode::ExtensionOf(target);
        self
    }

    pub fn id(self) -> ResourceId {
        self.id
    }
}
