//! Path Builder.
//!
//! Turns a resolved chain plus a target shape and a mount into a path
//! template and its ordered parameter list.
//!
//! | Mount | Path |
//! |---|---|
//! | plain | `/{seg}/{key}` for every ancestor, then `/{seg}` and `/{key}` on `Item` |
//! | singleton | owner item path, then `/{seg}`; shape is ignored |
//! | extension | target item path, then `/{seg}`, then `/{key}` on `Item` |

use super::hierarchy::{resolve, ChainLink};
use super::types::TargetShape;
use crate::error::ResourceError;
use crate::model::{MountMode, ResourceGraph, ResourceId, ResourceNode};

/// A mount with its owner or target already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    Plain,
    /// Owner whose item path the singleton hangs under; `None` mounts at the root
    Singleton(Option<ResourceId>),
    Extension(ResourceId),
}

impl Mount {
    /// The mount a node asks for on its own, with the owner of a singleton
    /// taken from its `parent` link.
    pub fn declared(node: &ResourceNode) -> Self {
        match node.mount {
            MountMode::Plain => Mount::Plain,
            MountMode::Singleton => Mount::Singleton(node.parent),
            MountMode::ExtensionOf(target) => Mount::Extension(target),
        }
    }
}

/// Output of [`build_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    pub path: String,
    pub params: Vec<String>,
}

/// Accumulates a path and its parameters, rejecting repeats.
struct PathWriter<'g> {
    graph: &'g ResourceGraph,
    /// Resource the route is being built for
    subject: ResourceId,
    path: String,
    params: Vec<String>,
}

impl<'g> PathWriter<'g> {
    fn new(graph: &'g ResourceGraph, subject: ResourceId) -> Self {
        PathWriter {
            graph,
            subject,
            path: String::new(),
            params: Vec::new(),
        }
    }

    fn segment(&mut self, id: ResourceId, name: &str, segment: Option<&str>) -> Result<(), ResourceError> {
        let segment = segment.ok_or_else(|| ResourceError::MissingSegment {
            id,
            name: name.to_string(),
        })?;
        self.path.push('/');
        self.path.push_str(segment);
        Ok(())
    }

    fn param(&mut self, param: &str) -> Result<(), ResourceError> {
        if self.params.iter().any(|p| p == param) {
            return Err(ResourceError::DuplicatePathParameter {
                id: self.subject,
                name: self.graph.name_of(self.subject),
                param: param.to_string(),
            });
        }
        self.path.push_str("/{");
        self.path.push_str(param);
        self.path.push('}');
        self.params.push(param.to_string());
        Ok(())
    }

    /// Key placeholder for a chain position, where one is required.
    fn key(&mut self, link: &ChainLink<'_>, required: bool) -> Result<(), ResourceError> {
        match link.key_param {
            Some(param) if required => self.param(param),
            Some(_) => Ok(()),
            None if link.singleton => Ok(()),
            None => Err(ResourceError::UnaddressableResource {
                id: link.id,
                name: link.name.to_string(),
            }),
        }
    }

    /// Rule for plain mounts: every ancestor is addressed by key, the last
    /// element only for `Item`.
    fn chain(&mut self, id: ResourceId, shape: TargetShape) -> Result<(), ResourceError> {
        let chain = resolve(self.graph, id)?;
        let last = chain.len() - 1;
        for (i, link) in chain.iter().enumerate() {
            self.segment(link.id, link.name, link.segment)?;
            self.key(link, i < last || shape == TargetShape::Item)?;
        }
        Ok(())
    }

    fn finish(self) -> PathTemplate {
        PathTemplate {
            path: self.path,
            params: self.params,
        }
    }
}

/// Build the path template for `id` under `mount`.
///
/// # Errors
///
/// Any [`crate::routes::hierarchy::resolve`] error, plus
/// [`ResourceError::MissingSegment`], [`ResourceError::UnaddressableResource`]
/// and [`ResourceError::DuplicatePathParameter`].
pub fn build_path(
    graph: &ResourceGraph,
    id: ResourceId,
    shape: TargetShape,
    mount: Mount,
) -> Result<PathTemplate, ResourceError> {
    let mut writer = PathWriter::new(graph, id);

    match mount {
        Mount::Plain => writer.chain(id, shape)?,
        Mount::Singleton(owner) => {
            let node = graph.node(id)?;
            if let Some(owner) = owner {
                writer.chain(owner, TargetShape::Item)?;
            }
            writer.segment(node.id, &node.name, node.segment())?;
        }
        Mount::Extension(target) => {
            let node = graph.node(id)?;
            writer.chain(target, TargetShape::Item)?;
            writer.segment(node.id, &node.name, node.segment())?;
            if shape == TargetShape::Item {
                let param = node
                    .key_param()
                    .ok_or_else(|| ResourceError::UnaddressableResource {
                        id: node.id,
                        name: node.name.clone(),
                    })?;
                writer.param(param)?;
            }
        }
    }

    Ok(writer.finish())
}
