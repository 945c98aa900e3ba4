//! Hierarchy Resolver.
//!
//! Walks `parent` links from a node to the root and returns the chain
//! outermost-first. `ExtensionOf` links are not followed here.

use crate::error::ResourceError;
use crate::model::{ResourceGraph, ResourceId};
use smallvec::SmallVec;
use tracing::trace;

/// Most chains are a resource and one or two ancestors.
pub const MAX_INLINE_DEPTH: usize = 4;

/// One position in a resolved chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink<'g> {
    pub id: ResourceId,
    pub name: &'g str,
    pub segment: Option<&'g str>,
    /// `None` for singletons and keyless nodes
    pub key_param: Option<&'g str>,
    pub singleton: bool,
}

/// Ancestors first, the resolved node last. Never empty.
pub type Chain<'g> = SmallVec<[ChainLink<'g>; MAX_INLINE_DEPTH]>;

/// Resolve the `parent` chain of `id`.
///
/// # Errors
///
/// - [`ResourceError::CyclicResourceHierarchy`] when a node recurs
/// - [`ResourceError::UnknownResource`] when a link leaves the graph
pub fn resolve(graph: &ResourceGraph, id: ResourceId) -> Result<Chain<'_>, ResourceError> {
    let mut chain = Chain::new();
    let mut current = Some(id);

    while let Some(next) = current {
        // Chains are short; a linear scan beats hashing here.
        if chain.iter().any(|link: &ChainLink<'_>| link.id == next) {
            let name = graph.name_of(next);
            return Err(ResourceError::CyclicResourceHierarchy { id: next, name });
        }
        let node = graph.node(next)?;
        chain.push(ChainLink {
            id: node.id,
            name: &node.name,
            segment: node.segment(),
            key_param: node.key_param(),
            singleton: node.mount.is_singleton(),
        });
        current = node.parent;
    }

    chain.reverse();
    trace!(
        resource = %graph.name_of(id),
        depth = chain.len(),
        "Resolved resource hierarchy"
    );
    Ok(chain)
}
